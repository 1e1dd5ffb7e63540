//! Tuning constants of the page controllers.
//!
//! The defaults reproduce the shipped page. A page may override any subset by
//! embedding a JSON object (camelCase keys); unknown keys are ignored and
//! missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::LandingError;

pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 10.0;
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.35;
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 900.0;
pub const DEFAULT_ROTATOR_INTERVAL_MS: u32 = 3500;
pub const DEFAULT_ROTATOR_TRANSITION_MS: u32 = 280;

pub const DEFAULT_HEADLINES: [&str; 4] = [
    r#"Building Tomorrow's <span class="hero-accent">Mohali</span> Today"#,
    r#"Driving Sustainable <span class="hero-accent">Urban Growth</span> in Greater Mohali."#,
    r#"Transforming Mohali into a <span class="hero-accent">World-Class Investment</span> Destination."#,
    r#"Planned Growth. <span class="hero-accent">Transparent Development.</span> Strong Returns."#,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Scroll offset (px) beyond which the navbar switches to its scrolled look.
    pub scroll_threshold_px: f64,
    /// Fraction of a counter's area that must be visible to start it.
    pub visibility_threshold: f64,
    pub counter_duration_ms: f64,
    pub rotator_interval_ms: u32,
    /// Delay between flagging the transition and swapping the headline.
    pub rotator_transition_ms: u32,
    /// Rich-text headlines cycled by the hero rotator.
    pub headlines: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            rotator_interval_ms: DEFAULT_ROTATOR_INTERVAL_MS,
            rotator_transition_ms: DEFAULT_ROTATOR_TRANSITION_MS,
            headlines: DEFAULT_HEADLINES.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, LandingError> {
        let config: PageConfig =
            serde_json::from_str(json).map_err(|e| LandingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LandingError> {
        if !(self.scroll_threshold_px.is_finite() && self.scroll_threshold_px >= 0.0) {
            return Err(LandingError::Config(format!(
                "scrollThresholdPx must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(LandingError::Config(format!(
                "visibilityThreshold must be within [0, 1], got {}",
                self.visibility_threshold
            )));
        }
        if !(self.counter_duration_ms.is_finite() && self.counter_duration_ms > 0.0) {
            return Err(LandingError::Config(format!(
                "counterDurationMs must be positive, got {}",
                self.counter_duration_ms
            )));
        }
        if self.rotator_transition_ms >= self.rotator_interval_ms {
            return Err(LandingError::Config(format!(
                "rotatorTransitionMs ({}) must be shorter than rotatorIntervalMs ({})",
                self.rotator_transition_ms, self.rotator_interval_ms
            )));
        }
        if self.headlines.is_empty() {
            return Err(LandingError::EmptyHeadlines);
        }
        Ok(())
    }
}
