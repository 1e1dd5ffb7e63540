//! Hero headline rotation.
//!
//! Each cycle has two steps driven by external timers: the interval tick calls
//! [`HeadlineRotator::begin_transition`], which flags the element, and the
//! nested delay calls [`HeadlineRotator::complete_transition`], which swaps the
//! content and clears the flag. With reduced motion the rotator renders the
//! first headline once and refuses to cycle.

use crate::error::LandingError;

/// CSS class present on the headline element while a swap is pending.
pub const TRANSITION_CLASS: &str = "is-transitioning";

/// Write access to the headline element.
pub trait HeadlineSurface {
    /// Replaces the element's rich-text content.
    fn show_headline(&mut self, html: &str);
    fn set_transitioning(&mut self, on: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreference {
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced_flag(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RotatorPhase {
    Showing,
    Transitioning,
}

#[derive(Debug, Clone)]
pub struct HeadlineRotator {
    headlines: Vec<String>,
    index: usize,
    phase: RotatorPhase,
    motion: MotionPreference,
}

impl HeadlineRotator {
    pub fn new(headlines: Vec<String>, motion: MotionPreference) -> Result<Self, LandingError> {
        if headlines.is_empty() {
            return Err(LandingError::EmptyHeadlines);
        }
        Ok(Self {
            headlines,
            index: 0,
            phase: RotatorPhase::Showing,
            motion,
        })
    }

    /// Writes the first headline. Returns whether the cycle timer should run.
    pub fn mount(&mut self, surface: &mut impl HeadlineSurface) -> bool {
        self.index = 0;
        self.phase = RotatorPhase::Showing;
        surface.show_headline(&self.headlines[0]);
        !self.is_static()
    }

    /// Interval tick. Returns whether the transition delay should be scheduled.
    pub fn begin_transition(&mut self, surface: &mut impl HeadlineSurface) -> bool {
        if self.is_static() || self.phase == RotatorPhase::Transitioning {
            return false;
        }
        self.phase = RotatorPhase::Transitioning;
        surface.set_transitioning(true);
        true
    }

    /// Transition delay elapsed: advance, write, unflag.
    pub fn complete_transition(&mut self, surface: &mut impl HeadlineSurface) {
        if self.phase != RotatorPhase::Transitioning {
            return;
        }
        self.index = (self.index + 1) % self.headlines.len();
        surface.show_headline(&self.headlines[self.index]);
        surface.set_transitioning(false);
        self.phase = RotatorPhase::Showing;
    }

    pub fn is_static(&self) -> bool {
        self.motion == MotionPreference::Reduced
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == RotatorPhase::Transitioning
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.headlines[self.index]
    }
}
