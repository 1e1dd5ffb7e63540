//! One-shot numeric counter animation.
//!
//! A counter idles until its first visibility report. [`CounterAnimator::trigger`]
//! then either settles immediately (literal targets) or hands out an
//! [`AnimationToken`] for a frame-driven run. Each frame is fed through
//! [`CounterAnimator::frame`] with the token; the run finishes by itself once
//! the elapsed time covers the duration, and frames carrying a stale token
//! (after completion or [`CounterAnimator::cancel`]) are ignored.

use crate::model::counter::{format_number, CounterSpec, CounterTarget};

/// Cubic ease-out: `1 - (1 - t)^3` with `t` clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Proof that a specific animation run is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationToken(u32);

#[derive(Debug, Clone, Copy, PartialEq)]
enum CounterPhase {
    Idle,
    Running { token: AnimationToken, started_at: f64 },
    Done,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// The counter has already run (or was torn down); nothing to do.
    Ignored,
    /// Literal target rendered directly; no frames are needed.
    Settled(String),
    /// A run has started; schedule frames with this token.
    Started(AnimationToken),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Intermediate text; schedule another frame.
    Continue(String),
    /// Exact final text; the counter is now animated.
    Finished(String),
    /// The token no longer refers to a running animation.
    Stale,
}

#[derive(Debug, Clone)]
pub struct CounterAnimator {
    spec: CounterSpec,
    duration_ms: f64,
    phase: CounterPhase,
    generation: u32,
}

impl CounterAnimator {
    pub fn new(spec: CounterSpec, duration_ms: f64) -> Self {
        Self {
            spec,
            duration_ms,
            phase: CounterPhase::Idle,
            generation: 0,
        }
    }

    /// True once the final value has been rendered.
    pub fn is_animated(&self) -> bool {
        self.phase == CounterPhase::Done
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, CounterPhase::Running { .. })
    }

    /// Handles a visibility report. Only the first report on an idle counter
    /// does anything.
    pub fn trigger(&mut self, now_ms: f64) -> Trigger {
        if self.phase != CounterPhase::Idle {
            return Trigger::Ignored;
        }
        match self.spec.target {
            CounterTarget::Literal(_) => {
                self.phase = CounterPhase::Done;
                Trigger::Settled(self.spec.final_text())
            }
            CounterTarget::Numeric { .. } => {
                self.generation = self.generation.wrapping_add(1);
                let token = AnimationToken(self.generation);
                self.phase = CounterPhase::Running {
                    token,
                    started_at: now_ms,
                };
                Trigger::Started(token)
            }
        }
    }

    /// Advances a running animation to `now_ms`.
    pub fn frame(&mut self, token: AnimationToken, now_ms: f64) -> Frame {
        let CounterPhase::Running {
            token: current,
            started_at,
        } = self.phase
        else {
            return Frame::Stale;
        };
        if current != token {
            return Frame::Stale;
        }
        let CounterTarget::Numeric { value, decimals } = self.spec.target else {
            return Frame::Stale;
        };

        let t = ((now_ms - started_at) / self.duration_ms).clamp(0.0, 1.0);
        if t < 1.0 {
            let current = value * ease_out_cubic(t);
            Frame::Continue(self.spec.decorate(&format_number(current, decimals)))
        } else {
            self.phase = CounterPhase::Done;
            Frame::Finished(self.spec.final_text())
        }
    }

    /// Abandons a running animation; later frames with its token are stale
    /// and the counter never restarts.
    pub fn cancel(&mut self) {
        if let CounterPhase::Running { .. } | CounterPhase::Idle = self.phase {
            self.phase = CounterPhase::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(target: &str) -> CounterAnimator {
        CounterAnimator::new(
            CounterSpec::from_attributes(Some(target), Some("₹ "), Some(" Cr")),
            900.0,
        )
    }

    fn started(animator: &mut CounterAnimator, now: f64) -> AnimationToken {
        match animator.trigger(now) {
            Trigger::Started(token) => token,
            other => panic!("expected a started run, got {other:?}"),
        }
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-2.0), 0.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn frames_ease_toward_target() {
        let mut counter = animator("100");
        let token = started(&mut counter, 1000.0);
        assert_eq!(counter.frame(token, 1000.0), Frame::Continue("₹ 0 Cr".into()));
        assert_eq!(counter.frame(token, 1450.0), Frame::Continue("₹ 88 Cr".into()));
        assert!(!counter.is_animated());
        assert_eq!(counter.frame(token, 1900.0), Frame::Finished("₹ 100 Cr".into()));
        assert!(counter.is_animated());
    }

    #[test]
    fn frame_before_start_clamps_to_zero() {
        let mut counter = animator("40");
        let token = started(&mut counter, 500.0);
        assert_eq!(counter.frame(token, 480.0), Frame::Continue("₹ 0 Cr".into()));
    }

    #[test]
    fn second_trigger_is_ignored() {
        let mut counter = animator("12.5");
        let token = started(&mut counter, 0.0);
        assert_eq!(counter.trigger(10.0), Trigger::Ignored);
        assert_eq!(counter.frame(token, 900.0), Frame::Finished("₹ 12.5 Cr".into()));
        assert_eq!(counter.trigger(2000.0), Trigger::Ignored);
        assert_eq!(counter.frame(token, 2000.0), Frame::Stale);
    }

    #[test]
    fn literal_target_settles_without_frames() {
        let mut counter = animator("TBD");
        assert_eq!(counter.trigger(0.0), Trigger::Settled("₹ TBD Cr".into()));
        assert!(counter.is_animated());
        assert!(!counter.is_running());
    }

    #[test]
    fn cancel_invalidates_token() {
        let mut counter = animator("9");
        let token = started(&mut counter, 0.0);
        counter.cancel();
        assert_eq!(counter.frame(token, 100.0), Frame::Stale);
        assert_eq!(counter.trigger(200.0), Trigger::Ignored);
        assert!(!counter.is_animated());
    }
}
