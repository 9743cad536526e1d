//! Bounded single-axis offset animation
//!
//! Holds one animated `f32` plus the target it is heading for. Every new
//! request replaces the in-flight animation, so the most recent target always
//! wins while frames that already rendered stay rendered.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// How an axis should move toward a new target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationSpec {
    /// Jump to the target with no interpolation
    Snap,
    /// Eased transition over a fixed duration; a zero duration snaps
    Tween(Duration),
}

/// Duration given to resting animations; they never interpolate, it only
/// keeps the easing well-formed
const REST_DURATION: Duration = Duration::from_millis(1);

impl AnimationSpec {
    fn easing(duration: Duration) -> Easing {
        Easing::EASE_OUT.with_duration(duration.max(REST_DURATION))
    }
}

/// One animated offset clamped to `[min, max]`
#[derive(Debug)]
pub struct AnimatedAxis {
    anim: Animated<f32>,
    target: f32,
    min: f32,
    max: f32,
}

impl AnimatedAxis {
    /// Create an axis at rest on `0.0` with symmetric bounds `[-bound, bound]`
    pub fn new(bound: f32) -> Self {
        let bound = bound.abs();
        Self {
            anim: Animated::transition(0.0, AnimationSpec::easing(REST_DURATION)),
            target: 0.0,
            min: -bound,
            max: bound,
        }
    }

    /// Current rendered value
    pub fn value(&self) -> f32 {
        *self.anim.value()
    }

    /// Value the axis is heading for (what drag deltas accumulate onto)
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Replace the bounds, snapping to the nearest bound if the target no
    /// longer fits
    pub fn set_bound(&mut self, bound: f32) {
        let bound = bound.abs();
        self.min = -bound;
        self.max = bound;
        let clamped = self.clamp(self.target);
        if clamped != self.target {
            self.animate_to(clamped, AnimationSpec::Snap);
        }
    }

    fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Start animating toward `target`, superseding whatever was running
    pub fn animate_to(&mut self, target: f32, spec: AnimationSpec) {
        let target = self.clamp(target);
        self.target = target;

        match spec {
            AnimationSpec::Tween(duration) if !duration.is_zero() => {
                // Restart from wherever the previous animation left the value
                let from = self.value();
                self.anim = Animated::transition(from, AnimationSpec::easing(duration));
                self.anim.update(target.into());
            }
            _ => {
                self.anim = Animated::transition(target, AnimationSpec::easing(REST_DURATION));
            }
        }
    }

    /// Shift the target by `delta` and animate toward it
    pub fn animate_by(&mut self, delta: f32, spec: AnimationSpec) {
        self.animate_to(self.target + delta, spec);
    }

    /// Snap back to zero
    pub fn reset(&mut self) {
        self.animate_to(0.0, AnimationSpec::Snap);
    }

    /// Check if the value is still moving toward the target
    pub fn is_animating(&self) -> bool {
        self.anim.is_animating()
    }

    /// Advance the animation to `now`
    pub fn tick(&mut self, now: Instant) {
        self.anim.tick(now);
    }
}
