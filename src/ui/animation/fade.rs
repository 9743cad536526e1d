//! Two-state fade driven by `iced_anim`
//!
//! Used for anything that eases between "off" (0.0) and "on" (1.0): toast
//! visibility and the lifted look of a card while it is being dragged.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fade duration (200ms for snappy feel)
const FADE_DURATION: Duration = Duration::from_millis(200);

fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

/// Progress between off (0.0) and on (1.0)
#[derive(Debug)]
pub struct Fade {
    animation: Animated<f32>,
}

impl Default for Fade {
    fn default() -> Self {
        Self::new()
    }
}

impl Fade {
    /// Create a fade resting at 0.0
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Head toward 1.0
    pub fn show(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Head toward 0.0
    pub fn hide(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    /// Whether the fade is heading for (or resting at) 1.0
    pub fn is_shown(&self) -> bool {
        *self.animation.target() > 0.5
    }

    /// Check if animation is in progress
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
