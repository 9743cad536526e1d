//! Resolved swipe geometry and timing for one window size

use std::time::Duration;

use crate::features::settings::SwipeSettings;

/// Smallest horizontal travel limit, whatever the window reports
const MIN_TRAVEL: f32 = 100.0;

/// Everything a card needs to decide how to move, in pixels and durations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal travel limit, reached by a completed fling
    pub max_x: f32,
    /// Vertical travel limit
    pub max_y: f32,
    pub fling_fraction: f32,
    pub removal_margin: f32,
    pub fling_duration: Duration,
    pub follow_duration: Duration,
    pub rotation_divisor: f32,
    pub max_rotation: f32,
    pub settle_vertical_on_fling: bool,
}

impl SwipeConfig {
    /// Resolve the settings against the current window width
    pub fn new(settings: &SwipeSettings, screen_width: f32) -> Self {
        Self {
            max_x: (screen_width * settings.width_factor).abs().max(MIN_TRAVEL),
            max_y: settings.max_y.abs(),
            fling_fraction: settings.fling_fraction,
            removal_margin: settings.removal_margin,
            fling_duration: Duration::from_millis(settings.fling_duration_ms),
            follow_duration: Duration::from_millis(settings.drag_follow_ms),
            rotation_divisor: settings.rotation_divisor,
            max_rotation: settings.max_rotation_deg,
            settle_vertical_on_fling: settings.settle_vertical_on_fling,
        }
    }

    /// Same config with motion collapsed to instant jumps
    pub fn without_motion(mut self) -> Self {
        self.fling_duration = Duration::ZERO;
        self.follow_duration = Duration::ZERO;
        self
    }

    /// Release distance at or beyond which the card flings instead of settling
    pub fn fling_threshold(&self) -> f32 {
        self.max_x * self.fling_fraction
    }

    /// Horizontal distance at which the card is decided and removed
    ///
    /// Never closer than half the travel limit, so a resting card is never
    /// past it.
    pub fn removal_threshold(&self) -> f32 {
        (self.max_x - self.removal_margin).max(self.max_x * 0.5)
    }
}
