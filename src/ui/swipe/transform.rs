//! Offset → visual transform mapping

use iced::{Degrees, Radians, Vector};

/// Translation plus rotation applied to a card when drawing it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translation: Vector,
    pub rotation: Degrees,
}

impl CardTransform {
    pub const IDENTITY: Self = Self {
        translation: Vector { x: 0.0, y: 0.0 },
        rotation: Degrees(0.0),
    };

    /// Build the transform for the given offsets
    pub fn from_offset(x: f32, y: f32, divisor: f32, max_rotation: f32) -> Self {
        Self {
            translation: Vector::new(x, y),
            rotation: Degrees(rotation_for(x, divisor, max_rotation)),
        }
    }

    pub fn radians(&self) -> Radians {
        self.rotation.into()
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Card tilt in degrees for a horizontal offset
fn rotation_for(x: f32, divisor: f32, max_rotation: f32) -> f32 {
    let limit = max_rotation.abs();
    if divisor == 0.0 {
        return 0.0;
    }
    (x / divisor).clamp(-limit, limit)
}
