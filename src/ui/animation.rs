//! Animation helpers built on `iced_anim`
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::ui::animation::{AnimatedAxis, AnimationSpec};
//!
//! let mut x = AnimatedAxis::new(1000.0);
//! x.animate_to(300.0, AnimationSpec::Tween(Duration::from_millis(400)));
//! x.tick(Instant::now());
//! ```

mod axis;
mod fade;

pub use axis::{AnimatedAxis, AnimationSpec};
pub use fade::Fade;
