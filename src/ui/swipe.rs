//! Swipeable card widget state
//!
//! The card tracks a two-axis drag offset, springs back or flings away on
//! release, tilts with its horizontal offset, and hands its item back with an
//! accept/pass result once it leaves the screen. Drawing and pointer handling
//! live in [`crate::ui::primitives::card_canvas`].

mod card;
mod config;
mod transform;

pub use card::{CardEvent, CardPhase, Direction, SwipeCard, SwipeOutcome, SwipeResult};
pub use config::SwipeConfig;
pub use transform::CardTransform;
