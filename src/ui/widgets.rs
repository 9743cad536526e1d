//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level `canvas::Program` implementations
//! - **Widgets** (this module): Composable UI patterns
//! - **Components** (`crate::ui::components`): Business-specific UI with Message handling

pub mod deck_header;
pub mod shortcut_hint;
mod toast;

pub use deck_header::Tally;
pub use toast::{Toast, view_toast};
