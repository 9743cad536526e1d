//! UI module for the deck
//!
//! # Architecture
//!
//! - **Swipe** (`swipe`): Card state machine, independent of rendering
//! - **Animation** (`animation`): Time-based values driven by frame ticks
//! - **Primitives** (`primitives`): Low-level `canvas::Program` implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod animation;
pub mod components;
pub mod primitives;
pub mod swipe;
pub mod theme;
pub mod widgets;
