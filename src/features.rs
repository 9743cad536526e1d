//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly; the deck only borrows
//! the swipe result types it records.

pub mod deck;
pub mod keybindings;
pub mod settings;

pub use deck::{Deck, Decision, Practice};
pub use keybindings::{Action, KeyBindings};
pub use settings::Settings;
