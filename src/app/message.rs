//! Application messages

use iced::Size;
use iced::keyboard::{Key, Modifiers};

use crate::features::Action;
use crate::ui::swipe::CardEvent;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Card ============
    /// Gesture event from the card canvas
    Card(CardEvent),
    /// Frame tick while something animates
    AnimationTick,
    /// Bring back the last decided card
    Undo,

    // ============ Keyboard ============
    /// Key pressed anywhere in the window
    KeyPressed(Key, Modifiers),
    /// Run a bound action
    ExecuteAction(Action),

    // ============ Settings ============
    ToggleTheme,
    ToggleReduceMotion,

    // ============ Toast ============
    /// Start fading out the toast with this generation
    HideToast(u64),

    // ============ Window ============
    WindowResized(Size),
    WindowClosed,
}
