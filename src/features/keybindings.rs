//! Keyboard shortcuts for the deck
//!
//! Every action can be bound to any number of key combinations. Bindings are
//! stored in the settings file, so users can remap them by hand.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Fling the current card right
    Accept,
    /// Fling the current card left
    Pass,
    /// Abort the drag in progress
    CancelDrag,
    /// Bring back the last decided card
    Undo,
    ToggleTheme,
    ToggleReduceMotion,
}

impl Action {
    /// Get all available actions
    pub fn all() -> &'static [Action] {
        &[
            Action::Accept,
            Action::Pass,
            Action::CancelDrag,
            Action::Undo,
            Action::ToggleTheme,
            Action::ToggleReduceMotion,
        ]
    }

    /// Get human-readable name for the action
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::Accept => "Accept",
            Action::Pass => "Pass",
            Action::CancelDrag => "Cancel drag",
            Action::Undo => "Undo",
            Action::ToggleTheme => "Toggle theme",
            Action::ToggleReduceMotion => "Toggle reduced motion",
        }
    }
}

/// A key plus the modifiers that must be held with it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    #[serde(default)]
    pub modifiers: ModifierSet,
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    /// Add Ctrl modifier
    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add Shift modifier
    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Format as human-readable string
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Keys that can be bound
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    Left,
    Right,
    Up,
    Down,
    Escape,
    Backspace,
    Space,
    Enter,
    /// Any printable character, compared case-insensitively
    Char(char),
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        use iced::keyboard::key::Named;

        match (self, key) {
            (KeyCode::Char(expected), Key::Character(c)) => {
                let mut chars = c.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => ch.to_lowercase().eq(expected.to_lowercase()),
                    _ => false,
                }
            }
            (KeyCode::Char(_), _) => false,
            (code, Key::Named(named)) => matches!(
                (code, named),
                (KeyCode::Left, Named::ArrowLeft)
                    | (KeyCode::Right, Named::ArrowRight)
                    | (KeyCode::Up, Named::ArrowUp)
                    | (KeyCode::Down, Named::ArrowDown)
                    | (KeyCode::Escape, Named::Escape)
                    | (KeyCode::Backspace, Named::Backspace)
                    | (KeyCode::Space, Named::Space)
                    | (KeyCode::Enter, Named::Enter)
            ),
            _ => false,
        }
    }

    /// Get display name for the key
    pub fn display(&self) -> String {
        match self {
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Escape => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Space => "Space".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Char(c) => c.to_uppercase().to_string(),
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Map from action to keybinding
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::Accept,
            vec![
                KeyBinding::new(KeyCode::Right),
                KeyBinding::new(KeyCode::Char('l')),
            ],
        );
        bindings.insert(
            Action::Pass,
            vec![
                KeyBinding::new(KeyCode::Left),
                KeyBinding::new(KeyCode::Char('h')),
            ],
        );
        bindings.insert(Action::CancelDrag, vec![KeyBinding::new(KeyCode::Escape)]);
        bindings.insert(
            Action::Undo,
            vec![
                KeyBinding::new(KeyCode::Char('z')).ctrl(),
                KeyBinding::new(KeyCode::Backspace),
            ],
        );
        bindings.insert(
            Action::ToggleTheme,
            vec![KeyBinding::new(KeyCode::Char('t')).ctrl()],
        );
        bindings.insert(
            Action::ToggleReduceMotion,
            vec![KeyBinding::new(KeyCode::Char('m')).ctrl().shift()],
        );

        Self { bindings }
    }
}

impl KeyBindings {
    /// Find the action that matches the given key event
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        // Iterate in a fixed order so overlapping bindings resolve the same way every run
        Action::all().iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|list| list.iter().any(|b| b.matches(key, modifiers)))
        })
    }

    /// Get display string for an action's keybinding
    pub fn display_for_action(&self, action: &Action) -> String {
        self.bindings
            .get(action)
            .and_then(|b| b.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "None".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    #[test]
    fn test_default_bindings_cover_every_action() {
        let bindings = KeyBindings::default();
        for action in Action::all() {
            assert_ne!(
                bindings.display_for_action(action),
                "None",
                "{:?} has no binding",
                action
            );
        }
    }

    #[test]
    fn test_arrows_fling() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowRight), &Modifiers::empty()),
            Some(Action::Accept)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowLeft), &Modifiers::empty()),
            Some(Action::Pass)
        );
    }

    #[test]
    fn test_modifiers_must_match_exactly() {
        let bindings = KeyBindings::default();
        let z = Key::Character("z".into());
        assert_eq!(bindings.find_action(&z, &Modifiers::CTRL), Some(Action::Undo));
        assert_eq!(bindings.find_action(&z, &Modifiers::empty()), None);
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowRight), &Modifiers::CTRL),
            None
        );
    }

    #[test]
    fn test_char_match_ignores_case() {
        let binding = KeyBinding::new(KeyCode::Char('l'));
        assert!(binding.matches(&Key::Character("L".into()), &Modifiers::empty()));
        assert!(!binding.matches(&Key::Character("k".into()), &Modifiers::empty()));
    }

    #[test]
    fn test_keybinding_display() {
        let binding = KeyBinding::new(KeyCode::Char('m')).ctrl().shift();
        assert_eq!(binding.display(), "Ctrl+Shift+M");
    }

    #[test]
    fn test_bindings_survive_json() {
        let mut bindings = KeyBindings::default();
        bindings
            .bindings
            .insert(Action::Undo, vec![KeyBinding::new(KeyCode::Char('u'))]);

        let json = serde_json::to_string(&bindings).expect("bindings serialize");
        let loaded: KeyBindings = serde_json::from_str(&json).expect("bindings deserialize");
        assert_eq!(loaded.display_for_action(&Action::Undo), "U");
    }
}
