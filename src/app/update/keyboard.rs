// src/app/update/keyboard.rs
//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;
use crate::ui::swipe::{CardEvent, Direction};

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        tracing::debug!("Action: {}", action.display_name());
        match action {
            Action::Accept => self.fling_card(Direction::Right),
            Action::Pass => self.fling_card(Direction::Left),
            Action::CancelDrag => self.update(Message::Card(CardEvent::DragCancelled)),
            Action::Undo => self.update(Message::Undo),
            Action::ToggleTheme => self.update(Message::ToggleTheme),
            Action::ToggleReduceMotion => self.update(Message::ToggleReduceMotion),
        }
    }
}
