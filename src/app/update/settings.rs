//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleTheme => {
                let display = &mut self.core.settings.display;
                display.dark_mode = !display.dark_mode;
                let label = if display.dark_mode { "Dark" } else { "Light" };
                self.save_settings();
                Some(self.show_toast(Toast::info(format!("{} theme", label))))
            }

            Message::ToggleReduceMotion => {
                let display = &mut self.core.settings.display;
                display.reduce_motion = !display.reduce_motion;
                let label = if display.reduce_motion {
                    "Reduced motion on"
                } else {
                    "Reduced motion off"
                };
                let config = self.core.swipe_config();
                let outcome = self.session.reconfigure(config);
                self.save_settings();
                let toast = self.show_toast(Toast::info(label));
                Some(Task::batch([toast, self.finish_card(outcome)]))
            }

            _ => None,
        }
    }

    /// Persist settings, logging instead of failing
    fn save_settings(&self) {
        match self.core.settings.save() {
            Ok(()) => tracing::info!("Settings saved"),
            Err(e) => tracing::warn!("Failed to save settings: {}", e),
        }
    }
}
