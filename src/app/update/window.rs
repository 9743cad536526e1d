// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                if *size == self.core.window_size {
                    return Some(Task::none());
                }
                // Minimized windows report an empty size
                if size.width <= 0.0 || size.height <= 0.0 {
                    tracing::debug!("Ignoring empty window size {}x{}", size.width, size.height);
                    return Some(Task::none());
                }
                tracing::debug!("Window resized to {}x{}", size.width, size.height);
                self.core.window_size = *size;
                let config = self.core.swipe_config();
                let outcome = self.session.reconfigure(config);
                Some(self.finish_card(outcome))
            }

            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
