//! Main application module

mod message;
mod state;
mod update;
mod view;

use std::path::PathBuf;

use iced::{Task, Theme};

use crate::features::{Deck, Settings};
pub use message::Message;
pub use state::{App, CoreState, DeckSession, UiState, WINDOW_SIZE};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first; the deck path and swipe tuning come from them
        let settings = Settings::load();

        // 2. Deck from the command line, then settings, then the built-in one
        let deck_path = std::env::args_os()
            .nth(1)
            .map(PathBuf::from)
            .or_else(|| settings.deck_path.clone());
        let deck = Deck::load_or_builtin(deck_path.as_deref());

        // 3. Initialize sub-states
        let core = CoreState::new(settings);
        let session = DeckSession::new(deck, core.swipe_config());
        let ui = UiState::new();

        let app = Self { core, session, ui };

        // 4. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: WINDOW_SIZE,
            min_size: Some(iced::Size::new(360.0, 520.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "swipedeck".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!(
            "Opening main window with id: {:?} ({} cards)",
            window_id,
            app.session.deck.remaining() + usize::from(app.session.card.is_some())
        );

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title showing the card on display
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        match self.session.card.as_ref().and_then(|card| card.item()) {
            Some(practice) => format!("SwipeDeck - {}", practice.title),
            None => "SwipeDeck".to_string(),
        }
    }

    /// Subscriptions for animations, keyboard events, and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Frame ticks while the card or a fade is moving
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.session.is_animating(),
            self.ui.has_active_animations(),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 3. Window events
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let close_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        iced::Subscription::batch([animation_sub, keyboard_sub, resize_sub, close_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(card_animating: bool, ui_animating: bool) -> bool {
        card_animating || ui_animating
    }
}
