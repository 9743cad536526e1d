//! View rendering

use iced::Element;

use super::{App, Message};
use crate::ui::components::{self, DeckView};

impl App {
    /// Render the main window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        components::swipe_deck::view(DeckView {
            deck: &self.session.deck,
            card: self.session.card.as_ref(),
            keybindings: &self.core.settings.keybindings,
            toast: self.ui.toast.as_ref(),
            toast_opacity: self.ui.toast_fade.progress(),
            card_lift: self.ui.card_lift.progress(),
        })
    }
}
