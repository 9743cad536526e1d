//! Application state definitions

use iced::Size;
use iced::time::Instant;

use crate::features::{Deck, Decision, Practice, Settings};
use crate::ui::animation::Fade;
use crate::ui::swipe::{SwipeCard, SwipeConfig, SwipeOutcome};
use crate::ui::widgets::Toast;

/// Initial window size
pub const WINDOW_SIZE: Size = Size {
    width: 520.0,
    height: 760.0,
};

/// Main application state
pub struct App {
    /// Settings and window geometry
    pub core: CoreState,
    /// Deck plus the card on screen
    pub session: DeckSession,
    /// Transient UI state (toast, drag lift)
    pub ui: UiState,
}

/// Core settings and window geometry
pub struct CoreState {
    pub settings: Settings,
    pub window_size: Size,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window_size: WINDOW_SIZE,
        }
    }

    /// Swipe config for the current window and motion preference
    pub fn swipe_config(&self) -> SwipeConfig {
        let config = SwipeConfig::new(&self.settings.swipe, self.window_size.width);
        if self.settings.display.reduce_motion {
            config.without_motion()
        } else {
            config
        }
    }
}

/// The deck and the one live card showing its top item
pub struct DeckSession {
    pub deck: Deck<Practice>,
    pub card: Option<SwipeCard<Practice>>,
}

impl DeckSession {
    /// Start a session with the first card dealt
    pub fn new(deck: Deck<Practice>, config: SwipeConfig) -> Self {
        let mut session = Self { deck, card: None };
        session.deal(config);
        session
    }

    /// Put the next item on a fresh card if the current one is gone
    pub fn deal(&mut self, config: SwipeConfig) {
        if self.card.as_ref().is_some_and(|card| card.item().is_some()) {
            return;
        }
        self.card = self.deck.draw().map(|item| SwipeCard::new(item, config));
    }

    /// Record a swiped card and deal the next one
    pub fn record(
        &mut self,
        outcome: SwipeOutcome<Practice>,
        config: SwipeConfig,
    ) -> Option<&Decision<Practice>> {
        self.deck.record(outcome);
        self.deal(config);
        self.deck.last_decision()
    }

    /// Undo the latest decision, showing its item on a resting card
    pub fn undo(&mut self, config: SwipeConfig) -> Option<&Practice> {
        if !self.deck.can_undo() {
            return None;
        }
        if let Some(item) = self.card.as_mut().and_then(SwipeCard::withdraw) {
            self.deck.put_back(item);
        }
        self.deck.undo()?;
        self.card = None;
        self.deal(config);
        self.card.as_ref().and_then(SwipeCard::item)
    }

    /// Apply a config change to the live card, which may decide it
    pub fn reconfigure(&mut self, config: SwipeConfig) -> Option<SwipeOutcome<Practice>> {
        self.card.as_mut()?.set_config(config)
    }

    pub fn is_animating(&self) -> bool {
        self.card.as_ref().is_some_and(SwipeCard::is_animating)
    }
}

/// Transient UI state
pub struct UiState {
    pub toast: Option<Toast>,
    pub toast_fade: Fade,
    /// Bumped whenever a new toast is shown, so stale hide timers are ignored
    pub toast_generation: u64,
    /// Raised look of the card while the pointer holds it
    pub card_lift: Fade,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            toast: None,
            toast_fade: Fade::new(),
            toast_generation: 0,
            card_lift: Fade::new(),
        }
    }

    /// Check if any UI animations are active
    pub fn has_active_animations(&self) -> bool {
        self.toast_fade.is_animating() || self.card_lift.is_animating()
    }

    /// Advance the fades; drops the toast once it has faded out
    pub fn tick(&mut self, now: Instant) {
        self.toast_fade.tick(now);
        self.card_lift.tick(now);

        if !self.toast_fade.is_shown() && !self.toast_fade.is_animating() {
            self.toast = None;
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
