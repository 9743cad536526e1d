// src/app/update/card.rs
//! Card gesture, animation tick, undo and toast handlers

use std::time::Duration;

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Practice;
use crate::ui::swipe::{CardEvent, Direction, SwipeOutcome, SwipeResult};
use crate::ui::widgets::Toast;

/// How long a toast stays up before fading out
const TOAST_DURATION: Duration = Duration::from_millis(1800);

impl App {
    /// Handle card-related messages
    pub fn handle_card(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Card(event) => {
                match event {
                    CardEvent::DragStarted => self.ui.card_lift.show(),
                    CardEvent::DragEnded | CardEvent::DragCancelled => self.ui.card_lift.hide(),
                    CardEvent::Dragged(_) => {}
                }

                let outcome = self
                    .session
                    .card
                    .as_mut()
                    .and_then(|card| card.update(*event));
                Some(self.finish_card(outcome))
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.tick(now);

                let outcome = self
                    .session
                    .card
                    .as_mut()
                    .and_then(|card| card.tick(now));
                Some(self.finish_card(outcome))
            }

            Message::Undo => {
                let config = self.core.swipe_config();
                self.ui.card_lift.hide();
                match self.session.undo(config) {
                    Some(practice) => {
                        tracing::info!("Undo: \"{}\" is back on top", practice.title);
                        let toast = Toast::info(format!("Back: {}", practice.title));
                        Some(self.show_toast(toast))
                    }
                    None => Some(Task::none()),
                }
            }

            Message::HideToast(generation) => {
                // A newer toast owns the screen
                if *generation == self.ui.toast_generation {
                    self.ui.toast_fade.hide();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Fling the live card toward `direction`, as the keyboard shortcuts do
    pub(super) fn fling_card(&mut self, direction: Direction) -> Task<Message> {
        self.ui.card_lift.hide();
        let outcome = self
            .session
            .card
            .as_mut()
            .and_then(|card| card.fling(direction));
        self.finish_card(outcome)
    }

    /// Record a decided card, deal the next one and announce the result
    pub(super) fn finish_card(&mut self, outcome: Option<SwipeOutcome<Practice>>) -> Task<Message> {
        let Some(outcome) = outcome else {
            return Task::none();
        };

        let config = self.core.swipe_config();
        let Some(decision) = self.session.record(outcome, config) else {
            return Task::none();
        };
        tracing::info!(
            "{} \"{}\" (id {})",
            decision.result,
            decision.item.title,
            decision.item.id
        );

        let message = format!("{}: {}", decision.result, decision.item.title);
        let toast = match decision.result {
            SwipeResult::Accept => Toast::success(message),
            SwipeResult::Pass => Toast::danger(message),
        };

        if self.session.deck.is_finished() && self.session.card.is_none() {
            tracing::info!(
                "Deck finished: {} accepted, {} passed",
                self.session.deck.accepted(),
                self.session.deck.passed()
            );
        }

        self.show_toast(toast)
    }

    /// Show a toast and schedule its fade-out
    pub(super) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.ui.toast = Some(toast);
        self.ui.toast_fade.show();
        self.ui.toast_generation = self.ui.toast_generation.wrapping_add(1);

        let generation = self.ui.toast_generation;
        Task::perform(
            async {
                tokio::time::sleep(TOAST_DURATION).await;
            },
            move |_| Message::HideToast(generation),
        )
    }
}
