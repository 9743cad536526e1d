//! Deck of items to decide on
//!
//! The deck owns the queue of items still to be swiped and the record of
//! decisions already made. The card at the top of the deck is the only one
//! on screen; its item is moved out while the card is live and moved back in
//! through [`Deck::record`] with the result.

use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::ui::swipe::{SwipeOutcome, SwipeResult};

/// One practice shown on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Practice {
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A recorded decision
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<T> {
    pub result: SwipeResult,
    pub item: T,
}

impl<T> From<SwipeOutcome<T>> for Decision<T> {
    fn from(outcome: SwipeOutcome<T>) -> Self {
        Self {
            result: outcome.result,
            item: outcome.item,
        }
    }
}

/// Pending items plus decision history
#[derive(Debug, Clone)]
pub struct Deck<T> {
    pending: VecDeque<T>,
    decided: Vec<Decision<T>>,
}

impl<T> Deck<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            pending: items.into_iter().collect(),
            decided: Vec::new(),
        }
    }

    /// Item at the top of the deck
    #[cfg(test)]
    pub fn current(&self) -> Option<&T> {
        self.pending.front()
    }

    /// Take the top item to put on a card
    pub fn draw(&mut self) -> Option<T> {
        self.pending.pop_front()
    }

    /// Record the decision for an item drawn from the deck
    pub fn record(&mut self, decision: impl Into<Decision<T>>) {
        self.decided.push(decision.into());
    }

    /// Undo the latest decision; the item goes back on top of the deck
    pub fn undo(&mut self) -> Option<&T> {
        let decision = self.decided.pop()?;
        self.pending.push_front(decision.item);
        self.pending.front()
    }

    /// Put an item drawn from the deck back on top without deciding
    pub fn put_back(&mut self, item: T) {
        self.pending.push_front(item);
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn last_decision(&self) -> Option<&Decision<T>> {
        self.decided.last()
    }

    pub fn accepted(&self) -> usize {
        self.count(SwipeResult::Accept)
    }

    pub fn passed(&self) -> usize {
        self.count(SwipeResult::Pass)
    }

    fn count(&self, result: SwipeResult) -> usize {
        self.decided.iter().filter(|d| d.result == result).count()
    }

    pub fn can_undo(&self) -> bool {
        !self.decided.is_empty()
    }

    /// Nothing left to draw; an item may still be out on a card
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total number of items, pending or decided
    pub fn total(&self) -> usize {
        self.pending.len() + self.decided.len()
    }
}

impl Deck<Practice> {
    /// Load practices from a JSON array file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck file {}", path.display()))?;
        let items: Vec<Practice> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse deck file {}", path.display()))?;
        if items.is_empty() {
            bail!("Deck file {} contains no items", path.display());
        }
        Ok(Self::new(items))
    }

    /// Load from `path` if given, falling back to the built-in deck
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        match Self::load_from_file(path) {
            Ok(deck) => {
                tracing::info!("Loaded {} cards from {}", deck.remaining(), path.display());
                deck
            }
            Err(e) => {
                tracing::warn!("{:#}; using built-in deck", e);
                Self::builtin()
            }
        }
    }

    /// The deck shipped with the application
    pub fn builtin() -> Self {
        Self::new([
            Practice::new(
                1,
                "Drink water sitting down",
                "Take three breaths between sips and finish the glass before getting up.",
            )
            .with_category("Daily"),
            Practice::new(
                2,
                "Greet first",
                "Be the first to say hello to the people you meet today.",
            )
            .with_category("Social"),
            Practice::new(
                3,
                "Smile at someone",
                "A sincere smile counts. Try it with a stranger as well as a friend.",
            )
            .with_category("Social"),
            Practice::new(
                4,
                "Start with the right",
                "Put on the right shoe first and step into the house with the right foot.",
            )
            .with_category("Daily"),
            Practice::new(
                5,
                "Sleep early",
                "Wind down after the evening meal and be in bed before eleven.",
            )
            .with_category("Rest"),
            Practice::new(
                6,
                "Visit someone unwell",
                "Call or visit a friend or neighbour who has been ill this week.",
            )
            .with_category("Social"),
            Practice::new(
                7,
                "Eat together",
                "Share at least one meal today with family or friends, phones away.",
            )
            .with_category("Daily"),
            Practice::new(
                8,
                "Remove something harmful from the road",
                "Pick up litter or a stone from a path others walk on.",
            )
            .with_category("Community"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck<&'static str> {
        Deck::new(["a", "b", "c"])
    }

    #[test]
    fn test_draw_and_record() {
        let mut deck = deck();
        assert_eq!(deck.current(), Some(&"a"));

        let item = deck.draw().expect("deck has items");
        deck.record(Decision {
            result: SwipeResult::Accept,
            item,
        });

        assert_eq!(deck.current(), Some(&"b"));
        assert_eq!(deck.remaining(), 2);
        assert_eq!(deck.accepted(), 1);
        assert_eq!(deck.passed(), 0);
    }

    #[test]
    fn test_record_from_outcome() {
        let mut deck = deck();
        let item = deck.draw().expect("deck has items");
        deck.record(SwipeOutcome {
            result: SwipeResult::Pass,
            item,
        });
        let decision = deck.last_decision().expect("decision was recorded");
        assert_eq!(decision.item, "a");
        assert_eq!(decision.result, SwipeResult::Pass);
    }

    #[test]
    fn test_undo_restores_last_item_on_top() {
        let mut deck = deck();
        for result in [SwipeResult::Accept, SwipeResult::Pass] {
            let item = deck.draw().expect("deck has items");
            deck.record(Decision { result, item });
        }

        assert_eq!(deck.undo(), Some(&"b"));
        assert_eq!(deck.remaining(), 2);
        assert_eq!(deck.passed(), 0);
        assert_eq!(deck.accepted(), 1);
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut deck = deck();
        assert!(!deck.can_undo());
        assert_eq!(deck.undo(), None);
        assert_eq!(deck.remaining(), 3);
    }

    #[test]
    fn test_finished_once_everything_is_drawn() {
        let mut deck = deck();
        while let Some(item) = deck.draw() {
            deck.record(Decision {
                result: SwipeResult::Pass,
                item,
            });
        }
        assert!(deck.is_finished());
        assert_eq!(deck.total(), 3);
        assert_eq!(deck.passed(), 3);
    }

    #[test]
    fn test_put_back_does_not_record() {
        let mut deck = deck();
        let item = deck.draw().expect("deck has items");
        deck.put_back(item);
        assert_eq!(deck.current(), Some(&"a"));
        assert!(!deck.can_undo());
        assert!(deck.last_decision().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deck.json");
        std::fs::write(
            &path,
            r#"[
                { "id": 10, "title": "Walk", "description": "Go outside" },
                { "id": 11, "title": "Read", "description": "Ten pages", "category": "Mind" }
            ]"#,
        )
        .expect("failed to write deck");

        let deck = Deck::load_from_file(&path).expect("deck should load");
        assert_eq!(deck.remaining(), 2);
        assert_eq!(deck.current().map(|p| p.id), Some(10));
    }

    #[test]
    fn test_load_rejects_empty_deck() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deck.json");
        std::fs::write(&path, "[]").expect("failed to write deck");

        let err = Deck::load_from_file(&path).expect_err("empty deck should fail");
        assert!(err.to_string().contains("no items"));
    }

    #[test]
    fn test_broken_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deck.json");
        std::fs::write(&path, "{ nope").expect("failed to write deck");

        let deck = Deck::load_or_builtin(Some(&path));
        assert_eq!(deck.remaining(), Deck::builtin().remaining());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let mut deck = Deck::builtin();
        let mut ids = Vec::new();
        while let Some(item) = deck.draw() {
            assert!(!ids.contains(&item.id));
            ids.push(item.id);
        }
        assert!(!ids.is_empty());
    }
}
