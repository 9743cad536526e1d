//! Swipeable card state
//!
//! A card owns the offset of one data item and decides, from drag input and
//! frame ticks, whether the item springs back or leaves the screen. Leaving
//! the screen hands the item back to the caller exactly once.

use std::time::Instant;

use iced::Vector;

use super::config::SwipeConfig;
use super::transform::CardTransform;
use crate::ui::animation::{AnimatedAxis, AnimationSpec};

/// Decision registered by swiping a card off screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeResult {
    /// Swiped right
    Accept,
    /// Swiped left
    Pass,
}

impl SwipeResult {
    /// Result for a card leaving at horizontal offset `x`
    pub fn from_offset(x: f32) -> Self {
        if x > 0.0 {
            SwipeResult::Accept
        } else {
            SwipeResult::Pass
        }
    }
}

impl std::fmt::Display for SwipeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeResult::Accept => write!(f, "Accepted"),
            SwipeResult::Pass => write!(f, "Passed"),
        }
    }
}

/// Horizontal side of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Side a horizontal offset points to; zero counts as left
    fn from_offset(x: f32) -> Self {
        if x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Where a card is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// At the origin, nothing moving
    Resting,
    /// Following the pointer
    Dragging,
    /// Returning to the origin
    Settling,
    /// Leaving the screen
    Flinging,
    /// Decided; the card no longer renders and ignores input
    Terminated,
}

/// Gesture input for a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent {
    /// Pointer went down on the card
    DragStarted,
    /// Pointer moved while down
    Dragged(Vector),
    /// Pointer released
    DragEnded,
    /// Gesture aborted by the host (focus lost, pointer left, shortcut)
    DragCancelled,
}

/// Item handed back when a card is swiped away
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeOutcome<T> {
    pub result: SwipeResult,
    pub item: T,
}

/// A draggable card showing one item
#[derive(Debug)]
pub struct SwipeCard<T> {
    item: Option<T>,
    x: AnimatedAxis,
    y: AnimatedAxis,
    phase: CardPhase,
    config: SwipeConfig,
}

impl<T> SwipeCard<T> {
    pub fn new(item: T, config: SwipeConfig) -> Self {
        Self {
            item: Some(item),
            x: AnimatedAxis::new(config.max_x),
            y: AnimatedAxis::new(config.max_y),
            phase: CardPhase::Resting,
            config,
        }
    }

    /// The item on display, `None` once it has been handed back
    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Current rendered offset
    pub fn offset(&self) -> Vector {
        Vector::new(self.x.value(), self.y.value())
    }

    /// Offset the card is heading for
    #[cfg(test)]
    pub fn target(&self) -> Vector {
        Vector::new(self.x.target(), self.y.target())
    }

    /// Whether the card should still be drawn
    pub fn is_visible(&self) -> bool {
        self.phase != CardPhase::Terminated
    }

    /// Whether frame ticks are needed
    pub fn is_animating(&self) -> bool {
        self.is_visible()
            && (matches!(self.phase, CardPhase::Settling | CardPhase::Flinging)
                || self.x.is_animating()
                || self.y.is_animating())
    }

    /// Visual transform for the current offset
    pub fn transform(&self) -> CardTransform {
        CardTransform::from_offset(
            self.x.value(),
            self.y.value(),
            self.config.rotation_divisor,
            self.config.max_rotation,
        )
    }

    /// Swap in a config resolved for a new window size
    ///
    /// A card already flinging is sent on toward the new horizontal limit, so
    /// a wider window cannot strand it short of the removal threshold.
    pub fn set_config(&mut self, config: SwipeConfig) -> Option<SwipeOutcome<T>> {
        self.config = config;
        if self.phase == CardPhase::Terminated {
            return None;
        }

        self.x.set_bound(config.max_x);
        self.y.set_bound(config.max_y);
        if self.phase == CardPhase::Flinging {
            self.start_fling(Direction::from_offset(self.x.target()));
        }

        self.poll_outcome()
    }

    /// Feed one gesture event
    pub fn update(&mut self, event: CardEvent) -> Option<SwipeOutcome<T>> {
        if self.phase == CardPhase::Terminated {
            return None;
        }

        match event {
            CardEvent::DragStarted => self.set_phase(CardPhase::Dragging),
            CardEvent::Dragged(delta) => self.drag_by(delta),
            CardEvent::DragEnded => self.end_drag(),
            CardEvent::DragCancelled => self.cancel_drag(),
        }

        self.poll_outcome()
    }

    /// Advance animations to `now`
    pub fn tick(&mut self, now: Instant) -> Option<SwipeOutcome<T>> {
        if self.phase == CardPhase::Terminated {
            return None;
        }

        self.x.tick(now);
        self.y.tick(now);

        if self.phase == CardPhase::Settling && !self.x.is_animating() && !self.y.is_animating()
        {
            self.set_phase(CardPhase::Resting);
        }

        self.poll_outcome()
    }

    /// Send the card off toward `direction` without a gesture
    pub fn fling(&mut self, direction: Direction) -> Option<SwipeOutcome<T>> {
        if self.phase == CardPhase::Terminated {
            return None;
        }
        self.start_fling(direction);
        self.poll_outcome()
    }

    /// Take the item back without a decision; the card terminates silently
    pub fn withdraw(&mut self) -> Option<T> {
        let item = self.item.take()?;
        self.set_phase(CardPhase::Terminated);
        Some(item)
    }

    fn drag_by(&mut self, delta: Vector) {
        let spec = AnimationSpec::Tween(self.config.follow_duration);
        self.x.animate_by(delta.x, spec);
        self.y.animate_by(delta.y, spec);
        self.set_phase(CardPhase::Dragging);
    }

    fn end_drag(&mut self) {
        let target_x = self.x.target();

        if target_x.abs() < self.config.fling_threshold() {
            let spec = AnimationSpec::Tween(self.config.fling_duration);
            self.x.animate_to(0.0, spec);
            self.y.animate_to(0.0, spec);
            self.set_phase(CardPhase::Settling);
        } else {
            self.start_fling(Direction::from_offset(target_x));
        }
    }

    fn cancel_drag(&mut self) {
        self.x.reset();
        self.y.reset();
        self.set_phase(CardPhase::Settling);
    }

    fn start_fling(&mut self, direction: Direction) {
        let spec = AnimationSpec::Tween(self.config.fling_duration);
        self.x.animate_to(direction.sign() * self.config.max_x, spec);
        if self.config.settle_vertical_on_fling {
            self.y.animate_to(0.0, spec);
        }
        self.set_phase(CardPhase::Flinging);
    }

    fn set_phase(&mut self, phase: CardPhase) {
        if self.phase != phase {
            tracing::trace!("Card phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Hand the item back once the card has crossed the removal threshold
    fn poll_outcome(&mut self) -> Option<SwipeOutcome<T>> {
        let x = self.x.value();
        if x.abs() < self.config.removal_threshold() {
            return None;
        }

        let item = self.item.take()?;
        self.set_phase(CardPhase::Terminated);
        let result = SwipeResult::from_offset(x);
        tracing::debug!("Card swiped off at x={:.1}: {:?}", x, result);

        Some(SwipeOutcome { result, item })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::features::settings::SwipeSettings;

    /// max_x = 1000, max_y = 1000, fling at 250, removed at 950
    fn config() -> SwipeConfig {
        let settings = SwipeSettings {
            width_factor: 1.0,
            ..SwipeSettings::default()
        };
        SwipeConfig::new(&settings, 1000.0)
    }

    fn card() -> SwipeCard<&'static str> {
        SwipeCard::new("item", config())
    }

    /// Tick until every animation has run its course
    fn run_to_end<T>(card: &mut SwipeCard<T>) -> Option<SwipeOutcome<T>> {
        let now = Instant::now();
        let first = card.tick(now);
        let second = card.tick(now + Duration::from_secs(2));
        first.or(second)
    }

    fn drag(card: &mut SwipeCard<&'static str>, dx: f32, dy: f32) {
        card.update(CardEvent::DragStarted);
        assert!(card.update(CardEvent::Dragged(Vector::new(dx, dy))).is_none());
    }

    #[test]
    fn test_new_card_is_resting() {
        let card = card();
        assert_eq!(card.phase(), CardPhase::Resting);
        assert_eq!(card.offset(), Vector::new(0.0, 0.0));
        assert_eq!(card.item(), Some(&"item"));
        assert!(card.is_visible());
        assert!(!card.is_animating());
    }

    #[test]
    fn test_drag_accumulates_onto_target() {
        let mut card = card();
        drag(&mut card, 40.0, 10.0);
        drag(&mut card, 60.0, -30.0);

        assert_eq!(card.phase(), CardPhase::Dragging);
        assert_eq!(card.target(), Vector::new(100.0, -20.0));
    }

    #[test]
    fn test_drag_target_is_bounded() {
        let mut card = card();
        drag(&mut card, 900.0, 1500.0);
        drag(&mut card, 900.0, 1500.0);
        assert_eq!(card.target(), Vector::new(1000.0, 1000.0));
    }

    #[test]
    fn test_short_release_settles_to_origin() {
        let mut card = card();
        drag(&mut card, 100.0, 40.0);
        run_to_end(&mut card);

        assert!(card.update(CardEvent::DragEnded).is_none());
        assert_eq!(card.phase(), CardPhase::Settling);
        assert_eq!(card.target(), Vector::new(0.0, 0.0));

        assert!(run_to_end(&mut card).is_none());
        assert_eq!(card.phase(), CardPhase::Resting);
        assert!(card.offset().x.abs() < 0.01);
        assert!(card.offset().y.abs() < 0.01);
        assert_eq!(card.item(), Some(&"item"));
    }

    #[test]
    fn test_release_past_quarter_flings_right() {
        let mut card = card();
        drag(&mut card, 300.0, 25.0);

        card.update(CardEvent::DragEnded);
        assert_eq!(card.phase(), CardPhase::Flinging);
        assert_eq!(card.target().x, 1000.0);
        // Vertical keeps whatever target the drag gave it
        assert_eq!(card.target().y, 25.0);

        let outcome = run_to_end(&mut card).expect("fling should decide the card");
        assert_eq!(outcome.result, SwipeResult::Accept);
        assert_eq!(outcome.item, "item");
        assert_eq!(card.phase(), CardPhase::Terminated);
        assert!(!card.is_visible());
        assert!(card.item().is_none());
    }

    #[test]
    fn test_release_exactly_at_threshold_flings() {
        let mut card = card();
        drag(&mut card, -250.0, 0.0);
        card.update(CardEvent::DragEnded);
        assert_eq!(card.phase(), CardPhase::Flinging);
        assert_eq!(card.target().x, -1000.0);

        let outcome = run_to_end(&mut card).expect("fling should decide the card");
        assert_eq!(outcome.result, SwipeResult::Pass);
    }

    #[test]
    fn test_fling_can_settle_vertical_when_configured() {
        let mut config = config();
        config.settle_vertical_on_fling = true;
        let mut card = SwipeCard::new("item", config);

        card.update(CardEvent::Dragged(Vector::new(400.0, 80.0)));
        card.update(CardEvent::DragEnded);
        assert_eq!(card.target(), Vector::new(1000.0, 0.0));
    }

    #[test]
    fn test_cancel_snaps_to_origin() {
        let mut card = card();
        drag(&mut card, 700.0, -300.0);
        run_to_end(&mut card);

        assert!(card.update(CardEvent::DragCancelled).is_none());
        assert_eq!(card.offset(), Vector::new(0.0, 0.0));
        assert_eq!(card.target(), Vector::new(0.0, 0.0));
        assert_eq!(card.phase(), CardPhase::Settling);

        run_to_end(&mut card);
        assert_eq!(card.phase(), CardPhase::Resting);
    }

    #[test]
    fn test_no_outcome_below_removal_threshold() {
        let mut card = card();
        drag(&mut card, 949.0, 0.0);
        assert!(run_to_end(&mut card).is_none());
        assert!(card.is_visible());

        drag(&mut card, -1898.0, 0.0);
        assert!(run_to_end(&mut card).is_none());
        assert!(card.is_visible());
    }

    #[test]
    fn test_dragging_past_removal_threshold_decides() {
        let mut card = card();
        drag(&mut card, -960.0, 0.0);
        let outcome = run_to_end(&mut card).expect("crossing the threshold decides the card");
        assert_eq!(outcome.result, SwipeResult::Pass);
        assert_eq!(card.phase(), CardPhase::Terminated);
    }

    #[test]
    fn test_outcome_is_reported_once() {
        let mut card = card();
        assert!(card.fling(Direction::Right).is_none());
        assert!(run_to_end(&mut card).is_some());

        assert!(run_to_end(&mut card).is_none());
        assert!(card.update(CardEvent::Dragged(Vector::new(-5.0, 0.0))).is_none());
        assert!(card.update(CardEvent::DragEnded).is_none());
        assert!(card.fling(Direction::Left).is_none());
        assert_eq!(card.phase(), CardPhase::Terminated);
    }

    #[test]
    fn test_instant_fling_decides_immediately() {
        let mut card = SwipeCard::new("item", config().without_motion());
        let outcome = card.fling(Direction::Left).expect("instant fling decides at once");
        assert_eq!(outcome.result, SwipeResult::Pass);
    }

    #[test]
    fn test_new_drag_supersedes_settle() {
        let mut card = card();
        drag(&mut card, 100.0, 0.0);
        card.update(CardEvent::DragEnded);
        assert_eq!(card.phase(), CardPhase::Settling);

        drag(&mut card, 50.0, 0.0);
        assert_eq!(card.phase(), CardPhase::Dragging);
        assert_eq!(card.target().x, 50.0);
    }

    #[test]
    fn test_transform_follows_offset() {
        let mut card = card();
        drag(&mut card, 600.0, 30.0);
        run_to_end(&mut card);

        let transform = card.transform();
        assert!((transform.translation.x - 600.0).abs() < 0.01);
        assert!((transform.rotation.0 - 10.0).abs() < 0.01);
    }

    fn config_for_width(width: f32) -> SwipeConfig {
        let settings = SwipeSettings {
            width_factor: 1.0,
            ..SwipeSettings::default()
        };
        SwipeConfig::new(&settings, width)
    }

    #[test]
    fn test_shrinking_window_reclamps_offsets() {
        let mut card = card();
        drag(&mut card, 400.0, 0.0);
        run_to_end(&mut card);

        assert!(card.set_config(config_for_width(600.0)).is_none());
        assert_eq!(card.target().x, 400.0);

        // Clamped to 300, past the new removal threshold of 250
        let outcome = card
            .set_config(config_for_width(300.0))
            .expect("clamped offset is past the removal threshold");
        assert_eq!(outcome.result, SwipeResult::Accept);
        assert_eq!(card.config().max_x, 300.0);
    }

    #[test]
    fn test_widening_window_mid_fling_still_decides() {
        let mut card = card();
        assert!(card.fling(Direction::Right).is_none());

        let t0 = Instant::now();
        assert!(card.tick(t0).is_none());
        assert!(card.tick(t0 + Duration::from_millis(200)).is_none());
        assert_eq!(card.phase(), CardPhase::Flinging);

        assert!(card.set_config(config_for_width(1200.0)).is_none());
        assert_eq!(card.phase(), CardPhase::Flinging);
        assert_eq!(card.target().x, 1200.0);

        let outcome = run_to_end(&mut card).expect("fling should reach the wider limit");
        assert_eq!(outcome.result, SwipeResult::Accept);
        assert_eq!(card.phase(), CardPhase::Terminated);
    }

    #[test]
    fn test_config_change_after_outcome_is_ignored() {
        let mut card = SwipeCard::new("item", config().without_motion());
        assert!(card.fling(Direction::Left).is_some());
        assert!(card.set_config(config_for_width(300.0)).is_none());
        assert!(!card.is_visible());
    }

    #[test]
    fn test_zero_width_leaves_resting_card_undecided() {
        let mut card = SwipeCard::new("item", config_for_width(0.0));
        assert!(card.update(CardEvent::DragStarted).is_none());
        assert!(run_to_end(&mut card).is_none());
        assert!(card.is_visible());
        assert_eq!(card.item(), Some(&"item"));
    }

    #[test]
    fn test_press_enters_dragging() {
        let mut card = card();
        assert!(card.update(CardEvent::DragStarted).is_none());
        assert_eq!(card.phase(), CardPhase::Dragging);

        card.update(CardEvent::DragCancelled);
        run_to_end(&mut card);
        assert_eq!(card.phase(), CardPhase::Resting);
    }

    #[test]
    fn test_fling_is_midway_at_half_duration() {
        let mut card = card();
        assert!(card.fling(Direction::Right).is_none());

        let t0 = Instant::now();
        assert!(card.tick(t0).is_none());
        assert!(card.tick(t0 + Duration::from_millis(200)).is_none());
        assert_eq!(card.phase(), CardPhase::Flinging);
        let x = card.offset().x;
        assert!(x > 0.0 && x < 950.0, "x = {x}");

        let outcome = card
            .tick(t0 + Duration::from_millis(450))
            .expect("fling should finish after its duration");
        assert_eq!(outcome.result, SwipeResult::Accept);
    }

    #[test]
    fn test_settle_is_midway_at_half_duration() {
        let mut config = config();
        config.follow_duration = Duration::ZERO;
        let mut card = SwipeCard::new("item", config);
        drag(&mut card, 100.0, 0.0);
        assert_eq!(card.offset().x, 100.0);

        card.update(CardEvent::DragEnded);
        let t0 = Instant::now();
        card.tick(t0);
        card.tick(t0 + Duration::from_millis(200));
        assert_eq!(card.phase(), CardPhase::Settling);
        let x = card.offset().x;
        assert!(x > 0.0 && x < 100.0, "x = {x}");

        let end = t0 + Duration::from_millis(450);
        assert!(card.tick(end).is_none());
        assert!(card.tick(end).is_none());
        assert!(card.offset().x.abs() < 0.01);
        assert_eq!(card.phase(), CardPhase::Resting);
    }

    #[test]
    fn test_withdraw_returns_item_without_outcome() {
        let mut card = card();
        drag(&mut card, 120.0, 0.0);

        assert_eq!(card.withdraw(), Some("item"));
        assert_eq!(card.phase(), CardPhase::Terminated);
        assert!(card.withdraw().is_none());
        assert!(run_to_end(&mut card).is_none());
    }

    #[test]
    fn test_result_from_offset_sign() {
        assert_eq!(SwipeResult::from_offset(10.0), SwipeResult::Accept);
        assert_eq!(SwipeResult::from_offset(-10.0), SwipeResult::Pass);
    }
}
