//! Swipe deck component
//!
//! Header with tallies, the live card, shortcut hints and the decision toast,
//! stacked into the main window content.

use iced::widget::{Space, column, container, stack, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::{Action, Deck, KeyBindings, Practice};
use crate::ui::primitives::{CardCanvas, view_card};
use crate::ui::swipe::{CardPhase, SwipeCard};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::{self, Tally, Toast};

const DECK_TITLE: &str = "Practices";

/// Everything the deck view reads
pub struct DeckView<'a> {
    pub deck: &'a Deck<Practice>,
    pub card: Option<&'a SwipeCard<Practice>>,
    pub keybindings: &'a KeyBindings,
    pub toast: Option<&'a Toast>,
    pub toast_opacity: f32,
    /// Drag lift progress (0.0 resting .. 1.0 held)
    pub card_lift: f32,
}

/// Signed progress toward a fling, -1.0 (pass) to 1.0 (accept)
pub fn swipe_hint(card: &SwipeCard<Practice>) -> f32 {
    let threshold = card.config().fling_threshold();
    if threshold <= 0.0 {
        return 0.0;
    }
    (card.offset().x / threshold).clamp(-1.0, 1.0)
}

pub fn view(deck_view: DeckView<'_>) -> Element<'_, Message> {
    let DeckView {
        deck,
        card,
        keybindings,
        toast,
        toast_opacity,
        card_lift,
    } = deck_view;

    let tally = Tally {
        accepted: deck.accepted(),
        passed: deck.passed(),
        remaining: deck.remaining() + usize::from(card.is_some_and(|c| c.item().is_some())),
    };
    let undo = deck.can_undo().then_some(Message::Undo);
    let header = widgets::deck_header::view(DECK_TITLE, tally, undo);

    let body: Element<'_, Message> = match card.and_then(|c| c.item().map(|item| (c, item))) {
        Some((card, practice)) => view_card(
            CardCanvas::new(&practice.title, &practice.description, Message::Card)
                .caption(practice.category.as_deref())
                .transform(card.transform())
                .hint(swipe_hint(card))
                .lift(card_lift)
                .visible(card.is_visible())
                .dragging(card.phase() == CardPhase::Dragging),
        ),
        None => finished_panel(deck),
    };

    let hints = widgets::shortcut_hint::view(vec![
        (keybindings.display_for_action(&Action::Pass), "Pass"),
        (keybindings.display_for_action(&Action::Accept), "Accept"),
        (keybindings.display_for_action(&Action::Undo), "Undo"),
        (keybindings.display_for_action(&Action::ToggleTheme), "Theme"),
    ]);

    let content = column![
        header,
        body,
        container(hints).width(Fill).align_x(Alignment::Center),
    ]
    .spacing(16)
    .padding(24)
    .width(Fill)
    .height(Fill);

    // Toast overlay (empty space if not shown)
    let toast_overlay: Element<'_, Message> = match toast {
        Some(toast) => container(widgets::view_toast(toast, toast_opacity))
            .width(Fill)
            .padding([80, 20])
            .align_x(Alignment::Center)
            .into(),
        None => Space::new().width(0).height(0).into(),
    };

    container(stack![content, toast_overlay].width(Fill).height(Fill))
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}

/// Summary shown once every card has been decided
fn finished_panel<'a>(deck: &Deck<Practice>) -> Element<'a, Message> {
    let summary = format!(
        "{} accepted, {} passed out of {}",
        deck.accepted(),
        deck.passed(),
        deck.total()
    );

    container(
        column![
            text("All done")
                .size(28)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            text(summary).size(15).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .center(Fill)
    .into()
}
