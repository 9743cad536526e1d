//! Deck header widget
//!
//! Shows the deck title with running accept/pass/remaining counters and an
//! optional "Undo" link.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Background, Border, Color, Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Tallies shown in the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub accepted: usize,
    pub passed: usize,
    pub remaining: usize,
}

/// Create a deck header element
///
/// # Arguments
/// * `title` - Heading text
/// * `tally` - Counters to show next to it
/// * `on_undo` - Message for the undo link, `None` disables it
pub fn view<'a, Message: Clone + 'a>(
    title: &'a str,
    tally: Tally,
    on_undo: Option<Message>,
) -> Element<'a, Message> {
    let title_text = text(title)
        .size(22)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let counters = row![
        counter(tally.accepted, "accepted", theme::success),
        counter(tally.passed, "passed", theme::danger),
        counter(tally.remaining, "left", theme::text_secondary),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let undo_btn = button(text("Undo").size(14))
        .padding([6, 16])
        .style(theme::secondary_button)
        .on_press_maybe(on_undo);

    row![
        title_text,
        Space::new().width(Fill),
        counters,
        Space::new().width(16),
        undo_btn,
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Small pill with a number and a label
fn counter<'a, Message: 'a>(
    value: usize,
    label: &'static str,
    color: fn(&iced::Theme) -> Color,
) -> Element<'a, Message> {
    container(
        row![
            text(value.to_string())
                .size(14)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .style(move |theme| text::Style {
                    color: Some(color(theme)),
                }),
            text(label).size(12).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .padding([4, 12])
    .style(|theme| container::Style {
        background: Some(Background::Color(theme::surface(theme))),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
