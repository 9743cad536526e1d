//! Keyboard shortcut hints shown under the card

use iced::widget::{container, row, text};
use iced::{Alignment, Background, Border, Element};

use crate::ui::theme;

/// A row of `(key, label)` hints
pub fn view<'a, Message: 'a>(hints: Vec<(String, &'static str)>) -> Element<'a, Message> {
    let items = hints.into_iter().map(|(key, label)| -> Element<'a, Message> {
        row![
            container(text(key).size(12).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }))
            .padding([2, 8])
            .style(|theme| container::Style {
                background: Some(Background::Color(theme::shortcut_bg(theme))),
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
            text(label).size(12).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ]
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
    });

    row(items).spacing(20).align_y(Alignment::Center).into()
}
