//! Toast notification widget
//!
//! Small floating notice shown after a decision or a settings change.
//! Dark surface with a colored accent bar; fades with the caller's opacity.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Color, Element, Padding};

use crate::ui::theme;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Danger,
    Info,
}

impl ToastStyle {
    /// Get the accent color for this style (used for icon/indicator only)
    pub fn accent_color(&self, theme: &iced::Theme) -> Color {
        match self {
            ToastStyle::Success => theme::success(theme),
            ToastStyle::Danger => theme::danger(theme),
            ToastStyle::Info => theme::info(theme),
        }
    }

    /// Get the icon for this style
    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Danger => "✗",
            ToastStyle::Info => "ℹ",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Danger)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }
}

/// Build a toast notification widget at the given opacity (0.0 - 1.0)
pub fn view_toast<'a, Message: 'a>(toast: &Toast, opacity: f32) -> Element<'a, Message> {
    if opacity <= 0.01 {
        return Space::new().width(0).height(0).into();
    }

    let style = toast.style;
    let icon = style.icon();
    let message = toast.message.clone();

    // Left accent bar (thin vertical line)
    let accent_bar = container(Space::new().width(3).height(20)).style(move |theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(
                style.accent_color(theme).scale_alpha(opacity),
            )),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon_widget = text(icon).size(14).style(move |theme| text::Style {
        color: Some(style.accent_color(theme).scale_alpha(opacity)),
    });

    let message_widget = text(message).size(13).style(move |theme| text::Style {
        color: Some(theme::text_primary(theme).scale_alpha(opacity)),
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon_widget,
        Space::new().width(10),
        message_widget,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(move |theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(
                theme::surface_elevated(theme).scale_alpha(opacity),
            )),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme).scale_alpha(opacity),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme).scale_alpha(opacity),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}
