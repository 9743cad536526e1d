//! Theme system for the deck
//! Supports both dark and light modes with a shared accept/pass palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Weight for titles and counters
pub const BOLD_WEIGHT: Weight = Weight::Bold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0f1014);
    pub const SURFACE: Color = color!(0x1b1d23);
    pub const SURFACE_ELEVATED: Color = color!(0x23262e);
    pub const BORDER: Color = color!(0x2e313a);
    pub const TEXT_MUTED: Color = color!(0x80848f);
    pub const TEXT_SECONDARY: Color = color!(0xb4b8c2);
    pub const TEXT_PRIMARY: Color = color!(0xf4f5f7);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf3f4f6);
    pub const SURFACE: Color = color!(0xe8e9ed);
    pub const SURFACE_ELEVATED: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xd9dbe1);
    pub const TEXT_MUTED: Color = color!(0x7a7e88);
    pub const TEXT_SECONDARY: Color = color!(0x4b4f58);
    pub const TEXT_PRIMARY: Color = color!(0x16181d);
}

/// Accent for interactive elements (same for both modes)
pub const ACCENT: Color = color!(0x6c5ce7);

/// Hover state for accent
pub const ACCENT_HOVER: Color = color!(0x8577ee);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Surface elevated color (for cards, popups)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_ELEVATED
    } else {
        light::SURFACE_ELEVATED
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Accept color
pub fn success(_theme: &Theme) -> Color {
    Color::from_rgb(0.3, 0.8, 0.5)
}

/// Pass color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

/// Info color
pub fn info(_theme: &Theme) -> Color {
    Color::from_rgb(0.4, 0.7, 0.95)
}

/// Shadow color for cards and toasts
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Shortcut key background color
pub fn shortcut_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.2, 0.2, 0.22)
    } else {
        Color::from_rgb(0.9, 0.9, 0.92)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main window background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            border: Border {
                color: ACCENT_HOVER,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(surface_elevated(theme))),
            border: Border {
                color: ACCENT,
                ..base.border
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_muted(theme),
            ..base
        },
        button::Status::Active => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_mode() {
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
        assert_ne!(text_primary(&Theme::Dark), text_primary(&Theme::Light));
    }

    #[test]
    fn test_accept_and_pass_differ() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(success(&theme), danger(&theme));
        }
    }

    #[test]
    fn test_pressed_button_uses_accent_border() {
        let pressed = secondary_button(&Theme::Dark, button::Status::Pressed);
        assert_eq!(pressed.border.color, ACCENT);
        let hovered = secondary_button(&Theme::Dark, button::Status::Hovered);
        assert_eq!(hovered.border.color, ACCENT_HOVER);
    }
}
