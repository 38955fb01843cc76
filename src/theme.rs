//! Color theme and glyphs for the FinanceScope TUI.
//!
//! Kanagawa Wave palette.

use ratatui::style::{Color, Modifier, Style};

pub mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const PRIMARY_DIM: Color = Color::Rgb(147, 138, 169); // springViolet1

    // === Accent Colors ===
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
    pub const PEACH: Color = Color::Rgb(255, 160, 102); // surimiOrange
}

/// Glyphs for notice and status icons.
pub mod glyphs {
    pub const SUCCESS: &str = "✓";
    pub const INFO: &str = "•";
    pub const ERROR: &str = "✗";
    pub const STATUS_READY: &str = "●";
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Style, colors};

    pub fn title() -> Style {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(colors::TEXT_SECONDARY)
    }

    pub fn success() -> Style {
        Style::default().fg(colors::GREEN)
    }

    pub fn info() -> Style {
        Style::default().fg(colors::TEXT_PRIMARY)
    }

    pub fn error() -> Style {
        Style::default().fg(colors::RED)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }

    pub fn key_highlight() -> Style {
        Style::default()
            .fg(colors::PEACH)
            .add_modifier(Modifier::BOLD)
    }
}
