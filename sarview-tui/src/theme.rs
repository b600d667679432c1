//! Parrot/neon theme tokens for the sarview TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, cursor, chart line)
//! - **Positive**: Neon green (leaf markers, successful loads)
//! - **Negative**: Hot pink (errors)
//! - **Warning**: Neon orange (warnings, highlighted column)
//! - **Neutral**: Cool purple (branch markers)
//! - **Muted**: Steel blue (secondary text, axes)

use ratatui::style::{Color, Modifier, Style};

use crate::tree::Marker;

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

/// Cursor line in a list.
pub fn cursor() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

/// Border of a panel, brighter when it has focus.
pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Style of a tree marker.
pub fn marker(marker: Marker) -> Style {
    match marker {
        Marker::Leaf => positive(),
        Marker::Collapsed | Marker::Expanded => neutral(),
    }
}
