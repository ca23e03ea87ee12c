//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── reel ───────────────────────────────────────────────────
    pub fn centered_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn passing_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn tooltip_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    /// Dim a style according to an entrance fade (`0.0` = invisible).
    pub fn faded(style: Style, progress: f64) -> Style {
        if progress < 0.34 {
            style.fg(Color::DarkGray).remove_modifier(Modifier::BOLD)
        } else if progress < 0.67 {
            style.fg(Color::Gray)
        } else {
            style
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn busy_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style() -> Style {
        Style::default().fg(Color::Red)
    }
}
