//! Popup overlay widgets for the settings menu and the metrics summary.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::metrics::{MetricsState, MetricsStatus};
use crate::app::settings::SETTINGS_ITEMS;
use crate::app::state::AppState;

use super::spinner::LoadingIndicator;
use super::theme::Theme;

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn row_style(selected: bool) -> (&'static str, Style) {
    if selected {
        (
            " ▸ ",
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("   ", Style::default().fg(Color::White))
    }
}

// ───────────────────────────────────────── settings popup ────

/// Settings menu popup overlay.
pub struct SettingsPopup<'a> {
    pub state: &'a AppState,
}

impl Widget for SettingsPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (SETTINGS_ITEMS.len() as u16) + 6;
        let popup = centered_fixed(40, height, area);
        Clear.render(popup, buf);

        let block = popup_block("Settings");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for (i, item) in SETTINGS_ITEMS.iter().enumerate() {
            let (prefix, style) = row_style(i == self.state.settings_selected);
            let value = item.display_value(self.state);
            let value_style = match value.as_str() {
                "ON" => Style::default().fg(Color::Green),
                "OFF" => Style::default().fg(Color::DarkGray),
                _ => Style::default().fg(Color::Yellow),
            };
            let label_col = format!("{prefix}{:<18}", item.label());
            lines.push(Line::from(vec![
                Span::styled(label_col, style),
                Span::styled(format!("[{value}]"), value_style),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter/Space: change  Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── metrics popup ─────

/// Width of the per-language bars, in cells.
const BAR_WIDTH: usize = 16;

/// Summary of the user's vocabulary metrics.
pub struct MetricsPopup<'a> {
    pub metrics: &'a MetricsState,
    pub tick: u64,
}

impl Widget for MetricsPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let language_rows = self
            .metrics
            .data
            .as_ref()
            .map_or(0, |d| d.translations_per_language.len());
        let height = (language_rows as u16) + 10;
        let popup = centered_fixed(48, height, area);
        Clear.render(popup, buf);

        let block = popup_block("Metrics");
        let inner = block.inner(popup);
        block.render(popup, buf);
        if self.metrics.is_loading() {
            LoadingIndicator {
                label: "loading",
                tick: self.tick,
            }
            .render(popup, buf);
        }

        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![Line::raw("")];

        match &self.metrics.data {
            Some(data) => {
                lines.push(Line::from(format!("  Total words       {}", data.total_words)));
                lines.push(Line::from(format!(
                    "  Incomplete        {}",
                    data.incomplete_words_count
                )));
                lines.push(Line::from(format!(
                    "  Complete          {}",
                    data.completed_words()
                )));
                lines.push(Line::raw(""));

                let max = data
                    .translations_per_language
                    .iter()
                    .map(|l| l.count)
                    .max()
                    .unwrap_or(0);
                for lang in &data.translations_per_language {
                    lines.push(Line::from(vec![
                        Span::raw(format!("  {:<6}", lang.language)),
                        Span::styled(bar(lang.count, max), Theme::centered_style()),
                        Span::raw(format!(" {}", lang.count)),
                    ]));
                }
            }
            None if self.metrics.status != MetricsStatus::Failed => {
                lines.push(Line::from(Span::styled("  Waiting for data…", dim)));
            }
            None => {}
        }

        if let Some(err) = &self.metrics.error {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(format!("  {err}"), Theme::error_style())));
        }

        lines.push(Line::raw(""));
        let fetched = self
            .metrics
            .fetched_at
            .map(|t| format!("  updated {}  ", t.format("%H:%M:%S")))
            .unwrap_or_else(|| "  ".into());
        lines.push(Line::from(Span::styled(
            format!("{fetched}r: refresh  Esc: close"),
            dim,
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Horizontal bar proportional to `count / max`.
fn bar(count: u64, max: u64) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

// ───────────────────────────────────────── helpers ───────────

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
