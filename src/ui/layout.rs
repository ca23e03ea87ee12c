//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Primary screen layout: the framed reel centred on screen, a tooltip line
/// under it, and a bottom status bar.
pub struct AppLayout {
    pub reel_area: Rect,
    pub tooltip_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// `reel_width` and `reel_height` are the framed reel's size in cells
    /// (border included).
    pub fn from_area(area: Rect, reel_width: u16, reel_height: u16) -> Self {
        let [body, status_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(reel_height + 1), // reel + tooltip
                Constraint::Length(1),            // status bar
            ])
            .areas(area);

        let [reel_column, tooltip_column] = Layout::vertical([
            Constraint::Length(reel_height),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(body);

        let centre = |r: Rect| {
            let [c] = Layout::horizontal([Constraint::Length(reel_width)])
                .flex(Flex::Center)
                .areas(r);
            c
        };

        Self {
            reel_area: centre(reel_column),
            tooltip_area: centre(tooltip_column),
            status_area,
        }
    }
}
