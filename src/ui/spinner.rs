//! Braille spinner pinned to the right end of a popup's top border.

use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};

use super::theme::Theme;

const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Frame shown on a given idle tick.
pub fn frame_at(tick: u64) -> char {
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}

pub struct LoadingIndicator<'a> {
    pub label: &'a str,
    pub tick: u64,
}

impl Widget for LoadingIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span = Span::styled(
            format!(" {} {} ", frame_at(self.tick), self.label),
            Theme::busy_style(),
        );
        let width = span.width() as u16;
        // Keep the corner glyph plus one border cell visible.
        if area.height == 0 || area.width < width + 2 {
            return;
        }
        let x = area.right() - width - 2;
        buf.set_span(x, area.y, &span, width);
    }
}
