//! Ratatui widget that draws a [`TextReel`] as a clipped column of labels.
//!
//! The reel's offsets come out of the core in nominal pixels; here each
//! variant row height becomes one terminal row, so an offset of `k` rows
//! lands `k` lines above or below the centre line.  Anything that falls
//! outside the inner area is clipped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, Widget},
};

use crate::core::layout::ContainerSize;
use crate::core::reel::TextReel;

use super::entrance::Entrance;
use super::theme::Theme;

/// Terminal rows the reel window shows by default (centre plus one each side).
pub const DEFAULT_VISIBLE_ROWS: u16 = 3;

/// Container width in cells for a given glyph width.
pub fn cell_width(container: ContainerSize, char_width: u32) -> u16 {
    container.width.div_ceil(char_width.max(1)).min(u32::from(u16::MAX)) as u16
}

/// Whole-row shift for a pixel offset.
pub fn row_shift(offset_px: f64, row_height: u32) -> i32 {
    (offset_px / f64::from(row_height.max(1))).round() as i32
}

pub struct ReelWidget<'a> {
    reel: &'a TextReel,
    entrance: Option<&'a Entrance>,
    block: Option<Block<'a>>,
}

impl<'a> ReelWidget<'a> {
    pub fn new(reel: &'a TextReel) -> Self {
        Self {
            reel,
            entrance: None,
            block: None,
        }
    }

    pub fn entrance(mut self, entrance: &'a Entrance) -> Self {
        self.entrance = Some(entrance);
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for ReelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (progress, slide) = self
            .entrance
            .map_or((1.0, 0), |e| (e.progress(), i32::from(e.slide_rows())));
        let row_height = self.reel.container().height;
        let justify = self.reel.options().justify;
        let centre = i32::from(inner.y) + i32::from(inner.height / 2);

        for row in self.reel.rows() {
            let shift = row_shift(row.offset_px, row_height);
            let y = centre + shift + slide;
            if y < i32::from(inner.y) || y >= i32::from(inner.bottom()) {
                continue;
            }

            let base = if shift == 0 {
                Theme::centered_style()
            } else {
                Theme::passing_style()
            };
            let span = Span::styled(row.label, Theme::faded(base, progress));
            let width = span.width() as u32;
            let lead = justify.leading(u32::from(inner.width), width) as u16;
            buf.set_stringn(
                inner.x + lead,
                y as u16,
                &span.content,
                usize::from(inner.width - lead),
                span.style,
            );
        }
    }
}

/// One-line tooltip showing the canonical label under the reel.
pub struct TooltipLine<'a> {
    pub text: Option<&'a str>,
}

impl Widget for TooltipLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(text) = self.text else {
            return;
        };
        if area.width == 0 || area.height == 0 {
            return;
        }
        let label = format!("≈ {text}");
        let span = Span::styled(label, Theme::tooltip_style());
        let width = (span.width() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        buf.set_stringn(x, area.y, &span.content, usize::from(width), span.style);
    }
}
