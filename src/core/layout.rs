//! Reel geometry: the size-variant table and container measurement.
//!
//! All lengths here are in nominal pixels.  The terminal renderer divides
//! them back down to cells; keeping pixels in the core keeps the offset
//! math identical to a graphical host.

use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// Horizontal slack added to the measured label width.
pub const WIDTH_MARGIN: u32 = 16;

// ───────────────────────────────────────── size variants ─────

/// Discrete presentation sizes, from headline down to caption text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeVariant {
    H1,
    H2,
    #[default]
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Caption,
}

/// Fixed per-variant metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantMetrics {
    /// Average glyph width used to estimate label width.
    pub char_width: u32,
    /// Height of one reel row (and of the clipped container).
    pub row_height: u32,
}

impl SizeVariant {
    pub const ALL: &[SizeVariant] = &[
        SizeVariant::H1,
        SizeVariant::H2,
        SizeVariant::H3,
        SizeVariant::H4,
        SizeVariant::H5,
        SizeVariant::H6,
        SizeVariant::Subtitle1,
        SizeVariant::Subtitle2,
        SizeVariant::Body1,
        SizeVariant::Body2,
        SizeVariant::Caption,
    ];

    pub fn metrics(self) -> VariantMetrics {
        let (char_width, row_height) = match self {
            SizeVariant::H1 => (52, 112),
            SizeVariant::H2 => (34, 72),
            SizeVariant::H3 => (27, 56),
            SizeVariant::H4 => (19, 42),
            SizeVariant::H5 => (14, 32),
            SizeVariant::H6 => (12, 32),
            SizeVariant::Subtitle1 => (9, 28),
            SizeVariant::Subtitle2 => (8, 22),
            SizeVariant::Body1 => (9, 24),
            SizeVariant::Body2 => (8, 20),
            SizeVariant::Caption => (7, 20),
        };
        VariantMetrics {
            char_width,
            row_height,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeVariant::H1 => "h1",
            SizeVariant::H2 => "h2",
            SizeVariant::H3 => "h3",
            SizeVariant::H4 => "h4",
            SizeVariant::H5 => "h5",
            SizeVariant::H6 => "h6",
            SizeVariant::Subtitle1 => "subtitle1",
            SizeVariant::Subtitle2 => "subtitle2",
            SizeVariant::Body1 => "body1",
            SizeVariant::Body2 => "body2",
            SizeVariant::Caption => "caption",
        }
    }

    /// The next variant in [`SizeVariant::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl FromStr for SizeVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label() == wanted)
            .ok_or_else(|| ParseError::SizeVariant(s.to_string()))
    }
}

impl fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ───────────────────────────────────────── justification ─────

/// Where a label sits horizontally inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

impl Justify {
    /// Leading space for content of `content` width inside `container`.
    pub fn leading(self, container: u32, content: u32) -> u32 {
        let slack = container.saturating_sub(content);
        match self {
            Justify::Left => 0,
            Justify::Center => slack / 2,
            Justify::Right => slack,
        }
    }
}

impl FromStr for Justify {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "start" | "flex-start" => Ok(Justify::Left),
            "center" | "centre" => Ok(Justify::Center),
            "right" | "end" | "flex-end" => Ok(Justify::Right),
            _ => Err(ParseError::Justify(s.to_string())),
        }
    }
}

// ───────────────────────────────────────── measurement ───────

/// Fixed-size, overflow-clipped box the reel is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

/// Measure the container for a set of labels.
///
/// Width is the explicit override when given, otherwise the longest label's
/// character count times the variant's average glyph width plus
/// [`WIDTH_MARGIN`].  Height is always the variant's row height.
pub fn container_size<S: AsRef<str>>(
    labels: &[S],
    variant: SizeVariant,
    width_override: Option<u32>,
) -> ContainerSize {
    let metrics = variant.metrics();
    let width = width_override.unwrap_or_else(|| {
        let longest = labels
            .iter()
            .map(|l| l.as_ref().chars().count() as u32)
            .max()
            .unwrap_or(0);
        longest * metrics.char_width + WIDTH_MARGIN
    });
    ContainerSize {
        width,
        height: metrics.row_height,
    }
}
