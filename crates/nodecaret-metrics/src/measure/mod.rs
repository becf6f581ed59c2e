//! Text measurement backends.
//!
//! A [`TextMeasurer`] turns a text string into a [`GlyphRun`] of
//! per-character boxes in the glyph-local frame. Two backends are provided:
//! [`FixedAdvanceMeasurer`] lays characters out on a synthetic monospace
//! grid and is fully deterministic, which makes it the backend of choice for
//! tests and headless hosts; [`CosmicMeasurer`] shapes real fonts through
//! cosmic-text.

mod cosmic;

pub use cosmic::{CosmicMeasurer, FontContext, FontContextConfig};

use crate::error::{MetricsError, MetricsResult};
use crate::geometry::{GlyphLocal, Point};
use crate::glyph::{Glyph, GlyphRun};

/// The measurement capability: per-character start/end boxes for a text.
pub trait TextMeasurer {
    /// Measure `text`, anchoring the run at `origin`.
    ///
    /// For empty text this returns the empty run (still carrying a bounding
    /// box at `origin`, so an empty-state cursor can be positioned). For
    /// non-empty text the run has exactly one glyph per character; a backend
    /// that cannot guarantee that fails with
    /// [`MetricsError::LengthMismatch`], and any non-finite coordinate fails
    /// with [`MetricsError::NonFiniteCoordinate`].
    fn measure(&self, text: &str, origin: Point<GlyphLocal>) -> MetricsResult<GlyphRun>;
}

/// A deterministic monospace measurement backend.
///
/// Every character occupies a cell of `advance` by `height`, laid out left
/// to right from the origin. No font data is involved, so measurements are
/// identical on every platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    advance: f32,
    height: f32,
}

impl FixedAdvanceMeasurer {
    /// Create a measurer with the given cell advance and height.
    pub fn new(advance: f32, height: f32) -> Self {
        Self { advance, height }
    }

    /// The horizontal advance per character.
    #[inline]
    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// The cell height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, origin: Point<GlyphLocal>) -> MetricsResult<GlyphRun> {
        if text.is_empty() {
            return Ok(GlyphRun::empty(origin));
        }

        if !self.advance.is_finite() || !self.height.is_finite() {
            return Err(MetricsError::NonFiniteCoordinate { index: 0 });
        }

        let glyphs = text
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                Glyph::new(
                    ch,
                    Point::new(origin.x + i as f32 * self.advance, origin.y),
                    Point::new(origin.x + (i + 1) as f32 * self.advance, origin.y + self.height),
                )
            })
            .collect();

        GlyphRun::from_glyphs(glyphs)
    }
}
