//! Per-character glyph boxes and the glyph run.
//!
//! A [`GlyphRun`] is produced fresh by a measurement backend on every text
//! change and is immutable from then on. It holds exactly one [`Glyph`] per
//! character of the measured text, each carrying the start and end corners of
//! its box in the glyph-local frame.

use crate::error::{MetricsError, MetricsResult};
use crate::geometry::{GlyphLocal, Point, Rect};

/// The measured box of a single character, in glyph-local coordinates.
///
/// `start` is the top-left corner of the character cell and `end` the
/// bottom-right. Glyphs are never mutated after measurement; a new run is
/// built instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// The character this box belongs to.
    pub ch: char,
    /// Start corner of the character cell.
    pub start: Point<GlyphLocal>,
    /// End corner of the character cell.
    pub end: Point<GlyphLocal>,
}

impl Glyph {
    /// Create a new glyph box.
    pub fn new(ch: char, start: Point<GlyphLocal>, end: Point<GlyphLocal>) -> Self {
        Self { ch, start, end }
    }

    /// Horizontal extent of the character cell.
    #[inline]
    pub fn width(&self) -> f32 {
        self.end.x - self.start.x
    }

    /// Check if an x coordinate falls within this glyph's horizontal bounds.
    ///
    /// The interval is half-open: a point exactly on the shared edge between
    /// two glyphs belongs to the right-hand one.
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.start.x && x < self.end.x
    }
}

/// An ordered sequence of glyph boxes for one measured text.
///
/// The run's length always equals the character count of the text it was
/// measured from. The empty run is a valid, distinct state: it has no glyphs
/// but still carries a bounding box anchored at the measurement origin, so an
/// empty-state cursor can be positioned.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    glyphs: Vec<Glyph>,
    bbox: Rect<GlyphLocal>,
}

impl GlyphRun {
    /// Create the empty run, anchored at `origin` with zero size.
    pub fn empty(origin: Point<GlyphLocal>) -> Self {
        Self {
            glyphs: Vec::new(),
            bbox: Rect {
                origin,
                size: crate::geometry::Size::ZERO,
            },
        }
    }

    /// Build a run from measured glyph boxes.
    ///
    /// Every coordinate is checked for finiteness; a NaN or infinite value
    /// fails with [`MetricsError::NonFiniteCoordinate`] rather than producing
    /// a run that would later resolve to a garbage pixel position. The
    /// bounding box is derived from the glyph extents.
    pub fn from_glyphs(glyphs: Vec<Glyph>) -> MetricsResult<Self> {
        let Some(first) = glyphs.first() else {
            return Ok(Self::empty(Point::ZERO));
        };

        for (index, glyph) in glyphs.iter().enumerate() {
            if !glyph.start.is_finite() || !glyph.end.is_finite() {
                return Err(MetricsError::NonFiniteCoordinate { index });
            }
        }

        let mut min = first.start;
        let mut max = first.end;
        for glyph in &glyphs {
            min = Point::new(min.x.min(glyph.start.x), min.y.min(glyph.start.y));
            max = Point::new(max.x.max(glyph.end.x), max.y.max(glyph.end.y));
        }

        Ok(Self {
            glyphs,
            bbox: Rect::from_corners(min, max),
        })
    }

    /// Number of glyphs (equals the measured text's character count).
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if this is the empty run.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The glyph boxes, in character order.
    #[inline]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// The run's bounding box in the glyph-local frame.
    ///
    /// Recomputed with every measurement; for the empty run it is anchored at
    /// the measurement origin with zero size.
    #[inline]
    pub fn bounding_box(&self) -> Rect<GlyphLocal> {
        self.bbox
    }

    /// First glyph of the run, if any.
    #[inline]
    pub fn first(&self) -> Option<&Glyph> {
        self.glyphs.first()
    }

    /// Last glyph of the run, if any.
    #[inline]
    pub fn last(&self) -> Option<&Glyph> {
        self.glyphs.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(ch: char, x: f32, w: f32) -> Glyph {
        Glyph::new(ch, Point::new(x, 0.0), Point::new(x + w, 16.0))
    }

    #[test]
    fn run_length_matches_glyph_count() {
        let run = GlyphRun::from_glyphs(vec![boxed('h', 0.0, 8.0), boxed('i', 8.0, 8.0)]).unwrap();
        assert_eq!(run.len(), 2);
        assert!(!run.is_empty());
    }

    #[test]
    fn bounding_box_spans_all_glyphs() {
        let run = GlyphRun::from_glyphs(vec![
            boxed('a', 0.0, 8.0),
            boxed('b', 8.0, 8.0),
            boxed('c', 16.0, 8.0),
        ])
        .unwrap();

        let bbox = run.bounding_box();
        assert_eq!(bbox.left(), 0.0);
        assert_eq!(bbox.right(), 24.0);
        assert_eq!(bbox.top(), 0.0);
        assert_eq!(bbox.bottom(), 16.0);
    }

    #[test]
    fn empty_run_keeps_its_origin() {
        let run = GlyphRun::empty(Point::new(5.0, 3.0));
        assert!(run.is_empty());
        assert_eq!(run.len(), 0);
        assert_eq!(run.bounding_box().left(), 5.0);
        assert_eq!(run.bounding_box().top(), 3.0);
        assert!(run.bounding_box().is_empty());
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let glyphs = vec![
            boxed('a', 0.0, 8.0),
            Glyph::new('b', Point::new(8.0, 0.0), Point::new(f32::NAN, 16.0)),
        ];
        assert_eq!(
            GlyphRun::from_glyphs(glyphs),
            Err(MetricsError::NonFiniteCoordinate { index: 1 })
        );

        let glyphs = vec![Glyph::new(
            'a',
            Point::new(f32::INFINITY, 0.0),
            Point::new(8.0, 16.0),
        )];
        assert_eq!(
            GlyphRun::from_glyphs(glyphs),
            Err(MetricsError::NonFiniteCoordinate { index: 0 })
        );
    }

    #[test]
    fn glyph_contains_x_is_half_open() {
        let glyph = boxed('a', 8.0, 8.0);
        assert!(glyph.contains_x(8.0));
        assert!(glyph.contains_x(15.9));
        assert!(!glyph.contains_x(16.0));
        assert_eq!(glyph.width(), 8.0);
    }
}
