//! Cursor and selection resolution.
//!
//! The bidirectional mapping between character indices and glyph-local pixel
//! positions. Indices follow the post-character convention throughout: index
//! `i` names the boundary immediately after character `i`, index `-1` the
//! boundary before the first character, and the valid range for a text of
//! `len` characters is `[-1, len - 1]`.
//!
//! [`resolve_position`] and [`resolve_index`] are inverses for every valid
//! index of a run:
//!
//! ```
//! use nodecaret_metrics::geometry::Point;
//! use nodecaret_metrics::measure::{FixedAdvanceMeasurer, TextMeasurer};
//! use nodecaret_metrics::resolver::{CursorIndex, resolve_index, resolve_position};
//!
//! let run = FixedAdvanceMeasurer::new(8.0, 16.0)
//!     .measure("tomato", Point::ZERO)
//!     .unwrap();
//! for i in -1..run.len() as i32 {
//!     let index = CursorIndex::new(i);
//!     let x = resolve_position(index, &run);
//!     assert_eq!(resolve_index(Point::new(x, 8.0), &run), index);
//! }
//! ```

use crate::geometry::{GlyphLocal, Point};
use crate::glyph::GlyphRun;

/// A cursor boundary position in the post-character convention.
///
/// The wrapped value is the index of the character the boundary follows; `-1`
/// is the boundary before the first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CursorIndex(i32);

impl CursorIndex {
    /// The boundary before the first character.
    pub const BEFORE_FIRST: Self = Self(-1);

    /// Create a cursor index. The value is not range-checked here; callers
    /// clamp against a concrete text via [`CursorIndex::clamp_for`].
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The boundary after the last character of a text of `len` characters.
    ///
    /// For the empty text this is the same as [`CursorIndex::BEFORE_FIRST`].
    #[inline]
    pub fn after_last(len: usize) -> Self {
        Self(len as i32 - 1)
    }

    /// The raw index value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Check if this is the boundary before the first character.
    #[inline]
    pub const fn is_before_first(self) -> bool {
        self.0 == -1
    }

    /// Snap an out-of-range index to the nearest valid boundary for a text of
    /// `len` characters. Out-of-range input is never an error; stale indices
    /// from a previous text simply land on the closest boundary of the
    /// current one.
    #[inline]
    pub fn clamp_for(self, len: usize) -> Self {
        Self(self.0.clamp(-1, len as i32 - 1))
    }
}

impl From<i32> for CursorIndex {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CursorIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map a cursor index to its glyph-local x position.
///
/// - empty run: the run's anchor x (where the empty-state cursor sits)
/// - the low boundary (`-1`): the start x of glyph 0
/// - any other index `i` (clamped into range): the end x of glyph `i`, which
///   is the boundary shared with glyph `i + 1`
///
/// Infallible: runs are finiteness-checked at construction, so the result is
/// always a real coordinate.
pub fn resolve_position(index: CursorIndex, run: &GlyphRun) -> f32 {
    if run.is_empty() {
        return run.bounding_box().left();
    }

    let index = index.clamp_for(run.len());
    if index.is_before_first() {
        run.glyphs()[0].start.x
    } else {
        run.glyphs()[index.value() as usize].end.x
    }
}

/// Map a glyph-local point to a cursor index via a hit test on the run.
///
/// A point at or beyond the run's left edge resolves to the low boundary, at
/// or beyond the right edge to the high boundary. Interior points snap to the
/// nearest boundary on their left: a point inside glyph `k`'s box resolves to
/// the boundary between glyphs `k - 1` and `k`.
pub fn resolve_index(point: Point<GlyphLocal>, run: &GlyphRun) -> CursorIndex {
    if run.is_empty() {
        return CursorIndex::BEFORE_FIRST;
    }

    let bbox = run.bounding_box();
    if point.x <= bbox.left() {
        return CursorIndex::BEFORE_FIRST;
    }
    if point.x >= bbox.right() {
        return CursorIndex::after_last(run.len());
    }

    for (k, glyph) in run.glyphs().iter().enumerate() {
        if point.x < glyph.end.x {
            return CursorIndex::new(k as i32 - 1);
        }
    }

    CursorIndex::after_last(run.len())
}

/// A normalized selection range: `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    start: CursorIndex,
    end: CursorIndex,
}

impl Selection {
    /// Build a selection from two boundaries in either order.
    pub fn new(a: CursorIndex, b: CursorIndex) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// The lower boundary.
    #[inline]
    pub fn start(&self) -> CursorIndex {
        self.start
    }

    /// The upper boundary.
    #[inline]
    pub fn end(&self) -> CursorIndex {
        self.end
    }

    /// Check if the selection is collapsed to a single boundary.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// A selection bound resolved to its pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBound {
    /// The boundary, clamped into the run's valid range.
    pub index: CursorIndex,
    /// The boundary's glyph-local x position.
    pub x: f32,
}

/// A selection with both bounds resolved against a glyph run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSelection {
    /// The lower bound.
    pub start: ResolvedBound,
    /// The upper bound.
    pub end: ResolvedBound,
    /// Horizontal extent between the two bounds.
    pub width: f32,
}

/// Resolve a selection from two boundaries in either order.
///
/// Both bounds are clamped into the run's valid range before resolution, the
/// pair is ordered, and the width is the distance between the two resolved x
/// positions.
pub fn resolve_selection(a: CursorIndex, b: CursorIndex, run: &GlyphRun) -> ResolvedSelection {
    let selection = Selection::new(a.clamp_for(run.len()), b.clamp_for(run.len()));

    let start_x = resolve_position(selection.start(), run);
    let end_x = resolve_position(selection.end(), run);

    ResolvedSelection {
        start: ResolvedBound {
            index: selection.start(),
            x: start_x,
        },
        end: ResolvedBound {
            index: selection.end(),
            x: end_x,
        },
        width: (end_x - start_x).abs(),
    }
}

/// Resolve a drag gesture: one fixed boundary, one moving glyph-local point.
///
/// The moving point is hit-tested into an index and the pair is resolved like
/// any other selection, so dragging leftwards past the anchor produces the
/// same ordered range as dragging rightwards onto it.
pub fn resolve_drag(
    fixed: CursorIndex,
    moving: Point<GlyphLocal>,
    run: &GlyphRun,
) -> ResolvedSelection {
    let moving_index = resolve_index(moving, run);
    resolve_selection(fixed, moving_index, run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Glyph;

    // An 8px-advance, 16px-tall run, like the fixed measurer produces.
    fn run(text: &str) -> GlyphRun {
        let glyphs = text
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                Glyph::new(
                    ch,
                    Point::new(i as f32 * 8.0, 0.0),
                    Point::new((i + 1) as f32 * 8.0, 16.0),
                )
            })
            .collect();
        GlyphRun::from_glyphs(glyphs).unwrap()
    }

    #[test]
    fn position_for_low_boundary_is_first_glyph_start() {
        let run = run("tomato");
        assert_eq!(resolve_position(CursorIndex::BEFORE_FIRST, &run), 0.0);
    }

    #[test]
    fn position_for_high_boundary_is_last_glyph_end() {
        let run = run("tomato");
        assert_eq!(resolve_position(CursorIndex::new(5), &run), 48.0);
    }

    #[test]
    fn interior_position_is_shared_glyph_edge() {
        let run = run("tomato");
        // Boundary after glyph 2 == start of glyph 3.
        assert_eq!(resolve_position(CursorIndex::new(2), &run), 24.0);
        assert_eq!(run.glyphs()[3].start.x, 24.0);
    }

    #[test]
    fn out_of_range_indices_clamp_instead_of_failing() {
        let run = run("tomato");
        assert_eq!(resolve_position(CursorIndex::new(-7), &run), 0.0);
        assert_eq!(resolve_position(CursorIndex::new(100), &run), 48.0);
    }

    #[test]
    fn empty_run_resolves_to_its_anchor() {
        let empty = GlyphRun::empty(Point::new(12.5, 0.0));
        for i in [-5, -1, 0, 3] {
            assert_eq!(resolve_position(CursorIndex::new(i), &empty), 12.5);
        }
        assert_eq!(
            resolve_index(Point::new(99.0, 0.0), &empty),
            CursorIndex::BEFORE_FIRST
        );
    }

    #[test]
    fn inverse_law_holds_for_all_boundaries() {
        let run = run("  this is a tomato  ");
        for i in -1..run.len() as i32 {
            let index = CursorIndex::new(i);
            let x = resolve_position(index, &run);
            assert_eq!(resolve_index(Point::new(x, 8.0), &run), index, "index {i}");
        }
    }

    #[test]
    fn positions_are_monotonic_in_the_index() {
        let run = run("  this is a tomato  ");
        let mut prev = f32::NEG_INFINITY;
        for i in -1..run.len() as i32 {
            let x = resolve_position(CursorIndex::new(i), &run);
            assert!(x >= prev, "index {i}: {x} < {prev}");
            prev = x;
        }
    }

    #[test]
    fn edge_points_resolve_to_the_boundaries() {
        let run = run("tomato");
        assert_eq!(
            resolve_index(Point::new(0.0, 8.0), &run),
            CursorIndex::BEFORE_FIRST
        );
        assert_eq!(resolve_index(Point::new(48.0, 8.0), &run), CursorIndex::new(5));
        // Beyond the edges behaves the same.
        assert_eq!(
            resolve_index(Point::new(-3.0, 8.0), &run),
            CursorIndex::BEFORE_FIRST
        );
        assert_eq!(resolve_index(Point::new(60.0, 8.0), &run), CursorIndex::new(5));
    }

    #[test]
    fn interior_points_snap_to_the_boundary_on_their_left() {
        let run = run("tomato");
        // 30% of the way between the end of glyph 2 and the end of glyph 3,
        // inside glyph 3's box: the cursor lands after glyph 2, not after
        // glyph 3.
        let x = 24.0 + 0.3 * 8.0;
        assert_eq!(resolve_index(Point::new(x, 8.0), &run), CursorIndex::new(2));

        // Even deep into the glyph, still the left boundary.
        let x = 24.0 + 0.9 * 8.0;
        assert_eq!(resolve_index(Point::new(x, 8.0), &run), CursorIndex::new(2));
    }

    #[test]
    fn selection_is_ordered_regardless_of_argument_order() {
        let run = run("tomato");
        let forward = resolve_selection(CursorIndex::new(1), CursorIndex::new(4), &run);
        let backward = resolve_selection(CursorIndex::new(4), CursorIndex::new(1), &run);
        assert_eq!(forward, backward);
        assert_eq!(forward.start.index, CursorIndex::new(1));
        assert_eq!(forward.end.index, CursorIndex::new(4));
    }

    #[test]
    fn selection_width_is_distance_between_bounds() {
        let run = run("tomato");
        let sel = resolve_selection(CursorIndex::new(1), CursorIndex::new(4), &run);
        assert_eq!(sel.start.x, 16.0);
        assert_eq!(sel.end.x, 40.0);
        assert_eq!(sel.width, 24.0);
    }

    #[test]
    fn collapsed_selection_has_zero_width() {
        let run = run("tomato");
        let sel = resolve_selection(CursorIndex::new(3), CursorIndex::new(3), &run);
        assert_eq!(sel.width, 0.0);
        assert!(Selection::new(CursorIndex::new(3), CursorIndex::new(3)).is_collapsed());
    }

    #[test]
    fn selection_bounds_are_clamped_to_the_run() {
        let run = run("abc");
        let sel = resolve_selection(CursorIndex::new(-9), CursorIndex::new(9), &run);
        assert_eq!(sel.start.index, CursorIndex::BEFORE_FIRST);
        assert_eq!(sel.end.index, CursorIndex::new(2));
    }

    #[test]
    fn drag_resolves_the_moving_point_then_orders() {
        let run = run("this is a tomato");

        // Drag from boundary 2 rightwards to a point exactly on the edge
        // after glyph 6.
        let sel = resolve_drag(CursorIndex::new(2), Point::new(56.0, 8.0), &run);
        assert_eq!(sel.start.index, CursorIndex::new(2));
        assert_eq!(sel.end.index, CursorIndex::new(6));
        assert_eq!(sel.width, 32.0);

        // Dragging leftwards past the anchor produces the same ordered range.
        let sel = resolve_drag(CursorIndex::new(6), Point::new(24.0, 8.0), &run);
        assert_eq!(sel.start.index, CursorIndex::new(2));
        assert_eq!(sel.end.index, CursorIndex::new(6));
    }

    #[test]
    fn clamp_for_snaps_to_nearest_boundary() {
        assert_eq!(CursorIndex::new(-4).clamp_for(3), CursorIndex::BEFORE_FIRST);
        assert_eq!(CursorIndex::new(7).clamp_for(3), CursorIndex::new(2));
        assert_eq!(CursorIndex::new(1).clamp_for(3), CursorIndex::new(1));
        // Empty text has a single valid boundary.
        assert_eq!(CursorIndex::new(0).clamp_for(0), CursorIndex::BEFORE_FIRST);
        assert_eq!(CursorIndex::after_last(0), CursorIndex::BEFORE_FIRST);
    }
}
