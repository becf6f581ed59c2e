//! Frame-tagged geometry primitives.
//!
//! Cursor resolution juggles three coordinate frames: the absolute viewport
//! frame of the pointer-event source, the frame of an individual node, and
//! the glyph-local frame of a text run. Mixing them up produces cursors that
//! land one node over, so points and rectangles carry their frame in the
//! type: a [`Point<Absolute>`] cannot be handed to a function expecting a
//! [`Point<GlyphLocal>`] without going through an explicit transform.
//!
//! # Example
//!
//! ```
//! use nodecaret_metrics::geometry::{Absolute, GlyphLocal, Point, Rect, Size, to_glyph_local};
//!
//! let viewport = Rect::<Absolute>::new(100.0, 50.0, 80.0, 16.0);
//! let local = Rect::<GlyphLocal>::new(0.0, 0.0, 80.0, 16.0);
//!
//! // A click far to the right of the run snaps to its right edge.
//! let click = Point::<Absolute>::new(500.0, 58.0);
//! let local_point = to_glyph_local(click, viewport, local);
//! assert_eq!(local_point, Point::new(80.0, 8.0));
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A coordinate frame marker.
///
/// Implemented only by the three marker types in this module; the trait is
/// sealed so downstream code cannot invent frames the transforms don't know
/// about.
pub trait Frame: Copy + Clone + Eq + fmt::Debug + private::Sealed {
    /// Human-readable frame name, used in `Debug` output.
    const NAME: &'static str;
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Absolute {}
    impl Sealed for super::NodeLocal {}
    impl Sealed for super::GlyphLocal {}
}

/// The absolute viewport frame: the coordinate space pointer events arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absolute {}

impl Frame for Absolute {
    const NAME: &'static str = "absolute";
}

/// The frame of a single node: origin at the node widget's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLocal {}

impl Frame for NodeLocal {
    const NAME: &'static str = "node-local";
}

/// The glyph-local frame: origin at the text run's own rendering origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphLocal {}

impl Frame for GlyphLocal {
    const NAME: &'static str = "glyph-local";
}

/// A point in 2D space, tagged with its coordinate frame.
#[derive(Clone, Copy, PartialEq)]
pub struct Point<F: Frame> {
    pub x: f32,
    pub y: f32,
    _frame: PhantomData<F>,
}

impl<F: Frame> Point<F> {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            _frame: PhantomData,
        }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Check that both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Frame> fmt::Debug for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point<{}>({}, {})", F::NAME, self.x, self.y)
    }
}

impl<F: Frame> From<(f32, f32)> for Point<F> {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A size in 2D space (width and height). Sizes are frame-independent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size, tagged with its coordinate frame.
#[derive(Clone, Copy, PartialEq)]
pub struct Rect<F: Frame> {
    pub origin: Point<F>,
    pub size: Size,
}

impl<F: Frame> Rect<F> {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle from two corners (min and max points).
    #[inline]
    pub fn from_corners(min: Point<F>, max: Point<F>) -> Self {
        Self {
            origin: min,
            size: Size {
                width: max.x - min.x,
                height: max.y - min.y,
            },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point<F> {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point<F>) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Snap a point to the rectangle, each axis independently.
    ///
    /// Coordinates outside the rectangle move to the nearest edge; coordinates
    /// already inside are unchanged. A point past the top-right corner ends up
    /// exactly on that corner.
    pub fn clamp(&self, point: Point<F>) -> Point<F> {
        let x = if point.x > self.right() {
            self.right()
        } else if point.x < self.left() {
            self.left()
        } else {
            point.x
        };

        let y = if point.y < self.top() {
            self.top()
        } else if point.y > self.bottom() {
            self.bottom()
        } else {
            point.y
        };

        Point::new(x, y)
    }
}

impl<F: Frame> fmt::Debug for Rect<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect<{}>({}, {}, {}x{})",
            F::NAME,
            self.origin.x,
            self.origin.y,
            self.size.width,
            self.size.height
        )
    }
}

/// Express an absolute point relative to a node's origin.
#[inline]
pub fn to_node_local(point: Point<Absolute>, node: Rect<Absolute>) -> Point<NodeLocal> {
    Point::new(point.x - node.origin.x, point.y - node.origin.y)
}

/// Express a node-local point in the glyph-local frame of a text run whose
/// glyph-local bounding box is `local`.
#[inline]
pub fn node_to_glyph_local(point: Point<NodeLocal>, local: Rect<GlyphLocal>) -> Point<GlyphLocal> {
    Point::new(point.x + local.origin.x, point.y + local.origin.y)
}

/// Convert an absolute pointer position into the glyph-local frame.
///
/// The point is first clamped to the run's viewport bounding box and only
/// then translated. The order matters: the clamp has to happen in the frame
/// the bounding box was measured in, otherwise points just past the run's
/// edges resolve to positions inside a neighboring glyph instead of snapping
/// onto the boundary.
pub fn to_glyph_local(
    point: Point<Absolute>,
    viewport: Rect<Absolute>,
    local: Rect<GlyphLocal>,
) -> Point<GlyphLocal> {
    let clamped = viewport.clamp(point);
    node_to_glyph_local(to_node_local(clamped, viewport), local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_snaps_each_axis_independently() {
        let rect = Rect::<Absolute>::new(10.0, 20.0, 100.0, 50.0);

        // Inside: unchanged.
        assert_eq!(rect.clamp(Point::new(50.0, 40.0)), Point::new(50.0, 40.0));

        // Left of the box but vertically inside: only x snaps.
        assert_eq!(rect.clamp(Point::new(0.0, 40.0)), Point::new(10.0, 40.0));

        // Past the bottom-right corner: both snap.
        assert_eq!(
            rect.clamp(Point::new(500.0, 500.0)),
            Point::new(110.0, 70.0)
        );

        // Above the box: only y snaps.
        assert_eq!(rect.clamp(Point::new(50.0, 0.0)), Point::new(50.0, 20.0));
    }

    #[test]
    fn clamp_keeps_edge_points_on_the_edge() {
        let rect = Rect::<Absolute>::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.clamp(Point::new(10.0, 20.0)), Point::new(10.0, 20.0));
        assert_eq!(rect.clamp(Point::new(110.0, 70.0)), Point::new(110.0, 70.0));
    }

    #[test]
    fn glyph_local_transform_translates_by_frame_offset() {
        // Viewport box at (100, 50); run's own origin at (4, 2) in its frame.
        let viewport = Rect::<Absolute>::new(100.0, 50.0, 80.0, 16.0);
        let local = Rect::<GlyphLocal>::new(4.0, 2.0, 80.0, 16.0);

        let p = to_glyph_local(Point::new(120.0, 58.0), viewport, local);
        assert_eq!(p, Point::new(24.0, 10.0));
    }

    #[test]
    fn clamp_happens_before_translation() {
        // A point left of the run. Clamping in absolute space lands it on the
        // run's left edge, which translates to the glyph-local left edge. The
        // reversed order (translate first, then clamp against the local box)
        // would give the same x here but breaks once the frames have different
        // origins, so pin the exact edge value.
        let viewport = Rect::<Absolute>::new(100.0, 50.0, 80.0, 16.0);
        let local = Rect::<GlyphLocal>::new(4.0, 2.0, 80.0, 16.0);

        let p = to_glyph_local(Point::new(-50.0, 58.0), viewport, local);
        assert_eq!(p.x, local.left());

        let q = to_glyph_local(Point::new(1000.0, 58.0), viewport, local);
        assert_eq!(q.x, local.right());
    }

    #[test]
    fn node_local_round_trip() {
        let node = Rect::<Absolute>::new(30.0, 40.0, 10.0, 10.0);
        let p = to_node_local(Point::new(35.0, 42.0), node);
        assert_eq!(p, Point::new(5.0, 2.0));

        let local = Rect::<GlyphLocal>::new(1.0, 1.0, 10.0, 10.0);
        assert_eq!(node_to_glyph_local(p, local), Point::new(6.0, 3.0));
    }

    #[test]
    fn point_finiteness() {
        assert!(Point::<GlyphLocal>::new(1.0, 2.0).is_finite());
        assert!(!Point::<GlyphLocal>::new(f32::NAN, 2.0).is_finite());
        assert!(!Point::<GlyphLocal>::new(1.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn rect_accessors() {
        let rect = Rect::<GlyphLocal>::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.left(), 1.0);
        assert_eq!(rect.top(), 2.0);
        assert_eq!(rect.right(), 4.0);
        assert_eq!(rect.bottom(), 6.0);
        assert_eq!(rect.center(), Point::new(2.5, 4.0));
        assert!(!rect.is_empty());
        assert!(Rect::<GlyphLocal>::ZERO.is_empty());
    }
}
