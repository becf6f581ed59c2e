//! Glyph measurement and cursor/selection coordinate resolution.
//!
//! This crate is the pure core of nodecaret: it maps between screen-space
//! pointer coordinates, glyph-local pixel positions, and character indices
//! for a single line of editable label text. Nothing here holds state across
//! calls; the stateful registry and dispatch loop live in the `nodecaret`
//! crate.
//!
//! The pieces, in the order a pointer click flows through them:
//!
//! - [`geometry`]: frame-tagged points and rectangles, and the transform
//!   from the absolute viewport frame into the glyph-local frame (clamping
//!   out-of-range pointer positions onto the run on the way).
//! - [`normalize`]: rewrites boundary whitespace so the rendering substrate
//!   cannot collapse it and shift every index.
//! - [`measure`]: the [`TextMeasurer`](measure::TextMeasurer) capability
//!   and its backends, producing a [`GlyphRun`](glyph::GlyphRun) of
//!   per-character boxes.
//! - [`resolver`]: index to position mapping and back, plus selection
//!   resolution, in the post-character index convention (index `i` is the
//!   boundary after character `i`; `-1` is the boundary before the first).
//! - [`motion`]: discrete cursor movement (steps, word skips, line jumps)
//!   for keyboard-driven hosts.
//!
//! # Example
//!
//! ```
//! use nodecaret_metrics::geometry::Point;
//! use nodecaret_metrics::measure::{FixedAdvanceMeasurer, TextMeasurer};
//! use nodecaret_metrics::normalize::normalize;
//! use nodecaret_metrics::resolver::{CursorIndex, resolve_position};
//!
//! let measurer = FixedAdvanceMeasurer::new(8.0, 16.0);
//! let run = measurer.measure(&normalize(" hi "), Point::ZERO).unwrap();
//!
//! // Cursor at the end of the text sits at the last glyph's end edge.
//! assert_eq!(resolve_position(CursorIndex::new(3), &run), 32.0);
//! ```

pub mod error;
pub mod geometry;
pub mod glyph;
pub mod measure;
pub mod motion;
pub mod normalize;
pub mod resolver;

pub use error::{MetricsError, MetricsResult};
pub use geometry::{Absolute, Frame, GlyphLocal, NodeLocal, Point, Rect, Size, to_glyph_local};
pub use glyph::{Glyph, GlyphRun};
pub use measure::{CosmicMeasurer, FixedAdvanceMeasurer, FontContext, FontContextConfig, TextMeasurer};
pub use normalize::normalize;
pub use resolver::{
    CursorIndex, ResolvedBound, ResolvedSelection, Selection, resolve_drag, resolve_index,
    resolve_position, resolve_selection,
};
