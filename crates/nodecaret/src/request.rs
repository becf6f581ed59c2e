//! Inbound requests from the host application.
//!
//! The cursor-or-selection choice is a tagged enum decided once at the
//! boundary: a host speaking a looser protocol (optional `cursor` and
//! `selection` fields on one record) converts through
//! [`Placement::from_parts`], and everything past that point matches on
//! [`Placement`] instead of re-checking which field was set.

use nodecaret_metrics::geometry::{Absolute, Point};
use nodecaret_metrics::resolver::CursorIndex;

use crate::error::{EngineError, EngineResult};
use crate::registry::NodeId;

/// Where the caller wants the cursor or selection placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// A single cursor boundary.
    Cursor(CursorIndex),
    /// A selection between two boundaries, in either order; resolution
    /// normalizes them.
    Selection { start: CursorIndex, end: CursorIndex },
}

impl Placement {
    /// Decide the placement from a loosely-typed request shape.
    ///
    /// Exactly one of the two parts must be present; neither or both fail
    /// with [`EngineError::InvalidRequest`].
    pub fn from_parts(
        cursor: Option<CursorIndex>,
        selection: Option<(CursorIndex, CursorIndex)>,
    ) -> EngineResult<Self> {
        match (cursor, selection) {
            (Some(index), None) => Ok(Placement::Cursor(index)),
            (None, Some((start, end))) => Ok(Placement::Selection { start, end }),
            _ => Err(EngineError::InvalidRequest),
        }
    }
}

/// A request from the host application.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Re-measure a node's text and place a cursor or selection in it.
    RecalculateMetrics {
        node_id: NodeId,
        text: String,
        placement: Placement,
    },
    /// Resolve a pointer position (absolute viewport frame) to a cursor.
    ResolveCursorFromPoint {
        node_id: NodeId,
        point: Point<Absolute>,
    },
    /// Resolve a drag gesture from a fixed boundary to a pointer position.
    ResolveSelectionFromDrag {
        node_id: NodeId,
        fixed_index: CursorIndex,
        point: Point<Absolute>,
    },
    /// Acquire the global keyboard listener for a node.
    StartKeyListening { node_id: NodeId },
    /// Release the global keyboard listener.
    StopKeyListening,
}
