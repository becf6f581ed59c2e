//! Outbound events to the host application.

use nodecaret_metrics::resolver::CursorIndex;

use crate::keyboard::KeyStroke;
use crate::registry::NodeId;

/// A resolved cursor or selection, with pixel positions.
///
/// Vertical convention: the origin sits at the glyph run's vertical center
/// with y growing upward, so a 16-unit-tall run reports its cursor at
/// `y == -8`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorLocation {
    /// A single cursor boundary.
    Cursor {
        /// The boundary, clamped to the measured text.
        index: CursorIndex,
        /// Glyph-local x position of the boundary.
        x: f32,
        /// Vertical anchor (negative half the run height).
        y: f32,
    },
    /// A selection between two resolved boundaries.
    Selection {
        start_index: CursorIndex,
        start_x: f32,
        end_index: CursorIndex,
        end_x: f32,
        /// Horizontal extent between the bounds.
        width: f32,
        /// Vertical anchor (negative half the run height).
        y: f32,
    },
}

/// Fresh metrics for one widget after a text or placement change.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRecalculated {
    /// The widget the metrics belong to.
    pub node_id: NodeId,
    /// Width of the measured run's bounding box.
    pub width: f32,
    /// Height of the measured run's bounding box.
    pub height: f32,
    /// The text the metrics were computed for (as the host sent it, before
    /// normalization).
    pub text: String,
    /// The resolved cursor or selection.
    pub location: CursorLocation,
}

/// An event the engine delivers to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// First measurement of a newly created widget has completed.
    Init { node_id: NodeId },
    /// A metrics request finished; the widget's cursor/selection overlay and
    /// bounding box should be refreshed.
    MetricsRecalculated(MetricsRecalculated),
    /// A keyboard stroke the active listener's editor wants.
    Key { node_id: NodeId, stroke: KeyStroke },
}

/// The host's event receiver.
///
/// Dispatch happens synchronously inside request processing; a sink must not
/// call back into the engine.
pub trait EventSink {
    /// Deliver one event.
    fn dispatch(&mut self, event: EditorEvent);
}

/// Any `FnMut(EditorEvent)` closure is a sink.
impl<F: FnMut(EditorEvent)> EventSink for F {
    fn dispatch(&mut self, event: EditorEvent) {
        self(event);
    }
}
