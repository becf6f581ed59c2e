//! Live editor handles and their registry.
//!
//! The host's view layer reports structural changes (a node with an
//! editable label appeared or disappeared) through explicit lifecycle
//! calls. Each live node gets an [`EditorHandle`] holding the geometry and
//! text the engine needs plus a FIFO queue of pending updates. The
//! [`EditorRegistry`] is the only shared mutable state in the system; it is
//! owned by the engine and touched from a single event handler at a time.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use tracing::{debug, warn};

use nodecaret_metrics::geometry::{Absolute, Point};
use nodecaret_metrics::resolver::CursorIndex;

use crate::error::{EngineError, EngineResult};
use crate::request::Placement;

/// Stable identifier of a node in the host's graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A unit of queued work for one editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Re-measure and place a cursor or selection in the given text.
    Metrics { text: String, placement: Placement },
    /// Resolve an absolute pointer position to a cursor placement.
    CursorFromPoint { point: Point<Absolute> },
    /// Resolve a drag gesture to a selection placement.
    SelectionFromDrag {
        fixed_index: CursorIndex,
        point: Point<Absolute>,
    },
}

/// Per-widget state for one live text editor.
#[derive(Debug)]
pub struct EditorHandle {
    node_id: NodeId,
    origin: Point<Absolute>,
    text: String,
    initialized: bool,
    pending: VecDeque<Update>,
}

impl EditorHandle {
    fn new(node_id: NodeId, origin: Point<Absolute>) -> Self {
        Self {
            node_id,
            origin,
            text: String::new(),
            initialized: false,
            pending: VecDeque::new(),
        }
    }

    /// The node this handle belongs to.
    #[inline]
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// The widget's origin in the absolute viewport frame.
    #[inline]
    pub fn origin(&self) -> Point<Absolute> {
        self.origin
    }

    /// Update the widget's absolute origin (the host moved the node).
    pub fn set_origin(&mut self, origin: Point<Absolute>) {
        self.origin = origin;
    }

    /// The text most recently pushed through a metrics update.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Mark the handle initialized; returns true on the first call.
    pub(crate) fn mark_initialized(&mut self) -> bool {
        !std::mem::replace(&mut self.initialized, true)
    }

    /// Append an update to the pending queue.
    pub(crate) fn enqueue(&mut self, update: Update) {
        self.pending.push_back(update);
    }

    /// Take the oldest pending update.
    pub(crate) fn pop_pending(&mut self) -> Option<Update> {
        self.pending.pop_front()
    }

    /// Number of updates waiting in the queue.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Table of live editor handles, keyed by node identifier.
///
/// Lifecycle per identifier is absent → live → absent; the host guarantees
/// identifier uniqueness, so a creation for an already-live node is rejected
/// as a fatal inconsistency rather than silently replacing the handle.
#[derive(Debug, Default)]
pub struct EditorRegistry {
    handles: HashMap<NodeId, EditorHandle>,
}

impl EditorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly created node, with the widget's absolute origin.
    pub fn create(
        &mut self,
        node_id: NodeId,
        origin: Point<Absolute>,
    ) -> EngineResult<&mut EditorHandle> {
        if self.handles.contains_key(&node_id) {
            return Err(EngineError::NodeAlreadyLive(node_id));
        }

        debug!(target: "nodecaret::registry", node = %node_id, "editor created");
        Ok(self
            .handles
            .entry(node_id)
            .or_insert_with(|| EditorHandle::new(node_id, origin)))
    }

    /// Remove a node's handle.
    ///
    /// Any updates still queued on the handle are discarded with it; they
    /// are never applied to a destroyed widget.
    pub fn remove(&mut self, node_id: NodeId) -> EngineResult<EditorHandle> {
        let handle = self
            .handles
            .remove(&node_id)
            .ok_or(EngineError::NotFound(node_id))?;

        if handle.pending_len() > 0 {
            warn!(
                target: "nodecaret::registry",
                node = %node_id,
                discarded = handle.pending_len(),
                "editor removed with updates still queued"
            );
        } else {
            debug!(target: "nodecaret::registry", node = %node_id, "editor removed");
        }

        Ok(handle)
    }

    /// Find the live handle for a node.
    pub fn find_by(&self, node_id: NodeId) -> EngineResult<&EditorHandle> {
        self.handles
            .get(&node_id)
            .ok_or(EngineError::NotFound(node_id))
    }

    /// Find the live handle for a node, mutably.
    pub fn find_by_mut(&mut self, node_id: NodeId) -> EngineResult<&mut EditorHandle> {
        self.handles
            .get_mut(&node_id)
            .ok_or(EngineError::NotFound(node_id))
    }

    /// Check if a node has a live handle.
    #[inline]
    pub fn contains(&self, node_id: NodeId) -> bool {
        self.handles.contains_key(&node_id)
    }

    /// Number of live handles.
    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if no handles are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_absent_live_absent() {
        let mut registry = EditorRegistry::new();
        let id = NodeId(7);
        assert!(!registry.contains(id));
        assert!(matches!(registry.find_by(id), Err(EngineError::NotFound(_))));

        registry.create(id, Point::new(10.0, 20.0)).unwrap();
        assert!(registry.contains(id));
        assert_eq!(registry.find_by(id).unwrap().origin(), Point::new(10.0, 20.0));

        registry.remove(id).unwrap();
        assert!(!registry.contains(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_creation_is_fatal() {
        let mut registry = EditorRegistry::new();
        let id = NodeId(1);
        registry.create(id, Point::ZERO).unwrap();
        assert_eq!(
            registry.create(id, Point::ZERO).unwrap_err(),
            EngineError::NodeAlreadyLive(id)
        );
        // The original handle is untouched.
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn removing_an_absent_node_is_not_found() {
        let mut registry = EditorRegistry::new();
        assert!(matches!(
            registry.remove(NodeId(3)),
            Err(EngineError::NotFound(NodeId(3)))
        ));
    }

    #[test]
    fn queue_drains_in_arrival_order() {
        let mut registry = EditorRegistry::new();
        let id = NodeId(2);
        let handle = registry.create(id, Point::ZERO).unwrap();

        handle.enqueue(Update::CursorFromPoint {
            point: Point::new(1.0, 0.0),
        });
        handle.enqueue(Update::CursorFromPoint {
            point: Point::new(2.0, 0.0),
        });
        assert_eq!(handle.pending_len(), 2);

        assert_eq!(
            handle.pop_pending(),
            Some(Update::CursorFromPoint {
                point: Point::new(1.0, 0.0)
            })
        );
        assert_eq!(
            handle.pop_pending(),
            Some(Update::CursorFromPoint {
                point: Point::new(2.0, 0.0)
            })
        );
        assert_eq!(handle.pop_pending(), None);
    }

    #[test]
    fn removal_discards_queued_updates() {
        let mut registry = EditorRegistry::new();
        let id = NodeId(9);
        let handle = registry.create(id, Point::ZERO).unwrap();
        handle.enqueue(Update::CursorFromPoint { point: Point::ZERO });

        let removed = registry.remove(id).unwrap();
        assert_eq!(removed.pending_len(), 1);
        assert!(!registry.contains(id));
    }

    #[test]
    fn initialization_flag_fires_once() {
        let mut registry = EditorRegistry::new();
        let handle = registry.create(NodeId(4), Point::ZERO).unwrap();
        assert!(handle.mark_initialized());
        assert!(!handle.mark_initialized());
    }
}
