//! The metrics engine: request intake, measurement, and dispatch.
//!
//! [`MetricsEngine`] owns the editor registry, a measurement backend, the
//! keyboard listener slot, and the host's event sink. It is single-threaded
//! and cooperative: every inbound call runs to completion (normalize, then
//! measure, then resolve, then dispatch) before returning, and per-editor
//! update queues guarantee a widget's updates never reorder relative to each
//! other.

use tracing::debug;

use nodecaret_metrics::geometry::{Absolute, GlyphLocal, Point, Rect, to_glyph_local};
use nodecaret_metrics::measure::TextMeasurer;
use nodecaret_metrics::normalize::normalize;
use nodecaret_metrics::resolver::{CursorIndex, resolve_index, resolve_position, resolve_selection};

use crate::error::EngineResult;
use crate::event::{CursorLocation, EditorEvent, EventSink, MetricsRecalculated};
use crate::keyboard::{KeyStroke, ListenerSlot};
use crate::registry::{EditorRegistry, NodeId, Update};
use crate::request::{Placement, Request};

/// The cursor/selection engine for a host's node editor.
///
/// # Example
///
/// ```
/// use nodecaret::engine::MetricsEngine;
/// use nodecaret::event::EditorEvent;
/// use nodecaret::registry::NodeId;
/// use nodecaret::request::{Placement, Request};
/// use nodecaret_metrics::geometry::Point;
/// use nodecaret_metrics::measure::FixedAdvanceMeasurer;
/// use nodecaret_metrics::resolver::CursorIndex;
///
/// let mut events = Vec::new();
/// let mut engine = MetricsEngine::new(FixedAdvanceMeasurer::new(8.0, 16.0), |event| {
///     events.push(event);
/// });
///
/// engine.node_created(NodeId(1), Point::new(100.0, 50.0)).unwrap();
/// engine
///     .submit(Request::RecalculateMetrics {
///         node_id: NodeId(1),
///         text: "tomato".into(),
///         placement: Placement::Cursor(CursorIndex::new(5)),
///     })
///     .unwrap();
/// ```
pub struct MetricsEngine<M, S> {
    registry: EditorRegistry,
    measurer: M,
    sink: S,
    listener: ListenerSlot,
}

impl<M: TextMeasurer, S: EventSink> MetricsEngine<M, S> {
    /// Create an engine over a measurement backend and an event sink.
    pub fn new(measurer: M, sink: S) -> Self {
        Self {
            registry: EditorRegistry::new(),
            measurer,
            sink,
            listener: ListenerSlot::new(),
        }
    }

    /// The live editor table.
    pub fn registry(&self) -> &EditorRegistry {
        &self.registry
    }

    /// The node currently holding the keyboard listener, if any.
    pub fn listener_owner(&self) -> Option<NodeId> {
        self.listener.owner()
    }

    /// Structural notification: the host created a node with an editable
    /// label, with the widget's origin in the absolute viewport frame.
    pub fn node_created(&mut self, node_id: NodeId, origin: Point<Absolute>) -> EngineResult<()> {
        self.registry.create(node_id, origin)?;
        Ok(())
    }

    /// Structural notification: the host removed a node. Updates still
    /// queued for it are discarded, never applied.
    pub fn node_removed(&mut self, node_id: NodeId) -> EngineResult<()> {
        self.registry.remove(node_id)?;
        Ok(())
    }

    /// The host moved a node; update its widget's absolute origin.
    pub fn set_node_origin(&mut self, node_id: NodeId, origin: Point<Absolute>) -> EngineResult<()> {
        self.registry.find_by_mut(node_id)?.set_origin(origin);
        Ok(())
    }

    /// Handle one inbound request.
    ///
    /// Metrics and pointer requests are appended to the node's update queue
    /// and the queue is drained strictly in arrival order, each update fully
    /// processed before the next; there is no coalescing.
    pub fn submit(&mut self, request: Request) -> EngineResult<()> {
        debug!(target: "nodecaret::engine", ?request, "request submitted");

        match request {
            Request::RecalculateMetrics {
                node_id,
                text,
                placement,
            } => self.enqueue_and_drain(node_id, Update::Metrics { text, placement }),
            Request::ResolveCursorFromPoint { node_id, point } => {
                self.enqueue_and_drain(node_id, Update::CursorFromPoint { point })
            }
            Request::ResolveSelectionFromDrag {
                node_id,
                fixed_index,
                point,
            } => self.enqueue_and_drain(node_id, Update::SelectionFromDrag { fixed_index, point }),
            Request::StartKeyListening { node_id } => {
                self.registry.find_by(node_id)?;
                self.listener.acquire(node_id)
            }
            Request::StopKeyListening => self.listener.release().map(drop),
        }
    }

    /// Route a global keyboard stroke.
    ///
    /// Returns whether the stroke was intercepted: true when a listener is
    /// active and the stroke is interesting (it was forwarded to the sink),
    /// false when it should pass through to the host unhandled. Fails with
    /// `NotFound` if the listening node no longer has a live handle.
    pub fn key_pressed(&mut self, stroke: KeyStroke) -> EngineResult<bool> {
        let Some(node_id) = self.listener.owner() else {
            return Ok(false);
        };

        self.registry.find_by(node_id)?;

        if !stroke.is_interesting() {
            return Ok(false);
        }

        self.sink.dispatch(EditorEvent::Key { node_id, stroke });
        Ok(true)
    }

    fn enqueue_and_drain(&mut self, node_id: NodeId, update: Update) -> EngineResult<()> {
        self.registry.find_by_mut(node_id)?.enqueue(update);

        loop {
            let Some(update) = self.registry.find_by_mut(node_id)?.pop_pending() else {
                return Ok(());
            };
            self.process(node_id, update)?;
        }
    }

    fn process(&mut self, node_id: NodeId, update: Update) -> EngineResult<()> {
        let (text, placement) = match update {
            Update::Metrics { text, placement } => (text, placement),
            Update::CursorFromPoint { point } => {
                let text = self.registry.find_by(node_id)?.text().to_owned();
                let index = self.hit_test(node_id, &text, point)?;
                (text, Placement::Cursor(index))
            }
            Update::SelectionFromDrag { fixed_index, point } => {
                let text = self.registry.find_by(node_id)?.text().to_owned();
                let index = self.hit_test(node_id, &text, point)?;
                (
                    text,
                    Placement::Selection {
                        start: fixed_index,
                        end: index,
                    },
                )
            }
        };

        self.recalculate(node_id, text, placement)
    }

    /// Resolve an absolute pointer position against a node's current text.
    fn hit_test(
        &self,
        node_id: NodeId,
        text: &str,
        point: Point<Absolute>,
    ) -> EngineResult<CursorIndex> {
        let origin = self.registry.find_by(node_id)?.origin();
        let run = self.measurer.measure(&normalize(text), Point::ZERO)?;

        let local = run.bounding_box();
        let viewport = Rect {
            origin,
            size: local.size,
        };

        let local_point = to_glyph_local(point, viewport, local);
        let index = resolve_index(local_point, &run);
        debug!(
            target: "nodecaret::engine",
            node = %node_id,
            x = local_point.x,
            index = %index,
            "pointer resolved"
        );
        Ok(index)
    }

    fn recalculate(
        &mut self,
        node_id: NodeId,
        text: String,
        placement: Placement,
    ) -> EngineResult<()> {
        let run = self
            .measurer
            .measure(&normalize(&text), Point::<GlyphLocal>::ZERO)?;
        let bbox = run.bounding_box();
        let y = -bbox.height() / 2.0;

        let location = match placement {
            Placement::Cursor(index) => {
                let index = index.clamp_for(run.len());
                CursorLocation::Cursor {
                    index,
                    x: resolve_position(index, &run),
                    y,
                }
            }
            Placement::Selection { start, end } => {
                let resolved = resolve_selection(start, end, &run);
                CursorLocation::Selection {
                    start_index: resolved.start.index,
                    start_x: resolved.start.x,
                    end_index: resolved.end.index,
                    end_x: resolved.end.x,
                    width: resolved.width,
                    y,
                }
            }
        };

        let first_measurement = {
            let handle = self.registry.find_by_mut(node_id)?;
            handle.set_text(text.clone());
            handle.mark_initialized()
        };

        if first_measurement {
            self.sink.dispatch(EditorEvent::Init { node_id });
        }

        debug!(
            target: "nodecaret::engine",
            node = %node_id,
            width = bbox.width(),
            height = bbox.height(),
            ?location,
            "metrics recalculated"
        );

        self.sink.dispatch(EditorEvent::MetricsRecalculated(MetricsRecalculated {
            node_id,
            width: bbox.width(),
            height: bbox.height(),
            text,
            location,
        }));

        Ok(())
    }
}
