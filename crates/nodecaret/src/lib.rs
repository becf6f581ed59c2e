//! Cursor and selection resolution for editable node labels.
//!
//! A graphical node editor lets the user edit the text label of a node in
//! place. The host owns the text and the widgets; this crate owns the hard
//! part, turning text plus a desired cursor index, a pointer click, or a
//! drag gesture into exact pixel coordinates, and routing the keyboard
//! strokes an active editor cares about.
//!
//! The pieces:
//!
//! - **Engine**: [`MetricsEngine`] processes host requests end to end
//! - **Registry**: live [`EditorHandle`]s with per-editor FIFO update queues
//! - **Keyboard**: the interestingness filter and the single listener slot
//! - **Events**: [`EditorEvent`]s delivered synchronously to an [`EventSink`]
//!
//! Measurement itself lives in the `nodecaret-metrics` crate, behind the
//! [`TextMeasurer`] trait, so tests and headless hosts can swap the shaping
//! backend for a fixed-advance one.
//!
//! # Example
//!
//! ```
//! use nodecaret::{MetricsEngine, NodeId, Placement, Request};
//! use nodecaret_metrics::geometry::Point;
//! use nodecaret_metrics::measure::FixedAdvanceMeasurer;
//! use nodecaret_metrics::resolver::CursorIndex;
//!
//! let mut events = Vec::new();
//! let mut engine = MetricsEngine::new(FixedAdvanceMeasurer::new(8.0, 16.0), |event| {
//!     events.push(event);
//! });
//!
//! engine.node_created(NodeId(1), Point::new(100.0, 50.0)).unwrap();
//! engine
//!     .submit(Request::RecalculateMetrics {
//!         node_id: NodeId(1),
//!         text: "tomato".into(),
//!         placement: Placement::Cursor(CursorIndex::new(5)),
//!     })
//!     .unwrap();
//!
//! // An Init event for the first measurement, then the metrics themselves.
//! drop(engine);
//! assert_eq!(events.len(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod logging;
pub mod registry;
pub mod request;

pub use engine::MetricsEngine;
pub use error::{EngineError, EngineResult};
pub use event::{CursorLocation, EditorEvent, EventSink, MetricsRecalculated};
pub use keyboard::{Key, KeyStroke, KeyboardModifiers, ListenerSlot};
pub use registry::{EditorHandle, EditorRegistry, NodeId};
pub use request::{Placement, Request};

// Re-exported so hosts depending on `nodecaret` alone can name measurement
// types at the seam.
pub use nodecaret_metrics::measure::TextMeasurer;
