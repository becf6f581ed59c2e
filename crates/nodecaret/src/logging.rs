//! Logging integration.
//!
//! The engine instruments itself with the `tracing` crate. Nothing is
//! printed unless the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Every event carries one of the targets in [`targets`], so a host can
//! filter per subsystem, e.g. `RUST_LOG=nodecaret::engine=debug`.

/// Tracing targets used throughout the engine.
pub mod targets {
    /// Request intake, measurement, and dispatch.
    pub const ENGINE: &str = "nodecaret::engine";
    /// Editor handle lifecycle.
    pub const REGISTRY: &str = "nodecaret::registry";
    /// Keyboard listener ownership.
    pub const KEYBOARD: &str = "nodecaret::keyboard";
    /// Text shaping and glyph measurement (emitted by the metrics crate).
    pub const MEASURE: &str = "nodecaret_metrics::measure";
}
