//! Error types for the metrics crate.

use thiserror::Error;

/// Errors that can occur while measuring text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The measurement substrate reported a NaN or infinite coordinate for a
    /// character. This is never papered over with a default; the request that
    /// triggered the measurement fails.
    #[error("non-finite coordinate measured for character {index}")]
    NonFiniteCoordinate { index: usize },

    /// The measurement produced a different number of glyphs than the text
    /// has characters, so indices into the run would be meaningless.
    #[error("glyph run has {run_len} glyphs for text of {text_len} characters")]
    LengthMismatch { run_len: usize, text_len: usize },
}

/// Result type for measurement operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
