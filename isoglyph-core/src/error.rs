//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
///
/// All variants are synchronous precondition violations, detected at
/// construction or traversal. They are contract violations rather than
/// transient faults and must not be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Window length below the supported minimum of 2
    #[error("invalid window length {len}: a window needs at least 2 positions")]
    InvalidWindowLength {
        /// The rejected window length
        len: usize,
    },

    /// Sequence shorter than the requested window
    #[error("sequence of {sequence_len} symbols cannot hold a window of length {len}")]
    SequenceTooShort {
        /// The requested window length
        len: usize,
        /// The actual sequence length
        sequence_len: usize,
    },

    /// A distance chain stepped outside the pattern during label assignment
    #[error("malformed pattern: distance chain escapes the window at index {index}")]
    MalformedPattern {
        /// The out-of-bounds index the chain stepped to
        index: usize,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
