//! Execution strategies for the per-length scans
//!
//! Scans of different window lengths share nothing mutable (the sequence
//! is read-only), so they may run in any order or concurrently; only the
//! pruning step is sequenced, by the caller, from longest to shortest.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::search::LengthScan;
use isoglyph_core::Sequence;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded scanning
    Sequential,
    /// Window lengths scanned across threads
    Parallel,
    /// Choose by input size
    #[default]
    Adaptive,
}

/// Trait for scan execution strategies
pub trait Executor {
    /// Scan every window length in `min..=max`, longest first in the result
    fn scan_lengths<S: Sequence + ?Sized + Sync>(
        &self,
        seq: &S,
        min: usize,
        max: usize,
        config: &SearchConfig,
    ) -> Result<Vec<LengthScan>>;

    /// The mode this executor implements
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select an execution mode from the work size
///
/// Each scan is quadratic in the sequence length, so spreading lengths
/// across threads only pays once the sequence and the length range are
/// both non-trivial.
pub fn auto_select(sequence_len: usize, length_count: usize) -> ExecutionMode {
    if sequence_len < 2048 || length_count < 4 {
        return ExecutionMode::Sequential;
    }
    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}
