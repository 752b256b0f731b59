//! Search orchestration for isomorph detection
//!
//! This crate drives the incremental sliding window across a descending
//! range of window lengths, accumulates the occurrence map, and prunes
//! nested sub-patterns against their longer survivors.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod locator;
pub mod search;

// Re-export key types
pub use config::{SearchConfig, SubPatternPolicy};
pub use error::{EngineError, Result};
pub use executor::{auto_select, ExecutionMode, Executor};
pub use locator::find_pattern;
pub use search::{get_isomorphs, IsomorphSearch, LengthScan, OccurrenceMap};

// Re-export from core for convenience
pub use isoglyph_core::{to_pattern, CoreError, Pattern, Sequence, SlidingWindow};
