//! Configuration types for the search

use crate::executor::ExecutionMode;
use isoglyph_core::MIN_WINDOW_LEN;

/// Policy for sub-patterns that tie their parent's occurrence count
///
/// A shorter pattern contained in a longer retained one earns independent
/// standing by out-occurring its parent. Whether a tie is enough differs
/// between callers, so the choice is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubPatternPolicy {
    /// Drop a contained pattern unless it strictly out-occurs its parent
    #[default]
    DropTies,
    /// Keep a contained pattern that ties its parent's occurrence count
    KeepTies,
}

/// Search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Smallest window length to scan; 0 derives `min_significance + 1`
    pub min_length: usize,
    /// Largest window length to scan (None = half the sequence)
    pub max_length: Option<usize>,
    /// Minimum count of internally repeated positions per window
    pub min_significance: u32,
    /// Tie handling for nested sub-patterns
    pub sub_pattern_policy: SubPatternPolicy,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: None,
            min_significance: 2,
            sub_pattern_policy: SubPatternPolicy::default(),
            execution_mode: ExecutionMode::Adaptive,
        }
    }
}

impl SearchConfig {
    /// Every length from 2 up, a single repeated position suffices
    pub fn exhaustive() -> Self {
        Self {
            min_length: MIN_WINDOW_LEN,
            min_significance: 1,
            ..Self::default()
        }
    }

    /// Only strongly structured windows
    pub fn strict() -> Self {
        Self {
            min_length: 4,
            min_significance: 3,
            ..Self::default()
        }
    }

    /// Effective inclusive length range for a sequence of `sequence_len`
    /// symbols; `None` when the search degrades to an empty result.
    ///
    /// A window longer than half the sequence cannot recur twice, so the
    /// upper bound is always clamped to `sequence_len / 2`.
    pub(crate) fn length_range(&self, sequence_len: usize) -> Option<(usize, usize)> {
        let mut min = self.min_length;
        if min == 0 {
            min = self.min_significance as usize + 1;
        }
        let min = min.max(MIN_WINDOW_LEN);
        if min >= sequence_len {
            return None;
        }
        let cap = sequence_len / 2;
        let max = self.max_length.unwrap_or(cap).min(cap);
        if max < min {
            return None;
        }
        Some((min, max))
    }
}
