//! Multi-length isomorph search
//!
//! Lengths are scanned from longest to shortest. Pruning a candidate at
//! one length compares it against longer patterns only, so those must be
//! finalized first; the raw scans themselves are independent and may run
//! in any order (see [`crate::executor`]).

use crate::config::{SearchConfig, SubPatternPolicy};
use crate::error::Result;
use crate::executor::{auto_select, ExecutionMode, Executor, SequentialExecutor};
use isoglyph_core::{Pattern, Sequence, SlidingWindow};
use std::collections::BTreeMap;
use tracing::debug;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Occurrence map: each retained pattern to its ascending start offsets
///
/// The map's key order (pattern length descending, significance
/// descending, distance vector ascending) is the result order.
pub type OccurrenceMap = BTreeMap<Pattern, Vec<usize>>;

/// Raw scan output for one window length
///
/// Every qualifying window's pattern and offset, in ascending offset
/// order, before any cross-length pruning.
#[derive(Debug, Clone)]
pub struct LengthScan {
    /// The window length that was scanned
    pub len: usize,
    /// Qualifying `(pattern, offset)` hits
    pub hits: Vec<(Pattern, usize)>,
}

/// Multi-length search over one sequence
#[derive(Debug, Clone, Default)]
pub struct IsomorphSearch {
    config: SearchConfig,
}

impl IsomorphSearch {
    /// Search with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Search with a custom configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Inclusive window-length range a sequence of `sequence_len` symbols
    /// would be scanned with; `None` when the search degrades to empty
    pub fn length_range(&self, sequence_len: usize) -> Option<(usize, usize)> {
        self.config.length_range(sequence_len)
    }

    /// Run the full search
    ///
    /// Scans every length in the effective range, accumulates patterns
    /// meeting the significance and fill criteria, and prunes nested
    /// sub-patterns longest-to-shortest. Degenerate ranges yield an empty
    /// map rather than an error.
    pub fn run<S: Sequence + ?Sized + Sync>(&self, seq: &S) -> Result<OccurrenceMap> {
        let Some((min, max)) = self.config.length_range(seq.len()) else {
            return Ok(OccurrenceMap::new());
        };
        let mode = match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(seq.len(), max - min + 1),
            explicit => explicit,
        };
        let scans = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => ParallelExecutor.scan_lengths(seq, min, max, &self.config)?,
            _ => SequentialExecutor.scan_lengths(seq, min, max, &self.config)?,
        };

        let mut result = OccurrenceMap::new();
        for scan in scans {
            let hits = scan.hits.len();
            for (pattern, offset) in scan.hits {
                result.entry(pattern).or_default().push(offset);
            }
            let retained = prune_length(&mut result, scan.len, self.config.sub_pattern_policy);
            debug!(
                length = scan.len,
                hits, retained, "scanned and pruned window length"
            );
        }
        Ok(result)
    }
}

/// Search `seq` with `config`, returning the pruned occurrence map
pub fn get_isomorphs<S: Sequence + ?Sized + Sync>(
    seq: &S,
    config: SearchConfig,
) -> Result<OccurrenceMap> {
    IsomorphSearch::with_config(config).run(seq)
}

/// Raw scan of one window length (no cross-length pruning)
///
/// Records a window's pattern when it meets the significance floor and is
/// either filled or entirely structureless; the zero-significance case is
/// only reachable when the floor itself is zero.
pub(crate) fn scan_length<S: Sequence + ?Sized>(
    seq: &S,
    len: usize,
    config: &SearchConfig,
) -> Result<LengthScan> {
    let mut window = SlidingWindow::new(seq, len)?;
    let mut hits = Vec::new();
    loop {
        let pattern = window.pattern();
        if pattern.significance() >= config.min_significance
            && (window.is_filled() || pattern.significance() == 0)
        {
            hits.push((pattern.clone(), window.offset()));
        }
        if !window.advance() {
            break;
        }
    }
    Ok(LengthScan { len, hits })
}

/// Prune the entries just added for `len`, returning how many survive
///
/// Entries with fewer than two occurrences are not repeats. The rest are
/// checked against every longer retained pattern, which precede them in
/// the map's ordering; a contained pattern survives only by out-occurring
/// its parent under the configured policy.
fn prune_length(result: &mut OccurrenceMap, len: usize, policy: SubPatternPolicy) -> usize {
    let candidates: Vec<Pattern> = result
        .keys()
        .filter(|pattern| pattern.len() == len)
        .cloned()
        .collect();
    let mut retained = 0;
    for pattern in candidates {
        let occurrences = match result.get(&pattern) {
            Some(offsets) => offsets.len(),
            None => continue,
        };
        if occurrences < 2 {
            result.remove(&pattern);
            continue;
        }
        let contained = result
            .iter()
            .take_while(|(parent, _)| parent.len() > len)
            .any(|(parent, parent_offsets)| {
                pattern.is_part_of(parent)
                    && match policy {
                        SubPatternPolicy::DropTies => occurrences <= parent_offsets.len(),
                        SubPatternPolicy::KeepTies => occurrences < parent_offsets.len(),
                    }
            });
        if contained {
            result.remove(&pattern);
        } else {
            retained += 1;
        }
    }
    retained
}
