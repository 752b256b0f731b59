//! Parallel execution strategy

use crate::{
    config::SearchConfig,
    error::Result,
    executor::{ExecutionMode, Executor},
    search::{scan_length, LengthScan},
};
use isoglyph_core::Sequence;
use rayon::prelude::*;

/// Parallel multi-threaded executor
///
/// Fans the per-length scans out across rayon's pool. The results come
/// back longest first, so the caller's prune pass sees the same order as
/// the sequential executor and produces identical output.
#[derive(Debug)]
pub struct ParallelExecutor;

impl Executor for ParallelExecutor {
    fn scan_lengths<S: Sequence + ?Sized + Sync>(
        &self,
        seq: &S,
        min: usize,
        max: usize,
        config: &SearchConfig,
    ) -> Result<Vec<LengthScan>> {
        let lengths: Vec<usize> = (min..=max).rev().collect();
        lengths
            .par_iter()
            .map(|&len| scan_length(seq, len, config))
            .collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
