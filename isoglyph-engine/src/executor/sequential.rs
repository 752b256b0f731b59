//! Sequential execution strategy

use crate::{
    config::SearchConfig,
    error::Result,
    executor::{ExecutionMode, Executor},
    search::{scan_length, LengthScan},
};
use isoglyph_core::Sequence;

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn scan_lengths<S: Sequence + ?Sized + Sync>(
        &self,
        seq: &S,
        min: usize,
        max: usize,
        config: &SearchConfig,
    ) -> Result<Vec<LengthScan>> {
        let mut scans = Vec::with_capacity(max - min + 1);
        for len in (min..=max).rev() {
            scans.push(scan_length(seq, len, config)?);
        }
        Ok(scans)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
