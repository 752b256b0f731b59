//! Exact-pattern location

use isoglyph_core::{Pattern, Sequence, SlidingWindow, MIN_WINDOW_LEN};
use tracing::trace;

/// Find every offset where `target` recurs exactly in `seq`
///
/// A pure equality query over the live window pattern: no significance or
/// fill filtering, unlike discovery. Targets shorter than two symbols or
/// longer than the sequence match nowhere and yield an empty list. Offsets
/// come back ascending.
pub fn find_pattern<S: Sequence + ?Sized>(seq: &S, target: &Pattern) -> Vec<usize> {
    if target.len() < MIN_WINDOW_LEN || target.len() > seq.len() {
        return Vec::new();
    }
    let mut window = match SlidingWindow::new(seq, target.len()) {
        Ok(window) => window,
        Err(_) => return Vec::new(),
    };
    let mut offsets = Vec::new();
    loop {
        if window.pattern() == target {
            offsets.push(window.offset());
        }
        if !window.advance() {
            break;
        }
    }
    trace!(
        target_len = target.len(),
        matches = offsets.len(),
        "located pattern occurrences"
    );
    offsets
}
