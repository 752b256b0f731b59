//! Property tests for the incremental window
//!
//! The sliding window must be indistinguishable from rebuilding the
//! pattern from scratch at every offset, for any sequence and any valid
//! window length.

use isoglyph_core::{to_pattern, Sequence, SlidingWindow};
use proptest::prelude::*;

proptest! {
    #[test]
    fn incremental_matches_from_scratch(
        seq in proptest::collection::vec(0u8..4, 2..64),
        len in 2usize..8,
    ) {
        prop_assume!(len <= seq.len());
        let mut window = SlidingWindow::new(seq.as_slice(), len).unwrap();
        let mut offset = 0;
        loop {
            prop_assert_eq!(
                window.pattern(),
                &to_pattern(seq.as_slice(), offset, offset + len)
            );
            if !window.advance() {
                break;
            }
            offset += 1;
        }
        prop_assert_eq!(offset, seq.len() - len);
    }

    #[test]
    fn fill_flags_match_direct_recomputation(
        seq in proptest::collection::vec(0u8..3, 2..48),
        len in 2usize..6,
    ) {
        prop_assume!(len <= Sequence::len(&seq));
        let mut window = SlidingWindow::new(seq.as_slice(), len).unwrap();
        let mut offset = 0;
        loop {
            let from_scratch = to_pattern(seq.as_slice(), offset, offset + len);
            let first = from_scratch.distances()[0] != 0;
            let last = (0..len - 1).any(|i| seq[offset + i] == seq[offset + len - 1]);
            prop_assert_eq!(window.is_filled(), first && last);
            if !window.advance() {
                break;
            }
            offset += 1;
        }
    }

    #[test]
    fn every_pattern_the_window_yields_is_well_formed(
        seq in proptest::collection::vec(0u8..5, 2..40),
        len in 2usize..7,
    ) {
        prop_assume!(len <= seq.len());
        let mut window = SlidingWindow::new(seq.as_slice(), len).unwrap();
        loop {
            let label = window.pattern().canonical();
            prop_assert!(label.is_ok());
            prop_assert_eq!(label.unwrap().len(), len);
            if !window.advance() {
                break;
            }
        }
    }
}
