//! Incremental sliding window over a sequence
//!
//! Re-deriving a window's pattern from scratch costs O(len²) at every
//! offset; the sliding window keeps it current in O(len) per shift by
//! dropping the leading distance and back-scanning only for the newly
//! included symbol.

use crate::error::{CoreError, Result};
use crate::pattern::{to_pattern, Pattern};
use crate::sequence::Sequence;

/// Smallest window length that can carry repeat structure
pub const MIN_WINDOW_LEN: usize = 2;

/// Fixed-length view over a sequence, advanced one position at a time
///
/// Alongside the live [`Pattern`], the window tracks whether its first and
/// last symbols recur inside the window. A window failing either check is
/// sampling a fragment of a repeat of some other length at some other
/// offset, so its pattern should not be attributed to this length; see
/// [`is_filled`](SlidingWindow::is_filled).
pub struct SlidingWindow<'a, S: Sequence + ?Sized> {
    seq: &'a S,
    offset: usize,
    len: usize,
    pattern: Pattern,
    first_repeated: bool,
    last_repeated: bool,
}

impl<'a, S: Sequence + ?Sized> SlidingWindow<'a, S> {
    /// Open a window of `len` symbols at the start of `seq`
    ///
    /// Fails with [`CoreError::InvalidWindowLength`] for lengths below
    /// [`MIN_WINDOW_LEN`] and [`CoreError::SequenceTooShort`] when the
    /// sequence cannot hold even one window.
    pub fn new(seq: &'a S, len: usize) -> Result<Self> {
        if len < MIN_WINDOW_LEN {
            return Err(CoreError::InvalidWindowLength { len });
        }
        if seq.len() < len {
            return Err(CoreError::SequenceTooShort {
                len,
                sequence_len: seq.len(),
            });
        }
        let pattern = to_pattern(seq, 0, len);
        let first_repeated = pattern.distances()[0] != 0;
        let last = seq.symbol(len - 1);
        let last_repeated = (0..len - 1).any(|i| seq.symbol(i) == last);
        Ok(Self {
            seq,
            offset: 0,
            len,
            pattern,
            first_repeated,
            last_repeated,
        })
    }

    /// Shift the window one position to the right
    ///
    /// Returns `false` once the right edge already touches the end of the
    /// sequence, leaving the window where it is. The leading distance is
    /// dropped, a trailing zero appended, and a single backward scan links
    /// the newly included symbol to its nearest earlier equal. The
    /// first-repeated flag is derived after that scan, since the scan may
    /// land on the leading position itself.
    pub fn advance(&mut self) -> bool {
        if self.offset + self.len == self.seq.len() {
            return false;
        }
        self.offset += 1;
        self.pattern.slide();
        self.last_repeated = false;
        let newest = self.seq.symbol(self.offset + self.len - 1);
        for diff in 1..self.len {
            if self.seq.symbol(self.offset + self.len - 1 - diff) == newest {
                self.pattern.set_distance(self.len - 1 - diff, diff);
                self.last_repeated = true;
                break;
            }
        }
        self.first_repeated = self.pattern.distances()[0] != 0;
        true
    }

    /// Pattern of the symbols currently under the window
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Start position of the window within the sequence
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Window length in symbols
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when both edge symbols recur inside the window
    pub fn is_filled(&self) -> bool {
        self.first_repeated && self.last_repeated
    }
}
