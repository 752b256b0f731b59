//! Isomorph pattern primitives
//!
//! An isomorph is a set of positions in a symbol sequence that share the
//! same internal repeat-distance shape: even when a rotor or disk cipher
//! maps a repeated plaintext fragment to different ciphertext symbols, the
//! distances between equal symbols inside the fragment survive. This crate
//! provides the shape representation ([`Pattern`]), the from-scratch range
//! constructor ([`to_pattern`]), and the incremental [`SlidingWindow`] that
//! keeps a pattern current in O(len) per shift instead of re-deriving it
//! quadratically at every offset.
//!
//! # Example
//!
//! ```rust
//! use isoglyph_core::{to_pattern, SlidingWindow};
//!
//! let pattern = to_pattern("aabaab", 0, 6);
//! assert_eq!(pattern.distances(), &[1, 2, 3, 1, 0, 0]);
//! assert_eq!(pattern.canonical().unwrap(), "AABAAB");
//!
//! let mut window = SlidingWindow::new("aabaab", 3).unwrap();
//! assert!(window.advance());
//! assert_eq!(window.pattern().distances(), &[2, 0, 0]);
//! ```

pub mod error;
pub mod pattern;
pub mod sequence;
pub mod window;

pub use error::{CoreError, Result};
pub use pattern::{to_pattern, Pattern};
pub use sequence::Sequence;
pub use window::{SlidingWindow, MIN_WINDOW_LEN};
