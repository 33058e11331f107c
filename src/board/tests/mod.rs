//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-piece movement geometry and captures
//! - `path.rs` - Obstruction of sliding pieces
//! - `execute.rs` - Applying moves and capture bookkeeping
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn squares(list: &[&str]) -> Vec<Square> {
    let mut out: Vec<Square> = list.iter().map(|s| sq(s)).collect();
    out.sort();
    out
}
