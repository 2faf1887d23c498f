//! Backward induction over the twelve live counts.

mod table;

pub use table::*;
