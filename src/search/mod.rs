//! Searching the home-run probability for the most full counts.
//!
//! - [`scan`] — full-count probability over an evenly spaced grid of `p`
//! - [`Optimizer`] — coarse-to-fine zoom onto the maximizing `p`

mod optimizer;
mod optimum;
mod scan;

pub use optimizer::*;
pub use optimum::*;
pub use scan::*;
