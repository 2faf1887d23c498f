//! Probability that equilibrium play ever reaches the full count.
//!
//! - [`Transition`] — per-count weights of a called ball, a strike, and a home run
//! - [`full_count_probability`] — sum over every [`PitchSequence`] to 3-2

mod reach;
mod transition;

pub use reach::*;
pub use transition::*;
