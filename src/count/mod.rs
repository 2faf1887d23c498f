//! Ball-strike counts and the pitch sequences that connect them.
//!
//! - [`Pitch`] — the called result of a single pitch (ball or strike)
//! - [`Count`] — a live at-bat state, 0-0 through 3-2
//! - [`Outcome`] — where a pitch leads: another count, a walk, or a strikeout
//! - [`PitchSequence`] — an ordered path from 0-0 to the full count

mod count;
mod outcome;
mod pitch;
mod sequence;

pub use count::*;
pub use outcome::*;
pub use pitch::*;
pub use sequence::*;
