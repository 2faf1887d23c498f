use super::*;
use crate::*;

/// Where a pitch takes the at-bat.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    /// The at-bat continues at this count.
    Live(Count),
    /// Fourth ball.
    Walk,
    /// Third strike.
    Strikeout,
}

impl Outcome {
    /// Runs credited when the at-bat ends here. None while it is still live.
    pub const fn runs(&self) -> Option<Utility> {
        match self {
            Self::Live(_) => None,
            Self::Walk => Some(WALK_RUNS),
            Self::Strikeout => Some(STRIKEOUT_RUNS),
        }
    }
    pub const fn count(&self) -> Option<Count> {
        match self {
            Self::Live(count) => Some(*count),
            _ => None,
        }
    }
}
