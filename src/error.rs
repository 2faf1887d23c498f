use crate::*;

/// Failures of the equilibrium pipeline.
///
/// Both are fatal under the model's assumptions. A degenerate game means the
/// caller fed payoffs outside the always-interior domain; an invariant
/// violation means the full-count sequence enumeration is broken.
#[derive(Debug, Clone, PartialEq)]
pub enum DuelError {
    /// The closed-form equilibrium `-b/a` left `[-ε, 1+ε]` or was undefined.
    DegenerateGame {
        a: Utility,
        b: Utility,
        c: Utility,
        ratio: Probability,
    },
    /// A full-count sequence walked to some count other than 3-2.
    InvariantViolation {
        sequence: PitchSequence,
        reached: Count,
    },
}

impl std::fmt::Display for DuelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateGame { a, b, c, ratio } => write!(
                f,
                "degenerate game: equilibrium {} outside [0, 1] (a = {}, b = {}, c = {})",
                ratio, a, b, c
            ),
            Self::InvariantViolation { sequence, reached } => write!(
                f,
                "invariant violation: sequence {} reached {} instead of the full count",
                sequence, reached
            ),
        }
    }
}

impl std::error::Error for DuelError {}
