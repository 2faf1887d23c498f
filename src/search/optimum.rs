use crate::*;

/// Best home-run probability found by a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optimum {
    p: Probability,
    probability: Probability,
    rounds: usize,
}

impl Optimum {
    pub fn new(p: Probability, probability: Probability, rounds: usize) -> Self {
        Self {
            p,
            probability,
            rounds,
        }
    }
    /// Maximizing home-run probability.
    pub fn p(&self) -> Probability {
        self.p
    }
    /// Full-count probability at [`Self::p`].
    pub fn probability(&self) -> Probability {
        self.probability
    }
    /// Zoom rounds actually evaluated.
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl std::fmt::Display for Optimum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.20} {:.20}", self.p, self.probability)
    }
}
