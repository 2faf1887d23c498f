use super::*;
use crate::*;

/// Mixed-strategy equilibrium of one count.
///
/// `probability` is shared by both players: the pitcher throws a genuine
/// strike with it and the batter swings with it. `value` is the expected
/// runs from this count under equilibrium play.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Equilibrium {
    value: Utility,
    probability: Probability,
}

impl Equilibrium {
    /// Solve the count whose ball and strike successors are worth `ball`
    /// and `strike` runs, given home-run probability `p`.
    ///
    /// The equilibrium is the stationary point `t* = -b/a`, at which neither
    /// player can move the payoff by changing their own mix. Pure strategies
    /// are always exploitable here, so a stationary point outside `[0, 1]`
    /// (beyond [`EQUILIBRIUM_TOLERANCE`]) is reported as a degenerate game
    /// rather than resolved at a corner.
    pub fn solve(ball: Utility, strike: Utility, p: Probability) -> Result<Self, DuelError> {
        Self::try_from(Payoff::new(ball, strike, p))
    }
    pub fn value(&self) -> Utility {
        self.value
    }
    pub fn probability(&self) -> Probability {
        self.probability
    }
}

impl TryFrom<Payoff> for Equilibrium {
    type Error = DuelError;
    fn try_from(payoff: Payoff) -> Result<Self, Self::Error> {
        let ratio = payoff.stationary();
        let lo = 0. - EQUILIBRIUM_TOLERANCE;
        let hi = 1. + EQUILIBRIUM_TOLERANCE;
        if !(lo..=hi).contains(&ratio) {
            return Err(DuelError::DegenerateGame {
                a: payoff.a(),
                b: payoff.b(),
                c: payoff.c(),
                ratio,
            });
        }
        let t = ratio.clamp(0., 1.);
        Ok(Self {
            value: payoff.a() * t * t + 2. * payoff.b() * t + payoff.c(),
            probability: t,
        })
    }
}

impl std::fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6} @ {:.6}", self.value, self.probability)
    }
}
