use crate::*;

/// How one pitch resolves when both players mix with the count's
/// equilibrium probability `t`.
///
/// A ball needs a ball thrown and taken, `(1−t)²`. A strike is any mismatch,
/// `2t(1−t)`, or a swung-at strike that stays in the park, `(1−p)t²`. The
/// remaining `p·t²` is a home run, which ends the at-bat without moving the
/// count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    ball: Probability,
    strike: Probability,
    homerun: Probability,
}

impl Transition {
    pub fn ball(&self) -> Probability {
        self.ball
    }
    pub fn strike(&self) -> Probability {
        self.strike
    }
    pub fn homerun(&self) -> Probability {
        self.homerun
    }
    pub fn weight(&self, pitch: Pitch) -> Probability {
        match pitch {
            Pitch::Ball => self.ball,
            Pitch::Strike => self.strike,
        }
    }
}

impl From<(Equilibrium, Probability)> for Transition {
    fn from((equilibrium, p): (Equilibrium, Probability)) -> Self {
        let t = equilibrium.probability();
        Self {
            ball: (1. - t) * (1. - t),
            strike: (1. - p) * t * t + 2. * t * (1. - t),
            homerun: p * t * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_with_homeruns_sum_to_one() {
        let table = CountTable::build(0.4).unwrap();
        for (count, eq) in table.iter() {
            let transition = Transition::from((*eq, table.p()));
            let total = transition.ball() + transition.strike() + transition.homerun();
            assert!((total - 1.).abs() < 1e-12, "{}: {}", count, total);
        }
    }
    #[test]
    fn ball_and_strike_leave_homerun_mass() {
        let eq = Equilibrium::solve(WALK_RUNS, STRIKEOUT_RUNS, 0.5).unwrap();
        let transition = Transition::from((eq, 0.5));
        let t = eq.probability();
        assert!((transition.ball() - (1. - t).powi(2)).abs() < 1e-15);
        assert!((transition.weight(Pitch::Strike) - transition.strike()).abs() < 1e-15);
        assert!(transition.ball() + transition.strike() < 1.);
    }
}
