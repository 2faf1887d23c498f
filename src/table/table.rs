use crate::*;
use std::collections::BTreeMap;

/// Equilibrium of every live count for one home-run probability.
///
/// Built by backward induction: each count is solved only after both of its
/// successors, so the full count is seeded from the terminal payoffs (a walk
/// and a strikeout) and 0-0 is solved last.
#[derive(Debug, Clone, PartialEq)]
pub struct CountTable {
    p: Probability,
    solved: BTreeMap<Count, Equilibrium>,
}

impl CountTable {
    pub fn build(p: Probability) -> Result<Self, DuelError> {
        let mut table = Self {
            p,
            solved: BTreeMap::new(),
        };
        for count in Count::backward() {
            let [ball, strike] = count.successors().map(|outcome| table.resolve(outcome));
            let equilibrium = Equilibrium::solve(ball, strike, p)?;
            table.solved.insert(count, equilibrium);
        }
        log::trace!("solved counts at p = {} (0-0 worth {:.6})", p, table.root().value());
        Ok(table)
    }
    /// Runs credited at an outcome: terminal payoff, or the solved value of
    /// the count it leads to.
    fn resolve(&self, outcome: Outcome) -> Utility {
        match outcome {
            Outcome::Live(count) => self.get(count).value(),
            terminal => terminal.runs().expect("terminal outcome"),
        }
    }
    pub fn p(&self) -> Probability {
        self.p
    }
    pub fn get(&self, count: Count) -> Equilibrium {
        self.solved
            .get(&count)
            .copied()
            .expect("successors solved before predecessors")
    }
    /// Equilibrium at 0-0, the value of a fresh at-bat.
    pub fn root(&self) -> Equilibrium {
        self.get(Count::zero())
    }
    pub fn len(&self) -> usize {
        self.solved.len()
    }
    pub fn is_empty(&self) -> bool {
        self.solved.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Count, &Equilibrium)> {
        self.solved.iter()
    }
}

impl std::fmt::Display for CountTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "p = {}", self.p)?;
        write!(f, "{:>6}", "")?;
        for strikes in 0..=MAX_STRIKES {
            write!(f, "  {:^21}", format!("{} strikes", strikes))?;
        }
        writeln!(f)?;
        for balls in 0..=MAX_BALLS {
            write!(f, "{:>6}", format!("{} b", balls))?;
            for strikes in 0..=MAX_STRIKES {
                write!(f, "  {:^21}", self.get(Count::new(balls, strikes)).to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
