use crate::*;

/// Coarse-to-fine search for the home-run probability that maximizes the
/// full-count probability.
///
/// The first round samples the whole range, so the search starts from the
/// global grid maximum. Each later round re-centers on the best sample and
/// shrinks the window by [`SEARCH_SHRINK`]. With the default resolution the
/// next window spans five grid steps either side of the previous best, so
/// a local peak can only win if it beats every other coarse sample; the
/// objective is not checked for unimodality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optimizer {
    iterations: usize,
    divisions: usize,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            iterations: SEARCH_ITERATIONS,
            divisions: SEARCH_DIVISIONS,
        }
    }
}

impl Optimizer {
    pub fn new(iterations: usize, divisions: usize) -> Self {
        Self {
            iterations,
            divisions,
        }
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn divisions(&self) -> usize {
        self.divisions
    }

    /// Zoom onto the best `p` in `[start, end]`.
    ///
    /// Returns the final best sample with the maximum observed in the last
    /// round that had any sample above [`SEARCH_FLOOR`]. Stops early once the
    /// window is narrower than floating-point resolution around the best.
    pub fn optimize(&self, start: Probability, end: Probability) -> Result<Optimum, DuelError> {
        let mut best = (start + end) / 2.;
        let mut size = end - start;
        let mut reach = None;
        let mut rounds = 0;
        for round in 0..self.iterations {
            let lo = best - size / 2.;
            let hi = best + size / 2.;
            if round > 0 && !(lo < hi) {
                log::debug!("window collapsed around {} after {} rounds", best, round);
                break;
            }
            if let Some((p, value)) = Self::argmax(&scan(lo, hi, self.divisions)?) {
                best = p;
                reach = Some(value);
            }
            log::info!(
                "round {:>2} [{:.20}, {:.20}] best {:.20} reach {:.20}",
                round,
                lo,
                hi,
                best,
                reach.unwrap_or(0.)
            );
            size /= SEARCH_SHRINK;
            rounds += 1;
        }
        let probability = match reach {
            Some(value) => value,
            None => objective(best)?,
        };
        Ok(Optimum::new(best, probability, rounds))
    }

    /// First sample attaining the largest probability.
    fn argmax(samples: &[(Probability, Probability)]) -> Option<(Probability, Probability)> {
        samples.iter().copied().fold(None, |best, (p, value)| match best {
            Some((_, max)) if value <= max => best,
            _ => Some((p, value)),
        })
    }
}
