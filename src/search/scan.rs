use crate::*;
use rayon::prelude::*;

/// `divisions + 1` evenly spaced points from `lo` to `hi`, both included.
pub fn grid(lo: Probability, hi: Probability, divisions: usize) -> Vec<Probability> {
    let n = divisions.max(1) as Probability;
    (0..=divisions)
        .map(|i| lo + (hi - lo) * i as Probability / n)
        .collect()
}

/// Full-count probability at every grid point in `[start, end]`.
///
/// Points below [`SEARCH_FLOOR`] are skipped. Tables are independent, so the
/// grid is evaluated across the rayon pool; results keep grid order.
pub fn scan(
    start: Probability,
    end: Probability,
    divisions: usize,
) -> Result<Vec<(Probability, Probability)>, DuelError> {
    grid(start, end, divisions)
        .into_par_iter()
        .filter(|p| *p >= SEARCH_FLOOR)
        .map(|p| objective(p).map(|reach| (p, reach)))
        .collect()
}
