use super::*;
use crate::*;

/// Live state of an at-bat, `balls` in 0..=3 and `strikes` in 0..=2.
///
/// Ordering is lexicographic on (balls, strikes). Every successor of a count
/// compares greater than it, so descending order is a valid order for
/// backward induction.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Count {
    balls: u8,
    strikes: u8,
}

impl Count {
    /// Panics outside the 12 live counts.
    pub const fn new(balls: u8, strikes: u8) -> Self {
        assert!(balls <= MAX_BALLS, "too many balls");
        assert!(strikes <= MAX_STRIKES, "too many strikes");
        Self { balls, strikes }
    }
    /// 0-0, the first pitch of the at-bat.
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }
    /// 3-2, the full count.
    pub const fn full() -> Self {
        Self::new(MAX_BALLS, MAX_STRIKES)
    }
    pub const fn balls(&self) -> u8 {
        self.balls
    }
    pub const fn strikes(&self) -> u8 {
        self.strikes
    }
    pub const fn is_full(&self) -> bool {
        self.balls == MAX_BALLS && self.strikes == MAX_STRIKES
    }
    /// Pitches thrown to get here.
    pub const fn pitches(&self) -> usize {
        (self.balls + self.strikes) as usize
    }
    /// The state after a pitch is called.
    pub const fn successor(&self, pitch: Pitch) -> Outcome {
        match pitch {
            Pitch::Ball if self.balls == MAX_BALLS => Outcome::Walk,
            Pitch::Strike if self.strikes == MAX_STRIKES => Outcome::Strikeout,
            Pitch::Ball => Outcome::Live(Self::new(self.balls + 1, self.strikes)),
            Pitch::Strike => Outcome::Live(Self::new(self.balls, self.strikes + 1)),
        }
    }
    /// Ball and strike successors, in that order.
    pub const fn successors(&self) -> [Outcome; 2] {
        [self.successor(Pitch::Ball), self.successor(Pitch::Strike)]
    }
    /// All 12 live counts in ascending order.
    pub fn all() -> Vec<Self> {
        (0..=MAX_BALLS)
            .flat_map(|b| (0..=MAX_STRIKES).map(move |s| Self::new(b, s)))
            .collect()
    }
    /// All 12 live counts with every count after both of its successors,
    /// starting from the full count.
    pub fn backward() -> Vec<Self> {
        let mut counts = Self::all();
        counts.sort_by(|a, b| b.cmp(a));
        counts
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}
