use super::*;
use crate::*;

/// Ordered pitches taking an at-bat from 0-0 to the full count.
///
/// Any arrangement of three balls and two strikes qualifies: no prefix can
/// walk or strike out the batter, and the full count is first reached on the
/// fifth pitch. There are C(5, 2) = 10 of them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PitchSequence([Pitch; FULL_COUNT_LENGTH]);

impl PitchSequence {
    /// Every path to the full count, generated by extending live counts
    /// one pitch at a time.
    pub fn enumerate() -> Vec<Self> {
        let mut paths = Vec::new();
        let ref mut prefix = Vec::with_capacity(FULL_COUNT_LENGTH);
        Self::extend(Count::zero(), prefix, &mut paths);
        paths
    }
    fn extend(count: Count, prefix: &mut Vec<Pitch>, paths: &mut Vec<Self>) {
        if count.is_full() {
            let pitches = prefix.as_slice().try_into().expect("full count length");
            paths.push(Self(pitches));
            return;
        }
        for pitch in Pitch::all() {
            if let Outcome::Live(next) = count.successor(pitch) {
                prefix.push(pitch);
                Self::extend(next, prefix, paths);
                prefix.pop();
            }
        }
    }
    pub fn pitches(&self) -> &[Pitch] {
        &self.0
    }
    /// Counts faced before each pitch, paired with the pitch thrown there,
    /// and the count left after the last one. Fails if the sequence walks or
    /// strikes out the batter along the way.
    pub fn trace(&self) -> Result<(Vec<(Count, Pitch)>, Count), DuelError> {
        let mut steps = Vec::with_capacity(FULL_COUNT_LENGTH);
        let mut count = Count::zero();
        for &pitch in self.0.iter() {
            steps.push((count, pitch));
            count = match count.successor(pitch) {
                Outcome::Live(next) => next,
                Outcome::Walk | Outcome::Strikeout => {
                    return Err(DuelError::InvariantViolation {
                        sequence: *self,
                        reached: count,
                    });
                }
            };
        }
        Ok((steps, count))
    }
}

impl From<[Pitch; FULL_COUNT_LENGTH]> for PitchSequence {
    fn from(pitches: [Pitch; FULL_COUNT_LENGTH]) -> Self {
        Self(pitches)
    }
}

impl TryFrom<&str> for PitchSequence {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let pitches = s
            .trim()
            .chars()
            .map(Pitch::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let pitches = <[Pitch; FULL_COUNT_LENGTH]>::try_from(pitches)
            .map_err(|p| format!("expected {} pitches, got {}", FULL_COUNT_LENGTH, p.len()))?;
        Ok(Self(pitches))
    }
}

impl std::fmt::Display for PitchSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|p| write!(f, "{}", p))
    }
}
