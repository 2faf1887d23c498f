use crate::*;

/// Probability of one pitch sequence under the table's equilibrium play.
///
/// Walks the sequence from 0-0, multiplying in the weight of each called
/// pitch at the count where it was thrown. A sequence that does not finish
/// on exactly 3-2 is an [`DuelError::InvariantViolation`].
pub fn path_probability(
    table: &CountTable,
    sequence: &PitchSequence,
) -> Result<Probability, DuelError> {
    let (steps, reached) = sequence.trace()?;
    if !reached.is_full() {
        return Err(DuelError::InvariantViolation {
            sequence: *sequence,
            reached,
        });
    }
    Ok(steps
        .into_iter()
        .map(|(count, pitch)| Transition::from((table.get(count), table.p())).weight(pitch))
        .product())
}

/// Probability that an at-bat played at equilibrium reaches the full count,
/// summed over every [`PitchSequence`] leading there.
pub fn full_count_probability(table: &CountTable) -> Result<Probability, DuelError> {
    PitchSequence::enumerate()
        .iter()
        .map(|sequence| path_probability(table, sequence))
        .sum()
}

/// Full-count probability as a function of the home-run probability alone.
pub fn objective(p: Probability) -> Result<Probability, DuelError> {
    full_count_probability(&CountTable::build(p)?)
}
