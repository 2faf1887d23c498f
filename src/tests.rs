//! End-to-end checks against an independent reference.
//!
//! The oracle below solves the twelve counts in a hand-written order and
//! walks a literal list of the ten full-count sequences, sharing nothing
//! with the library beyond the payoff formula.
use super::*;
use std::collections::HashMap;

fn oracle_solve(ball: f64, strike: f64, p: f64) -> (f64, f64) {
    let a = 4. * p + ball - strike - strike * p;
    let b = strike - ball;
    let t = (-b / a).clamp(0., 1.);
    (a * t * t + 2. * b * t + ball, t)
}

fn oracle_table(p: f64) -> HashMap<(u8, u8), (f64, f64)> {
    let mut s = HashMap::new();
    s.insert((3, 2), oracle_solve(1., 0., p));
    s.insert((3, 1), oracle_solve(1., s[&(3, 2)].0, p));
    s.insert((3, 0), oracle_solve(1., s[&(3, 1)].0, p));
    s.insert((2, 2), oracle_solve(s[&(3, 2)].0, 0., p));
    s.insert((2, 1), oracle_solve(s[&(3, 1)].0, s[&(2, 2)].0, p));
    s.insert((2, 0), oracle_solve(s[&(3, 0)].0, s[&(2, 1)].0, p));
    s.insert((1, 2), oracle_solve(s[&(2, 2)].0, 0., p));
    s.insert((1, 1), oracle_solve(s[&(2, 1)].0, s[&(1, 2)].0, p));
    s.insert((1, 0), oracle_solve(s[&(2, 0)].0, s[&(1, 1)].0, p));
    s.insert((0, 2), oracle_solve(s[&(1, 2)].0, 0., p));
    s.insert((0, 1), oracle_solve(s[&(1, 1)].0, s[&(0, 2)].0, p));
    s.insert((0, 0), oracle_solve(s[&(1, 0)].0, s[&(0, 1)].0, p));
    s
}

/// 1 = ball, 0 = strike
const ORACLE_SEQUENCES: [[u8; 5]; 10] = [
    [1, 1, 1, 0, 0],
    [1, 1, 0, 1, 0],
    [1, 1, 0, 0, 1],
    [1, 0, 1, 1, 0],
    [1, 0, 1, 0, 1],
    [1, 0, 0, 1, 1],
    [0, 1, 1, 1, 0],
    [0, 1, 1, 0, 1],
    [0, 1, 0, 1, 1],
    [0, 0, 1, 1, 1],
];

fn oracle_reach(p: f64) -> f64 {
    let table = oracle_table(p);
    ORACLE_SEQUENCES
        .iter()
        .map(|sequence| {
            let (mut balls, mut strikes, mut probability) = (0, 0, 1.);
            for &pitch in sequence {
                let t = table[&(balls, strikes)].1;
                if pitch == 1 {
                    probability *= (1. - t) * (1. - t);
                    balls += 1;
                } else {
                    probability *= (1. - p) * t * t + 2. * t * (1. - t);
                    strikes += 1;
                }
            }
            assert_eq!((balls, strikes), (3, 2));
            probability
        })
        .sum()
}

#[test]
fn table_matches_oracle() {
    for p in [0.05, 0.25, 0.5, 1.] {
        let table = CountTable::build(p).unwrap();
        let oracle = oracle_table(p);
        for (count, eq) in table.iter() {
            let (value, t) = oracle[&(count.balls(), count.strikes())];
            assert!((eq.value() - value).abs() < 1e-12, "{} at p = {}", count, p);
            assert!((eq.probability() - t).abs() < 1e-12, "{} at p = {}", count, p);
        }
    }
}

#[test]
fn reach_matches_oracle_at_one() {
    let table = CountTable::build(1.).unwrap();
    let reach = full_count_probability(&table).unwrap();
    assert!((reach - oracle_reach(1.)).abs() < 1e-9, "{}", reach);
}

#[test]
fn reach_matches_oracle_across_range() {
    for (p, reach) in scan(0.01, 1., 33).unwrap() {
        assert!((reach - oracle_reach(p)).abs() < 1e-9, "p = {}", p);
    }
}

#[test]
fn generated_sequences_match_literal_list() {
    let generated = PitchSequence::enumerate();
    assert_eq!(generated.len(), ORACLE_SEQUENCES.len());
    for literal in ORACLE_SEQUENCES {
        let pitches = literal.map(|bit| match bit {
            1 => Pitch::Ball,
            _ => Pitch::Strike,
        });
        assert!(generated.contains(&PitchSequence::from(pitches)));
    }
}

#[test]
fn full_count_closed_form_at_one() {
    // with certain home runs the full count mixes 1 / (4 + 1)
    let table = CountTable::build(1.).unwrap();
    let full = table.get(Count::full());
    assert!((full.probability() - 0.2).abs() < 1e-12);
    assert!((full.value() - 0.8).abs() < 1e-12);
}

#[test]
fn known_optimum() {
    let optimum = Optimizer::default().optimize(0.1, 0.9).unwrap();
    assert!((optimum.p() - 0.2269732297).abs() < 1e-6, "{}", optimum);
    assert!((optimum.probability() - 0.2959679934).abs() < 1e-9, "{}", optimum);
}
