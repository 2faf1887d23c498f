//! Equilibrium analysis of the robot pitcher/batter duel.
//!
//! Every ball-strike count is a zero-sum simultaneous-move game between a
//! pitcher (throw a genuine strike or a ball) and a batter (swing or take).
//! The games are solved by backward induction from the full count, and the
//! resulting strategies determine how likely an at-bat is to ever reach
//! three balls and two strikes. The home-run probability `p` is the single
//! free parameter; [`Optimizer`] searches for the `p` that makes full counts
//! most likely.
#![allow(dead_code)]

pub mod count;
pub mod equilibrium;
pub mod error;
pub mod reach;
#[cfg(feature = "cli")]
pub mod report;
pub mod search;
pub mod table;

#[cfg(test)]
mod tests;

pub use count::*;
pub use equilibrium::*;
pub use error::*;
pub use reach::*;
pub use search::*;
pub use table::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected runs scored by the batting side.
pub type Utility = f64;
/// Mixed-strategy weights, transition weights, and path probabilities.
pub type Probability = f64;

// ============================================================================
// COUNT GEOMETRY
// ============================================================================
/// Balls on the full count. One more is a walk.
pub const MAX_BALLS: u8 = 3;
/// Strikes on the full count. One more is a strikeout.
pub const MAX_STRIKES: u8 = 2;
/// Pitches needed to reach the full count from 0-0.
pub const FULL_COUNT_LENGTH: usize = (MAX_BALLS + MAX_STRIKES) as usize;

// ============================================================================
// PAYOFFS
// ============================================================================
/// Runs scored by a walk.
pub const WALK_RUNS: Utility = 1.;
/// Runs scored by a strikeout.
pub const STRIKEOUT_RUNS: Utility = 0.;
/// Runs scored by a home run. Appears as the `4p` term of the bilinear form.
pub const HOMERUN_RUNS: Utility = 4.;

// ============================================================================
// EQUILIBRIUM SOLVER
// ============================================================================
/// Slack allowed around [0, 1] before an equilibrium counts as degenerate.
pub const EQUILIBRIUM_TOLERANCE: Probability = 1e-12;

// ============================================================================
// PARAMETER SEARCH
// Coarse-to-fine zoom: the first round spans the whole range, each later
// round scans a window `SEARCH_SHRINK` times narrower around the best sample.
// ============================================================================
/// Samples below this home-run probability are skipped.
pub const SEARCH_FLOOR: Probability = 0.01;
/// Zoom rounds.
pub const SEARCH_ITERATIONS: usize = 50;
/// Intervals per round; both window edges are sampled.
pub const SEARCH_DIVISIONS: usize = 100;
/// Window contraction between rounds.
pub const SEARCH_SHRINK: f64 = 10.;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at `level`, optionally mirrored to `file`
/// at DEBUG.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![term];
    if let Some(path) = file {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(path)?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
