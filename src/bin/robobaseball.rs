//! Reporter Binary
//!
//! Solves counts, scans the full-count probability, or optimizes the
//! home-run probability.

use clap::Parser;
use robobaseball::*;

fn main() -> anyhow::Result<()> {
    let args = report::Args::parse();
    log(args.level(), args.log.as_deref())?;
    report::Reporter::run(args.query)
}
