use crate::*;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, global = true, help = "Log every table build and search round")]
    pub verbose: bool,
    #[arg(long, global = true, help = "Also write DEBUG logs to this file")]
    pub log: Option<std::path::PathBuf>,
    #[command(subcommand)]
    pub query: Query,
}

#[derive(Subcommand)]
pub enum Query {
    #[command(
        about = "Solve every count for one home-run probability",
        alias = "tab"
    )]
    Table {
        #[arg(short, long, default_value_t = 1.)]
        p: Probability,
    },
    #[command(
        about = "Print the full-count probability across a range of p",
        alias = "scn"
    )]
    Scan {
        #[arg(long, default_value_t = 0.)]
        start: Probability,
        #[arg(long, default_value_t = 1.)]
        end: Probability,
        #[arg(long, default_value_t = SEARCH_DIVISIONS)]
        divisions: usize,
    },
    #[command(
        about = "Find the p that maximizes the full-count probability",
        alias = "opt"
    )]
    Optimize {
        #[arg(long, default_value_t = 0.1)]
        start: Probability,
        #[arg(long, default_value_t = 0.9)]
        end: Probability,
        #[arg(long, default_value_t = SEARCH_ITERATIONS)]
        iterations: usize,
        #[arg(long, default_value_t = SEARCH_DIVISIONS)]
        divisions: usize,
    },
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Trace,
            false => log::LevelFilter::Warn,
        }
    }
}
