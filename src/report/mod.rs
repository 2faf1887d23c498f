//! Command-line reporting over the solver.

mod query;
mod reporter;

pub use query::*;
pub use reporter::*;
