use super::*;
use crate::*;

/// Runs one [`Query`] and prints its results to stdout.
pub struct Reporter;

impl Reporter {
    pub fn run(query: Query) -> anyhow::Result<()> {
        match query {
            Query::Table { p } => Self::table(p),
            Query::Scan {
                start,
                end,
                divisions,
            } => Self::scan(start, end, divisions),
            Query::Optimize {
                start,
                end,
                iterations,
                divisions,
            } => Self::optimize(start, end, Optimizer::new(iterations, divisions)),
        }
    }
    fn table(p: Probability) -> anyhow::Result<()> {
        let table = CountTable::build(p)?;
        print!("{}", table);
        println!("full count {:.12}", full_count_probability(&table)?);
        Ok(())
    }
    fn scan(start: Probability, end: Probability, divisions: usize) -> anyhow::Result<()> {
        Self::check(start, end)?;
        for (p, reach) in crate::scan(start, end, divisions)? {
            println!("{} {}", p, reach);
        }
        Ok(())
    }
    fn optimize(start: Probability, end: Probability, optimizer: Optimizer) -> anyhow::Result<()> {
        Self::check(start, end)?;
        log::info!(
            "optimizing over [{}, {}] with {} rounds of {} divisions",
            start,
            end,
            optimizer.iterations(),
            optimizer.divisions()
        );
        let optimum = optimizer.optimize(start, end)?;
        println!("{}", optimum);
        Ok(())
    }
    fn check(start: Probability, end: Probability) -> anyhow::Result<()> {
        if !(start < end) {
            anyhow::bail!("empty search range [{}, {}]", start, end);
        }
        Ok(())
    }
}
