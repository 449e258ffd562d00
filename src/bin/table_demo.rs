/*!
    Builds small fixed employees table and evaluates a few read-only queries on it,
    printing every statement followed by its result (like an interactive session would).
 */

use anyhow::Result;

use randtab::aggregator_factory;
use randtab::table::{Table, DEFAULT_PREVIEW_ROWS};

/// Prints statement and its displayed result.
macro_rules! show {
    ($stmt:expr) => {
        println!(">>> {}\n{}", stringify!($stmt), $stmt);
    };
}

/// Program main function.
fn main() -> Result<()> {
    let df = Table::employees()?;
    let agg = aggregator_factory();

    show!(df);
    show!(df.head(DEFAULT_PREVIEW_ROWS));
    show!(df.describe(&agg));
    show!(df.filter_int("Age", |age| age > 30)?);
    show!(df.group_mean("Department", "Salary", &agg)?);
    Ok(())
}
