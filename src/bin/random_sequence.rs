/*!
    Prints sequence of uniformly distributed random integers, one per line.
 ```
Usage:
   random_sequence [--count N] [--low L] [--high H] [--seed S] [>output.txt]
```
   Without arguments prints 1000 values from range `1..=500000`.
   Values differ between runs unless `--seed` is given.
 */

use std::io::{stdout, BufWriter};

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use randtab::emitter::{self, SequenceSpec, DEFAULT_COUNT, DEFAULT_HIGH, DEFAULT_LOW};

#[derive(Parser)]
#[command(name = "random_sequence", about = "Prints uniformly distributed random integers", version)]
struct Cli {
    /// Number of values to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Lower bound (inclusive)
    #[arg(long, default_value_t = DEFAULT_LOW, allow_hyphen_values = true)]
    low: i64,

    /// Upper bound (inclusive)
    #[arg(long, default_value_t = DEFAULT_HIGH, allow_hyphen_values = true)]
    high: i64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

/// Program main function.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let spec = SequenceSpec::new(cli.count, cli.low, cli.high)?;

    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    match cli.seed {
        Some(seed) => emitter::emit(&mut StdRng::seed_from_u64(seed), &spec, out)?,
        None => emitter::emit(&mut rand::thread_rng(), &spec, out)?,
    };
    Ok(())
}
