// logtally - bin/fibonacci.rs
//
// Print memoised Fibonacci numbers. All indices share one cache.

use clap::Parser;
use logtally::core::fibonacci::FibonacciCache;
use logtally::util::{constants, logging};
use std::process::ExitCode;

/// Print the Fibonacci number for each index (20 and 5 if none are given).
#[derive(Parser, Debug)]
#[command(name = "fibonacci", version, about)]
struct Cli {
    /// Indices to compute. Zero and negative indices yield 0.
    #[arg(allow_negative_numbers = true)]
    indices: Vec<i64>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug, None);

    let indices = if cli.indices.is_empty() {
        constants::FIBONACCI_DEMO_INDICES.to_vec()
    } else {
        cli.indices
    };

    let mut fib = FibonacciCache::new();
    for n in indices {
        match fib.get(n) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::debug!(cached = fib.len(), "Done");
    ExitCode::SUCCESS
}
