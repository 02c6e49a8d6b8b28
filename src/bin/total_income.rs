// logtally - bin/total_income.rs
//
// Sum the decimal amounts found in a piece of text.

use clap::Parser;
use logtally::core::income::{extract_numbers, format_total, sum_profit};
use logtally::util::{constants, logging};

/// Print the total of every decimal amount (e.g. 44.45) in TEXT.
///
/// A built-in sample sentence is used when TEXT is omitted.
#[derive(Parser, Debug)]
#[command(name = "total-income", version, about)]
struct Cli {
    /// Text to scan.
    text: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug, None);

    let text = cli.text.as_deref().unwrap_or(constants::INCOME_SAMPLE_TEXT);
    let total = sum_profit(text, extract_numbers);

    tracing::debug!(chars = text.chars().count(), total, "Summed amounts");
    println!("Total income: {}", format_total(total));
}
