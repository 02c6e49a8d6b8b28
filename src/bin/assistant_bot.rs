// logtally - bin/assistant_bot.rs
//
// Interactive contact book on stdin/stdout.

use clap::Parser;
use logtally::app::contacts::{dispatch, parse_input, ContactBook, Outcome};
use logtally::util::{constants, logging};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Keep a contact book from typed commands: hello, add, change, phone, all,
/// close/exit.
#[derive(Parser, Debug)]
#[command(name = "assistant-bot", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug, None);

    match run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Console I/O failed");
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut book = ContactBook::new();
    writeln!(output, "{}", constants::BOT_GREETING)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", constants::BOT_PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            tracing::debug!(contacts = book.len(), "Input closed");
            return Ok(());
        };
        let Some((command, args)) = parse_input(&line) else {
            continue;
        };

        match dispatch(&mut book, &command, &args) {
            Outcome::Continue(replies) => {
                for reply in replies {
                    writeln!(output, "{reply}")?;
                }
            }
            Outcome::Exit(farewell) => {
                writeln!(output, "{farewell}")?;
                return Ok(());
            }
        }
    }
}
