use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flight_planner::input::{self, InputError};

/// Answer questions about a priced flight connection network.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Input file: a `Connections:` line followed by one question per line
    input: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli.input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<(), InputError> {
    let input = input::load(path)?;
    for question in &input.questions {
        let trips = question.evaluate(&input.graph);
        println!("{}", question.render(&trips));
    }
    Ok(())
}
