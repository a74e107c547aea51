use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use words_counter::{
    config::Config,
    errors::errors::Error,
    run,
};

/// Print every word of a text file with its number of occurrences.
#[derive(Parser, Debug)]
#[command(name = "words-counter", version)]
struct Cli {
    /// Text file to read [default: input.txt next to the executable]
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("words_counter=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = match cli.input {
        Some(input) => Config::with_input(input),
        None => Config::resolve(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(&config, &mut out) {
        Ok(lines) => {
            tracing::info!("Reported {} words", lines);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn display_error(error: &Error) {
    /*
        Error: FileAccessError (No such file or directory (os error 2), check ...)
        -> /path/to/input.txt
    */

    eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    eprintln!("-> {}", error.get_position());
}
