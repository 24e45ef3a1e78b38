use std::io;
use std::process::ExitCode;

use clap::Parser;
use spmat::{driver, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();

    let outcome = cli
        .resolve(&mut input, &mut stdout)
        .and_then(|config| driver::run(&config, &mut stdout));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(category = %err.category(), "run failed");
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
