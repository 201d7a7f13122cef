//! gitday: what did I work on today?
//!
//! Scans local repositories, shows the day's commits, and can summarize,
//! save, export or send them.

use std::process::ExitCode;

use clap::Parser;
use gitday::{Cli, commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the report; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(cli.log_level().into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
