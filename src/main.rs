use std::process::ExitCode;

use clap::Parser;
use push_notify::cli::{Cli, execute_command, init_logging, load_settings};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = load_settings(&cli)?;
    init_logging(&cli, &settings)?;

    tracing::debug!(version = push_notify::pkg_version(), "Starting push-notify");

    execute_command(&cli, settings).await
}
