mod commands;
mod prompt;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Cli;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "QCGEN_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    Cli::parse().run()
}

/// Logs go to stderr so `--dry-run` output stays pipeable.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
