mod completions;
mod new;
mod options;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use new::NewCommand;
use options::OptionsCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for qcgen_strategy::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "qcgen")]
#[command(version)]
#[command(about = "Assemble algorithm framework strategies")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::Options(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a new strategy file
    New(NewCommand),

    /// List the choices available for every category
    Options(OptionsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new_flags() {
        let cli = Cli::try_parse_from([
            "qcgen",
            "new",
            "--alpha",
            "ema-cross",
            "--universe",
            "Manual Selection",
            "--start",
            "2020, 2, 29",
            "--cash",
            "5_000",
            "--name",
            "swift_heron",
            "--dry-run",
        ])
        .unwrap();

        let Commands::New(cmd) = cli.command else {
            panic!("expected the new command");
        };
        let flags = cmd.flag_selections();
        assert_eq!(flags.name.as_deref(), Some("SwiftHeron"));
        assert_eq!(flags.start.map(|d| d.to_string()).as_deref(), Some("2020, 2, 29"));
        assert_eq!(flags.cash.map(|c| c.amount()), Some(5_000));
        assert!(flags.portfolio.is_none());
        assert!(cmd.dry_run);
    }

    #[test]
    fn test_rejects_unknown_choice() {
        let result = Cli::try_parse_from(["qcgen", "new", "--alpha", "bollinger"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_date() {
        let result = Cli::try_parse_from(["qcgen", "new", "--start", "2021, 2, 30"]);
        assert!(result.is_err());
    }
}
