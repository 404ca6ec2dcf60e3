use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use clap::Args;
use eyre::{Context, Result, bail};
use qcgen_core::{GeneratedFile, WriteResult};
use qcgen_strategy::{
    Cash, STRATEGY_FILE, StartDate, Strategy, StrategyManifest, StrategyPy,
    catalog::{Alpha, Choice, Execution, Portfolio, Risk, Universe},
    class_name,
};

use super::UnwrapOrExit;
use crate::prompt;

#[derive(Args)]
pub struct NewCommand {
    /// Path to a strategy.toml providing the selections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Algorithm class name
    #[arg(short, long, value_parser = class_name)]
    pub name: Option<String>,

    /// Alpha model
    #[arg(long)]
    pub alpha: Option<Alpha>,

    /// Universe selection model
    #[arg(long)]
    pub universe: Option<Universe>,

    /// Portfolio construction model
    #[arg(long)]
    pub portfolio: Option<Portfolio>,

    /// Execution model
    #[arg(long)]
    pub execution: Option<Execution>,

    /// Risk management model
    #[arg(long)]
    pub risk: Option<Risk>,

    /// Backtest start date, as "YYYY, MM, DD"
    #[arg(long)]
    pub start: Option<StartDate>,

    /// Starting cash
    #[arg(long)]
    pub cash: Option<Cash>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Output file name
    #[arg(long, default_value = STRATEGY_FILE)]
    pub file: String,

    /// Overwrite an existing strategy file
    #[arg(long)]
    pub force: bool,

    /// Print the generated source instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        self.execute(&mut io::stdout().lock(), io::stdin().is_terminal())
    }

    /// Only the generated source, or the outcome of the write, goes to `out`.
    fn execute(&self, out: &mut dyn Write, interactive: bool) -> Result<()> {
        let from_file = match &self.config {
            Some(path) => StrategyManifest::from_file(path).unwrap_or_exit(),
            None => StrategyManifest::default(),
        };
        let format = from_file.format.clone();
        let mut manifest = self.flag_selections().or(from_file);
        manifest.format = format;
        tracing::debug!(?manifest, "selections from flags and manifest");

        if interactive {
            prompt::banner();
            prompt::fill_missing(&mut manifest)?;
        }

        let format = manifest.format.clone();
        let strategy = manifest
            .into_strategy()
            .wrap_err("Incomplete strategy, pass the missing selection as a flag or in --config")?;

        let file = StrategyPy::new(&strategy)
            .with_config(format)
            .with_file_name(&self.file)
            .force(self.force);

        if self.dry_run {
            write!(out, "{}", file.contents())?;
            return Ok(());
        }

        write_summary(out, &strategy)?;
        if interactive && !self.yes && !prompt::confirm("Build the strategy?")? {
            writeln!(out, "Aborted")?;
            return Ok(());
        }

        match file.write(&self.output).wrap_err("Failed to write strategy")? {
            WriteResult::Created(path) => writeln!(out, "Created {}", path.display())?,
            WriteResult::Replaced(path) => writeln!(out, "Replaced {}", path.display())?,
            WriteResult::Skipped(path) => bail!(
                "{} already exists, pass --force to overwrite it",
                path.display()
            ),
        }
        Ok(())
    }

    /// Selections given on the command line, with default formatting.
    pub(crate) fn flag_selections(&self) -> StrategyManifest {
        StrategyManifest {
            name: self.name.clone(),
            alpha: self.alpha,
            universe: self.universe,
            portfolio: self.portfolio,
            execution: self.execution,
            risk: self.risk,
            start: self.start,
            cash: self.cash,
            format: Default::default(),
        }
    }
}

fn write_summary(out: &mut dyn Write, strategy: &Strategy) -> io::Result<()> {
    writeln!(out, "Strategy {}", strategy.name)?;
    writeln!(out, "  {:<10} {}", "alpha", describe(strategy.alpha))?;
    writeln!(out, "  {:<10} {}", "universe", describe(strategy.universe))?;
    writeln!(out, "  {:<10} {}", "portfolio", describe(strategy.portfolio))?;
    writeln!(out, "  {:<10} {}", "execution", describe(strategy.execution))?;
    writeln!(out, "  {:<10} {}", "risk", describe(strategy.risk))?;
    writeln!(out, "  {:<10} {}", "start", strategy.start)?;
    writeln!(out, "  {:<10} {}", "cash", strategy.cash)
}

fn describe<T: Choice>(choice: T) -> &'static str {
    if choice.is_none() {
        "None (framework default)"
    } else {
        choice.label()
    }
}
