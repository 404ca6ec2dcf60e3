//! Interactive questions for the selections a run is still missing.

use std::{fmt::Display, str::FromStr};

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result, eyre};
use qcgen_strategy::{StrategyManifest, catalog::Choice};

const BANNER: &str = r"
   __ _  ___ __ _  ___ _ __
  / _` |/ __/ _` |/ _ \ '_ \
 | (_| | (_| (_| |  __/ | | |
  \__, |\___\__, |\___|_| |_|
     |_|    |___/
";

/// Printed to stderr so the generated source can be piped.
pub fn banner() {
    eprintln!("{BANNER}");
    eprintln!("Let's build a strategy!\n");
}

/// Ask for every selection `manifest` does not have yet.
///
/// The class name is never asked for; it falls back to the default.
pub fn fill_missing(manifest: &mut StrategyManifest) -> Result<()> {
    if manifest.alpha.is_none() {
        manifest.alpha = Some(select("Choose an alpha")?);
    }
    if manifest.universe.is_none() {
        manifest.universe = Some(select("Choose a universe")?);
    }
    if manifest.portfolio.is_none() {
        manifest.portfolio = Some(select("Choose the construction of your portfolio")?);
    }
    if manifest.execution.is_none() {
        manifest.execution = Some(select("Choose the type of execution")?);
    }
    if manifest.risk.is_none() {
        manifest.risk = Some(select("Choose the type of risk management")?);
    }
    if manifest.start.is_none() {
        manifest.start = Some(input("Start date (YYYY, MM, DD)", "2017, 1, 1")?);
    }
    if manifest.cash.is_none() {
        manifest.cash = Some(input("Strategy cash", "100000")?);
    }
    Ok(())
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .wrap_err("Failed to get confirmation")
}

fn select<T: Choice>(prompt: &str) -> Result<T> {
    let labels: Vec<&str> = T::ALL.iter().map(|c| c.label()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .wrap_err_with(|| format!("Failed to get {} selection", T::CATEGORY))?;

    T::ALL
        .get(selection)
        .copied()
        .ok_or_else(|| eyre!("no {} at index {selection}", T::CATEGORY))
}

fn input<T>(prompt: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|s: &String| s.parse::<T>().map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()
        .wrap_err("Failed to read input")?;

    text.parse().map_err(|e: T::Err| eyre!("{e}"))
}
