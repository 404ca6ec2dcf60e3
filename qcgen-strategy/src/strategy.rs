//! A complete set of strategy selections.

use std::{fmt, str::FromStr};

use qcgen_core::{is_identifier, to_pascal_case};

use crate::{
    ValueError,
    catalog::{Alpha, Execution, Portfolio, Risk, Universe},
};

/// Class name used when none is given.
pub const DEFAULT_NAME: &str = "DancingBlueOwl";

/// Backtest start date.
///
/// Accepts the `YYYY, MM, DD` format of the framework call (`2017, 1, 1`)
/// as well as ISO `YYYY-MM-DD`. Renders back as the call arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartDate {
    year: u16,
    month: u8,
    day: u8,
}

impl StartDate {
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidStartDate(format!("{year}, {month}, {day}"));
        if !(1900..=9999).contains(&year) || !(1..=12).contains(&month) {
            return Err(invalid());
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(invalid());
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl FromStr for StartDate {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidStartDate(s.to_string());
        let parts: Vec<&str> = if s.contains(',') {
            s.split(',').map(str::trim).collect()
        } else {
            s.trim().split('-').collect()
        };
        let [year, month, day] = parts.as_slice() else {
            return Err(invalid());
        };

        Self::new(
            year.parse().map_err(|_| invalid())?,
            month.parse().map_err(|_| invalid())?,
            day.parse().map_err(|_| invalid())?,
        )
        .map_err(|_| invalid())
    }
}

impl fmt::Display for StartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.year, self.month, self.day)
    }
}

/// Starting cash of the backtest, in account currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cash(u64);

impl Cash {
    pub fn new(amount: u64) -> Result<Self, ValueError> {
        if amount == 0 {
            return Err(ValueError::InvalidCash(amount.to_string()));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> u64 {
        self.0
    }
}

impl FromStr for Cash {
    type Err = ValueError;

    /// Digits, optionally grouped with `_` or `,` (`100_000`, `100,000`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidCash(s.to_string());
        let digits: String = s.trim().chars().filter(|c| !matches!(c, '_' | ',')).collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let amount = digits.parse().map_err(|_| invalid())?;
        Self::new(amount).map_err(|_| invalid())
    }
}

impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a class name, converting `snake_case` and `kebab-case` input.
pub fn class_name(name: &str) -> Result<String, ValueError> {
    let name = name.trim();
    let class = if name.contains(['_', '-', ' ']) || name.starts_with(|c: char| c.is_lowercase())
    {
        to_pascal_case(name)
    } else {
        name.to_string()
    };
    if is_identifier(&class) {
        Ok(class)
    } else {
        Err(ValueError::InvalidName(name.to_string()))
    }
}

/// Every selection needed to render an algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    pub name: String,
    pub alpha: Alpha,
    pub universe: Universe,
    pub portfolio: Portfolio,
    pub execution: Execution,
    pub risk: Risk,
    pub start: StartDate,
    pub cash: Cash,
}
