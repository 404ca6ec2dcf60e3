//! The catalog of framework models a strategy can be assembled from.
//!
//! Every category is a closed set of choices including `None`, which leaves
//! the framework default in place. Choices are parsed from their kebab-case
//! key (`ema-cross`) or their label (`EMA Cross`), case-insensitively.

use std::{fmt, str::FromStr};

use crate::ValueError;

/// A selectable option of one catalog category.
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// Category name used in prompts, flags and manifests.
    const CATEGORY: &'static str;

    /// Every choice, in display order.
    const ALL: &'static [Self];

    /// Human readable label.
    fn label(&self) -> &'static str;

    /// Kebab-case identifier used on the command line and in manifests.
    fn key(&self) -> &'static str;

    /// Whether this choice leaves the category unset.
    fn is_none(&self) -> bool;
}

/// Parse a choice from its key or label.
pub fn parse_choice<T: Choice>(s: &str) -> Result<T, ValueError> {
    let needle = s.trim();
    T::ALL
        .iter()
        .copied()
        .find(|c| c.key().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
        .ok_or_else(|| ValueError::UnknownChoice {
            category: T::CATEGORY,
            value: s.to_string(),
            expected: T::ALL
                .iter()
                .map(|c| c.key())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Alpha model generating the insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alpha {
    Rsi,
    EmaCross,
    Macd,
    HistoricalReturns,
    PairsTrading,
    None,
}

impl Choice for Alpha {
    const CATEGORY: &'static str = "alpha";
    const ALL: &'static [Self] = &[
        Self::Rsi,
        Self::EmaCross,
        Self::Macd,
        Self::HistoricalReturns,
        Self::PairsTrading,
        Self::None,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Rsi => "RSI",
            Self::EmaCross => "EMA Cross",
            Self::Macd => "MACD",
            Self::HistoricalReturns => "Historical Returns",
            Self::PairsTrading => "Pairs Trading",
            Self::None => "None",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::Rsi => "rsi",
            Self::EmaCross => "ema-cross",
            Self::Macd => "macd",
            Self::HistoricalReturns => "historical-returns",
            Self::PairsTrading => "pairs-trading",
            Self::None => "none",
        }
    }

    fn is_none(&self) -> bool {
        *self == Self::None
    }
}

/// Universe selection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Universe {
    LargeCapEquities,
    EmaCrossUniverse,
    CoarseUniverse,
    CoarseFineUniverse,
    ScheduledUniverse,
    ManualSelection,
    None,
}

/// Method on the algorithm class that a universe model calls back into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionCallback {
    Coarse,
    Fine,
    Scheduled,
}

impl SelectionCallback {
    /// Name of the method on the algorithm class.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Coarse => "CoarseSelectionFunction",
            Self::Fine => "FineSelectionFunction",
            Self::Scheduled => "SelectSymbols",
        }
    }
}

impl Universe {
    /// Selection callbacks referenced by this model, in definition order.
    pub fn selection_callbacks(&self) -> &'static [SelectionCallback] {
        match self {
            Self::CoarseUniverse => &[SelectionCallback::Coarse],
            Self::CoarseFineUniverse => &[SelectionCallback::Coarse, SelectionCallback::Fine],
            Self::ScheduledUniverse => &[SelectionCallback::Scheduled],
            _ => &[],
        }
    }
}

impl Choice for Universe {
    const CATEGORY: &'static str = "universe";
    const ALL: &'static [Self] = &[
        Self::LargeCapEquities,
        Self::EmaCrossUniverse,
        Self::CoarseUniverse,
        Self::CoarseFineUniverse,
        Self::ScheduledUniverse,
        Self::ManualSelection,
        Self::None,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::LargeCapEquities => "Large Cap Equities",
            Self::EmaCrossUniverse => "EMA Cross Universe",
            Self::CoarseUniverse => "Coarse Universe",
            Self::CoarseFineUniverse => "Coarse-Fine Universe",
            Self::ScheduledUniverse => "Scheduled Universe",
            Self::ManualSelection => "Manual Selection",
            Self::None => "None",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::LargeCapEquities => "large-cap-equities",
            Self::EmaCrossUniverse => "ema-cross-universe",
            Self::CoarseUniverse => "coarse-universe",
            Self::CoarseFineUniverse => "coarse-fine-universe",
            Self::ScheduledUniverse => "scheduled-universe",
            Self::ManualSelection => "manual-selection",
            Self::None => "none",
        }
    }

    fn is_none(&self) -> bool {
        *self == Self::None
    }
}

/// Portfolio construction model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Portfolio {
    EqualWeighting,
    MeanVariance,
    BlackLitterman,
    None,
}

impl Choice for Portfolio {
    const CATEGORY: &'static str = "portfolio";
    const ALL: &'static [Self] = &[
        Self::EqualWeighting,
        Self::MeanVariance,
        Self::BlackLitterman,
        Self::None,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::EqualWeighting => "Equal Weighting",
            Self::MeanVariance => "Mean-Variance",
            Self::BlackLitterman => "Black Litterman",
            Self::None => "None",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::EqualWeighting => "equal-weighting",
            Self::MeanVariance => "mean-variance",
            Self::BlackLitterman => "black-litterman",
            Self::None => "none",
        }
    }

    fn is_none(&self) -> bool {
        *self == Self::None
    }
}

/// Execution model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Execution {
    Immediate,
    Vwap,
    StandardDeviation,
    None,
}

impl Choice for Execution {
    const CATEGORY: &'static str = "execution";
    const ALL: &'static [Self] = &[
        Self::Immediate,
        Self::Vwap,
        Self::StandardDeviation,
        Self::None,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::Vwap => "VWAP",
            Self::StandardDeviation => "Standard deviation",
            Self::None => "None",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Vwap => "vwap",
            Self::StandardDeviation => "standard-deviation",
            Self::None => "none",
        }
    }

    fn is_none(&self) -> bool {
        *self == Self::None
    }
}

/// Risk management model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Risk {
    MaximumDrawdown,
    SectorExposure,
    None,
}

impl Choice for Risk {
    const CATEGORY: &'static str = "risk";
    const ALL: &'static [Self] = &[Self::MaximumDrawdown, Self::SectorExposure, Self::None];

    fn label(&self) -> &'static str {
        match self {
            Self::MaximumDrawdown => "Maximum Drawdown",
            Self::SectorExposure => "Sector Exposure",
            Self::None => "None",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::MaximumDrawdown => "maximum-drawdown",
            Self::SectorExposure => "sector-exposure",
            Self::None => "none",
        }
    }

    fn is_none(&self) -> bool {
        *self == Self::None
    }
}

impl FromStr for Alpha {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl FromStr for Universe {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl FromStr for Portfolio {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl FromStr for Execution {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl FromStr for Risk {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
