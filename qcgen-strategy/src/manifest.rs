//! Strategy manifest (`strategy.toml`) parsing.
//!
//! Every key is optional; whatever the manifest leaves out is taken from the
//! command line or asked for interactively.

use std::{path::Path, str::FromStr};

use qcgen_codegen::BuilderConfig;
use serde::Deserialize;
use toml::Spanned;

use crate::{
    Error, Result, SourceContext, ValueError,
    catalog::{Alpha, Execution, Portfolio, Risk, Universe},
    strategy::{Cash, DEFAULT_NAME, StartDate, Strategy, class_name},
};

/// Default manifest filename.
pub const MANIFEST_FILE: &str = "strategy.toml";

/// Selections and formatting options, each possibly missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyManifest {
    pub name: Option<String>,
    pub alpha: Option<Alpha>,
    pub universe: Option<Universe>,
    pub portfolio: Option<Portfolio>,
    pub execution: Option<Execution>,
    pub risk: Option<Risk>,
    pub start: Option<StartDate>,
    pub cash: Option<Cash>,
    pub format: BuilderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    name: Option<Spanned<String>>,
    alpha: Option<Spanned<String>>,
    universe: Option<Spanned<String>>,
    portfolio: Option<Spanned<String>>,
    execution: Option<Spanned<String>>,
    risk: Option<Spanned<String>>,
    start: Option<Spanned<String>>,
    cash: Option<Spanned<toml::Value>>,
    #[serde(default)]
    format: BuilderConfig,
}

impl FromStr for StrategyManifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl StrategyManifest {
    /// Parse a manifest file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Fill every unset selection from `other`.
    ///
    /// Values already present in `self` win. The formatting options are
    /// kept from `self`.
    pub fn or(self, other: StrategyManifest) -> Self {
        Self {
            name: self.name.or(other.name),
            alpha: self.alpha.or(other.alpha),
            universe: self.universe.or(other.universe),
            portfolio: self.portfolio.or(other.portfolio),
            execution: self.execution.or(other.execution),
            risk: self.risk.or(other.risk),
            start: self.start.or(other.start),
            cash: self.cash.or(other.cash),
            format: self.format,
        }
    }

    /// Build the strategy, failing on the first missing selection.
    ///
    /// A missing name falls back to [`DEFAULT_NAME`].
    pub fn into_strategy(self) -> std::result::Result<Strategy, ValueError> {
        Ok(Strategy {
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            alpha: self.alpha.ok_or(ValueError::Missing("alpha"))?,
            universe: self.universe.ok_or(ValueError::Missing("universe"))?,
            portfolio: self.portfolio.ok_or(ValueError::Missing("portfolio"))?,
            execution: self.execution.ok_or(ValueError::Missing("execution"))?,
            risk: self.risk.ok_or(ValueError::Missing("risk"))?,
            start: self.start.ok_or(ValueError::Missing("start date"))?,
            cash: self.cash.ok_or(ValueError::Missing("cash"))?,
        })
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<StrategyManifest> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    Ok(StrategyManifest {
        name: field(&ctx, "name", raw.name, class_name)?,
        alpha: field(&ctx, "alpha", raw.alpha, str::parse)?,
        universe: field(&ctx, "universe", raw.universe, str::parse)?,
        portfolio: field(&ctx, "portfolio", raw.portfolio, str::parse)?,
        execution: field(&ctx, "execution", raw.execution, str::parse)?,
        risk: field(&ctx, "risk", raw.risk, str::parse)?,
        start: field(&ctx, "start", raw.start, str::parse)?,
        cash: cash_field(&ctx, raw.cash)?,
        format: raw.format,
    })
}

fn field<T>(
    ctx: &SourceContext,
    name: &'static str,
    value: Option<Spanned<String>>,
    parse: impl Fn(&str) -> std::result::Result<T, ValueError>,
) -> Result<Option<T>> {
    value
        .map(|v| parse(v.get_ref()).map_err(|e| ctx.invalid_value(name, e, v.span())))
        .transpose()
}

/// Cash may be written as an integer or as a string with separators.
fn cash_field(ctx: &SourceContext, value: Option<Spanned<toml::Value>>) -> Result<Option<Cash>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = match value.get_ref() {
        toml::Value::Integer(amount) => u64::try_from(*amount)
            .map_err(|_| ValueError::InvalidCash(amount.to_string()))
            .and_then(Cash::new),
        toml::Value::String(s) => s.parse(),
        other => Err(ValueError::InvalidCash(other.to_string())),
    };
    parsed
        .map(Some)
        .map_err(|e| ctx.invalid_value("cash", e, value.span()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let manifest: StrategyManifest = r#"
            name = "dancing_blue_owl"
            alpha = "rsi"
            universe = "Manual Selection"
            portfolio = "equal-weighting"
            execution = "immediate"
            risk = "maximum-drawdown"
            start = "2017, 1, 1"
            cash = 100000
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("DancingBlueOwl"));
        assert_eq!(manifest.alpha, Some(Alpha::Rsi));
        assert_eq!(manifest.universe, Some(Universe::ManualSelection));
        assert_eq!(manifest.format, BuilderConfig::default());

        let strategy = manifest.into_strategy().unwrap();
        assert_eq!(strategy.cash.amount(), 100_000);
        assert_eq!(strategy.start.to_string(), "2017, 1, 1");
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest: StrategyManifest = "".parse().unwrap();
        assert_eq!(manifest, StrategyManifest::default());
    }

    #[test]
    fn test_parse_format_section() {
        let manifest: StrategyManifest = r#"
            [format]
            indent = "\t"
            doc_width = 80
            doc_delimiter = "'''"
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.format.indent_unit, "\t");
        assert_eq!(manifest.format.doc_width, 80);
        assert_eq!(manifest.format.doc_delimiter, "'''");
    }

    #[test]
    fn test_cash_as_string() {
        let manifest: StrategyManifest = r#"cash = "250,000""#.parse().unwrap();
        assert_eq!(manifest.cash.unwrap().amount(), 250_000);
    }

    #[test]
    fn test_invalid_choice_points_at_value() {
        let src = "alpha = \"bollinger\"\n";
        let err = parse_manifest(src, "strategy.toml").unwrap_err();

        match *err {
            Error::InvalidValue {
                field,
                span,
                ref source,
                ..
            } => {
                assert_eq!(field, "alpha");
                assert!(src[span.offset()..span.offset() + span.len()].contains("bollinger"));
                assert!(matches!(source, ValueError::UnknownChoice { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_cash() {
        let err = parse_manifest("cash = -10", "strategy.toml").unwrap_err();
        assert!(matches!(
            *err,
            Error::InvalidValue { field: "cash", .. }
        ));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = parse_manifest("strategy = \"rsi\"", "strategy.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = StrategyManifest::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_or_prefers_self() {
        let flags = StrategyManifest {
            alpha: Some(Alpha::Macd),
            ..Default::default()
        };
        let file = StrategyManifest {
            alpha: Some(Alpha::Rsi),
            risk: Some(Risk::SectorExposure),
            ..Default::default()
        };

        let merged = flags.or(file);
        assert_eq!(merged.alpha, Some(Alpha::Macd));
        assert_eq!(merged.risk, Some(Risk::SectorExposure));
    }

    #[test]
    fn test_into_strategy_reports_missing() {
        let manifest = StrategyManifest {
            alpha: Some(Alpha::Rsi),
            ..Default::default()
        };
        assert_eq!(
            manifest.into_strategy().unwrap_err(),
            ValueError::Missing("universe")
        );
    }
}
