//! Snapshot tests for rendered algorithms.
//!
//! These tests verify that the generated algorithm source matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use qcgen_strategy::{StrategyManifest, render};

/// Parse a manifest and render the algorithm it describes.
fn render_manifest(manifest_toml: &str) -> String {
    let manifest = StrategyManifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let strategy = manifest.into_strategy().expect("Incomplete manifest");
    render(&strategy)
}

#[test]
fn test_manual_selection_rsi() {
    let source = render_manifest(
        r#"
        alpha = "rsi"
        universe = "manual-selection"
        portfolio = "equal-weighting"
        execution = "immediate"
        risk = "maximum-drawdown"
        start = "2017, 1, 1"
        cash = 100000
        "#,
    );

    insta::assert_snapshot!("manual_selection_rsi", source);
}

#[test]
fn test_scheduled_universe_partial() {
    let source = render_manifest(
        r#"
        name = "momentum_fox"
        alpha = "EMA Cross"
        universe = "Scheduled Universe"
        portfolio = "none"
        execution = "standard-deviation"
        risk = "none"
        start = "2019-03-07"
        cash = "250_000"
        "#,
    );

    insta::assert_snapshot!("scheduled_universe_partial", source);
}

#[test]
fn test_coarse_fine_universe() {
    let source = render_manifest(
        r#"
        name = "ValueHunter"
        alpha = "historical-returns"
        universe = "coarse-fine-universe"
        portfolio = "black-litterman"
        execution = "vwap"
        risk = "sector-exposure"
        start = "2015, 12, 31"
        cash = 1000000
        "#,
    );

    insta::assert_snapshot!("coarse_fine_universe", source);
}
