use std::path::Path;
use std::process::{Command, Output};

use anyhow::{anyhow, Result};
use serde_json::Value;

fn run_dashboard(args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_sales-dashboard");

    Ok(Command::new(binary_path).args(args).output()?)
}

fn run_on_sample(options: &[&str]) -> Result<Value> {
    let sample_path = Path::new("samples").join("sales.csv");
    let sample_path = sample_path.to_str().ok_or_else(|| anyhow!("sample path is not UTF-8"))?;

    let mut args = vec![sample_path];
    args.extend_from_slice(options);

    let output = run_dashboard(&args)?;

    assert!(output.status.success());

    Ok(serde_json::from_slice(&output.stdout)?)
}

fn as_f64(value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| anyhow!("expected a number, found {value}"))
}

#[test]
fn test_cli_reports_every_figure_for_full_dataset() -> Result<()> {
    let view = run_on_sample(&[])?;

    assert_eq!(view["transaction_count"], 10);
    assert!((as_f64(&view["total_revenue"])? - 421.5).abs() < 1e-9);

    assert_eq!(view["sales_indicator"]["title"], "December");
    assert_eq!(as_f64(&view["sales_indicator"]["value"])?, 6.0);
    assert_eq!(as_f64(&view["sales_indicator"]["reference"])?, 4.0);
    assert!((as_f64(&view["revenue_indicator"]["value"])? - 300.5).abs() < 1e-9);
    assert!((as_f64(&view["revenue_indicator"]["reference"])? - 121.0).abs() < 1e-9);

    let weekly = view["weekly_revenue"].as_array().ok_or_else(|| anyhow!("weekly_revenue missing"))?;

    assert_eq!(weekly.len(), 8);
    assert_eq!(weekly[0]["week_start"], "2019-11-04");
    assert_eq!(weekly[7]["week_start"], "2019-12-23");

    let ranking = view["top_categories"].as_array().ok_or_else(|| anyhow!("top_categories missing"))?;

    assert_eq!(ranking.len(), 7);
    assert_eq!(ranking[0]["group"], "M");
    assert_eq!(ranking[0]["category"], "Office");
    assert_eq!(ranking[0]["count"], 1);

    let recent = view["recent_transactions"].as_array().ok_or_else(|| anyhow!("recent_transactions missing"))?;

    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0]["Product_Category"], "Nest-USA");
    assert_eq!(recent[0]["Location"], "New York");
    assert!(recent[0].get("CustomerID").is_none());

    let locations = view["available_locations"].as_array().ok_or_else(|| anyhow!("available_locations missing"))?;

    assert_eq!(locations.len(), 3);

    Ok(())
}

#[test]
fn test_cli_applies_location_filter_and_options() -> Result<()> {
    let view = run_on_sample(&["--location=Chicago", "--limit=2", "--abbr", "--log=info"])?;

    assert_eq!(view["filter"][0], "Chicago");
    assert_eq!(view["transaction_count"], 4);
    assert!((as_f64(&view["total_revenue"])? - 140.5).abs() < 1e-9);
    assert_eq!(view["sales_indicator"]["title"], "Dec");

    let recent = view["recent_transactions"].as_array().ok_or_else(|| anyhow!("recent_transactions missing"))?;

    assert_eq!(recent.len(), 2);
    assert!(recent.iter().all(|row| row["Location"] == "Chicago"));

    Ok(())
}

#[test]
fn test_cli_filter_without_matches_yields_empty_figures() -> Result<()> {
    let view = run_on_sample(&["--location=Atlantis"])?;

    assert_eq!(view["transaction_count"], 0);
    assert_eq!(as_f64(&view["total_revenue"])?, 0.0);
    assert_eq!(view["weekly_revenue"].as_array().map(Vec::len), Some(0));
    assert_eq!(view["top_categories"].as_array().map(Vec::len), Some(0));
    assert_eq!(view["recent_transactions"].as_array().map(Vec::len), Some(0));
    assert!(view["sales_indicator"]["value"].is_null());

    Ok(())
}

#[test]
fn test_cli_fails_on_malformed_dataset() -> Result<()> {
    let fixture_path = Path::new("samples").join("malformed.csv");
    let fixture_path = fixture_path.to_str().ok_or_else(|| anyhow!("fixture path is not UTF-8"))?;

    let output = run_dashboard(&[fixture_path])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_fails_on_missing_dataset_and_bad_arguments() -> Result<()> {
    assert!(!run_dashboard(&["samples/missing.csv"])?.status.success());

    let output = run_dashboard(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("Usage"));

    Ok(())
}
