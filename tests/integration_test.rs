use std::io::Write;
use std::process::{Command, Output};
use std::str::FromStr;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

fn run_cli(args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_account-model");

    Ok(Command::new(binary_path).args(args).output()?)
}

fn create_temporary_record(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    write!(file, "{contents}")?;

    Ok(file)
}

fn decimal_field(export: &Value, field: &str) -> Result<Decimal> {
    let value = export.get(field).ok_or_else(|| anyhow!("{field} missing from export"))?;

    Ok(Decimal::from_str(&value.to_string())?)
}

fn assert_bob_export(export: &Value) -> Result<()> {
    assert_eq!(export.as_object().map(|fields| fields.len()), Some(3));
    assert_eq!(export.get("holder"), Some(&json!("Bob")));
    assert_eq!(decimal_field(export, "balance")?, Decimal::from_str("206.0")?);
    assert_eq!(decimal_field(export, "interest_rate")?, Decimal::from_str("0.03")?);

    Ok(())
}

fn path_of(file: &NamedTempFile) -> Result<&str> {
    file.path().to_str().ok_or_else(|| anyhow!("Temporary path is not valid UTF-8"))
}

#[test]
fn test_cli_demo_prints_scenario_and_export() -> Result<()> {
    let output = run_cli(&["demo"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("Account of Alice | Balance: 100.00€"));
    assert_eq!(lines.next(), Some("Account of Alice | Balance: 120.00€"));
    assert_eq!(lines.next(), Some("Account of Bob | Balance: 206.00€"));
    assert_eq!(lines.next(), Some("Account of Charlie | Balance: 500.00€"));

    let export: Value = serde_json::from_str(&lines.collect::<Vec<_>>().join("\n"))?;

    assert_bob_export(&export)
}

#[test]
fn test_cli_demo_keeps_logs_off_stdout() -> Result<()> {
    let output = run_cli(&["demo", "info"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(stdout.starts_with("Account of Alice"));
    assert!(stderr.contains("Operation [deposit] started"));
    assert!(stderr.contains("Interest credited to holder [Bob] at [3.00%]"));

    Ok(())
}

#[test]
fn test_cli_imports_plain_account_record() -> Result<()> {
    let file = create_temporary_record(r#"{"holder": "Charlie", "balance": 500.0}"#)?;
    let output = run_cli(&["import", path_of(&file)?])?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Account of Charlie | Balance: 500.00€\n");

    Ok(())
}

#[test]
fn test_cli_imports_savings_record_and_exports_it() -> Result<()> {
    let file = create_temporary_record(r#"{"holder": "Bob", "balance": 206.0, "interest_rate": 0.03}"#)?;
    let output = run_cli(&["import", path_of(&file)?])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let (rendering, export) = stdout.split_once('\n').ok_or_else(|| anyhow!("Export missing from output"))?;

    assert_eq!(rendering, "Account of Bob | Balance: 206.00€");

    let export: Value = serde_json::from_str(export)?;

    assert_bob_export(&export)
}

#[test]
fn test_cli_export_keeps_full_decimal_precision() -> Result<()> {
    let file = create_temporary_record(
        r#"{"holder": "Bob", "balance": 0.1344888824246298437178134918, "interest_rate": 0.025}"#
    )?;
    let output = run_cli(&["import", path_of(&file)?])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let (_, export) = stdout.split_once('\n').ok_or_else(|| anyhow!("Export missing from output"))?;

    assert!(export.contains("\"balance\": 0.1344888824246298437178134918,"));

    let export: Value = serde_json::from_str(export)?;

    assert_eq!(decimal_field(&export, "balance")?, Decimal::from_str("0.1344888824246298437178134918")?);

    Ok(())
}

#[test]
fn test_cli_reports_invalid_record() -> Result<()> {
    let file = create_temporary_record(r#"{"holder": "Charlie", "balance": -5.0}"#)?;
    let output = run_cli(&["import", path_of(&file)?])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("Error detected: Invalid argument"));

    Ok(())
}

#[test]
fn test_cli_reports_missing_record_file() -> Result<()> {
    let output = run_cli(&["import", "missing-record.json"])?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Could not read record"));

    Ok(())
}

#[test]
fn test_cli_requires_a_known_command() -> Result<()> {
    assert!(!run_cli(&[])?.status.success());
    assert!(!run_cli(&["transfer"])?.status.success());
    assert!(!run_cli(&["import"])?.status.success());

    Ok(())
}
