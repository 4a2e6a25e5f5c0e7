mod models;
mod types;

use std::fs;
use std::io::{stderr, stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::models::{Account, ExportJson, Record, SavingsAccount};

const DEMO_RECORD: &str = r#"{"holder": "Charlie", "balance": 500.0}"#;

enum Command {
    Demo,
    Import(PathBuf)
}

fn main() {
    //NOTE: Two commands and one optional flag do not justify pulling in clap yet
    let args: Vec<String> = std::env::args().collect();

    let Some((command, log_level)) = parse_arguments(&args) else {
        eprintln!("Usage: account-model demo [log_level:optional]");
        eprintln!("       account-model import [record].json [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    };

    setup_logging(log_level);

    let mut output = BufWriter::new(stdout().lock());

    let result = match command {
        Command::Demo => run_demo(&mut output),
        Command::Import(path) => run_import(&path, &mut output)
    };

    let result = result.and_then(|_| output.flush().context("Could not flush output"));

    if let Err(error) = result {
        drop(output);
        eprintln!("Error detected: {error:#}");
        exit(1);
    }
}

fn parse_arguments(args: &[String]) -> Option<(Command, LevelFilter)> {
    let (command, rest) = match args.get(1)?.as_str() {
        "demo" => (Command::Demo, &args[2..]),
        "import" => (Command::Import(PathBuf::from(args.get(2)?)), &args[3..]),
        _ => return None
    };

    let log_level = rest.first()
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    Some((command, log_level))
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the account renderings and exports, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn run_demo<W: Write>(output: &mut W) -> Result<()> {
    let mut alice = Account::new("Alice", Decimal::from(100))?;
    writeln!(output, "{alice}")?;

    alice.deposit(Decimal::from(50))?;
    alice.withdraw(Decimal::from(30))?;
    writeln!(output, "{alice}")?;

    let mut bob = SavingsAccount::new("Bob", Decimal::from(200), Decimal::new(3, 2))?;
    bob.add_interest()?;
    writeln!(output, "{bob}")?;

    let record: Record = serde_json::from_str(DEMO_RECORD)?;
    let charlie = Account::from_record(&record)?;
    writeln!(output, "{charlie}")?;

    writeln!(output, "{}", bob.to_json()?)?;

    info!("Demo completed");

    Ok(())
}

fn run_import<W: Write>(path: &Path, output: &mut W) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Could not read record at path: {}", path.display()))?;

    let record: Record = serde_json::from_str(&contents)
        .with_context(|| format!("Record at path {} is not a JSON object", path.display()))?;

    if record.contains_key("interest_rate") {
        let savings = SavingsAccount::from_record(&record)?;
        debug!("Imported savings account for holder [{}]", savings.holder());

        writeln!(output, "{savings}")?;
        writeln!(output, "{}", savings.to_json()?)?;
    } else {
        let account = Account::from_record(&record)?;
        debug!("Imported account for holder [{}]", account.holder());

        writeln!(output, "{account}")?;
    }

    Ok(())
}
