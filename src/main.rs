//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sec_headers` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use sec_headers::config::{CheckArgs, Cli, Command, ServeArgs};
use sec_headers::initialization::init_logger_with;
use sec_headers::server::{start_server, ServerState};
use sec_headers::{Checker, CheckerConfig, HeaderStatus, Report, Severity};

#[tokio::main]
async fn main() {
    // Values such as SEC_HEADERS_BIND may live in a .env file next to the binary
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("sec_headers error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    match cli.command {
        Command::Check(args) => run_check(args).await,
        Command::Serve(args) => run_serve(args).await,
    }
}

async fn run_check(args: CheckArgs) -> Result<()> {
    let checker = Checker::new(CheckerConfig {
        timeout_seconds: args.timeout,
        ..Default::default()
    })
    .context("Failed to initialize checker")?;

    let report = checker
        .check(args.target.trim(), Some(Duration::from_secs(args.timeout)))
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let checker = Checker::new(CheckerConfig {
        timeout_seconds: args.timeout,
        ..Default::default()
    })
    .context("Failed to initialize checker")?;

    start_server(&args.bind, ServerState::new(checker)).await
}

fn print_report(report: &Report) {
    println!(
        "{} {} ({})",
        "Checked".bold(),
        report.final_url,
        report.status_code
    );
    println!();

    for status in report.statuses() {
        match status {
            HeaderStatus::Found(spec, value) => {
                println!("  {} {}: {}", "✔".green(), spec.name, value);
            }
            HeaderStatus::Missing(spec) => {
                let severity = match spec.severity {
                    Severity::High => spec.severity.to_string().red().bold(),
                    Severity::Medium => spec.severity.to_string().yellow(),
                    Severity::Low => spec.severity.to_string().normal(),
                };
                println!("  {} {} [{}]", "✘".red(), spec.name, severity);
                println!("      {}", spec.impact);
                println!("      Fix: {}", spec.remediation);
            }
        }
    }

    println!();
    if report.cookies.is_empty() {
        println!("No Set-Cookie headers");
    } else {
        println!("Set-Cookie ({}):", report.cookies.len());
        for cookie in &report.cookies {
            println!("  {cookie}");
        }
    }

    println!();
    println!(
        "{} of {} security headers present",
        report.found.len(),
        report.found.len() + report.missing.len()
    );
}
