//! fincalc CLI
//!
//! Runs any of the site's calculators from the command line: validate
//! inputs, compute, print the summary and schedule, optionally dump the
//! schedule as CSV or the whole result as JSON.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use fincalc::calculators::{all, by_slug, Schedule};
use fincalc::error::CalcError;
use fincalc::input::{Constraint, InputSet};

#[derive(Parser)]
#[command(name = "fincalc", version, about = "Financial calculator engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available calculators
    List,

    /// Show the input fields a calculator expects
    Fields { slug: String },

    /// Run a calculator
    Run {
        slug: String,

        /// Input field, repeatable: --set principal=500000
        #[arg(long = "set", value_parser = parse_key_val)]
        set: Vec<(String, String)>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Write the schedule to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected field=value, got '{s}'"))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for calculator in all() {
                println!("{:<18} {}", calculator.slug(), calculator.name());
            }
        }
        Command::Fields { slug } => {
            let calculator = by_slug(&slug)?;
            for field in calculator.fields() {
                let kind = match field.constraint {
                    Constraint::Amount => "amount".to_string(),
                    Constraint::Rate => "rate %".to_string(),
                    Constraint::FreeRate => "rate % (any sign)".to_string(),
                    Constraint::Count { max } => format!("count (max {max})"),
                    Constraint::Choice(options) => format!("one of {}", options.join("|")),
                };
                let required = if field.required { "" } else { " [optional]" };
                println!("{:<24} {:<20} {}{}", field.name, kind, field.label, required);
            }
        }
        Command::Run { slug, set, json, csv } => {
            let calculator = by_slug(&slug)?;
            let raw: InputSet = set.into_iter().collect();

            let output = match calculator.run(&raw) {
                Ok(output) => output,
                Err(CalcError::Validation(errors)) => {
                    eprintln!("Input errors:");
                    for (field, message) in errors.iter() {
                        eprintln!("  {field}: {message}");
                    }
                    bail!("validation failed");
                }
                Err(err) => return Err(err.into()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            println!("{}", calculator.name());
            println!("{}", "-".repeat(calculator.name().len()));
            for item in &output.summary {
                println!("{:<36} {}", item.label, item.display());
            }

            print_schedule_preview(&output.schedule);

            if let Some(path) = csv {
                write_schedule_csv(&output.schedule, &path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("\nFull schedule written to: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Print the first rows of the schedule as a fixed-width table
fn print_schedule_preview(schedule: &Schedule) {
    const PREVIEW_ROWS: usize = 12;

    match schedule {
        Schedule::None => {}
        Schedule::Periods(rows) => {
            println!();
            println!(
                "{:>6} {:>14} {:>14} {:>14} {:>14} {:>14}",
                "Period", "Opening", "Contribution", "Withdrawal", "Interest", "Closing"
            );
            for row in rows.iter().take(PREVIEW_ROWS) {
                println!(
                    "{:>6} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
                    row.period,
                    row.opening_balance,
                    row.contribution,
                    row.withdrawal,
                    row.interest,
                    row.closing_balance,
                );
            }
            if rows.len() > PREVIEW_ROWS {
                println!("... ({} more rows)", rows.len() - PREVIEW_ROWS);
            }
        }
        Schedule::Loan(rows) => {
            println!();
            println!(
                "{:>6} {:>14} {:>12} {:>12} {:>12} {:>14}",
                "Month", "Opening", "Payment", "Interest", "Principal", "Closing"
            );
            for row in rows.iter().take(PREVIEW_ROWS) {
                println!(
                    "{:>6} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
                    row.month,
                    row.opening_balance,
                    row.payment,
                    row.interest,
                    row.principal,
                    row.closing_balance,
                );
            }
            if rows.len() > PREVIEW_ROWS {
                println!("... ({} more rows)", rows.len() - PREVIEW_ROWS);
            }
        }
    }
}

fn write_schedule_csv(schedule: &Schedule, path: &PathBuf) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    match schedule {
        Schedule::None => bail!("this calculator produces no schedule"),
        Schedule::Periods(rows) => {
            for row in rows {
                writer.serialize(row)?;
            }
        }
        Schedule::Loan(rows) => {
            for row in rows {
                writer.serialize(row)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
