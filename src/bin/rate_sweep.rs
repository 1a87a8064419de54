//! Sensitivity sweep over one input field
//!
//! Runs a calculator across an evenly spaced grid of values for a
//! single field, in parallel, and prints how the headline amount moves.
//! Useful for the "what if returns were lower" bands on the site.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fincalc::input::InputSet;
use fincalc::scenario::{headline_amount, value_grid, SweepRunner};

#[derive(Parser)]
#[command(name = "rate_sweep", about = "Sweep one calculator input over a grid")]
struct Args {
    /// Calculator slug, e.g. emi or first-crore
    slug: String,

    /// Field to sweep, e.g. annual_rate
    field: String,

    #[arg(long, default_value_t = 6.0)]
    start: f64,

    #[arg(long, default_value_t = 14.0)]
    end: f64,

    #[arg(long, default_value_t = 0.5)]
    step: f64,

    /// Base input field, repeatable: --set principal=500000
    #[arg(long = "set", value_parser = parse_key_val)]
    set: Vec<(String, String)>,

    /// Write the grid to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected field=value, got '{s}'"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = SweepRunner::new(&args.slug)?;
    let base: InputSet = args.set.into_iter().collect();
    let values = value_grid(args.start, args.end, args.step);

    let points = runner.sweep(&base, &args.field, &values);

    println!("{:>10} {:>18}", args.field, "headline");
    let mut grid: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for point in &points {
        match &point.outcome {
            Ok(output) => {
                let headline = headline_amount(output).unwrap_or(0.0);
                println!("{:>10.2} {:>18.2}", point.value, headline);
                grid.push((point.value, headline));
            }
            Err(err) => println!("{:>10.2} {:>18}", point.value, format!("error: {err}")),
        }
    }

    if let Some(path) = args.csv {
        let mut writer =
            csv::Writer::from_path(&path).with_context(|| format!("writing {}", path.display()))?;
        writer.write_record([args.field.as_str(), "headline"])?;
        for (value, headline) in grid {
            writer.write_record([value.to_string(), headline.to_string()])?;
        }
        writer.flush()?;
        println!("\nGrid written to: {}", path.display());
    }

    Ok(())
}
