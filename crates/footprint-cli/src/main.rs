// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! # Footprint CLI
//!
//! Personal carbon footprint calculator.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use footprint_cli::input::{self, parse_distance, parse_electricity, parse_waste};
use footprint_cli::report::{self, Report};
use footprint_engine::factors::{default_factors_path, write_default_factors};
use footprint_engine::{calculate, FactorTable, DEFAULT_REGION};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "footprint")]
#[command(about = "Personal Carbon Footprint Calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with per-region emission factors (defaults to the built-in table)
    #[arg(long, global = true, env = "FOOTPRINT_FACTORS")]
    factors: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate annual CO2 emissions from lifestyle inputs
    Calculate {
        /// Region whose emission factors apply
        #[arg(short, long, default_value = DEFAULT_REGION)]
        region: String,

        /// Daily commute distance in km (0-100)
        #[arg(short, long, default_value = "0", value_parser = parse_distance)]
        distance: f64,

        /// Monthly electricity consumption in kWh (0-1000)
        #[arg(short, long, default_value = "0", value_parser = parse_electricity)]
        electricity: f64,

        /// Waste generated per week in kg (0-100)
        #[arg(short, long, default_value = "0", value_parser = parse_waste)]
        waste: f64,

        /// Number of meals per day
        #[arg(short, long, default_value = "0")]
        meals: u32,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List regions and their emission factors
    Regions,

    /// Write the built-in factor table to a TOML file
    Init {
        /// Destination file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_logging(log_level);

    match cli.command {
        Commands::Calculate {
            region,
            distance,
            electricity,
            waste,
            meals,
            format,
            output,
        } => {
            let table = load_table(cli.factors.as_deref())?;
            let usage = input::collect(&region, distance, electricity, waste, meals);
            info!("Calculating footprint for region: {}", usage.region);

            let result = calculate(&usage, &table)?;
            let text = match format.as_str() {
                "text" => report::format_text(&usage, &result),
                "json" => {
                    let factors = table.get(&usage.region)?;
                    report::to_json(&Report {
                        input: &usage,
                        factors,
                        result,
                    })?
                }
                other => bail!("Unsupported format: {}", other),
            };
            emit(&text, output.as_deref())?;
        }

        Commands::Regions => {
            let table = load_table(cli.factors.as_deref())?;
            print!("{}", report::format_regions(&table));
        }

        Commands::Init { path } => {
            let path = path.unwrap_or_else(default_factors_path);
            write_default_factors(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Created factor table: {}", path.display());
        }
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_table(path: Option<&Path>) -> Result<FactorTable> {
    FactorTable::load_or_builtin(path).with_context(|| match path {
        Some(p) => format!("loading factor table {}", p.display()),
        None => "loading built-in factor table".to_string(),
    })
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            eprintln!("Output written to: {}", path.display());
        }
        None => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
