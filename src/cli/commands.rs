//! Command implementations for the waste record reader CLI
//!
//! Sets up logging, builds the reader configuration from the arguments, reads
//! the requested file and prints the report.

use crate::cli::args::{Args, Commands, OutputFormat, ReadArgs};
use crate::config::{ReaderConfig, ValidationPolicy};
use crate::models::{ContainerRecord, ContainerType, WasteRecord, WasteType};
use crate::reader::{DelimitedRecordReader, ReadStats};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// Main command runner
///
/// Returns the read statistics of the processed file. Reader failures are
/// passed through unchanged so the caller can map them to exit codes.
pub fn run(args: Args) -> Result<ReadStats> {
    let Some(command) = args.command else {
        anyhow::bail!("No command given");
    };

    match command {
        Commands::Waste(read_args) => {
            setup_logging(&read_args);
            run_waste(&read_args)
        }
        Commands::Containers(read_args) => {
            setup_logging(&read_args);
            run_containers(&read_args)
        }
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &ReadArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("waste_records={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Build the reader configuration from defaults and CLI overrides
pub fn load_configuration(args: &ReadArgs) -> ReaderConfig {
    let mut config = ReaderConfig::default();
    apply_cli_overrides(&mut config, args);
    config
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut ReaderConfig, args: &ReadArgs) {
    config.delimiter = args.delimiter.clone();
    config.skip_blank_lines = !args.keep_blank_lines;

    if args.strict {
        config.container_validation = ValidationPolicy::Strict;
    }
}

fn run_waste(args: &ReadArgs) -> Result<ReadStats> {
    let reader = DelimitedRecordReader::new(load_configuration(args))?;
    let result = reader.read_waste_records_with_stats(&args.path)?;

    let mut stdout = std::io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => write_waste_report(
            &mut stdout,
            &args.path.display().to_string(),
            &result.records,
            &result.stats,
        )
        .context("Failed to write waste report")?,
        OutputFormat::Json => write_json(&mut stdout, &result.records)?,
    }

    info!("Waste command complete");
    Ok(result.stats)
}

fn run_containers(args: &ReadArgs) -> Result<ReadStats> {
    let reader = DelimitedRecordReader::new(load_configuration(args))?;
    let result = reader.read_container_records_with_stats(&args.path)?;

    let mut stdout = std::io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => write_container_report(
            &mut stdout,
            &args.path.display().to_string(),
            &result.records,
            &result.stats,
        )
        .context("Failed to write container report")?,
        OutputFormat::Json => write_json(&mut stdout, &result.records)?,
    }

    info!("Containers command complete");
    Ok(result.stats)
}

/// Write records as a pretty-printed JSON array
fn write_json<W: Write, T: Serialize>(out: &mut W, records: &[T]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records).context("Failed to serialize records")?;
    writeln!(out).context("Failed to write output")?;
    Ok(())
}

/// Row count and tonnage per waste type, in reporting order, skipping empty types
pub fn tonnage_by_waste_type(records: &[WasteRecord]) -> Vec<(WasteType, usize, f64)> {
    WasteType::ALL
        .iter()
        .filter_map(|waste_type| {
            let matching: Vec<&WasteRecord> = records
                .iter()
                .filter(|record| record.waste_type == *waste_type)
                .collect();

            if matching.is_empty() {
                None
            } else {
                let tonnage: f64 = matching.iter().map(|record| record.tonnage).sum();
                Some((*waste_type, matching.len(), tonnage))
            }
        })
        .collect()
}

/// Container quantity per container type, in reporting order, skipping empty types
pub fn quantity_by_container_type(records: &[ContainerRecord]) -> Vec<(ContainerType, i64)> {
    ContainerType::ALL
        .iter()
        .filter_map(|container_type| {
            let quantity: i64 = records
                .iter()
                .filter(|record| record.container_type == *container_type)
                .map(|record| i64::from(record.quantity))
                .sum();

            records
                .iter()
                .any(|record| record.container_type == *container_type)
                .then_some((*container_type, quantity))
        })
        .collect()
}

fn write_waste_report<W: Write>(
    out: &mut W,
    source: &str,
    records: &[WasteRecord],
    stats: &ReadStats,
) -> std::io::Result<()> {
    writeln!(out, "\n{}", "Waste Records".bold())?;
    writeln!(out, "{}", "━".repeat(50))?;
    writeln!(out, "File: {}", source)?;
    writeln!(out, "Records read: {}", stats.records_parsed.to_string().green())?;
    if stats.blank_lines_skipped > 0 {
        writeln!(out, "Blank lines skipped: {}", stats.blank_lines_skipped)?;
    }
    if stats.unrecognized_labels > 0 {
        writeln!(
            out,
            "{}",
            format!(
                "Unrecognized waste types: {} ({:.1}%)",
                stats.unrecognized_labels,
                stats.unrecognized_rate()
            )
            .yellow()
        )?;
    }

    writeln!(out, "\n{}", "Tonnage by waste type:".bold())?;
    let mut total = 0.0;
    for (waste_type, rows, tonnage) in tonnage_by_waste_type(records) {
        total += tonnage;
        writeln!(
            out,
            "   • {:<22} {:>6} rows {:>14.2} t",
            waste_type.label(),
            rows,
            tonnage
        )?;
    }
    writeln!(out, "   {:<24} {:>19.2} t", "Total", total)?;
    writeln!(out)?;
    Ok(())
}

fn write_container_report<W: Write>(
    out: &mut W,
    source: &str,
    records: &[ContainerRecord],
    stats: &ReadStats,
) -> std::io::Result<()> {
    writeln!(out, "\n{}", "Container Records".bold())?;
    writeln!(out, "{}", "━".repeat(50))?;
    writeln!(out, "File: {}", source)?;
    writeln!(out, "Records read: {}", stats.records_parsed.to_string().green())?;
    if stats.unrecognized_labels > 0 {
        writeln!(
            out,
            "{}",
            format!("Unknown container types: {}", stats.unrecognized_labels).yellow()
        )?;
    }

    writeln!(out, "\n{}", "Containers by type:".bold())?;
    for (container_type, quantity) in quantity_by_container_type(records) {
        writeln!(out, "   • {:<14} {:>8}", container_type.label(), quantity)?;
    }
    writeln!(out)?;
    Ok(())
}
