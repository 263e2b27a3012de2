pub mod cli;
pub mod data;
pub mod invoice;
pub mod load;
pub mod table;
pub mod transform;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{LevelFilter, info};

use crate::cli::{Cli, Commands, FlattenArgs, PreviewArgs};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("invoice_flatten", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Flatten(args) => handle_flatten(&args),
        Commands::Preview(args) => handle_preview(&args),
    }
}

fn handle_flatten(args: &FlattenArgs) -> Result<()> {
    if args.table && args.output.is_some() {
        return Err(anyhow!("--table cannot be combined with --output"));
    }
    let records = load_and_flatten(&args.invoices, &args.expired)?;
    let emitted = args.limit.map_or(records.len(), |n| n.min(records.len()));
    let records = &records[..emitted];
    if args.table {
        let headers = header_strings();
        let rows: Vec<Vec<String>> = records.iter().map(|r| r.to_row()).collect();
        table::print_table(&headers, &rows);
    } else {
        load::write_csv(records, args.output.as_deref()).with_context(|| {
            format!(
                "Writing output to {}",
                args.output
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "stdout".into())
            )
        })?;
    }
    info!("Emitted {} row(s)", emitted);
    Ok(())
}

fn handle_preview(args: &PreviewArgs) -> Result<()> {
    let records = load_and_flatten(&args.invoices, &args.expired)?;
    let shown = args.rows.min(records.len());
    let headers = header_strings();
    let rows: Vec<Vec<String>> = records[..shown].iter().map(|r| r.to_row()).collect();
    table::print_table(&headers, &rows);
    info!("Displayed {} of {} row(s)", shown, records.len());
    Ok(())
}

fn load_and_flatten(
    invoices_path: &std::path::Path,
    expired_path: &std::path::Path,
) -> Result<Vec<transform::FlatRecord>> {
    let invoices = load::read_invoices(invoices_path)?;
    let expired_ids = load::read_expired_ids(expired_path)?;
    info!(
        "Loaded {} invoice(s) and {} expired id(s)",
        invoices.len(),
        expired_ids.len()
    );
    transform::flatten(&invoices, &expired_ids)
}

fn header_strings() -> Vec<String> {
    transform::OUTPUT_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect()
}
