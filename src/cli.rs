use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Flatten nested invoice exports into analysis-ready tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Flatten invoices into one CSV row per line item
    Flatten(FlattenArgs),
    /// Preview the first few flattened rows in a formatted table
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct FlattenArgs {
    /// Input invoices file (JSON array of invoice objects)
    #[arg(short = 'i', long = "invoices")]
    pub invoices: PathBuf,
    /// Newline-delimited file of expired invoice identifiers
    #[arg(short = 'e', long = "expired")]
    pub expired: PathBuf,
    /// Output CSV file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Render output as an elastic table to stdout instead of CSV
    #[arg(long = "table")]
    pub table: bool,
    /// Limit number of rows emitted
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input invoices file (JSON array of invoice objects)
    #[arg(short = 'i', long = "invoices")]
    pub invoices: PathBuf,
    /// Newline-delimited file of expired invoice identifiers
    #[arg(short = 'e', long = "expired")]
    pub expired: PathBuf,
    /// Number of rows to display
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
}
