//! Input loading and CSV output for the flattening pipeline.
//!
//! Two inputs, loaded completely before any transformation runs:
//!
//! - **Invoices**: a JSON array of invoice objects. Structural problems
//!   (missing fields, wrong shapes, unknown category codes) fail here with
//!   the offending path in the error chain; there is no partial load.
//! - **Expired ids**: a plain text file, one invoice identifier per line.
//!
//! Output is CSV with `QuoteStyle::Always` for round-trip safety, written to
//! a file path or to stdout when the path is omitted or `-`.

use std::{
    collections::HashSet,
    fs::{self, File},
    io::{self, BufReader, Write},
    path::Path,
};

use anyhow::{Context, Result};
use csv::QuoteStyle;

use crate::{
    invoice::Invoice,
    transform::{FlatRecord, OUTPUT_COLUMNS},
};

pub fn is_dash(path: &Path) -> bool {
    path == Path::new("-")
}

pub fn read_invoices(path: &Path) -> Result<Vec<Invoice>> {
    let file = File::open(path).with_context(|| format!("Opening invoices file {path:?}"))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("Parsing invoices from {path:?}"))
}

pub fn read_expired_ids(path: &Path) -> Result<HashSet<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Reading expired ids from {path:?}"))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn write_csv(records: &[FlatRecord], output: Option<&Path>) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) if !is_dash(path) => Box::new(
            File::create(path).with_context(|| format!("Creating output file {path:?}"))?,
        ),
        _ => Box::new(io::stdout().lock()),
    };
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);
    csv_writer
        .write_record(OUTPUT_COLUMNS)
        .context("Writing CSV header")?;
    for record in records {
        csv_writer
            .write_record(record.to_row())
            .with_context(|| format!("Writing row for invoice '{}'", record.invoice_id))?;
    }
    csv_writer.flush().context("Flushing CSV output")?;
    Ok(())
}
