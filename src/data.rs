//! Loosely-typed value handling for upstream invoice exports.
//!
//! Upstream systems emit `unit_price` and `quantity` inconsistently: sometimes
//! a JSON number, sometimes a string holding one, sometimes garbage.
//! [`RawNumber`] models that representation and [`RawNumber::coerce_int()`]
//! collapses it to an integer with a zero fallback. Timestamp parsing lives
//! here too since `created_on` arrives as text in several layouts.

use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A numeric field as it arrives from upstream: a number or a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    /// Best-effort integer conversion. Total: never errs.
    ///
    /// Integers pass through, floats truncate toward zero, and text is parsed
    /// with strict integer semantics so `"3.5"` and `"abc"` both yield 0.
    pub fn coerce_int(&self) -> i64 {
        match self {
            RawNumber::Integer(i) => *i,
            RawNumber::Float(f) => *f as i64,
            RawNumber::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%d/%m/%Y %H:%M:%S",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(parsed);
        }
    }
    // Date-only inputs resolve to midnight.
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d"];
    for fmt in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, fmt) {
            return Ok(parsed.and_time(NaiveTime::MIN));
        }
    }
    Err(anyhow!("Failed to parse '{value}' as timestamp"))
}
