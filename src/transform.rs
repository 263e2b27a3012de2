//! The flattening transform: nested invoices to a sorted per-line-item table.
//!
//! One pass over the loaded invoices: each invoice's total is computed first
//! (every item shares it as the percentage denominator), the expiration flag
//! is joined by string membership, and one [`FlatRecord`] is emitted per line
//! item. The assembled table is sorted ascending by
//! `(invoice_id, invoiceitem_id)` before being returned to the caller.
//!
//! Numeric coercion failures never surface (they become zero); an unparseable
//! `created_on` is fatal and aborts the whole transform.

use std::collections::HashSet;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use crate::{
    data::parse_timestamp,
    invoice::{Category, Invoice},
};

pub const OUTPUT_COLUMNS: [&str; 9] = [
    "invoice_id",
    "created_on",
    "invoiceitem_id",
    "invoiceitem_name",
    "type",
    "unit_price",
    "total_price",
    "percentage_in_invoice",
    "is_expired",
];

/// One output row: a single line item joined with its invoice context.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    pub invoice_id: String,
    pub created_on: NaiveDateTime,
    pub invoiceitem_id: String,
    pub invoiceitem_name: String,
    pub category: Category,
    pub unit_price: i64,
    pub total_price: i64,
    pub percentage_in_invoice: f64,
    pub is_expired: bool,
}

impl FlatRecord {
    /// Display form matching [`OUTPUT_COLUMNS`], used for CSV and table output.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.invoice_id.clone(),
            self.created_on.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.invoiceitem_id.clone(),
            self.invoiceitem_name.clone(),
            self.category.label().to_string(),
            self.unit_price.to_string(),
            self.total_price.to_string(),
            self.percentage_in_invoice.to_string(),
            self.is_expired.to_string(),
        ]
    }
}

/// Sum of `unit_price * quantity` over an invoice's items, after coercion.
pub fn invoice_total(invoice: &Invoice) -> i64 {
    invoice
        .items
        .iter()
        .map(|line| line.item.unit_price.coerce_int() * line.quantity.coerce_int())
        .sum()
}

/// Flattens all invoices into one sorted table of per-line-item records.
pub fn flatten(invoices: &[Invoice], expired_ids: &HashSet<String>) -> Result<Vec<FlatRecord>> {
    let mut records = Vec::with_capacity(invoices.iter().map(|inv| inv.items.len()).sum());
    for invoice in invoices {
        let total = invoice_total(invoice);
        let is_expired = expired_ids.contains(&invoice.id);
        let created_on = parse_timestamp(&invoice.created_on)
            .with_context(|| format!("Invoice '{}': invalid created_on", invoice.id))?;

        for line in &invoice.items {
            let unit_price = line.item.unit_price.coerce_int();
            let quantity = line.quantity.coerce_int();
            let total_price = unit_price * quantity;
            let percentage_in_invoice = if total != 0 {
                total_price as f64 / total as f64
            } else {
                0.0
            };
            records.push(FlatRecord {
                invoice_id: invoice.id.clone(),
                created_on,
                invoiceitem_id: line.item.id.clone(),
                invoiceitem_name: line.item.name.clone(),
                category: line.item.category,
                unit_price,
                total_price,
                percentage_in_invoice,
                is_expired,
            });
        }
    }

    records.sort_by(|a, b| {
        (a.invoice_id.as_str(), a.invoiceitem_id.as_str())
            .cmp(&(b.invoice_id.as_str(), b.invoiceitem_id.as_str()))
    });
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawNumber;
    use crate::invoice::{ItemSpec, LineItem};

    fn line(id: &str, name: &str, category: Category, unit_price: &str, quantity: &str) -> LineItem {
        LineItem {
            item: ItemSpec {
                id: id.to_string(),
                name: name.to_string(),
                category,
                unit_price: RawNumber::Text(unit_price.to_string()),
            },
            quantity: RawNumber::Text(quantity.to_string()),
        }
    }

    #[test]
    fn invoice_total_coerces_bad_values_to_zero() {
        let invoice = Invoice {
            id: "A1".into(),
            created_on: "2024-01-01".into(),
            items: vec![
                line("I1", "Widget", Category::Material, "10", "2"),
                line("I2", "Gadget", Category::Service, "oops", "5"),
            ],
        };
        assert_eq!(invoice_total(&invoice), 20);
    }

    #[test]
    fn zero_total_invoice_emits_zero_percentages() {
        let invoice = Invoice {
            id: "Z1".into(),
            created_on: "2024-02-02".into(),
            items: vec![
                line("I1", "Freebie", Category::Other, "0", "3"),
                line("I2", "Sample", Category::Other, "n/a", "1"),
            ],
        };
        let records = flatten(&[invoice], &HashSet::new()).expect("flatten");
        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.percentage_in_invoice, 0.0);
            assert_eq!(record.total_price, 0);
        }
    }

    #[test]
    fn unparseable_created_on_is_fatal() {
        let invoice = Invoice {
            id: "B2".into(),
            created_on: "sometime last week".into(),
            items: vec![line("I1", "Widget", Category::Material, "5", "1")],
        };
        let err = flatten(&[invoice], &HashSet::new()).unwrap_err();
        assert!(err.to_string().contains("B2"));
    }
}
