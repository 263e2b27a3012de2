//! Input data model: invoices, line items, and the category enumeration.
//!
//! These structs are the validated shape of the upstream export. All
//! structural checks (missing fields, wrong shapes, unknown category codes)
//! happen here at deserialization time, so the transform stage never touches
//! loosely-typed data beyond [`RawNumber`].

use std::fmt;

use serde::{Deserialize, Deserializer, de};

use crate::data::RawNumber;

#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub created_on: String,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    pub item: ItemSpec,
    pub quantity: RawNumber,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub unit_price: RawNumber,
}

/// Closed classification of a line item, encoded upstream as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Material,
    Equipment,
    Service,
    Other,
}

impl Category {
    /// Fixed code mapping. Codes outside 0-3 are rejected at load time.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Category::Material),
            1 => Some(Category::Equipment),
            2 => Some(Category::Service),
            3 => Some(Category::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Material => "Material",
            Category::Equipment => "Equipment",
            Category::Service => "Service",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        Category::from_code(code).ok_or_else(|| {
            de::Error::custom(format!("unknown category code {code}, expected 0-3"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_codes_map_to_fixed_labels() {
        assert_eq!(Category::from_code(0), Some(Category::Material));
        assert_eq!(Category::from_code(1), Some(Category::Equipment));
        assert_eq!(Category::from_code(2), Some(Category::Service));
        assert_eq!(Category::from_code(3), Some(Category::Other));
        assert_eq!(Category::from_code(4), None);
        assert_eq!(Category::from_code(-1), None);
        assert_eq!(Category::Service.label(), "Service");
    }

    #[test]
    fn invoice_deserializes_mixed_number_representations() {
        let raw = r#"{
            "id": "A1",
            "created_on": "2024-01-01",
            "items": [
                {"item": {"id": "I1", "name": "Widget", "type": 0, "unit_price": "10"}, "quantity": 2},
                {"item": {"id": "I2", "name": "Gadget", "type": 1, "unit_price": 30}, "quantity": "1"}
            ]
        }"#;
        let invoice: Invoice = serde_json::from_str(raw).expect("parse invoice");
        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].item.category, Category::Material);
        assert_eq!(invoice.items[0].item.unit_price.coerce_int(), 10);
        assert_eq!(invoice.items[1].quantity.coerce_int(), 1);
    }

    #[test]
    fn unknown_category_code_is_a_parse_error() {
        let raw = r#"{"id": "I9", "name": "Mystery", "type": 7, "unit_price": "1"}"#;
        let err = serde_json::from_str::<ItemSpec>(raw).unwrap_err();
        assert!(err.to_string().contains("unknown category code 7"));
    }
}
