//! The AI-extracted invoice record, as untrusted input.
//!
//! Every field is optional. Decoding is lenient: a value of the wrong JSON
//! type is treated as absent instead of failing the whole record, because the
//! extractor that produced it is frequently wrong about types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use invoiceqc_core::{DomainError, DomainResult};

/// One row of an invoice's itemised billing detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

/// The `line_items` field as found in the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LineItems {
    Items(Vec<LineItem>),
    /// Present but not a sequence; kept verbatim.
    Malformed(Value),
}

impl LineItems {
    /// The items, if the field was a sequence.
    pub fn as_slice(&self) -> Option<&[LineItem]> {
        match self {
            LineItems::Items(items) => Some(items),
            LineItems::Malformed(_) => None,
        }
    }
}

impl From<Vec<LineItem>> for LineItems {
    fn from(items: Vec<LineItem>) -> Self {
        LineItems::Items(items)
    }
}

/// Raw, AI-extracted representation of one invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct InvoiceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<LineItems>,
}

impl InvoiceRecord {
    /// Decode a record from any JSON value. Never fails.
    ///
    /// Non-object values decode to the empty record.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            invoice_number: text_field(obj, "invoice_number"),
            vendor_name: text_field(obj, "vendor_name"),
            buyer_name: text_field(obj, "buyer_name"),
            invoice_date: text_field(obj, "invoice_date"),
            due_date: text_field(obj, "due_date"),
            currency: text_field(obj, "currency"),
            total_amount: number_field(obj, "total_amount"),
            line_items: line_items_field(obj),
        }
    }

    /// Decode a record from JSON text.
    ///
    /// Fails only when the text is not JSON; any JSON value yields a record.
    pub fn from_json_str(s: &str) -> DomainResult<Self> {
        let value: Value =
            serde_json::from_str(s).map_err(|e| DomainError::decode(e.to_string()))?;
        Ok(Self::from_value(&value))
    }

    /// Line items, when the field was a sequence.
    pub fn items(&self) -> Option<&[LineItem]> {
        self.line_items.as_ref().and_then(LineItems::as_slice)
    }
}

impl From<Value> for InvoiceRecord {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl LineItem {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            description: text_field(obj, "description"),
            quantity: number_field(obj, "quantity"),
            unit_price: number_field(obj, "unit_price"),
            total: number_field(obj, "total"),
        }
    }
}

impl From<Value> for LineItem {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Strings verbatim, numbers as their JSON text; anything else is absent.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// JSON numbers only. String-typed numerics are the extractor's problem.
fn number_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key)?.as_f64().filter(|n| n.is_finite())
}

fn line_items_field(obj: &Map<String, Value>) -> Option<LineItems> {
    match obj.get("line_items")? {
        Value::Null => None,
        Value::Array(values) => Some(LineItems::Items(
            values.iter().map(LineItem::from_value).collect(),
        )),
        other => Some(LineItems::Malformed(other.clone())),
    }
}

/// A text field that is present and non-empty.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A numeric field that is present and non-zero.
pub(crate) fn non_zero(field: Option<f64>) -> Option<f64> {
    field.filter(|n| *n != 0.0)
}
