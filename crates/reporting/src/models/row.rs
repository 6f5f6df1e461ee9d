use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A `(type label, numeric-string value)` conversion count.
///
/// The platform serializes every value as a string; malformed values are
/// treated as zero by the consumers, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action_type: String,
    pub value: String,
}

impl ActionRecord {
    /// The numeric value of this record; `0.0` when the string is malformed.
    pub fn numeric_value(&self) -> f64 {
        self.value.trim().parse().unwrap_or(0.0)
    }
}

/// One field of a report row: either a scalar rendered as text or a list
/// of action records (the `actions` / `action_values` fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Actions(Vec<ActionRecord>),
    Text(String),
}

/// One row of a tier response.
///
/// The upstream schema is open ended, so a row is a plain field map with
/// lenient accessors: a missing or malformed field reads as zero/empty
/// rather than failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportRow {
    fields: HashMap<String, FieldValue>,
}

impl ReportRow {
    /// The raw text of a scalar field, if present.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// A scalar field parsed as a float; `0.0` when absent or malformed.
    pub fn number(&self, field: &str) -> f64 {
        self.text(field)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0.0)
    }

    /// A scalar field parsed as a count; `0` when absent or malformed.
    /// Fractional strings are truncated toward zero.
    pub fn count(&self, field: &str) -> u64 {
        self.number(field).max(0.0) as u64
    }

    /// The action records of a list field, if present.
    pub fn actions(&self, field: &str) -> Option<&[ActionRecord]> {
        match self.fields.get(field) {
            Some(FieldValue::Actions(records)) => Some(records.as_slice()),
            _ => None,
        }
    }
}
