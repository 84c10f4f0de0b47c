//! Lenient input scalars for admin-form payloads
//!
//! The admin dashboard and spreadsheet-derived tooling send product fields
//! in loose shapes: prices as numbers or numeric strings, flags as
//! booleans / 0/1 / "true", image lists as arrays or comma-separated
//! strings. These untagged wrappers accept every shape at the serde layer
//! so the write path can reject bad values with field-level messages
//! instead of opaque deserialization errors.

use serde::{Deserialize, Serialize};

/// A JSON number or a string holding one (`12.5`, `"12.5"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    /// The numeric value, if the input actually holds one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// A boolean in any of the shapes clients send: `true`, `1`, `"true"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolInput {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl BoolInput {
    /// The boolean value, if the input can be read as one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BoolInput::Bool(b) => Some(*b),
            BoolInput::Int(n) => Some(*n != 0),
            BoolInput::Text(s) => match s.trim() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
        }
    }
}

/// An image list: a JSON array of URLs or one comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImagesInput {
    List(Vec<String>),
    Text(String),
}
