//! Decoded benchmark reports.
//!
//! A report is a nested mapping whose leaves are numbers or strings. JSON
//! values the comparison has no meaning for (booleans, arrays) are kept
//! verbatim in [`Document::Other`] so that equality checks still work.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{DocumentError, DocumentResult};

/// Maximum number of nested mapping levels accepted in a report.
pub const MAX_DEPTH: usize = 64;

/// Key reserved for the report format version.
pub const VERSION_KEY: &str = "version";

static ABSENT: Document = Document::Absent;

/// A numeric leaf, keeping the integer/float distinction of the input.
///
/// Equality is numeric: `Int(1) == Float(1.0)`.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    fn from_json(number: &serde_json::Number) -> Self {
        match number.as_i64() {
            Some(v) => Self::Int(v),
            // u64 beyond i64::MAX and real floats both land here.
            None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

/// One node of a benchmark report.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Document {
    /// No value at this path (missing key or JSON `null`).
    #[default]
    Absent,
    Number(Number),
    String(String),
    Map(BTreeMap<String, Document>),
    /// A JSON value with no numeric meaning (boolean or array).
    ///
    /// Booleans deliberately land here rather than in [`Document::Number`]:
    /// `true` vs `false` is reported as a type mismatch, not as `+1`.
    Other(Value),
}

impl Document {
    /// Decode a report from JSON text.
    pub fn from_json_str(text: &str) -> DocumentResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// Convert an already parsed JSON value.
    ///
    /// Fails with [`DocumentError::TooDeep`] when mappings nest deeper than
    /// [`MAX_DEPTH`].
    pub fn from_json(value: &Value) -> DocumentResult<Self> {
        convert(value, 0, &mut Vec::new())
    }

    /// The child at `key`, or [`Document::Absent`] when this is not a mapping
    /// or the key is missing.
    pub fn get(&self, key: &str) -> &Document {
        match self {
            Self::Map(map) => map.get(key).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }

    /// The `version` field of a mapping (absent when missing).
    pub fn version(&self) -> &Document {
        self.get(VERSION_KEY)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Document>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<i64> for Document {
    fn from(v: i64) -> Self {
        Self::Number(Number::Int(v))
    }
}

impl From<f64> for Document {
    fn from(v: f64) -> Self {
        Self::Number(Number::Float(v))
    }
}

impl From<&str> for Document {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

fn convert(value: &Value, depth: usize, path: &mut Vec<String>) -> DocumentResult<Document> {
    Ok(match value {
        Value::Null => Document::Absent,
        Value::Number(n) => Document::Number(Number::from_json(n)),
        Value::String(s) => Document::String(s.clone()),
        Value::Bool(_) | Value::Array(_) => Document::Other(value.clone()),
        Value::Object(object) => {
            if depth >= MAX_DEPTH {
                return Err(DocumentError::TooDeep {
                    limit: MAX_DEPTH,
                    path: path.join("."),
                });
            }
            let mut map = BTreeMap::new();
            for (key, child) in object {
                path.push(key.clone());
                let converted = convert(child, depth + 1, path)?;
                path.pop();
                map.insert(key.clone(), converted);
            }
            Document::Map(map)
        }
    })
}
