//! The sparse difference tree.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A plain numeric difference.
///
/// Integral results are always stored as [`Delta::Int`] so that `3.0 - 1.0`
/// reads as `2`, not `2.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Delta {
    Int(i64),
    Float(f64),
}

impl Delta {
    /// Wrap a float, collapsing it to an integer when it has no fractional part.
    pub fn normalized(value: f64) -> Self {
        // i64::MAX is not representable as f64; the exclusive bound keeps the cast exact.
        if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Self::Int(value as i64)
        } else {
            Self::Float(value)
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        self.as_f64() == 0.0
    }

    pub fn is_negative(self) -> bool {
        self.as_f64() < 0.0
    }

    pub fn is_positive(self) -> bool {
        self.as_f64() > 0.0
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// The result of comparing two documents (or sub-documents) at one path.
///
/// An empty [`DiffNode::Map`] means "no difference". A non-empty map never
/// holds an empty map as a value; those branches are pruned while the diff
/// is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiffNode {
    Map(BTreeMap<String, DiffNode>),
    Delta(Delta),
    Text(String),
}

impl DiffNode {
    /// The "no difference" value.
    pub fn empty() -> Self {
        Self::Map(BTreeMap::new())
    }

    /// Returns `true` if this node reports no difference.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Map(map) if map.is_empty())
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, DiffNode>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a child of a mapping node.
    pub fn get(&self, key: &str) -> Option<&DiffNode> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl Default for DiffNode {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Delta> for DiffNode {
    fn from(delta: Delta) -> Self {
        Self::Delta(delta)
    }
}

impl From<String> for DiffNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DiffNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
