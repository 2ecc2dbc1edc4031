//! Recursive comparison of two benchmark reports.
//!
//! Mappings are compared key by key over the union of both key sets. Leaves
//! are compared numerically. Anything that cannot be compared (missing
//! values, strings, mismatched versions) becomes a sentinel marker in the
//! output instead of an error, so every pair of reports yields a diff.

use std::collections::{BTreeMap, BTreeSet};

use benchdiff_types::document::VERSION_KEY;
use benchdiff_types::{Delta, DiffConfig, DiffNode, DifferenceStyle, Document, Number, Sentinel};
use tracing::{debug, trace};

use crate::numeric::{round_decimal, NumberDiff};

/// Compares reports according to a [`DiffConfig`].
#[derive(Clone, Copy, Debug)]
pub struct Differ<'a> {
    config: &'a DiffConfig,
}

impl<'a> Differ<'a> {
    pub fn new(config: &'a DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        self.config
    }

    /// Compare two whole reports.
    pub fn run(&self, before: &Document, after: &Document) -> DiffNode {
        let diff = self.compare(before, after);
        debug!(
            style = %self.config.difference_style,
            precision = %self.config.relative_precision,
            changed = diff.as_map().map_or(1, BTreeMap::len),
            "comparison complete"
        );
        diff
    }

    /// Compare the values found at the same path in both reports.
    ///
    /// Returns an empty map when there is no difference.
    pub fn compare(&self, before: &Document, after: &Document) -> DiffNode {
        match (before, after) {
            (Document::Map(_), Document::Map(_)) => self.compare_maps(before, after),
            _ => self.compare_scalars(before, after),
        }
    }

    fn compare_maps(&self, before: &Document, after: &Document) -> DiffNode {
        if before.version() != after.version() {
            debug!(
                before = ?before.version(),
                after = ?after.version(),
                "version mismatch; skipping subtree"
            );
            return self.literal(Sentinel::VersionMismatch);
        }

        let keys: BTreeSet<&String> = before
            .as_map()
            .into_iter()
            .chain(after.as_map())
            .flat_map(BTreeMap::keys)
            .filter(|key| key.as_str() != VERSION_KEY)
            .collect();

        let mut diff = BTreeMap::new();
        for key in keys {
            let child = self.compare(before.get(key), after.get(key));
            if child.is_empty() {
                continue;
            }
            trace!(key = %key, "difference found");
            diff.insert(key.clone(), child);
        }
        DiffNode::Map(diff)
    }

    /// Compare two values where at least one is not a mapping.
    pub fn compare_scalars(&self, before: &Document, after: &Document) -> DiffNode {
        match (before, after) {
            (Document::Absent, Document::Absent) => DiffNode::empty(),
            (Document::Absent, _) => self.literal(Sentinel::MissingBefore),
            (_, Document::Absent) => self.literal(Sentinel::MissingAfter),
            (Document::Number(b), Document::Number(a)) => {
                if b == a {
                    return DiffNode::empty();
                }
                let diff = self.diff_numbers(*b, *a);
                match self.config.difference_style {
                    DifferenceStyle::HumanReadable => DiffNode::Text(self.humanize_number(diff)),
                    _ => diff.into_node(),
                }
            }
            _ if before == after => DiffNode::empty(),
            _ => self.literal(Sentinel::TypeMismatch),
        }
    }

    /// Numeric difference in the configured style.
    ///
    /// Human-readable style uses the relative computation; the percentage
    /// conversion happens in [`Differ::humanize_number`].
    pub fn diff_numbers(&self, before: Number, after: Number) -> NumberDiff {
        match self.config.difference_style {
            DifferenceStyle::Absolute => NumberDiff::Delta(absolute(before, after)),
            DifferenceStyle::Relative | DifferenceStyle::HumanReadable => {
                self.relative(before, after)
            }
        }
    }

    fn relative(&self, before: Number, after: Number) -> NumberDiff {
        let (before, after) = (before.as_f64(), after.as_f64());
        if before == 0.0 {
            return if after > 0.0 {
                NumberDiff::Infinite { negative: false }
            } else if after < 0.0 {
                NumberDiff::Infinite { negative: true }
            } else {
                NumberDiff::Delta(Delta::Int(0))
            };
        }

        let raw = (after - before) / before.abs();
        let Some(digits) = self.config.relative_precision.digits() else {
            return NumberDiff::Delta(Delta::normalized(raw));
        };

        let rounded = round_decimal(raw, digits);
        if rounded == 0.0 && raw < 0.0 {
            NumberDiff::RoundedToZero(Sentinel::RoundedNegative)
        } else if rounded == 0.0 && raw > 0.0 {
            NumberDiff::RoundedToZero(Sentinel::RoundedPositive)
        } else {
            NumberDiff::Delta(Delta::normalized(rounded))
        }
    }
}

fn absolute(before: Number, after: Number) -> Delta {
    if let (Number::Int(b), Number::Int(a)) = (before, after) {
        if let Some(diff) = a.checked_sub(b) {
            return Delta::Int(diff);
        }
    }
    Delta::normalized(after.as_f64() - before.as_f64())
}
