//! Diff engine for benchdiff.
//!
//! Walks two benchmark reports in lockstep and produces a sparse
//! [`DiffNode`](benchdiff_types::DiffNode) tree holding only the paths whose
//! values differ.
//!
//! # Key Types
//!
//! - [`Differ`] -- Recursive comparison driven by a [`DiffConfig`](benchdiff_types::DiffConfig)
//! - [`NumberDiff`] -- Outcome of comparing two numbers before humanization
//! - [`round_decimal`] -- Decimal-place rounding shared by relative and percentage output

pub mod differ;
pub mod humanize;
pub mod numeric;

pub use differ::Differ;
pub use numeric::{round_decimal, NumberDiff};
