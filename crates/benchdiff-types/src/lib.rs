//! Foundation types for benchdiff.
//!
//! This crate provides the value model shared by the differ, the renderers,
//! and the command-line front end. Every other benchdiff crate depends on
//! `benchdiff-types`.
//!
//! # Key Types
//!
//! - [`Document`] — A decoded benchmark report (nested mapping of numbers and strings)
//! - [`DiffNode`] — Sparse difference tree produced by comparing two documents
//! - [`Delta`] — A plain numeric difference (absolute or relative)
//! - [`DiffConfig`] — Difference style, relative precision, and output format
//! - [`Sentinel`] — The fixed marker vocabulary (`!V`, `!B`, `!A`, `!T`, `+0`, `-0`)

pub mod config;
pub mod document;
pub mod error;
pub mod node;
pub mod sentinel;

pub use config::{DiffConfig, DifferenceStyle, OutputFormat, Precision};
pub use document::{Document, Number, MAX_DEPTH};
pub use error::{ConfigError, DocumentError, DocumentResult};
pub use node::{Delta, DiffNode};
pub use sentinel::Sentinel;
