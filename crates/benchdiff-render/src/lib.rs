//! Report rendering for benchdiff.
//!
//! Turns a [`DiffNode`](benchdiff_types::DiffNode) into text: either
//! pretty-printed JSON preserving the tree shape, or one markdown table per
//! preset followed by a legend of the sentinel markers.
//!
//! # Key Types
//!
//! - [`TableRenderer`] -- Markdown tables over a project → preset → attribute diff
//! - [`render_json`] -- Structured output with 4-space indentation
//! - [`render_report`] -- Picks the renderer matching the configured output format

pub mod error;
pub mod legend;
pub mod output;
pub mod structured;
pub mod table;

pub use error::{RenderError, RenderResult};
pub use output::render_report;
pub use structured::render_json;
pub use table::TableRenderer;
