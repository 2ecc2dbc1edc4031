use benchdiff_types::{DiffConfig, DiffNode, OutputFormat};

use crate::error::RenderResult;
use crate::structured::render_json;
use crate::table::TableRenderer;

/// Render `diff` in the output format selected by `config`.
pub fn render_report(diff: &DiffNode, config: &DiffConfig) -> RenderResult<String> {
    match config.output_format {
        OutputFormat::Json => render_json(diff),
        OutputFormat::Markdown => Ok(TableRenderer::new().render(diff)),
    }
}
