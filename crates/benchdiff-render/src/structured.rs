use benchdiff_types::DiffNode;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::RenderResult;

const INDENT: &[u8] = b"    ";

/// Serialize a diff as pretty-printed JSON with 4-space indentation.
pub fn render_json(diff: &DiffNode) -> RenderResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    diff.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
