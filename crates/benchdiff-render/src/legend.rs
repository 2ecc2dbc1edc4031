//! Legend appended to markdown reports.

use benchdiff_types::Sentinel;

/// One legend line per sentinel, in fixed order.
pub fn lines() -> impl Iterator<Item = String> {
    Sentinel::ALL
        .into_iter()
        .map(|sentinel| format!("`{}` = {}", sentinel.code(), sentinel.description()))
}

/// The legend as a block of text, one line per marker, newline-terminated.
pub fn markdown() -> String {
    let mut text = lines().collect::<Vec<_>>().join("\n");
    text.push('\n');
    text
}
