//! Markdown tables for a three-level diff.
//!
//! The diff is read as `project → preset → attribute → value`. Each preset
//! gets its own table with one row per project and one column per
//! attribute. Row and column sets are shared by every table so that the
//! tables line up when read one after another.

use std::collections::{BTreeMap, BTreeSet};

use benchdiff_types::DiffNode;
use tracing::debug;

use crate::legend;

const PROJECT_HEADER: &str = "project";

/// Renders diffs as markdown tables followed by the sentinel legend.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `diff` as one table per preset plus the legend.
    ///
    /// A root that is not a mapping (such as a whole-report `!V`) is written
    /// as a single line before the legend.
    pub fn render(&self, diff: &DiffNode) -> String {
        let mut out = String::new();
        match diff.as_map() {
            Some(projects) => self.render_tables(projects, &mut out),
            None => out.push_str(&format!("\n{}\n", cell_text(diff))),
        }
        out.push_str("\n\n");
        out.push_str(&legend::markdown());
        out.push('\n');
        out
    }

    fn render_tables(&self, projects: &BTreeMap<String, DiffNode>, out: &mut String) {
        let presets = preset_names(projects);
        let attributes = attribute_names(projects);

        let project_width = projects
            .keys()
            .map(|name| width(name))
            .chain([width(PROJECT_HEADER)])
            .max()
            .unwrap_or_default();

        for preset in &presets {
            let rows: Vec<Vec<String>> = projects
                .iter()
                .map(|(project, project_diff)| {
                    std::iter::once(project.clone())
                        .chain(
                            attributes
                                .iter()
                                .map(|attribute| cell_content(project_diff, preset, attribute)),
                        )
                        .collect()
                })
                .collect();

            let header: Vec<String> = std::iter::once(PROJECT_HEADER.to_string())
                .chain(attributes.iter().map(|a| a.to_string()))
                .collect();

            let widths: Vec<usize> = std::iter::once(project_width)
                .chain((1..header.len()).map(|column| {
                    rows.iter()
                        .map(|row| width(&row[column]))
                        .chain([width(&header[column])])
                        .max()
                        .unwrap_or_default()
                }))
                .collect();

            out.push_str(&format!("\n### `{preset}`\n"));
            out.push_str(&data_row(&header, &widths));
            out.push_str(&separator_row(&widths));
            for row in &rows {
                out.push_str(&data_row(row, &widths));
            }
        }

        debug!(
            projects = projects.len(),
            presets = presets.len(),
            attributes = attributes.len(),
            "rendered markdown tables"
        );
    }
}

/// Second-level keys across all projects, sorted.
fn preset_names(projects: &BTreeMap<String, DiffNode>) -> BTreeSet<&str> {
    projects
        .values()
        .filter_map(DiffNode::as_map)
        .flat_map(|presets| presets.keys().map(String::as_str))
        .collect()
}

/// Third-level keys across all project/preset pairs, sorted.
fn attribute_names(projects: &BTreeMap<String, DiffNode>) -> BTreeSet<&str> {
    projects
        .values()
        .filter_map(DiffNode::as_map)
        .flat_map(BTreeMap::values)
        .filter_map(DiffNode::as_map)
        .flat_map(|attributes| attributes.keys().map(String::as_str))
        .collect()
}

/// What to show for one (project, preset, attribute) cell.
///
/// A scalar at the project or preset level fills every cell beneath it.
fn cell_content(project_diff: &DiffNode, preset: &str, attribute: &str) -> String {
    let presets = match project_diff {
        DiffNode::Map(presets) => presets,
        other => return cell_text(other),
    };
    match presets.get(preset) {
        None => String::new(),
        Some(DiffNode::Map(attributes)) => attributes
            .get(attribute)
            .map(cell_text)
            .unwrap_or_default(),
        Some(other) => cell_text(other),
    }
}

fn cell_text(node: &DiffNode) -> String {
    match node {
        DiffNode::Text(text) => text.clone(),
        DiffNode::Delta(delta) => delta.to_string(),
        DiffNode::Map(_) => serde_json::to_string(node).unwrap_or_default(),
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn data_row(cells: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect();
    format!("| {} |\n", cells.join(" | "))
}

fn separator_row(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
    format!("|:{}:|\n", dashes.join(":|-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn node(value: Value) -> DiffNode {
        serde_json::from_value(value).unwrap()
    }

    fn render(value: Value) -> String {
        TableRenderer::new().render(&node(value))
    }

    #[test]
    fn single_cell_table() {
        let text = render(json!({"p1": {"preset1": {"attrA": "+5%"}}}));
        let expected_tables = "\n### `preset1`\n\
                               | project | attrA |\n\
                               |:-------:|------:|\n\
                               |      p1 |   +5% |\n";
        assert!(text.starts_with(expected_tables), "got:\n{text}");
        assert!(text.contains("`!V` = version mismatch"));
    }

    #[test]
    fn full_layout_is_exact() {
        let text = render(json!({
            "solidity": {"ir": {"gas": "`-1% ✅`"}},
            "zz": {"legacy": {"bytecode": "`+2%`", "gas": "x"}}
        }));
        let expected = [
            "",
            "### `ir`",
            "|  project | bytecode |     gas |",
            "|:--------:|---------:|--------:|",
            "| solidity |          | `-1% ✅` |",
            "|       zz |          |         |",
            "",
            "### `legacy`",
            "|  project | bytecode | gas |",
            "|:--------:|---------:|----:|",
            "| solidity |          |     |",
            "|       zz |    `+2%` |   x |",
            "",
            "",
            "",
        ]
        .join("\n");
        let legend = legend::markdown();
        assert_eq!(text, format!("{expected}{legend}\n"));
    }

    #[test]
    fn project_level_scalar_fills_every_cell() {
        let text = render(json!({
            "alpha": "`!V`",
            "beta": {"s": {"t": "a", "u": "b"}}
        }));
        assert!(text.contains("|   alpha | `!V` | `!V` |"), "got:\n{text}");
        assert!(text.contains("|    beta |    a |    b |"), "got:\n{text}");
    }

    #[test]
    fn preset_level_scalar_fills_its_cells() {
        let text = render(json!({
            "alpha": {"s": "`!B`", "r": {"t": "1"}},
            "beta": {"s": {"t": "a"}}
        }));
        assert!(text.contains("### `r`"));
        assert!(text.contains("### `s`"));
        assert!(text.contains("|   alpha | `!B` |"), "got:\n{text}");
        assert!(text.contains("|    beta |    a |"), "got:\n{text}");
        assert!(text.contains("|    beta |   |"), "got:\n{text}");
    }

    #[test]
    fn missing_cells_are_blank() {
        let text = render(json!({
            "a": {"s": {"x": "1"}},
            "b": {"s": {"y": "2"}}
        }));
        assert!(text.contains("| project | x | y |"), "got:\n{text}");
        assert!(text.contains("|       a | 1 |   |"), "got:\n{text}");
        assert!(text.contains("|       b |   | 2 |"), "got:\n{text}");
    }

    #[test]
    fn numeric_cells_use_number_text() {
        let text = render(json!({"proj": {"s": {"n": -3, "f": 0.25}}}));
        assert!(text.contains("|    proj | 0.25 | -3 |"), "got:\n{text}");
    }

    #[test]
    fn columns_fit_longest_content() {
        let text = render(json!({
            "p": {"s": {"a": "a-much-longer-value"}},
            "a-very-long-project-name": {"s": {"a": "1"}}
        }));
        for line in text.lines().filter(|l| l.starts_with('|')) {
            assert_eq!(
                line.chars().count(),
                "| a-very-long-project-name | a-much-longer-value |".chars().count()
            );
        }
    }

    #[test]
    fn rows_are_newline_terminated() {
        let widths = [3, 2];
        assert_eq!(
            data_row(&["a".to_string(), "bc".to_string()], &widths),
            "|   a | bc |\n"
        );
        assert_eq!(separator_row(&widths), "|:---:|---:|\n");
    }

    #[test]
    fn scalar_root_is_a_single_line() {
        let text = TableRenderer::new().render(&DiffNode::from("`!V`"));
        assert!(text.starts_with("\n`!V`\n\n\n`!V` = version mismatch"), "got:\n{text}");
        assert!(!text.contains("###"));
    }

    #[test]
    fn empty_diff_renders_only_the_legend() {
        let text = TableRenderer::new().render(&DiffNode::empty());
        assert_eq!(text, format!("\n\n{}\n", legend::markdown()));
    }

    #[test]
    fn rendering_is_deterministic() {
        let diff = node(json!({
            "b": {"y": {"k": "1"}, "x": {"j": "2"}},
            "a": {"x": {"k": "3"}}
        }));
        let renderer = TableRenderer::new();
        assert_eq!(renderer.render(&diff), renderer.render(&diff));
    }

    #[test]
    fn renders_output_of_the_differ() {
        use benchdiff_diff::Differ;
        use benchdiff_types::{DiffConfig, Document};

        let before = Document::from_json(&json!({"p": {"s": {"t": 100}}})).unwrap();
        let after = Document::from_json(&json!({"p": {"s": {"t": 90}}})).unwrap();
        let config = DiffConfig::default();
        let diff = Differ::new(&config).run(&before, &after);

        let text = TableRenderer::new().render(&diff);
        assert!(text.contains("|       p | **`-10% ✅`** |"), "got:\n{text}");
    }
}
