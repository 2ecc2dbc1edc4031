use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use benchdiff_diff::Differ;
use benchdiff_render::render_report;
use benchdiff_types::{DiffConfig, Document};
use tracing::info;

use crate::cli::Cli;

pub fn run_command(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    let before = load_report(&cli.report_before)?;
    let after = load_report(&cli.report_after)?;

    info!(
        before = %cli.report_before.display(),
        after = %cli.report_after.display(),
        style = %config.difference_style,
        format = %config.output_format,
        "comparing reports"
    );

    let diff = Differ::new(&config).run(&before, &after);
    let text = render_report(&diff, &config)?;
    writeln!(out, "{text}").context("failed to write report")?;
    Ok(())
}

/// Defaults, then the config file (if any), then explicit flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<DiffConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DiffConfig::default(),
    };
    if let Some(style) = cli.style {
        config = config.with_style(style.into());
    }
    if let Some(precision) = cli.precision {
        config = config.with_precision(precision);
    }
    if let Some(format) = cli.output_format {
        config = config.with_format(format.into());
    }
    Ok(config)
}

fn load_config(path: &Path) -> anyhow::Result<DiffConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn load_report(path: &Path) -> anyhow::Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read report {}", path.display()))?;
    Document::from_json_str(&text).with_context(|| format!("invalid report {}", path.display()))
}
