use std::path::PathBuf;

use benchdiff_types::{ConfigError, DifferenceStyle, OutputFormat, Precision};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "benchdiff",
    about = "Compare summarized benchmark reports and list only the differences",
    long_about = "Compares two summarized benchmark reports and outputs JSON with the same \
                  structure, listing only differences. Can also print the result as markdown \
                  tables with values formatted to make changes stand out.",
    version,
)]
pub struct Cli {
    /// JSON file with benchmark results from before the change
    pub report_before: PathBuf,

    /// JSON file with benchmark results from after the change
    pub report_after: PathBuf,

    /// How to present numeric differences [default: human-readable]
    #[arg(long)]
    pub style: Option<StyleArg>,

    /// Digits after the decimal point kept in relative differences, or "none".
    /// With --style=human-readable rounding happens before the conversion to a
    /// percentage, so add 2. Ignored with --style=absolute. [default: 4]
    #[arg(long, value_parser = parse_precision, allow_hyphen_values = true)]
    pub precision: Option<Precision>,

    /// Output format [default: markdown]
    #[arg(long)]
    pub output_format: Option<FormatArg>,

    /// TOML file providing defaults for style, precision and output-format
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StyleArg {
    Absolute,
    Relative,
    HumanReadable,
}

impl From<StyleArg> for DifferenceStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Absolute => Self::Absolute,
            StyleArg::Relative => Self::Relative,
            StyleArg::HumanReadable => Self::HumanReadable,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    Json,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Markdown => Self::Markdown,
        }
    }
}

fn parse_precision(value: &str) -> Result<Precision, ConfigError> {
    value.parse()
}
