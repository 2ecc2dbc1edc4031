use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How numeric differences are expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifferenceStyle {
    /// `after - before`.
    Absolute,
    /// `(after - before) / |before|`.
    Relative,
    /// Relative difference rendered as a decorated percentage.
    #[default]
    HumanReadable,
}

impl DifferenceStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Relative => "relative",
            Self::HumanReadable => "human-readable",
        }
    }
}

impl fmt::Display for DifferenceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifferenceStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "absolute" => Ok(Self::Absolute),
            "relative" => Ok(Self::Relative),
            "human-readable" => Ok(Self::HumanReadable),
            other => Err(ConfigError::UnknownStyle(other.to_string())),
        }
    }
}

/// Shape of the final report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Machine-readable JSON; no decorations.
    Json,
    /// Markdown tables; literals in backticks, significant changes in bold.
    #[default]
    Markdown,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "markdown" => Ok(Self::Markdown),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Rounding applied to relative differences.
///
/// `Digits(n)` keeps `n` digits after the decimal point of the ratio; a
/// negative `n` rounds to tens, hundreds, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PrecisionRepr", into = "PrecisionRepr")]
pub enum Precision {
    Unrounded,
    Digits(i32),
}

impl Precision {
    pub const DEFAULT_DIGITS: i32 = 4;

    pub const fn digits(self) -> Option<i32> {
        match self {
            Self::Unrounded => None,
            Self::Digits(n) => Some(n),
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::Digits(Self::DEFAULT_DIGITS)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrounded => f.write_str("none"),
            Self::Digits(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Precision {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::Unrounded);
        }
        trimmed
            .parse::<i32>()
            .map(Self::Digits)
            .map_err(|_| ConfigError::InvalidPrecision(s.to_string()))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PrecisionRepr {
    Digits(i32),
    Word(String),
}

impl TryFrom<PrecisionRepr> for Precision {
    type Error = ConfigError;

    fn try_from(repr: PrecisionRepr) -> Result<Self, Self::Error> {
        match repr {
            PrecisionRepr::Digits(n) => Ok(Self::Digits(n)),
            PrecisionRepr::Word(word) => word.parse(),
        }
    }
}

impl From<Precision> for PrecisionRepr {
    fn from(precision: Precision) -> Self {
        match precision {
            Precision::Unrounded => Self::Word("none".to_string()),
            Precision::Digits(n) => Self::Digits(n),
        }
    }
}

/// Settings for one comparison run.
///
/// Owned by the caller and passed by reference to the differ and the
/// renderers; never mutated once a comparison starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// How numeric differences are expressed.
    #[serde(rename = "style")]
    pub difference_style: DifferenceStyle,
    /// Rounding applied to relative differences.
    #[serde(rename = "precision")]
    pub relative_precision: Precision,
    /// Shape of the final report.
    #[serde(rename = "output-format")]
    pub output_format: OutputFormat,
}

impl DiffConfig {
    pub fn with_style(mut self, style: DifferenceStyle) -> Self {
        self.difference_style = style;
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.relative_precision = precision;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Returns `true` when output decorations (backticks, bold) apply.
    pub fn is_markdown(&self) -> bool {
        self.output_format == OutputFormat::Markdown
    }
}
