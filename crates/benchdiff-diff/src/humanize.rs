//! Human-readable rendering of individual differences.
//!
//! Percentages carry a sign and a marker: `✅` for a decrease (lower is
//! better for benchmark timings) and `❌` for an increase. In markdown output
//! every value is wrapped in backticks and non-zero changes are bolded; JSON
//! output gets no decorations.

use benchdiff_types::{Delta, DiffNode, Sentinel};

use crate::differ::Differ;
use crate::numeric::{round_decimal, NumberDiff};

const FAVORABLE: &str = " ✅";
const UNFAVORABLE: &str = " ❌";

impl Differ<'_> {
    /// Decorate a sentinel marker.
    ///
    /// Literal markers such as `!V` are shown as-is; the rounded-to-zero
    /// markers read as a percentage (`+0%`). Neither is ever bolded.
    pub fn humanize_sentinel(&self, sentinel: Sentinel) -> String {
        if sentinel.is_literal() {
            self.wrap_literal(sentinel.code())
        } else {
            self.wrap_literal(&format!("{sentinel}%"))
        }
    }

    /// Render a numeric outcome as a decorated percentage.
    pub fn humanize_number(&self, diff: NumberDiff) -> String {
        let (text, important) = match diff {
            NumberDiff::Delta(delta) => {
                let percent = self.percentage(delta);
                let (prefix, suffix) = if delta.is_negative() {
                    ("", FAVORABLE)
                } else if delta.is_positive() {
                    ("+", UNFAVORABLE)
                } else {
                    ("", "")
                };
                (format!("{prefix}{percent}%{suffix}"), !delta.is_zero())
            }
            NumberDiff::RoundedToZero(sentinel) => return self.humanize_sentinel(sentinel),
            other => (format!("{}%", other.marker().unwrap_or_default()), false),
        };

        let literal = self.wrap_literal(&text);
        if important && self.config().is_markdown() {
            format!("**{literal}**")
        } else {
            literal
        }
    }

    pub(crate) fn literal(&self, sentinel: Sentinel) -> DiffNode {
        DiffNode::Text(self.humanize_sentinel(sentinel))
    }

    /// Scale a ratio to percent.
    ///
    /// The ×100 shift moves the rounding position by two places, so the
    /// result is re-rounded to `precision - 2` digits.
    fn percentage(&self, ratio: Delta) -> Delta {
        match ratio {
            Delta::Int(v) => v
                .checked_mul(100)
                .map(Delta::Int)
                .unwrap_or_else(|| Delta::normalized(v as f64 * 100.0)),
            Delta::Float(v) => {
                let scaled = v * 100.0;
                let scaled = match self.config().relative_precision.digits() {
                    Some(digits) => round_decimal(scaled, digits.saturating_sub(2)),
                    None => scaled,
                };
                Delta::normalized(scaled)
            }
        }
    }

    fn wrap_literal(&self, text: &str) -> String {
        if self.config().is_markdown() {
            format!("`{text}`")
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchdiff_types::{DiffConfig, DifferenceStyle, OutputFormat, Precision};

    fn markdown() -> DiffConfig {
        DiffConfig::default()
    }

    fn json() -> DiffConfig {
        DiffConfig::default().with_format(OutputFormat::Json)
    }

    #[test]
    fn sentinels() {
        let config = markdown();
        let differ = Differ::new(&config);
        assert_eq!(differ.humanize_sentinel(Sentinel::VersionMismatch), "`!V`");
        assert_eq!(differ.humanize_sentinel(Sentinel::RoundedPositive), "`+0%`");

        let config = json();
        let differ = Differ::new(&config);
        assert_eq!(differ.humanize_sentinel(Sentinel::TypeMismatch), "!T");
        assert_eq!(differ.humanize_sentinel(Sentinel::RoundedNegative), "-0%");
    }

    #[test]
    fn improvements_and_regressions() {
        let config = markdown();
        let differ = Differ::new(&config);
        assert_eq!(
            differ.humanize_number(NumberDiff::Delta(Delta::Float(-0.125))),
            "**`-12.5% ✅`**"
        );
        assert_eq!(
            differ.humanize_number(NumberDiff::Delta(Delta::Int(2))),
            "**`+200% ❌`**"
        );
        assert_eq!(differ.humanize_number(NumberDiff::Delta(Delta::Int(0))), "`0%`");
    }

    #[test]
    fn rounded_markers_are_not_important() {
        let config = markdown();
        let differ = Differ::new(&config);
        assert_eq!(
            differ.humanize_number(NumberDiff::RoundedToZero(Sentinel::RoundedNegative)),
            "`-0%`"
        );
        assert_eq!(
            differ.humanize_number(NumberDiff::Infinite { negative: true }),
            "`-INF%`"
        );
    }

    #[test]
    fn json_output_has_no_decorations() {
        let config = json();
        let differ = Differ::new(&config);
        assert_eq!(
            differ.humanize_number(NumberDiff::Delta(Delta::Float(0.0525))),
            "+5.25% ❌"
        );
        assert_eq!(
            differ.humanize_number(NumberDiff::RoundedToZero(Sentinel::RoundedPositive)),
            "+0%"
        );
    }

    #[test]
    fn percentages_are_rerounded_two_places_earlier() {
        // 0.1235 * 100 carries float noise that rounding to 2 places removes.
        let config = json();
        let differ = Differ::new(&config);
        assert_eq!(
            differ.humanize_number(NumberDiff::Delta(Delta::Float(0.1235))),
            "+12.35% ❌"
        );

        let config = json().with_precision(Precision::Digits(2));
        let differ = Differ::new(&config);
        assert_eq!(
            differ.humanize_number(NumberDiff::Delta(Delta::Float(0.57))),
            "+57% ❌"
        );
    }

    #[test]
    fn huge_precision_leaves_percentages_unrounded() {
        let config = json().with_precision(Precision::Digits(i32::MAX));
        let differ = Differ::new(&config);
        assert_eq!(
            differ.humanize_number(NumberDiff::Delta(Delta::Float(0.125))),
            "+12.5% ❌"
        );
    }

    #[test]
    fn unrounded_percentages() {
        let config = json()
            .with_style(DifferenceStyle::HumanReadable)
            .with_precision(Precision::Unrounded);
        let differ = Differ::new(&config);
        assert_eq!(
            differ.humanize_number(NumberDiff::Delta(Delta::Float(-0.5))),
            "-50% ✅"
        );
    }
}
