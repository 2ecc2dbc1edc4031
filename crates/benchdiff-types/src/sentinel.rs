use std::fmt;

/// Fixed markers standing in for a difference that is not a plain number.
///
/// Codes starting with `!` describe a comparison that could not produce a
/// number at all. The `+0` / `-0` codes describe a real change too small to
/// survive rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// The two sides carry different `version` fields.
    VersionMismatch,
    /// The value exists only in the "after" report.
    MissingBefore,
    /// The value exists only in the "before" report.
    MissingAfter,
    /// At least one side is not numeric.
    TypeMismatch,
    /// A negative relative change rounded to zero.
    RoundedNegative,
    /// A positive relative change rounded to zero.
    RoundedPositive,
}

impl Sentinel {
    /// Every marker, in legend order.
    pub const ALL: [Sentinel; 6] = [
        Self::VersionMismatch,
        Self::MissingBefore,
        Self::MissingAfter,
        Self::TypeMismatch,
        Self::RoundedNegative,
        Self::RoundedPositive,
    ];

    /// The short code written into diffs.
    pub const fn code(self) -> &'static str {
        match self {
            Self::VersionMismatch => "!V",
            Self::MissingBefore => "!B",
            Self::MissingAfter => "!A",
            Self::TypeMismatch => "!T",
            Self::RoundedNegative => "-0",
            Self::RoundedPositive => "+0",
        }
    }

    /// One-line explanation used by the rendered legend.
    pub const fn description(self) -> &'static str {
        match self {
            Self::VersionMismatch => "version mismatch",
            Self::MissingBefore => "no value in the \"before\" version",
            Self::MissingAfter => "no value in the \"after\" version",
            Self::TypeMismatch => {
                "one or both values were not numeric and could not be compared"
            }
            Self::RoundedNegative => "very small negative value rounded to zero",
            Self::RoundedPositive => "very small positive value rounded to zero",
        }
    }

    /// Markers that report an incomparable pair rather than a magnitude.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::VersionMismatch | Self::MissingBefore | Self::MissingAfter | Self::TypeMismatch
        )
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes: std::collections::HashSet<_> =
            Sentinel::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes.len(), Sentinel::ALL.len());
    }

    #[test]
    fn only_bang_codes_are_literal() {
        for sentinel in Sentinel::ALL {
            assert_eq!(sentinel.is_literal(), sentinel.code().starts_with('!'));
        }
    }
}
