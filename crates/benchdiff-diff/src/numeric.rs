//! Numeric difference values and decimal rounding.

use benchdiff_types::{Delta, DiffNode, Sentinel};

/// Outcome of comparing two numbers, before any humanization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberDiff {
    /// A finite difference.
    Delta(Delta),
    /// Relative change from a zero baseline.
    Infinite { negative: bool },
    /// A relative change that rounding turned into zero.
    /// Holds [`Sentinel::RoundedPositive`] or [`Sentinel::RoundedNegative`].
    RoundedToZero(Sentinel),
}

impl NumberDiff {
    /// The marker text for non-numeric outcomes.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Delta(_) => None,
            Self::Infinite { negative: false } => Some("+INF"),
            Self::Infinite { negative: true } => Some("-INF"),
            Self::RoundedToZero(sentinel) => Some(sentinel.code()),
        }
    }

    /// The undecorated diff node: a number, or the marker as text.
    pub fn into_node(self) -> DiffNode {
        match self {
            Self::Delta(delta) => DiffNode::Delta(delta),
            other => DiffNode::Text(other.marker().unwrap_or_default().to_string()),
        }
    }
}

/// Beyond this many places every finite f64 is already exact (the smallest
/// subnormal, 2^-1074, has 1074 decimal places).
const MAX_DECIMAL_DIGITS: i32 = 1074;

/// Round `value` to `digits` places after the decimal point.
///
/// Negative `digits` round to the left of the point (`-2` rounds to
/// hundreds). Ties go to even on the exact binary value, so `2.675` rounds
/// to `2.67`.
pub fn round_decimal(value: f64, digits: i32) -> f64 {
    if !value.is_finite() || digits > MAX_DECIMAL_DIGITS {
        return value;
    }
    if digits >= 0 {
        // Float formatting is exact, so this is a correctly rounded decimal.
        return format!("{value:.prec$}", prec = digits as usize)
            .parse()
            .unwrap_or(value);
    }
    let scale = 10f64.powi(digits.saturating_neg());
    if !scale.is_finite() {
        return 0.0_f64.copysign(value);
    }
    (value / scale).round_ties_even() * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_decimal_places() {
        assert_eq!(round_decimal(0.123456, 4), 0.1235);
        assert_eq!(round_decimal(-0.123444, 4), -0.1234);
        assert_eq!(round_decimal(2.675, 2), 2.67);
        assert_eq!(round_decimal(1e-7, 4), 0.0);
        assert_eq!(round_decimal(7.5, 0), 8.0);
    }

    #[test]
    fn negative_digits_round_left_of_point() {
        assert_eq!(round_decimal(1234.5, -2), 1200.0);
        assert_eq!(round_decimal(-1260.0, -1), -1260.0);
        assert_eq!(round_decimal(55.0, -3), 0.0);
        assert_eq!(round_decimal(5.0, -400), 0.0);
    }

    #[test]
    fn large_precision_is_a_no_op() {
        assert_eq!(round_decimal(0.1, 400), 0.1);
        assert_eq!(round_decimal(5e-324, MAX_DECIMAL_DIGITS), 5e-324);
        assert_eq!(round_decimal(0.123, 70_000), 0.123);
        assert_eq!(round_decimal(0.123, i32::MAX), 0.123);
        assert!(round_decimal(f64::NAN, 2).is_nan());
    }

    #[test]
    fn markers() {
        assert_eq!(NumberDiff::Infinite { negative: false }.marker(), Some("+INF"));
        assert_eq!(NumberDiff::Infinite { negative: true }.marker(), Some("-INF"));
        assert_eq!(
            NumberDiff::RoundedToZero(Sentinel::RoundedNegative).into_node(),
            DiffNode::from("-0")
        );
        assert_eq!(
            NumberDiff::Delta(Delta::Int(3)).into_node(),
            DiffNode::Delta(Delta::Int(3))
        );
    }
}
