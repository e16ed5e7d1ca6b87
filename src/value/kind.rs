// ============================================================================
// Numeric Kind
// Run-time classification tags and the promotion table
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification tag for a [`Value`](crate::value::Value).
///
/// The five numeric kinds form a strict promotion ladder
/// (`Int32 < Int64 < Float32 < Float64 < Decimal`); `Duration` and `Instant`
/// interact with the ladder only through the dispatcher's special cases, and
/// `None` tags the absent-value state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericKind {
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal,
    Duration,
    Instant,
    None,
}

impl NumericKind {
    /// True for the five kinds on the promotion ladder.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            NumericKind::Int32
                | NumericKind::Int64
                | NumericKind::Float32
                | NumericKind::Float64
                | NumericKind::Decimal
        )
    }

    /// True for the two integer kinds.
    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(self, NumericKind::Int32 | NumericKind::Int64)
    }

    /// True for the two binary floating-point kinds.
    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, NumericKind::Float32 | NumericKind::Float64)
    }

    /// True for kinds that can carry a fractional part.
    #[inline]
    pub fn is_fractional(self) -> bool {
        matches!(
            self,
            NumericKind::Float32 | NumericKind::Float64 | NumericKind::Decimal
        )
    }

    /// Position on the promotion ladder. Only meaningful for numeric kinds.
    #[inline]
    fn ladder_rank(self) -> Option<u8> {
        match self {
            NumericKind::Int32 => Some(0),
            NumericKind::Int64 => Some(1),
            NumericKind::Float32 => Some(2),
            NumericKind::Float64 => Some(3),
            NumericKind::Decimal => Some(4),
            _ => None,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericKind::Int32 => "Int32",
            NumericKind::Int64 => "Int64",
            NumericKind::Float32 => "Float32",
            NumericKind::Float64 => "Float64",
            NumericKind::Decimal => "Decimal",
            NumericKind::Duration => "Duration",
            NumericKind::Instant => "Instant",
            NumericKind::None => "None",
        };
        write!(f, "{}", name)
    }
}

/// Pick the smallest common kind able to represent both operands.
///
/// Follows the promotion ladder for the numeric kinds; two durations stay a
/// duration. Returns `None` for pairings with no common kind (`Instant`
/// anywhere, a duration mixed with a numeric kind) — those combinations are
/// either invalid or handled by dispatcher special cases that never consult
/// this table.
///
/// Symmetric: `largest_kind(a, b) == largest_kind(b, a)` for all inputs.
#[inline]
pub fn largest_kind(k1: NumericKind, k2: NumericKind) -> Option<NumericKind> {
    if k1 == NumericKind::Duration && k2 == NumericKind::Duration {
        return Some(NumericKind::Duration);
    }
    match (k1.ladder_rank(), k2.ladder_rank()) {
        (Some(r1), Some(r2)) => Some(if r1 >= r2 { k1 } else { k2 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [NumericKind; 8] = [
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::Float32,
        NumericKind::Float64,
        NumericKind::Decimal,
        NumericKind::Duration,
        NumericKind::Instant,
        NumericKind::None,
    ];

    #[test]
    fn test_promotion_ladder() {
        assert_eq!(
            largest_kind(NumericKind::Int32, NumericKind::Int64),
            Some(NumericKind::Int64)
        );
        assert_eq!(
            largest_kind(NumericKind::Int64, NumericKind::Float32),
            Some(NumericKind::Float32)
        );
        assert_eq!(
            largest_kind(NumericKind::Float32, NumericKind::Float64),
            Some(NumericKind::Float64)
        );
        assert_eq!(
            largest_kind(NumericKind::Float64, NumericKind::Decimal),
            Some(NumericKind::Decimal)
        );
        assert_eq!(
            largest_kind(NumericKind::Int32, NumericKind::Int32),
            Some(NumericKind::Int32)
        );
    }

    #[test]
    fn test_duration_promotion() {
        assert_eq!(
            largest_kind(NumericKind::Duration, NumericKind::Duration),
            Some(NumericKind::Duration)
        );
        // Duration mixed with a numeric kind never promotes through the table
        assert_eq!(largest_kind(NumericKind::Duration, NumericKind::Int64), None);
        assert_eq!(largest_kind(NumericKind::Decimal, NumericKind::Duration), None);
    }

    #[test]
    fn test_instant_never_promotes() {
        for kind in ALL_KINDS {
            assert_eq!(largest_kind(NumericKind::Instant, kind), None);
            assert_eq!(largest_kind(kind, NumericKind::Instant), None);
        }
    }

    #[test]
    fn test_promotion_symmetry() {
        for k1 in ALL_KINDS {
            for k2 in ALL_KINDS {
                assert_eq!(largest_kind(k1, k2), largest_kind(k2, k1));
            }
        }
    }

    #[test]
    fn test_kind_predicates() {
        assert!(NumericKind::Int32.is_numeric());
        assert!(NumericKind::Decimal.is_numeric());
        assert!(!NumericKind::Duration.is_numeric());
        assert!(!NumericKind::Instant.is_numeric());
        assert!(!NumericKind::None.is_numeric());

        assert!(NumericKind::Int32.is_integer());
        assert!(NumericKind::Int64.is_integer());
        assert!(!NumericKind::Float32.is_integer());

        assert!(NumericKind::Float32.is_float());
        assert!(NumericKind::Float64.is_float());
        assert!(!NumericKind::Decimal.is_float());

        assert!(NumericKind::Decimal.is_fractional());
        assert!(!NumericKind::Int64.is_fractional());
    }

    #[test]
    fn test_display() {
        assert_eq!(NumericKind::Int32.to_string(), "Int32");
        assert_eq!(NumericKind::Duration.to_string(), "Duration");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&NumericKind::Decimal).unwrap();
        assert_eq!(json, "\"Decimal\"");
        let back: NumericKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NumericKind::Decimal);
    }
}
