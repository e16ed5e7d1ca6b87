// ============================================================================
// Algebra Errors
// Error types for dynamically-typed arithmetic
// ============================================================================

use crate::value::NumericKind;
use std::fmt;

/// Errors that can occur while dispatching an arithmetic operation.
///
/// Division by zero is deliberately absent: it propagates as the native
/// integer-division panic, matching the platform fault rather than a
/// recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgebraError {
    /// Operand kind pairing has no defined arithmetic rule
    TypeMismatch {
        lhs: NumericKind,
        rhs: NumericKind,
    },
    /// Unary operation applied to a kind that does not support it
    UnsupportedUnary { kind: NumericKind },
    /// Checked arithmetic overflowed and the operation defines no fallback
    Overflow,
    /// Conversion requested between kinds with no widening rule
    UnsupportedConversion {
        from: NumericKind,
        to: NumericKind,
    },
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::TypeMismatch { lhs, rhs } => {
                write!(f, "no arithmetic rule for operand kinds {} and {}", lhs, rhs)
            },
            AlgebraError::UnsupportedUnary { kind } => {
                write!(f, "unary operation not defined for kind {}", kind)
            },
            AlgebraError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded the representable range")
            },
            AlgebraError::UnsupportedConversion { from, to } => {
                write!(f, "no widening conversion from {} to {}", from, to)
            },
        }
    }
}

impl std::error::Error for AlgebraError {}

/// Result type alias for algebra operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_both_kinds() {
        let err = AlgebraError::TypeMismatch {
            lhs: NumericKind::Instant,
            rhs: NumericKind::Instant,
        };
        assert_eq!(
            err.to_string(),
            "no arithmetic rule for operand kinds Instant and Instant"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AlgebraError::Overflow.to_string(),
            "arithmetic overflow: result exceeded the representable range"
        );
        assert_eq!(
            AlgebraError::UnsupportedUnary {
                kind: NumericKind::Instant
            }
            .to_string(),
            "unary operation not defined for kind Instant"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(AlgebraError::Overflow, AlgebraError::Overflow);
        assert_ne!(
            AlgebraError::Overflow,
            AlgebraError::UnsupportedUnary {
                kind: NumericKind::Instant
            }
        );
    }
}
