// ============================================================================
// Value Converter
// Widening conversions along the promotion ladder
// ============================================================================

use super::errors::{AlgebraError, AlgebraResult};
use crate::value::{NumericKind, Value};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Convert a value to a target kind.
///
/// Only widening (or same-kind identity) conversions are defined: the target
/// kind is always at or above the source on the promotion ladder, so the
/// conversion itself never loses information. Fraction-dropping conversions
/// into the integer kinds are not offered here; the dispatcher performs its
/// own explicit tick rounding where it needs one.
///
/// # Errors
/// - `UnsupportedConversion` for any pairing outside the ladder — a
///   programming-error condition, since promotion alone never requests one.
/// - `Overflow` when a float payload has no finite decimal representation
///   (NaN or infinity widened into `Decimal`).
pub fn convert(value: Value, target: NumericKind) -> AlgebraResult<Value> {
    if value.kind() == target {
        return Ok(value);
    }

    let unsupported = AlgebraError::UnsupportedConversion {
        from: value.kind(),
        to: target,
    };

    match (value, target) {
        (Value::Int32(v), NumericKind::Int64) => Ok(Value::Int64(i64::from(v))),
        (Value::Int32(v), NumericKind::Float32) => Ok(Value::Float32(v as f32)),
        (Value::Int32(v), NumericKind::Float64) => Ok(Value::Float64(f64::from(v))),
        (Value::Int32(v), NumericKind::Decimal) => Ok(Value::Decimal(Decimal::from(v))),

        (Value::Int64(v), NumericKind::Float32) => Ok(Value::Float32(v as f32)),
        (Value::Int64(v), NumericKind::Float64) => Ok(Value::Float64(v as f64)),
        (Value::Int64(v), NumericKind::Decimal) => Ok(Value::Decimal(Decimal::from(v))),

        (Value::Float32(v), NumericKind::Float64) => Ok(Value::Float64(f64::from(v))),
        (Value::Float32(v), NumericKind::Decimal) => {
            Decimal::from_f32(v).map(Value::Decimal).ok_or(AlgebraError::Overflow)
        },

        (Value::Float64(v), NumericKind::Decimal) => {
            Decimal::from_f64(v).map(Value::Decimal).ok_or(AlgebraError::Overflow)
        },

        _ => Err(unsupported),
    }
}
