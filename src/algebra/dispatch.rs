// ============================================================================
// Arithmetic Dispatcher
// Kind-promoted arithmetic over dynamic values
// ============================================================================

use super::convert::convert;
use super::errors::{AlgebraError, AlgebraResult};
use crate::value::{largest_kind, NumericKind, Value};
use chrono::TimeDelta;
use rust_decimal::prelude::ToPrimitive;

/// Ticks (f64) at or past this magnitude have no i64 representation: 2^63.
const TICK_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[inline]
fn mismatch(a: &Value, b: &Value) -> AlgebraError {
    AlgebraError::TypeMismatch {
        lhs: a.kind(),
        rhs: b.kind(),
    }
}

#[inline]
fn ticks(d: TimeDelta) -> AlgebraResult<i64> {
    d.num_nanoseconds().ok_or(AlgebraError::Overflow)
}

#[inline]
fn from_ticks(t: i64) -> TimeDelta {
    TimeDelta::nanoseconds(t)
}

/// Round a floating tick count to the nearest tick, away from zero on ties.
fn round_to_ticks(t: f64) -> AlgebraResult<Value> {
    let rounded = t.round();
    if rounded.is_finite() && rounded.abs() < TICK_LIMIT {
        Ok(Value::Duration(from_ticks(rounded as i64)))
    } else {
        Err(AlgebraError::Overflow)
    }
}

/// View a numeric scalar as f64 for fractional duration scaling.
fn scalar_to_f64(v: Value) -> AlgebraResult<f64> {
    match v {
        Value::Int32(n) => Ok(f64::from(n)),
        Value::Int64(n) => Ok(n as f64),
        Value::Float32(x) => Ok(f64::from(x)),
        Value::Float64(x) => Ok(x),
        Value::Decimal(d) => d.to_f64().ok_or(AlgebraError::Overflow),
        _ => Err(AlgebraError::UnsupportedConversion {
            from: v.kind(),
            to: NumericKind::Float64,
        }),
    }
}

/// Promote both operands to their common kind and convert them.
fn promote_pair(a: Value, b: Value) -> AlgebraResult<(Value, Value)> {
    let common = largest_kind(a.kind(), b.kind()).ok_or_else(|| mismatch(&a, &b))?;
    Ok((convert(a, common)?, convert(b, common)?))
}

// ============================================================================
// Binary Operations
// ============================================================================

/// Add two values.
///
/// An absent operand is the identity: `sum(absent, x) == x` and
/// `sum(x, absent) == x`. An instant shifted by a duration stays an instant.
/// All other defined pairings promote to a common kind and add there under
/// checked arithmetic.
///
/// # Errors
/// - `TypeMismatch` when the kinds have no sum rule (two instants, a duration
///   mixed with a numeric kind, ...), naming both kinds.
/// - `Overflow` on checked integer, decimal, duration or instant overflow;
///   addition defines no fallback.
pub fn sum(a: Value, b: Value) -> AlgebraResult<Value> {
    match (a, b) {
        (Value::Absent, other) | (other, Value::Absent) => return Ok(other),
        (Value::Instant(t), Value::Duration(d)) | (Value::Duration(d), Value::Instant(t)) => {
            return t
                .checked_add_signed(d)
                .map(Value::Instant)
                .ok_or(AlgebraError::Overflow);
        },
        _ => {},
    }
    let (pa, pb) = promote_pair(a, b)?;
    match (pa, pb) {
        (Value::Int32(x), Value::Int32(y)) => x
            .checked_add(y)
            .map(Value::Int32)
            .ok_or(AlgebraError::Overflow),
        (Value::Int64(x), Value::Int64(y)) => x
            .checked_add(y)
            .map(Value::Int64)
            .ok_or(AlgebraError::Overflow),
        (Value::Float32(x), Value::Float32(y)) => Ok(Value::Float32(x + y)),
        (Value::Float64(x), Value::Float64(y)) => Ok(Value::Float64(x + y)),
        (Value::Decimal(x), Value::Decimal(y)) => x
            .checked_add(y)
            .map(Value::Decimal)
            .ok_or(AlgebraError::Overflow),
        (Value::Duration(x), Value::Duration(y)) => x
            .checked_add(&y)
            .map(Value::Duration)
            .ok_or(AlgebraError::Overflow),
        _ => Err(mismatch(&a, &b)),
    }
}

/// Subtract `b` from `a`.
///
/// An absent minuend yields absent; an absent subtrahend yields the minuend
/// unchanged. `Instant - Duration` stays an instant, `Instant - Instant`
/// yields the duration between them. All other defined pairings promote and
/// subtract under checked arithmetic.
///
/// # Errors
/// - `TypeMismatch` when the kinds have no difference rule.
/// - `Overflow` on checked overflow; subtraction defines no fallback.
pub fn difference(a: Value, b: Value) -> AlgebraResult<Value> {
    match (a, b) {
        (Value::Absent, _) => return Ok(Value::Absent),
        (minuend, Value::Absent) => return Ok(minuend),
        (Value::Instant(t), Value::Duration(d)) => {
            return t
                .checked_sub_signed(d)
                .map(Value::Instant)
                .ok_or(AlgebraError::Overflow);
        },
        (Value::Instant(x), Value::Instant(y)) => {
            return Ok(Value::Duration(x.signed_duration_since(y)));
        },
        _ => {},
    }
    let (pa, pb) = promote_pair(a, b)?;
    match (pa, pb) {
        (Value::Int32(x), Value::Int32(y)) => x
            .checked_sub(y)
            .map(Value::Int32)
            .ok_or(AlgebraError::Overflow),
        (Value::Int64(x), Value::Int64(y)) => x
            .checked_sub(y)
            .map(Value::Int64)
            .ok_or(AlgebraError::Overflow),
        (Value::Float32(x), Value::Float32(y)) => Ok(Value::Float32(x - y)),
        (Value::Float64(x), Value::Float64(y)) => Ok(Value::Float64(x - y)),
        (Value::Decimal(x), Value::Decimal(y)) => x
            .checked_sub(y)
            .map(Value::Decimal)
            .ok_or(AlgebraError::Overflow),
        (Value::Duration(x), Value::Duration(y)) => x
            .checked_sub(&y)
            .map(Value::Duration)
            .ok_or(AlgebraError::Overflow),
        _ => Err(mismatch(&a, &b)),
    }
}

/// Multiply two values.
///
/// Either operand absent yields absent. A duration scaled by a numeric
/// scalar multiplies its tick count: exactly for integer scalars, through
/// f64 tick arithmetic rounded to the nearest tick for fractional scalars.
/// Two durations have no product. Numeric pairings promote and multiply;
/// when the product of two integers overflows, the result widens to a
/// `Float64` product instead of failing — a deliberate precision trade-off
/// for values past integer range. Decimal overflow stays fatal.
///
/// # Errors
/// - `TypeMismatch` for pairings with no product rule (including
///   `Duration * Duration`).
/// - `Overflow` for decimal and duration-scaling overflow.
pub fn product(a: Value, b: Value) -> AlgebraResult<Value> {
    if a.is_absent() || b.is_absent() {
        return Ok(Value::Absent);
    }
    match (a, b) {
        (Value::Duration(_), Value::Duration(_)) => return Err(mismatch(&a, &b)),
        (Value::Duration(d), scalar) | (scalar, Value::Duration(d))
            if scalar.kind().is_numeric() =>
        {
            return scale_duration_mul(d, scalar);
        },
        _ => {},
    }
    let (pa, pb) = promote_pair(a, b)?;
    match (pa, pb) {
        (Value::Int32(x), Value::Int32(y)) => Ok(match x.checked_mul(y) {
            Some(p) => Value::Int32(p),
            None => {
                tracing::debug!("i32 product {} * {} overflowed, widening to f64", x, y);
                Value::Float64(f64::from(x) * f64::from(y))
            },
        }),
        (Value::Int64(x), Value::Int64(y)) => Ok(match x.checked_mul(y) {
            Some(p) => Value::Int64(p),
            None => {
                tracing::debug!("i64 product {} * {} overflowed, widening to f64", x, y);
                Value::Float64(x as f64 * y as f64)
            },
        }),
        (Value::Float32(x), Value::Float32(y)) => Ok(Value::Float32(x * y)),
        (Value::Float64(x), Value::Float64(y)) => Ok(Value::Float64(x * y)),
        (Value::Decimal(x), Value::Decimal(y)) => x
            .checked_mul(y)
            .map(Value::Decimal)
            .ok_or(AlgebraError::Overflow),
        _ => Err(mismatch(&a, &b)),
    }
}

/// Divide `a` by `b`.
///
/// Either operand absent yields absent. A duration divided by a numeric
/// scalar mirrors the product special case; a duration divided by a duration
/// reduces to dividing the two tick counts as plain 64-bit integers. Numeric
/// pairings promote and divide; an integer division that is exact returns
/// the integer quotient, any other returns a `Float64` quotient — division
/// produces a fraction in the general case and silently truncating would be
/// wrong.
///
/// # Errors
/// - `TypeMismatch` for pairings with no quotient rule.
/// - `Overflow` for decimal and duration-scaling overflow.
///
/// # Panics
/// Integer and decimal division by zero propagate the native division fault.
pub fn quotient(a: Value, b: Value) -> AlgebraResult<Value> {
    if a.is_absent() || b.is_absent() {
        return Ok(Value::Absent);
    }
    match (a, b) {
        (Value::Duration(x), Value::Duration(y)) => {
            return int64_quotient(ticks(x)?, ticks(y)?);
        },
        (Value::Duration(d), scalar) if scalar.kind().is_numeric() => {
            return scale_duration_div(d, scalar);
        },
        _ => {},
    }
    let (pa, pb) = promote_pair(a, b)?;
    match (pa, pb) {
        (Value::Int32(x), Value::Int32(y)) => {
            let q = x / y;
            if q * y == x {
                Ok(Value::Int32(q))
            } else {
                tracing::debug!("i32 quotient {} / {} is inexact, widening to f64", x, y);
                Ok(Value::Float64(f64::from(x) / f64::from(y)))
            }
        },
        (Value::Int64(x), Value::Int64(y)) => int64_quotient(x, y),
        (Value::Float32(x), Value::Float32(y)) => Ok(Value::Float32(x / y)),
        (Value::Float64(x), Value::Float64(y)) => Ok(Value::Float64(x / y)),
        (Value::Decimal(x), Value::Decimal(y)) => {
            if y.is_zero() {
                // propagate the native division fault
                return Ok(Value::Decimal(x / y));
            }
            x.checked_div(y)
                .map(Value::Decimal)
                .ok_or(AlgebraError::Overflow)
        },
        _ => Err(mismatch(&a, &b)),
    }
}

// ============================================================================
// Unary Operations
// ============================================================================

/// Negate a value.
///
/// Absent yields absent. Defined for every numeric kind and for durations;
/// an instant has no negation.
///
/// # Errors
/// - `UnsupportedUnary` for an instant operand.
/// - `Overflow` when negating the minimum integer or duration.
pub fn negate(a: Value) -> AlgebraResult<Value> {
    match a {
        Value::Absent => Ok(Value::Absent),
        Value::Int32(v) => v
            .checked_neg()
            .map(Value::Int32)
            .ok_or(AlgebraError::Overflow),
        Value::Int64(v) => v
            .checked_neg()
            .map(Value::Int64)
            .ok_or(AlgebraError::Overflow),
        Value::Float32(v) => Ok(Value::Float32(-v)),
        Value::Float64(v) => Ok(Value::Float64(-v)),
        Value::Decimal(v) => Ok(Value::Decimal(-v)),
        Value::Duration(d) => ticks(d)?
            .checked_neg()
            .map(|t| Value::Duration(from_ticks(t)))
            .ok_or(AlgebraError::Overflow),
        Value::Instant(_) => Err(AlgebraError::UnsupportedUnary {
            kind: NumericKind::Instant,
        }),
    }
}

/// Non-negative magnitude of a value.
///
/// Absent yields absent. A non-negative duration passes through unchanged,
/// a negative one is negated; numeric kinds take their absolute value.
///
/// # Errors
/// - `UnsupportedUnary` for an instant operand.
/// - `Overflow` for the minimum integer or duration, which has no positive
///   counterpart.
pub fn absolute(a: Value) -> AlgebraResult<Value> {
    match a {
        Value::Absent => Ok(Value::Absent),
        Value::Int32(v) => v
            .checked_abs()
            .map(Value::Int32)
            .ok_or(AlgebraError::Overflow),
        Value::Int64(v) => v
            .checked_abs()
            .map(Value::Int64)
            .ok_or(AlgebraError::Overflow),
        Value::Float32(v) => Ok(Value::Float32(v.abs())),
        Value::Float64(v) => Ok(Value::Float64(v.abs())),
        Value::Decimal(v) => Ok(Value::Decimal(v.abs())),
        Value::Duration(d) => {
            if d < TimeDelta::zero() {
                negate(Value::Duration(d))
            } else {
                Ok(Value::Duration(d))
            }
        },
        Value::Instant(_) => Err(AlgebraError::UnsupportedUnary {
            kind: NumericKind::Instant,
        }),
    }
}

// ============================================================================
// Duration Scaling
// ============================================================================

fn scale_duration_mul(d: TimeDelta, scalar: Value) -> AlgebraResult<Value> {
    let t = ticks(d)?;
    match scalar {
        Value::Int32(n) => t
            .checked_mul(i64::from(n))
            .map(|t| Value::Duration(from_ticks(t)))
            .ok_or(AlgebraError::Overflow),
        Value::Int64(n) => t
            .checked_mul(n)
            .map(|t| Value::Duration(from_ticks(t)))
            .ok_or(AlgebraError::Overflow),
        fractional => round_to_ticks(t as f64 * scalar_to_f64(fractional)?),
    }
}

fn scale_duration_div(d: TimeDelta, scalar: Value) -> AlgebraResult<Value> {
    let t = ticks(d)?;
    match scalar {
        // exact tick division; zero divisor propagates the native fault
        Value::Int32(n) => Ok(Value::Duration(from_ticks(t / i64::from(n)))),
        Value::Int64(n) => Ok(Value::Duration(from_ticks(t / n))),
        fractional => round_to_ticks(t as f64 / scalar_to_f64(fractional)?),
    }
}

fn int64_quotient(x: i64, y: i64) -> AlgebraResult<Value> {
    let q = x / y;
    if q * y == x {
        Ok(Value::Int64(q))
    } else {
        tracing::debug!("i64 quotient {} / {} is inexact, widening to f64", x, y);
        Ok(Value::Float64(x as f64 / y as f64))
    }
}
