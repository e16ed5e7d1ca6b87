// ============================================================================
// Dynamic Value
// Tagged union over the seven supported scalar representations
// ============================================================================

use super::kind::NumericKind;
use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// An immutable scalar whose concrete numeric representation is only known at
/// run time.
///
/// A `Value` carries exactly one of the seven supported payloads, or the
/// explicit `Absent` state (semantically a missing value, not a zero). Every
/// arithmetic operation produces a new `Value`; nothing is mutated in place.
///
/// # Example
/// ```
/// use numeric_algebra::prelude::*;
///
/// let a = Value::from(7i32);
/// let b = Value::from(2i32);
/// // 7 / 2 is inexact, so the quotient widens to Float64
/// assert_eq!(quotient(a, b).unwrap(), Value::from(3.5f64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Absence of a value. Not zero: arithmetic treats it per the
    /// absent-operand rules (identity for sums, absorbing for products).
    Absent,
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    /// Signed elapsed time, measured internally in nanosecond ticks.
    Duration(TimeDelta),
    /// Absolute point in time.
    Instant(DateTime<Utc>),
}

impl Value {
    /// Classify this value.
    ///
    /// Total function: every `Value` maps to exactly one tag, with `Absent`
    /// mapping to [`NumericKind::None`]. Never fails.
    #[inline]
    pub fn kind(&self) -> NumericKind {
        match self {
            Value::Absent => NumericKind::None,
            Value::Int32(_) => NumericKind::Int32,
            Value::Int64(_) => NumericKind::Int64,
            Value::Float32(_) => NumericKind::Float32,
            Value::Float64(_) => NumericKind::Float64,
            Value::Decimal(_) => NumericKind::Decimal,
            Value::Duration(_) => NumericKind::Duration,
            Value::Instant(_) => NumericKind::Instant,
        }
    }

    /// Check for the absent state.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

// ============================================================================
// Construction
// ============================================================================

impl From<i32> for Value {
    #[inline]
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<Decimal> for Value {
    #[inline]
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<TimeDelta> for Value {
    #[inline]
    fn from(v: TimeDelta) -> Self {
        Value::Duration(v)
    }
}

impl From<DateTime<Utc>> for Value {
    #[inline]
    fn from(v: DateTime<Utc>) -> Self {
        Value::Instant(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "<absent>"),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Duration(v) => write!(f, "{}", v),
            Value::Instant(v) => write!(f, "{}", v),
        }
    }
}
