// ============================================================================
// Rounding Module
// Decimal-precision rounding and rounded integer division
// ============================================================================
//
// This module provides:
// - float: round/floor/ceiling/truncate over f64 at a signed digit count
// - decimal: the same four primitives over rust_decimal::Decimal
// - divide_rounded_i32/i64: overflow-safe round-half-away-from-zero division
//
// Design principles:
// - Digit counts are unrestricted in sign and range; negative counts round
//   to tens, hundreds and so on
// - Midpoint ties always break away from zero (not banker's rounding)
// - Powers of ten are cached for the common ±5-digit range and derived on
//   demand outside it

pub mod decimal;
mod divide;
pub mod float;

pub use divide::{divide_rounded_i32, divide_rounded_i64};

/// Smallest exponent held in the power-of-ten caches.
pub(crate) const POW10_MIN: i32 = -5;

/// Largest exponent held in the power-of-ten caches.
pub(crate) const POW10_MAX: i32 = 5;
