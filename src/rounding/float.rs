// ============================================================================
// Float Rounding
// Power-of-ten scaling and rounding primitives for f64
// ============================================================================

use super::{POW10_MAX, POW10_MIN};

/// Cached powers of ten for digit counts in [-5, 5].
const POW10: [f64; 11] = [
    1e-5, 1e-4, 1e-3, 1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3, 1e4, 1e5,
];

/// `10^d`, cached for the common ±5-digit range, computed via `powi` outside.
#[inline]
fn pow10(d: i32) -> f64 {
    if (POW10_MIN..=POW10_MAX).contains(&d) {
        POW10[(d - POW10_MIN) as usize]
    } else {
        10f64.powi(d)
    }
}

/// Round to `digits` fractional digits, ties away from zero.
///
/// Positive digit counts round after the decimal point, zero rounds to an
/// integer, negative counts round to tens, hundreds and so on. The value is
/// scaled by `10^digits`, rounded to the nearest integer (`f64::round` breaks
/// ties away from zero), then unscaled.
#[inline]
pub fn round(value: f64, digits: i32) -> f64 {
    if digits == 0 {
        return value.round();
    }
    let scale = pow10(digits);
    (value * scale).round() / scale
}

/// Round toward negative infinity at the requested scale.
#[inline]
pub fn floor(value: f64, digits: i32) -> f64 {
    if digits == 0 {
        return value.floor();
    }
    let scale = pow10(digits);
    (value * scale).floor() / scale
}

/// Round toward positive infinity at the requested scale.
#[inline]
pub fn ceiling(value: f64, digits: i32) -> f64 {
    if digits == 0 {
        return value.ceil();
    }
    let scale = pow10(digits);
    (value * scale).ceil() / scale
}

/// Round toward zero at the requested scale.
#[inline]
pub fn truncate(value: f64, digits: i32) -> f64 {
    if digits == 0 {
        return value.trunc();
    }
    let scale = pow10(digits);
    (value * scale).trunc() / scale
}
