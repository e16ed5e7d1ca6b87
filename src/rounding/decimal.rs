// ============================================================================
// Decimal Rounding
// Power-of-ten scaling and rounding primitives for rust_decimal::Decimal
// ============================================================================

use super::{POW10_MAX, POW10_MIN};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::OnceLock;

/// Largest digit count the native `round_dp` path supports.
const NATIVE_MAX_DIGITS: i32 = 28;

/// Cached powers of ten for exponents in [-5, 5], built once on first use and
/// shared read-only across threads.
fn pow10_table() -> &'static [Decimal; 11] {
    static TABLE: OnceLock<[Decimal; 11]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [Decimal::ONE; 11];
        for (i, entry) in table.iter_mut().enumerate() {
            let exp = i as i32 + POW10_MIN;
            *entry = if exp >= 0 {
                Decimal::from(10i64.pow(exp as u32))
            } else {
                // Decimal::new(1, s) is exactly 10^-s
                Decimal::new(1, exp.unsigned_abs())
            };
        }
        table
    })
}

/// `10^d` as an exact decimal.
///
/// Exponents beyond the cached range are derived by iterative multiplication
/// by ten starting from the cached `10^5` entry; there is no native decimal
/// power function, and routing through f64 would lose precision. Negative
/// exponents beyond the cache take the reciprocal of the positive power.
fn pow10(d: i32) -> Decimal {
    if (POW10_MIN..=POW10_MAX).contains(&d) {
        pow10_table()[(d - POW10_MIN) as usize]
    } else if d > 0 {
        let mut power = pow10_table()[(POW10_MAX - POW10_MIN) as usize];
        for _ in POW10_MAX..d {
            power *= Decimal::TEN;
        }
        power
    } else {
        Decimal::ONE / pow10(-d)
    }
}

/// Round to `digits` fractional digits, ties away from zero.
///
/// Digit counts in the native 0..=28 range use the built-in midpoint-away
/// rounding directly and match it exactly. Negative counts (round to tens,
/// hundreds, ...) and counts past the native range scale by `10^digits`,
/// round to the nearest integer away from zero, then unscale.
///
/// Scaling a value past the 96-bit decimal range propagates the native
/// arithmetic fault.
pub fn round(value: Decimal, digits: i32) -> Decimal {
    if (0..=NATIVE_MAX_DIGITS).contains(&digits) {
        return value.round_dp_with_strategy(digits as u32, RoundingStrategy::MidpointAwayFromZero);
    }
    let scale = pow10(digits);
    let scaled =
        (value * scale).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    scaled / scale
}

/// Round toward negative infinity at the requested scale.
pub fn floor(value: Decimal, digits: i32) -> Decimal {
    if digits == 0 {
        return value.floor();
    }
    let scale = pow10(digits);
    (value * scale).floor() / scale
}

/// Round toward positive infinity at the requested scale.
pub fn ceiling(value: Decimal, digits: i32) -> Decimal {
    if digits == 0 {
        return value.ceil();
    }
    let scale = pow10(digits);
    (value * scale).ceil() / scale
}

/// Round toward zero at the requested scale.
pub fn truncate(value: Decimal, digits: i32) -> Decimal {
    if digits == 0 {
        return value.trunc();
    }
    let scale = pow10(digits);
    (value * scale).trunc() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_pow10_cached_range() {
        assert_eq!(pow10(0), Decimal::ONE);
        assert_eq!(pow10(3), dec("1000"));
        assert_eq!(pow10(5), dec("100000"));
        assert_eq!(pow10(-1), dec("0.1"));
        assert_eq!(pow10(-5), dec("0.00001"));
    }

    #[test]
    fn test_pow10_derived_range() {
        assert_eq!(pow10(6), dec("1000000"));
        assert_eq!(pow10(10), dec("10000000000"));
        assert_eq!(pow10(-6), dec("0.000001"));
        assert_eq!(pow10(-8), dec("0.00000001"));
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(round(dec("2.5"), 0), dec("3"));
        assert_eq!(round(dec("-2.5"), 0), dec("-3"));
        assert_eq!(round(dec("1.25"), 1), dec("1.3"));
        assert_eq!(round(dec("-1.25"), 1), dec("-1.3"));
    }

    #[test]
    fn test_round_negative_digits() {
        assert_eq!(round(dec("125"), -1), dec("130"));
        assert_eq!(round(dec("-125"), -1), dec("-130"));
        assert_eq!(round(dec("1250"), -2), dec("1300"));
        assert_eq!(round(dec("1234567"), -6), dec("1000000"));
    }

    #[test]
    fn test_floor() {
        assert_eq!(floor(dec("1.99"), 1), dec("1.9"));
        assert_eq!(floor(dec("-1.01"), 1), dec("-1.1"));
        assert_eq!(floor(dec("-1.01"), 0), dec("-2"));
        assert_eq!(floor(dec("199"), -2), dec("100"));
    }

    #[test]
    fn test_ceiling() {
        assert_eq!(ceiling(dec("1.01"), 1), dec("1.1"));
        assert_eq!(ceiling(dec("-1.99"), 1), dec("-1.9"));
        assert_eq!(ceiling(dec("1.01"), 0), dec("2"));
        assert_eq!(ceiling(dec("101"), -2), dec("200"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(dec("-1.99"), 0), dec("-1"));
        assert_eq!(truncate(dec("1.99"), 0), dec("1"));
        assert_eq!(truncate(dec("1.99"), 1), dec("1.9"));
        assert_eq!(truncate(dec("-199"), -2), dec("-100"));
    }

    // Strategy over decimals with a bounded mantissa and scale, so the scaled
    // intermediate always stays inside the 96-bit range.
    fn small_decimal() -> impl Strategy<Value = Decimal> {
        (-1_000_000_000i64..1_000_000_000, 0u32..=6).prop_map(|(m, s)| Decimal::new(m, s))
    }

    proptest! {
        // The native rounding path and the scale/round/unscale path must agree
        // wherever both apply.
        #[test]
        fn native_and_scaled_round_agree(v in small_decimal(), d in 0i32..=5) {
            let native =
                v.round_dp_with_strategy(d as u32, RoundingStrategy::MidpointAwayFromZero);
            let scale = pow10(d);
            let scaled = (v * scale)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                / scale;
            prop_assert_eq!(native, scaled);
        }

        #[test]
        fn round_is_sign_symmetric(v in small_decimal(), d in -5i32..=5) {
            prop_assert_eq!(round(-v, d), -round(v, d));
        }

        #[test]
        fn floor_within_one_step(v in small_decimal(), d in -5i32..=5) {
            let f = floor(v, d);
            let step = pow10(-d);
            prop_assert!(f <= v);
            prop_assert!(v - f < step);
        }
    }
}
