// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Number formatting and arithmetic helpers.

use std::fmt::Display;

use rand::Rng;

use crate::error::{Error, Result};

/// Decimal places used by [`calculate_percentage`] and [`round_to`] callers by default.
pub const DEFAULT_DECIMALS: usize = 2;

/// Insert `,` thousands separators into the integer part of `num`.
///
/// Works on the decimal representation, so any integer or float type is
/// accepted. The sign and the fractional digits are left as they are:
/// `1234567.891` becomes `1,234,567.891`.
pub fn format_number(num: impl Display) -> String {
    let repr = num.to_string();
    let (sign, unsigned) = match repr.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", repr.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    // Non-numeric representations such as `NaN` or `inf` pass through.
    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return repr;
    }

    let mut out = String::with_capacity(repr.len() + integer.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Group a plain digit string in threes from the right.
pub(crate) fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage of `value` in `total`, rounded to `decimals` places.
///
/// A zero `total` yields `0.0` instead of dividing by zero.
pub fn calculate_percentage(value: f64, total: f64, decimals: usize) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_to((value / total) * 100.0, decimals)
}

/// Two-sided clamp that never panics.
///
/// Applies the lower bound first, then the upper one, so an inverted range
/// (`min > max`) yields `max`.
pub fn clamp<T: PartialOrd>(num: T, min: T, max: T) -> T {
    let lower = if num < min { min } else { num };
    if lower > max { max } else { lower }
}

/// Uniformly distributed integer in `min..=max` from the thread-local RNG.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `min > max`.
pub fn random_int(min: i64, max: i64) -> Result<i64> {
    random_int_with(&mut rand::thread_rng(), min, max)
}

/// Like [`random_int`] but drawing from the supplied generator.
pub fn random_int_with<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(Error::invalid_argument(
            "random_int",
            format!("min ({min}) is greater than max ({max})"),
        ));
    }
    Ok(rng.gen_range(min..=max))
}

/// Round `num` to `decimals` places through a fixed-point string.
///
/// Values exactly halfway between two results round away from zero, so
/// `2.5` becomes `3` and `-2.5` becomes `-3`.
pub fn round_to(num: f64, decimals: usize) -> f64 {
    to_fixed(num, decimals).parse().unwrap_or(num)
}

/// Largest power of ten an `f64` holds exactly.
const MAX_EXACT_POW10: usize = 22;

/// Fixed-point text for `num` with exact ties rounded away from zero.
///
/// `format!` alone rounds ties to even.
pub(crate) fn to_fixed(num: f64, decimals: usize) -> String {
    if num.is_finite() && decimals <= MAX_EXACT_POW10 {
        let scale = 10f64.powi(decimals as i32);
        let magnitude = num.abs();
        let scaled = magnitude * scale;
        // The fused remainder is zero only when the product was exact.
        if scaled.fract() == 0.5 && magnitude.mul_add(scale, -scaled) == 0.0 {
            let away = (scaled.trunc() + 1.0).copysign(num) / scale;
            return format!("{away:.decimals$}");
        }
    }
    format!("{num:.decimals$}")
}

/// Human-readable size with binary (1024) units.
///
/// Values are rounded to two decimals with trailing zeros dropped, so
/// `1536` renders as `1.5 KB`. Sizes at or above 1024 TB stay in TB.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn format_number_groups_integers() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-9876543_i64), "-9,876,543");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }

    // Only the integer part is grouped.
    #[test]
    fn format_number_leaves_fraction_alone() {
        assert_eq!(format_number(1234.5678), "1,234.5678");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(1000.0), "1,000");
    }

    #[test]
    fn format_number_passes_non_finite_through() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn calculate_percentage_examples() {
        assert_eq!(calculate_percentage(75.0, 100.0, DEFAULT_DECIMALS), 75.0);
        assert_eq!(calculate_percentage(1.0, 0.0, DEFAULT_DECIMALS), 0.0);
        assert_eq!(calculate_percentage(1.0, 3.0, DEFAULT_DECIMALS), 33.33);
        assert_eq!(calculate_percentage(2.0, 3.0, 0), 67.0);
    }

    #[test]
    fn calculate_percentage_rounds_ties_up() {
        assert_eq!(calculate_percentage(1.0, 800.0, DEFAULT_DECIMALS), 0.13);
        assert_eq!(calculate_percentage(1.0, 8.0, 0), 13.0);
        assert_eq!(calculate_percentage(3.0, 8.0, 0), 38.0);
    }

    #[test]
    fn clamp_bounds_both_sides() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(42, 0, 10), 10);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn clamp_inverted_range_yields_max() {
        assert_eq!(clamp(5, 10, 0), 0);
    }

    #[test]
    fn random_int_stays_in_inclusive_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1000 {
            let n = random_int_with(&mut rng, 1, 3).expect("valid range");
            assert!((1..=3).contains(&n));
            seen_min |= n == 1;
            seen_max |= n == 3;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn random_int_single_value_range() {
        assert_eq!(random_int(4, 4).expect("valid range"), 4);
    }

    #[test]
    fn random_int_rejects_inverted_range() {
        let err = random_int(10, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                function: "random_int",
                ..
            }
        ));
    }

    #[test]
    fn round_to_fixed_decimals() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(2.34567, 3), 2.346);
        assert_eq!(round_to(7.6, 0), 8.0);
        assert_eq!(round_to(10.0, DEFAULT_DECIMALS), 10.0);
    }

    #[test]
    fn round_to_breaks_ties_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(-0.125, 2), -0.13);
    }

    // 0.15 is stored just below the midpoint, so it is not a tie.
    #[test]
    fn round_to_only_treats_exact_midpoints_as_ties() {
        assert_eq!(round_to(0.15, 1), 0.1);
        assert_eq!(round_to(1.005, 2), 1.0);
    }

    #[test]
    fn to_fixed_keeps_requested_digits() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.5, 0), "-1");
        assert_eq!(to_fixed(1.0, 3), "1.000");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn format_bytes_examples() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(500), "500 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(1_073_741_824), "1 GB");
        assert_eq!(format_bytes(1_234_567_890), "1.15 GB");
    }

    #[test]
    fn format_bytes_caps_at_terabytes() {
        assert_eq!(format_bytes(1u64 << 40), "1 TB");
        assert_eq!(format_bytes(1u64 << 50), "1024 TB");
    }
}
