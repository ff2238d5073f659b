//! Number rendering for finding messages.
//!
//! Messages are consumed by the same dashboards that rendered them before,
//! so numbers print the way ECMAScript prints them: `Number::toString` for
//! literal values and `toFixed` for rounded sums.

use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitude from which `toFixed` falls back to plain number rendering.
const FIXED_LIMIT: f64 = 1e21;

/// Render `x` like ECMAScript `Number.prototype.toString()`.
///
/// Shortest round-trip digits; plain notation for decimal exponents in
/// `-7..21`, exponent notation (`1e-7`, `1e+22`) outside it.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x < 0.0 {
        return format!("-{}", format_number(-x));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "2.3456e2".
    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if n >= 1 { '+' } else { '-' };
        let exp = (n - 1).abs();
        if rest.is_empty() {
            format!("{first}e{sign}{exp}")
        } else {
            format!("{first}.{rest}e{sign}{exp}")
        }
    }
}

/// Render `x` with `dp` decimals like ECMAScript `Number.prototype.toFixed`.
///
/// Rounds the exact binary value, with exact midpoints going away from zero
/// (`10.125` renders as `10.13`).
pub fn format_fixed(x: f64, dp: u32) -> String {
    if !x.is_finite() || x.abs() >= FIXED_LIMIT {
        return format_number(x);
    }

    match Decimal::from_f64_retain(x) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.prec$}", prec = dp as usize)
        }
        None => format!("{x:.prec$}", prec = dp as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_plain_decimals() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(500.0), "500");
        assert_eq!(format_number(234.56), "234.56");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn exponent_notation_outside_the_plain_range() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.0000001), "1e-7");
        assert_eq!(format_number(1.5e-10), "1.5e-10");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e22), "1e+22");
        assert_eq!(format_number(-1.25e30), "-1.25e+30");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn fixed_rounds_exact_midpoints_away_from_zero() {
        assert_eq!(format_fixed(10.125, 2), "10.13");
        assert_eq!(format_fixed(0.375, 2), "0.38");
        assert_eq!(format_fixed(-10.125, 2), "-10.13");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn fixed_rounds_the_binary_value_not_the_literal() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(1234.5, 2), "1234.50");
        assert_eq!(format_fixed(1000.0, 2), "1000.00");
    }

    #[test]
    fn fixed_falls_back_to_plain_rendering_for_huge_values() {
        assert_eq!(format_fixed(1e21, 2), "1e+21");
        assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
    }
}
