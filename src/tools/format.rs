//! Quantity display formatting
//!
//! Metric quantities print as short decimals; imperial quantities print as
//! kitchen fractions ("1 1/2", "3/4").

use crate::units::Unit;

/// Denominators a cook can measure, in order of preference
const DENOMINATORS: [u32; 4] = [2, 3, 4, 8];

/// Format a decimal with at most `places` digits, dropping trailing zeros
pub fn format_decimal(value: f64, places: usize) -> String {
    let formatted = format!("{:.*}", places, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Format a quantity as a mixed number
///
/// The fractional part snaps to the closest half, third, quarter or eighth.
/// Amounts too small for an eighth fall back to a two-place decimal.
pub fn format_fraction(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_fraction(-value));
    }
    if value >= u64::MAX as f64 {
        return format_decimal(value, 0);
    }

    let mut whole = value.floor();
    let frac = value - whole;

    let mut best = (0u32, 1u32);
    let mut best_err = frac;
    for denominator in DENOMINATORS {
        let numerator = (frac * denominator as f64).round() as u32;
        let err = (frac - numerator as f64 / denominator as f64).abs();
        if err < best_err {
            best = (numerator, denominator);
            best_err = err;
        }
    }

    let (mut numerator, mut denominator) = best;
    if numerator == denominator {
        whole += 1.0;
        numerator = 0;
    }

    if numerator == 0 {
        if whole == 0.0 && value > 0.0 {
            return format_decimal(value, 2);
        }
        return format!("{}", whole as u64);
    }

    let divisor = gcd(numerator, denominator);
    numerator /= divisor;
    denominator /= divisor;

    if whole == 0.0 {
        format!("{}/{}", numerator, denominator)
    } else {
        format!("{} {}/{}", whole as u64, numerator, denominator)
    }
}

/// Format a quantity with its unit label for display
pub fn format_quantity(quantity: f64, unit: Option<&str>) -> String {
    let Some(label) = unit else {
        return format_decimal(quantity, 2);
    };

    let amount = match Unit::parse_label(label) {
        Some(known) if known.is_metric() => format_decimal(quantity, 1),
        Some(_) => format_fraction(quantity),
        None => format_decimal(quantity, 2),
    };
    format!("{} {}", amount, label)
}
