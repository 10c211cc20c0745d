//! Number extraction from free-form spreadsheet text such as `16GB`,
//! `512GB SSD`, `13.3-inch` or `8-10h`.

use std::sync::LazyLock;

use regex::Regex;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").unwrap());

/// First run of ASCII digits as an integer, ignoring any prefix or unit
/// suffix. `0` when there are no digits.
pub fn extract_number(s: &str) -> u64 {
    DIGITS
        .find(s)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Like [`extract_number`] but keeps a fractional part (`13.3-inch` → 13.3).
pub fn extract_decimal(s: &str) -> f64 {
    DECIMAL
        .find(s)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Numeric value of a selected option token, read the way a browser's unary
/// `+` reads a string.
///
/// Blank is `0`. `0x`/`0o`/`0b` prefixes select hex, octal and binary, and
/// `Infinity` may carry a sign. Everything else must be a plain decimal
/// literal; Rust-only spellings such as `inf` or `nan` do not count. Any
/// token that is not a number is NaN, which fails every comparison.
pub fn option_value(v: &str) -> f64 {
    let v = v.trim();
    if v.is_empty() {
        return 0.0;
    }

    let radix = match v.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return prefixed_integer(&v[2..], radix).unwrap_or(f64::NAN);
    }

    match v {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if v.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) => f64::NAN,
        _ => v.parse().unwrap_or(f64::NAN),
    }
}

/// Unsigned digits in `radix`, folded as a float so long runs do not overflow.
fn prefixed_integer(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
