//! Unit conversion constants and lenient numeric parsing
//!
//! Form answers arrive as free text. Numbers are read the way a browser form
//! reads them: leading whitespace is skipped and the longest numeric prefix
//! wins, so "155 lbs" is 155 and "abc" is nothing at all.

use tracing::warn;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Calories per gram of protein
pub const KCAL_PER_G_PROTEIN: i64 = 4;
/// Calories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: i64 = 4;
/// Calories per gram of fat
pub const KCAL_PER_G_FAT: i64 = 9;

// ============================================================================
// Fallback Values
// ============================================================================

/// Body weight used when the weight answer is missing, unparseable or zero
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Height used when the height answer is missing, unparseable or zero
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
/// Weekly training volume used when the hours answer is missing or zero
pub const DEFAULT_WEEKLY_HOURS: f64 = 5.0;
/// Age used when the age answer is missing or zero
pub const DEFAULT_AGE: i32 = 45;

// ============================================================================
// Conversions
// ============================================================================

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Round to the nearest integer, with halves going toward positive infinity
///
/// `f64::round` sends -2.5 to -3; this sends it to -2. Values beyond the
/// `i64` range saturate and NaN becomes 0.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Treat zero, NaN and infinities as "no usable answer"
pub fn usable(value: f64) -> Option<f64> {
    if value == 0.0 || !value.is_finite() {
        None
    } else {
        Some(value)
    }
}

// ============================================================================
// Lenient Parsing
// ============================================================================

/// Parse the leading decimal number of a string
///
/// Examples:
/// - "155" -> Some(155.0)
/// - " 67.5in" -> Some(67.5)
/// - "-3" -> Some(-3.0)
/// - "1e2" -> Some(100.0)
/// - "abc" -> None
pub fn parse_decimal(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it has digits of its own
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

/// Parse the leading integer of a string, ignoring any fractional part
///
/// Examples:
/// - "45" -> Some(45)
/// - "45.9" -> Some(45)
/// - "30 years" -> Some(30)
/// - "99999999999" -> Some(i32::MAX)
/// - "" -> None
pub fn parse_integer(s: &str) -> Option<i32> {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let digits_start = end;
    let mut magnitude: i64 = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(bytes[end] - b'0'));
        end += 1;
    }

    if end == digits_start {
        return None;
    }

    let value = if negative { -magnitude } else { magnitude };
    let clamped = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    if clamped != value {
        warn!("Integer {} out of range, clamping to {}", &trimmed[..end], clamped);
    }
    // Within i32 after the clamp
    Some(clamped as i32)
}
