//! Display formatting and operand validation.
//!
//! Formatting is lossy and display-only: the state machine always computes
//! from the unformatted stored text, never from formatted output.

use super::error::EngineError;

/// Maximum number of characters the display renders before shrinking.
pub const DISPLAY_WIDTH: usize = 12;

/// Text shown in place of a value that cannot be displayed.
pub const ERROR_TEXT: &str = "Error";

/// Fractional digits kept in exponential fallback rendering.
const EXPONENT_DIGITS: usize = 6;

/// Decimal places kept when rounding an over-long fraction.
const ROUND_PLACES: usize = 10;

/// Magnitudes below this render exponentially rather than rounding away.
const TINY_THRESHOLD: f64 = 1e-6;

/// Normalize a stored value into bounded display text.
///
/// Tokens that parse to a non-finite double (`Infinity`, `NaN` and their
/// spellings) become [`ERROR_TEXT`]. Numerals longer than
/// [`DISPLAY_WIDTH`] are shrunk: fractions round to ten places (trailing
/// zeros stripped), while long integers and very small fractions fall back
/// to exponential notation with six fractional digits. Everything else,
/// including non-numeric tokens such as the error marker itself, passes
/// through unchanged.
///
/// # Example
///
/// ```rust
/// use deskcalc::engine::format_for_display;
///
/// assert_eq!(format_for_display("123.45"), "123.45");
/// assert_eq!(format_for_display("Infinity"), "Error");
/// assert_eq!(format_for_display("1234567890123"), "1.234568e+12");
/// ```
pub fn format_for_display(value: &str) -> String {
    match value.parse::<f64>() {
        Ok(number) if !number.is_finite() => ERROR_TEXT.to_string(),
        Ok(number) if value.len() > DISPLAY_WIDTH => shrink(value, number),
        _ => value.to_string(),
    }
}

/// Whether a token is usable as numeric input: parses to a finite double.
///
/// # Example
///
/// ```rust
/// use deskcalc::engine::is_enterable_number;
///
/// assert!(is_enterable_number("123"));
/// assert!(!is_enterable_number("abc"));
/// assert!(!is_enterable_number("Infinity"));
/// ```
pub fn is_enterable_number(token: &str) -> bool {
    token.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Parse an operand at the moment of an arithmetic call.
///
/// Fails with [`EngineError::NonFinite`] for tokens that do not parse to a
/// finite double, including the error marker and overflow residue.
pub fn parse_operand(token: &str) -> Result<f64, EngineError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| EngineError::NonFinite(token.to_string()))
}

/// Render a computed double back into stored text: the shortest
/// round-trip decimal, with both zeros rendered `"0"` so a negative zero
/// never reaches the display.
pub fn to_numeral(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn shrink(text: &str, value: f64) -> String {
    if text.contains('.') {
        if value != 0.0 && value.abs() < TINY_THRESHOLD {
            to_exponential(value, EXPONENT_DIGITS)
        } else {
            round_to_shortest(value)
        }
    } else {
        to_exponential(value, EXPONENT_DIGITS)
    }
}

fn round_to_shortest(value: f64) -> String {
    let fixed = format!("{:.*}", ROUND_PLACES, value);
    let reparsed: f64 = fixed
        .parse()
        .expect("fixed-point rendering of a finite double reparses");
    to_numeral(reparsed)
}

// Rust renders positive exponents bare ("1e12"); the display convention
// keeps the explicit sign ("1e+12").
fn to_exponential(value: f64, digits: usize) -> String {
    let rendered = format!("{:.*e}", digits, value);
    match rendered.find('e') {
        Some(split) if !rendered[split + 1..].starts_with('-') => {
            format!("{}e+{}", &rendered[..split], &rendered[split + 1..])
        }
        _ => rendered,
    }
}
