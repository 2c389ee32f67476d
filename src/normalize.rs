//! Cleanup of formatted numeric strings
//!
//! Brazilian documents carry numbers as "R$ 1.000,50": a currency marker,
//! "." thousands separators and a decimal comma. The normalizer reduces that
//! to a plain "1000.50" ready for numeric parsing. Malformed input passes
//! through unchanged; this layer never reports an error.

use log::debug;

/// Currency marker stripped from formatted input
const CURRENCY_MARKER: &str = "R$";

/// Normalize a formatted number string to a plain decimal string
///
/// Strips the "R$" marker and whitespace, removes "." thousands separators
/// and converts the decimal comma to a "." decimal point, truncating the
/// fractional part to at most two characters. Input with more than one comma
/// is returned trimmed but otherwise unchanged.
pub fn strip_number_formatting(text: &str) -> String {
    let without_marker = text.replace(CURRENCY_MARKER, "");
    let trimmed = without_marker.trim();

    let segments: Vec<&str> = trimmed.split(',').collect();
    match segments.as_slice() {
        [integer] => integer.replace('.', ""),
        [integer, fraction] => {
            let integer = integer.replace('.', "");
            let fraction: String = fraction.chars().take(2).collect();
            format!("{}.{}", integer, fraction)
        }
        _ => {
            debug!("malformed number {:?} passed through unchanged", trimmed);
            trimmed.to_string()
        }
    }
}
