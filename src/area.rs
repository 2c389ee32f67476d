//! Area sentences and unit wrapper functions
//!
//! Deeds state areas in the centesimal convention: "1207,35" means 1207
//! whole square meters plus 35 hundredths of a square meter, which documents
//! spell as square centimeters (one hundredth of a square meter is 100 cm²).
//! This module splits such strings into the two unit counts and composes the
//! spelled sentence, along with the fixed-suffix wrappers for each unit.

use serde::{Deserialize, Serialize};

use crate::lexicon::Gender;
use crate::spelling::{spell_cardinal, spell_magnitude};
use crate::value::Value;

/// Fixed suffix for square meters
///
/// Stays plural even for a quantity of one ("um metros quadrados").
const SQUARE_METERS_SUFFIX: &str = " metros quadrados";

/// Fixed suffix for square centimeters
const SQUARE_CENTIMETERS_SUFFIX: &str = " centímetros quadrados";

/// Whole square meters and square centimeters parsed from an area string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaBreakdown {
    /// Whole square-meter count
    pub square_meters: u64,
    /// Square centimeters reconstructed from the centesimal fraction
    pub square_centimeters: u64,
}

impl AreaBreakdown {
    /// Parse an area string in the Brazilian decimal convention
    ///
    /// "." thousands separators are removed, then the string splits on the
    /// decimal comma. The left segment is the whole-square-meter count (zero
    /// when absent or invalid). A nonzero fractional segment yields square
    /// centimeters: a two-character fraction counts hundredths of a square
    /// meter (x100), any other length multiplies by 1000. Segments beyond
    /// the second are ignored.
    pub fn parse(text: &str) -> Self {
        let cleaned = text.replace('.', "");
        let mut segments = cleaned.split(',');

        let square_meters =
            segments.next().and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0);

        let square_centimeters = match segments.next() {
            Some(fraction) => {
                let centesimal = fraction.trim().parse::<u64>().unwrap_or(0);
                if centesimal == 0 {
                    0
                } else if fraction.len() == 2 {
                    centesimal * 100
                } else {
                    centesimal * 1000
                }
            }
            None => 0,
        };

        Self { square_meters, square_centimeters }
    }

    /// Spell this breakdown as a full area sentence
    ///
    /// The square-meter clause is always present, even at zero; the
    /// centimeter clause is appended only when the count is nonzero.
    pub fn spell(&self) -> String {
        let mut sentence = spell_magnitude(u128::from(self.square_meters), Gender::Masculine);
        sentence.push_str(SQUARE_METERS_SUFFIX);

        if self.square_centimeters > 0 {
            sentence.push_str(", ");
            sentence
                .push_str(&spell_magnitude(u128::from(self.square_centimeters), Gender::Masculine));
            sentence.push_str(SQUARE_CENTIMETERS_SUFFIX);
        }

        sentence
    }
}

/// Spell a full area string as square meters and square centimeters
///
/// "1207,35" becomes "um mil e duzentos e sete metros quadrados, três mil e
/// quinhentos centímetros quadrados"; a zero fraction leaves only the meter
/// clause.
pub fn spell_full_area(area: &str) -> String {
    AreaBreakdown::parse(area).spell()
}

/// Spell a square-meter quantity with its fixed suffix
///
/// Non-numeric input spells as "zero metros quadrados".
pub fn spell_square_meters(value: impl Into<Value>) -> String {
    format!("{}{}", spell_cardinal(&value.into(), Gender::Masculine), SQUARE_METERS_SUFFIX)
}

/// Spell a square-centimeter quantity with its fixed suffix
pub fn spell_square_centimeters(value: impl Into<Value>) -> String {
    format!("{}{}", spell_cardinal(&value.into(), Gender::Masculine), SQUARE_CENTIMETERS_SUFFIX)
}
