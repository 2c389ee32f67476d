//! Lexical tables for Brazilian Portuguese cardinals
//!
//! Fixed word tables keyed by digit value, with masculine and feminine
//! variants where the language requires agreement. The tables are data; the
//! composition rules live in the spelling engine.

use serde::{Deserialize, Serialize};

/// Grammatical gender of the counted noun
///
/// Feminine agreement changes "um"/"dois" to "uma"/"duas" and the hundreds
/// words from "-os" to "-as"; everything else is invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Default form ("um", "dois", "duzentos")
    #[default]
    Masculine,
    /// Feminine agreement ("uma", "duas", "duzentas")
    Feminine,
}

/// The written form of zero
pub(crate) const ZERO_WORD: &str = "zero";

/// Exact-hundred word, used when a magnitude group is exactly 100
pub(crate) const EXACT_HUNDRED: &str = "cem";

const UNITS: [&str; 10] =
    ["", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove"];

const UNITS_FEMININE: [&str; 10] =
    ["", "uma", "duas", "três", "quatro", "cinco", "seis", "sete", "oito", "nove"];

const TEENS: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "",
    "dez",
    "vinte",
    "trinta",
    "quarenta",
    "cinquenta",
    "sessenta",
    "setenta",
    "oitenta",
    "noventa",
];

// "cento" at digit 1 is gender-invariant; only 200-900 agree.
const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

const HUNDREDS_FEMININE: [&str; 10] = [
    "",
    "cento",
    "duzentas",
    "trezentas",
    "quatrocentas",
    "quinhentas",
    "seiscentas",
    "setecentas",
    "oitocentas",
    "novecentas",
];

const SCALE_SINGULAR: [&str; 5] = ["", "mil", "milhão", "bilhão", "trilhão"];

const SCALE_PLURAL: [&str; 5] = ["", "mil", "milhões", "bilhões", "trilhões"];

/// Word for a units digit (1-9), empty for 0
pub(crate) fn unit_word(gender: Gender, digit: usize) -> &'static str {
    let table = match gender {
        Gender::Masculine => &UNITS,
        Gender::Feminine => &UNITS_FEMININE,
    };
    table.get(digit).copied().unwrap_or("")
}

/// Irregular word for 10-19, keyed by the units digit
pub(crate) fn teen_word(units_digit: usize) -> &'static str {
    TEENS.get(units_digit).copied().unwrap_or("")
}

/// Word for a tens digit (2-9), empty for 0; 1 is covered by the teen words
pub(crate) fn tens_word(digit: usize) -> &'static str {
    TENS.get(digit).copied().unwrap_or("")
}

/// Word for a hundreds digit (1-9), empty for 0
pub(crate) fn hundreds_word(gender: Gender, digit: usize) -> &'static str {
    let table = match gender {
        Gender::Masculine => &HUNDREDS,
        Gender::Feminine => &HUNDREDS_FEMININE,
    };
    table.get(digit).copied().unwrap_or("")
}

/// Scale word for a magnitude-group position (1 = thousand, 2 = million, ...)
///
/// Index 0 and positions beyond the table have no word; callers skip empty
/// results, so out-of-range groups still spell their digits without a scale.
pub(crate) fn scale_word(scale: usize, singular: bool) -> &'static str {
    let table = if singular { &SCALE_SINGULAR } else { &SCALE_PLURAL };
    table.get(scale).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_selects_table() {
        assert_eq!(unit_word(Gender::Masculine, 1), "um");
        assert_eq!(unit_word(Gender::Feminine, 1), "uma");
        assert_eq!(unit_word(Gender::Feminine, 2), "duas");
        assert_eq!(unit_word(Gender::Feminine, 3), "três");
        assert_eq!(hundreds_word(Gender::Masculine, 2), "duzentos");
        assert_eq!(hundreds_word(Gender::Feminine, 2), "duzentas");
        assert_eq!(hundreds_word(Gender::Feminine, 1), "cento");
    }

    #[test]
    fn test_scale_words() {
        assert_eq!(scale_word(1, true), "mil");
        assert_eq!(scale_word(1, false), "mil");
        assert_eq!(scale_word(2, true), "milhão");
        assert_eq!(scale_word(2, false), "milhões");
        assert_eq!(scale_word(4, false), "trilhões");
        assert_eq!(scale_word(0, false), "");
        assert_eq!(scale_word(5, false), "");
    }
}
