//! Integer-to-words engine for Brazilian Portuguese cardinals
//!
//! Each nonzero magnitude group is rendered independently from the lexical
//! tables, given its scale word, and the group texts are joined with the
//! conjunction rules used in legal documents: " e " between two groups,
//! ", " between earlier groups with " e " before the last.

use crate::grouping::{magnitude_groups, MagnitudeGroup};
use crate::lexicon::{self, Gender};
use crate::value::Value;

/// Spell a value as a Brazilian Portuguese cardinal
///
/// The value's integer magnitude is spelled; fractional input truncates.
pub fn spell_cardinal(value: &Value, gender: Gender) -> String {
    spell_magnitude(value.magnitude(), gender)
}

/// Spell a number, coercing the input leniently
///
/// General facade over the engine: empty or non-numeric input spells as
/// "zero". Gender selects the agreement form ("uma", "duas", "duzentas").
pub fn spell_number(value: impl Into<Value>, gender: Gender) -> String {
    spell_cardinal(&value.into(), gender)
}

/// Spell a non-negative integer magnitude
pub(crate) fn spell_magnitude(n: u128, gender: Gender) -> String {
    if n == 0 {
        return lexicon::ZERO_WORD.to_string();
    }

    // "mil" stands alone for exactly one thousand; every larger composition
    // keeps the leading "um" ("um mil e duzentos e sete").
    if n == 1_000 {
        return lexicon::scale_word(1, true).to_string();
    }

    let rendered: Vec<String> = magnitude_groups(n)
        .iter()
        .filter(|group| group.value > 0)
        .map(|group| spell_group(group, gender))
        .collect();

    join_groups(&rendered)
}

/// Render one nonzero magnitude group, scale word included
fn spell_group(group: &MagnitudeGroup, gender: Gender) -> String {
    let hundreds = (group.value / 100) as usize;
    let tens = ((group.value % 100) / 10) as usize;
    let units = (group.value % 10) as usize;

    let mut text = String::new();

    if hundreds > 0 {
        if group.value == 100 {
            text.push_str(lexicon::EXACT_HUNDRED);
        } else {
            text.push_str(lexicon::hundreds_word(gender, hundreds));
        }
    }

    if tens == 1 {
        // 10-19 have irregular single words
        join_with_conjunction(&mut text, lexicon::teen_word(units));
    } else {
        if tens >= 2 {
            join_with_conjunction(&mut text, lexicon::tens_word(tens));
        }
        if units >= 1 {
            join_with_conjunction(&mut text, lexicon::unit_word(gender, units));
        }
    }

    if group.scale > 0 {
        let word = lexicon::scale_word(group.scale, group.value == 1);
        if !word.is_empty() {
            text.push(' ');
            text.push_str(word);
        }
    }

    text
}

fn join_with_conjunction(text: &mut String, word: &str) {
    if !text.is_empty() {
        text.push_str(" e ");
    }
    text.push_str(word);
}

/// Join rendered group texts, most significant first
fn join_groups(rendered: &[String]) -> String {
    match rendered {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} e {}", head.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_composition() {
        assert_eq!(spell_magnitude(5, Gender::Masculine), "cinco");
        assert_eq!(spell_magnitude(10, Gender::Masculine), "dez");
        assert_eq!(spell_magnitude(16, Gender::Masculine), "dezesseis");
        assert_eq!(spell_magnitude(21, Gender::Masculine), "vinte e um");
        assert_eq!(spell_magnitude(100, Gender::Masculine), "cem");
        assert_eq!(spell_magnitude(101, Gender::Masculine), "cento e um");
        assert_eq!(spell_magnitude(110, Gender::Masculine), "cento e dez");
        assert_eq!(spell_magnitude(999, Gender::Masculine), "novecentos e noventa e nove");
    }

    #[test]
    fn test_scale_agreement() {
        assert_eq!(spell_magnitude(1_000, Gender::Masculine), "mil");
        assert_eq!(spell_magnitude(2_000, Gender::Masculine), "dois mil");
        assert_eq!(spell_magnitude(1_000_000, Gender::Masculine), "um milhão");
        assert_eq!(spell_magnitude(2_000_000, Gender::Masculine), "dois milhões");
        assert_eq!(spell_magnitude(1_000_000_000, Gender::Masculine), "um bilhão");
        assert_eq!(spell_magnitude(1_000_000_000_000, Gender::Masculine), "um trilhão");
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        assert_eq!(spell_magnitude(1_000_500, Gender::Masculine), "um milhão e quinhentos");
        assert_eq!(spell_magnitude(2_000_000_003, Gender::Masculine), "dois bilhões e três");
    }

    #[test]
    fn test_group_joining() {
        assert_eq!(spell_magnitude(1_207, Gender::Masculine), "um mil e duzentos e sete");
        assert_eq!(
            spell_magnitude(1_234_567, Gender::Masculine),
            "um milhão, duzentos e trinta e quatro mil e quinhentos e sessenta e sete"
        );
    }

    #[test]
    fn test_feminine_agreement() {
        assert_eq!(spell_magnitude(1, Gender::Feminine), "uma");
        assert_eq!(spell_magnitude(2, Gender::Feminine), "duas");
        assert_eq!(spell_magnitude(21, Gender::Feminine), "vinte e uma");
        assert_eq!(spell_magnitude(200, Gender::Feminine), "duzentas");
        assert_eq!(spell_magnitude(301, Gender::Feminine), "trezentas e uma");
        assert_eq!(spell_magnitude(15, Gender::Feminine), "quinze");
    }
}
