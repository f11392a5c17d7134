//! Ukrainian letter classes and the stem-level sound changes the rules rely on.

use alloc::string::String;
use bitflags::bitflags;

use crate::suffix;

pub const VOWELS: &str = "аеиоуіїєюя";
pub const CONSONANTS: &str = "бвгджзйклмнпрстфхцчшщ";
/// Hushing consonants (шиплячі).
pub const HUSHING: &str = "жчшщ";
pub const NON_HUSHING: &str = "бвгдзклмнпрстфхц";
/// Letters that are always soft.
pub const SOFT: &str = "ьюяєї";
pub const LABIAL: &str = "мвпбф";

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LetterClass: u8 {
        const VOWEL = 1;
        const CONSONANT = 2;
        const HUSHING = 4;
        const NON_HUSHING = 8;
        const SOFT = 16;
        const LABIAL = 32;
        const SOFT_SIGN = 64;
    }
}

impl LetterClass {
    pub fn of(letter: char) -> Self {
        let mut class = Self::empty();
        for (set, flag) in [
            (VOWELS, Self::VOWEL),
            (CONSONANTS, Self::CONSONANT),
            (HUSHING, Self::HUSHING),
            (NON_HUSHING, Self::NON_HUSHING),
            (SOFT, Self::SOFT),
            (LABIAL, Self::LABIAL),
        ] {
            if set.contains(letter) {
                class |= flag;
            }
        }
        if letter == 'ь' {
            class |= Self::SOFT_SIGN;
        }
        class
    }

    /// True iff `letter` is a single character in at least one of these classes.
    pub fn matches(self, letter: &str) -> bool {
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::of(c).intersects(self),
            _ => false,
        }
    }
}

/// Hard, mixed or soft group of a second-declension noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclensionGroup {
    Hard,
    Mixed,
    Soft,
}

/// г к х → з ц с before the dative/locative -і.
pub fn alternate_velar_sibilant(letter: &str) -> &str {
    match letter {
        "г" => "з",
        "к" => "ц",
        "х" => "с",
        other => other,
    }
}

/// к г → ч ж in the vocative.
pub fn alternate_velar_hushing(letter: &str) -> &str {
    match letter {
        "к" => "ч",
        "г" => "ж",
        other => other,
    }
}

/// Anything that is neither a letter of the alphabet nor a space reads as an
/// apostrophe, including the empty string and the soft sign.
pub fn is_apostrophe(letter: &str) -> bool {
    !(letter == " " || (LetterClass::CONSONANT | LetterClass::VOWEL).matches(letter))
}

/// Splits trailing vowels and soft signs off `word`, returning the stem and
/// the stripped letter closest to it.
fn split_ending(word: &str) -> (&str, Option<char>) {
    let mut stem = word;
    let mut innermost = None;
    while let Some(c) = stem.chars().next_back() {
        if !(LetterClass::VOWEL | LetterClass::SOFT_SIGN).intersects(LetterClass::of(c)) {
            break;
        }
        innermost = Some(c);
        stem = &stem[..stem.len() - c.len_utf8()];
    }
    (stem, innermost)
}

/// The stem of `word`: everything up to its final consonant.
pub fn stem_of(word: &str) -> &str {
    split_ending(word).0
}

/// A stem ending in a non-hushing consonant is hard, one ending in a hushing
/// consonant is mixed, unless the stripped ending starts with an always-soft
/// letter. Everything else is soft.
pub fn detect_group(word: &str) -> DeclensionGroup {
    let (stem, innermost) = split_ending(word);
    let softened = innermost.map_or(false, |c| LetterClass::of(c).contains(LetterClass::SOFT));
    let stem_end = suffix::tail(stem, 1);

    if LetterClass::NON_HUSHING.matches(stem_end) && !softened {
        DeclensionGroup::Hard
    } else if LetterClass::HUSHING.matches(stem_end) && !softened {
        DeclensionGroup::Mixed
    } else {
        DeclensionGroup::Soft
    }
}

/// Scanning from the end (the first letter is never considered), the first
/// vowel, `г` or `к`.
pub fn last_vowel_or_velar(word: &str) -> Option<char> {
    word.char_indices()
        .rev()
        .take_while(|&(i, _)| i > 0)
        .map(|(_, c)| c)
        .find(|&c| LetterClass::of(c).contains(LetterClass::VOWEL) || c == 'г' || c == 'к')
}

/// Replaces the letter before the last one with `letter`: Нестір → Нестор.
pub fn replace_penultimate(stem: &str, letter: &str) -> String {
    let mut out = String::from(suffix::strip_tail(stem, 2));
    out.push_str(letter);
    out.push_str(suffix::tail(stem, 1));
    out
}

/// Drops the last `е` of the stem: Орел → Орл.
pub fn drop_fleeting_e(stem: &str) -> String {
    match stem.rfind('е') {
        Some(at) => {
            let mut out = String::from(&stem[..at]);
            out.push_str(&stem[at + 'е'.len_utf8()..]);
            out
        }
        None => String::from(stem),
    }
}
