//! Ukrainian declension rules and the chains that order them.
//!
//! Each rule looks at the end of the current word and either declines it or
//! passes. A chain tries its rules in order and the first one that fires
//! wins.

use alloc::format;
use alloc::string::String;

use namecase_protocol::{Declension, Gender, NamePart};

use super::phonology::{
    alternate_velar_hushing, alternate_velar_sibilant, detect_group, drop_fleeting_e,
    is_apostrophe, last_vowel_or_velar, replace_penultimate, stem_of, DeclensionGroup,
    LetterClass,
};
use crate::context::DeclensionContext;
use crate::suffix::{in_chars, in_list, in_names, strip_tail, tail, tail_keep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Masculine names in -а / -я, declined like first-declension nouns.
    ManVowelEnding,
    /// Masculine names in -р; Ігор and Лазар take soft endings.
    ManEndingR,
    /// Masculine names in a consonant, -о or -ь (second declension).
    ManSecondDeclension,
    /// Words in -і, declined like a plural.
    ManPluralLike,
    /// Adjectival -ий / -ой.
    ManAdjectival,
    /// Feminine names in -а / -я.
    WomanVowelEnding,
    /// Feminine names in a consonant or -ь (third declension).
    WomanThirdDeclension,
    /// Adjectival feminine family names: -ая, -ська, -ова, -іна.
    WomanAdjectival,
    /// -ич / -іч.
    PatronymicMan,
    /// -вна.
    PatronymicWoman,
}

const MAN_FIRST_NAME: &[Rule] = &[Rule::ManVowelEnding, Rule::ManEndingR, Rule::ManSecondDeclension];
const WOMAN_FIRST_NAME: &[Rule] = &[Rule::WomanVowelEnding, Rule::WomanThirdDeclension];
const MAN_FAMILY_NAME: &[Rule] = &[
    Rule::ManAdjectival,
    Rule::ManVowelEnding,
    Rule::ManEndingR,
    Rule::ManSecondDeclension,
    Rule::ManPluralLike,
];
const WOMAN_FAMILY_NAME: &[Rule] = &[Rule::WomanAdjectival, Rule::WomanVowelEnding];
const MAN_PATRONYMIC: &[Rule] = &[Rule::PatronymicMan];
const WOMAN_PATRONYMIC: &[Rule] = &[Rule::PatronymicWoman];

/// The ordered rules tried for a word of `part` belonging to a `gender`.
pub fn chain(part: NamePart, gender: Gender) -> &'static [Rule] {
    match (part, gender) {
        (NamePart::FirstName, Gender::Man) => MAN_FIRST_NAME,
        (NamePart::FirstName, Gender::Woman) => WOMAN_FIRST_NAME,
        (NamePart::FamilyName, Gender::Man) => MAN_FAMILY_NAME,
        (NamePart::FamilyName, Gender::Woman) => WOMAN_FAMILY_NAME,
        (NamePart::Patronymic, Gender::Man) => MAN_PATRONYMIC,
        (NamePart::Patronymic, Gender::Woman) => WOMAN_PATRONYMIC,
    }
}

/// First declension any rule of `rules` produces for the context word.
pub fn run_chain(rules: &[Rule], ctx: &DeclensionContext<'_>) -> Option<Declension> {
    rules.iter().find_map(|rule| rule.apply(ctx))
}

impl Rule {
    pub fn apply(self, ctx: &DeclensionContext<'_>) -> Option<Declension> {
        match self {
            Rule::ManVowelEnding => man_vowel_ending(ctx),
            Rule::ManEndingR => man_ending_r(ctx),
            Rule::ManSecondDeclension => man_second_declension(ctx),
            Rule::ManPluralLike => man_plural_like(ctx),
            Rule::ManAdjectival => man_adjectival(ctx),
            Rule::WomanVowelEnding => woman_vowel_ending(ctx),
            Rule::WomanThirdDeclension => woman_third_declension(ctx),
            Rule::WomanAdjectival => woman_adjectival(ctx),
            Rule::PatronymicMan => patronymic_man(ctx),
            Rule::PatronymicWoman => patronymic_woman(ctx),
        }
    }
}

/// Endings of a first-declension -а word whose stem ends in `c`:
/// Ольга → Ольги, Ользі.
fn hard_a_endings(c: &str) -> [String; 6] {
    let alt = alternate_velar_sibilant(c);
    [
        format!("{c}и"),
        format!("{alt}і"),
        format!("{c}у"),
        format!("{c}ою"),
        format!("{alt}і"),
        format!("{c}о"),
    ]
}

/// Endings of a first-declension -я word whose stem ends in consonant `c`.
fn soft_ya_endings(c: &str) -> [String; 6] {
    let alt = alternate_velar_sibilant(c);
    [
        format!("{c}і"),
        format!("{alt}і"),
        format!("{c}ю"),
        format!("{c}ею"),
        format!("{alt}і"),
        format!("{c}е"),
    ]
}

const IYA_ENDINGS: [&str; 6] = ["ї", "ї", "ю", "єю", "ї", "є"];

fn man_vowel_ending(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    let before_last = ctx.last_keep(2, 1);
    let word = ctx.word();

    match ctx.last(1) {
        "а" => Some(ctx.declension(101, word, &hard_a_endings(before_last), 2)),
        "я" if before_last == "і" => Some(ctx.declension(102, word, &IYA_ENDINGS, 1)),
        "я" => Some(ctx.declension(103, word, &soft_ya_endings(before_last), 2)),
        _ => None,
    }
}

fn man_ending_r(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    if ctx.last(1) != "р" {
        return None;
    }
    let word = ctx.word();

    if in_names(word, &["Ігор", "Лазар"]) {
        return Some(ctx.declension(201, word, &["я", "еві", "я", "ем", "еві", "е"], 0));
    }

    // Нестір → Нестора
    let stem = if tail_keep(word, 2, 1) == "і" {
        replace_penultimate(word, "о")
    } else {
        String::from(word)
    };
    Some(ctx.declension(202, &stem, &["а", "ові", "а", "ом", "ові", "е"], 0))
}

fn man_second_declension(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    let before_last = ctx.last_keep(2, 1);
    let last = ctx.last(1);
    if !((LetterClass::CONSONANT | LetterClass::SOFT_SIGN).matches(last) || last == "о") {
        return None;
    }

    let word = ctx.word();
    let group = detect_group(word);
    let mut stem = String::from(stem_of(word));
    let stem_last = String::from(tail(&stem, 1));

    // Антін, Федір, Тиміш keep і only in the nominative: Антона, Федора.
    if stem_last != "й"
        && tail_keep(&stem, 2, 1) == "і"
        && !in_list(tail(&stem, 4), &["світ", "цвіт"])
        && !in_names(word, &["Гліб"])
        && !in_list(ctx.last(2), &["ік", "іч"])
    {
        stem = replace_penultimate(&stem, "о");
    }

    // Орел → Орла
    if stem.starts_with('о') && last_vowel_or_velar(&stem) == Some('е') && ctx.last(2) != "сь" {
        stem = drop_fleeting_e(&stem);
    }

    match group {
        DeclensionGroup::Hard => {
            let c = stem_last.as_str();
            let vocative = alternate_velar_hushing(c);
            if ctx.last(2) == "ок" && ctx.last(3) != "оок" {
                Some(ctx.declension(301, word, &["ка", "кові", "ка", "ком", "кові", "че"], 2))
            } else if in_list(ctx.last(2), &["ов", "ев", "єв"]) && !in_names(word, &["Лев", "Остромов"]) {
                // Russian-style family names: Іванов → Іванова, Івановим
                let endings = [
                    format!("{c}а"),
                    format!("{c}у"),
                    format!("{c}а"),
                    format!("{c}им"),
                    format!("{c}у"),
                    format!("{vocative}е"),
                ];
                Some(ctx.declension(302, &stem, &endings, 1))
            } else if ctx.last(2) == "ін" {
                Some(ctx.declension(303, word, &["а", "у", "а", "ом", "у", "е"], 0))
            } else {
                let endings = [
                    format!("{c}а"),
                    format!("{c}ові"),
                    format!("{c}а"),
                    format!("{c}ом"),
                    format!("{c}ові"),
                    format!("{vocative}е"),
                ];
                Some(ctx.declension(304, &stem, &endings, 1))
            }
        }
        DeclensionGroup::Mixed => {
            Some(ctx.declension(305, &stem, &["а", "еві", "а", "ем", "еві", "е"], 0))
        }
        DeclensionGroup::Soft => {
            const SOFT_ENDINGS: [&str; 6] = ["я", "єві", "я", "єм", "єві", "ю"];
            if ctx.last(2) == "ей" && LetterClass::LABIAL.matches(ctx.last_keep(3, 1)) {
                // Соловей → Солов’я
                let mut stem = String::from(strip_tail(word, 2));
                stem.push('’');
                Some(ctx.declension(306, &stem, &SOFT_ENDINGS, 0))
            } else if ctx.last(1) == "й" || before_last == "і" {
                Some(ctx.declension(307, word, &SOFT_ENDINGS, 1))
            } else if word == "швець" {
                Some(ctx.declension(
                    308,
                    word,
                    &["евця", "евцеві", "евця", "евцем", "евцеві", "евцю"],
                    4,
                ))
            } else if ctx.last(3) == "ець" {
                Some(ctx.declension(309, word, &["ця", "цеві", "ця", "цем", "цеві", "цю"], 3))
            } else if in_list(ctx.last(3), &["єць", "яць"]) {
                Some(ctx.declension(310, word, &["йця", "йцеві", "йця", "йцем", "йцеві", "йцю"], 3))
            } else {
                Some(ctx.declension(311, &stem, &["я", "еві", "я", "ем", "еві", "ю"], 0))
            }
        }
    }
}

fn man_plural_like(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    (ctx.last(1) == "і").then(|| ctx.declension(4, ctx.word(), &["их", "им", "их", "ими", "их", "і"], 1))
}

fn man_adjectival(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    in_list(ctx.last(2), &["ий", "ой"])
        .then(|| ctx.declension(5, ctx.word(), &["ого", "ому", "ого", "им", "ому", "ий"], 2))
}

fn woman_vowel_ending(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    let before_last = ctx.last_keep(2, 1);
    let word = ctx.word();

    // -ніга declines like нога
    if ctx.last(4) == "ніга" {
        let mut stem = String::from(strip_tail(word, 3));
        stem.push('о');
        return Some(ctx.declension(101, &stem, &["ги", "зі", "гу", "гою", "зі", "го"], 0));
    }

    match ctx.last(1) {
        "а" => Some(ctx.declension(102, word, &hard_a_endings(before_last), 2)),
        "я" if LetterClass::VOWEL.matches(before_last) || is_apostrophe(before_last) => {
            Some(ctx.declension(103, word, &IYA_ENDINGS, 1))
        }
        "я" => Some(ctx.declension(104, word, &soft_ya_endings(before_last), 2)),
        _ => None,
    }
}

fn woman_third_declension(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    let last = ctx.last(1);
    if !(LetterClass::CONSONANT | LetterClass::SOFT_SIGN).matches(last) {
        return None;
    }

    let stem = stem_of(ctx.word());
    let stem_last = tail(stem, 1);
    let stem_before_last = tail_keep(stem, 2, 1);

    // Любов → Любов’ю
    let apostrophe = if LetterClass::LABIAL.matches(stem_last) && LetterClass::VOWEL.matches(stem_before_last) {
        "’"
    } else {
        ""
    };
    // Нінель → Нінеллю
    let doubled = if in_chars(stem_last, "дтзсцлн") { stem_last } else { "" };
    let instrumental = format!("{doubled}{apostrophe}ю");

    if last == "ь" {
        let endings = ["і", "і", "ь", instrumental.as_str(), "і", "е"];
        Some(ctx.declension(201, stem, &endings, 0))
    } else {
        let endings = ["і", "і", "", instrumental.as_str(), "і", "е"];
        Some(ctx.declension(202, stem, &endings, 0))
    }
}

fn woman_adjectival(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    let before_last = ctx.last_keep(2, 1);
    let word = ctx.word();

    // Донская
    if ctx.last(2) == "ая" {
        return Some(ctx.declension(301, word, &["ої", "ій", "ую", "ою", "ій", "ая"], 2));
    }

    // Ковальська, Іванова, Пушкіна
    if ctx.last(1) == "а" && (in_chars(ctx.last_keep(2, 1), "чнв") || in_list(ctx.last_keep(3, 2), &["ьк"])) {
        let c = before_last;
        let endings = [
            format!("{c}ої"),
            format!("{c}ій"),
            format!("{c}у"),
            format!("{c}ою"),
            format!("{c}ій"),
            format!("{c}о"),
        ];
        return Some(ctx.declension(302, word, &endings, 2));
    }

    None
}

fn patronymic_man(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    in_list(ctx.last(2), &["ич", "іч"])
        .then(|| ctx.declension(601, ctx.word(), &["а", "у", "а", "ем", "у", "у"], 0))
}

fn patronymic_woman(ctx: &DeclensionContext<'_>) -> Option<Declension> {
    (ctx.last(3) == "вна").then(|| ctx.declension(602, ctx.word(), &["и", "і", "у", "ою", "і", "о"], 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use namecase_protocol::RuleId;

    fn decline(part: NamePart, gender: Gender, word: &str) -> Option<Declension> {
        let ctx = DeclensionContext::new(word, 7);
        run_chain(chain(part, gender), &ctx)
    }

    fn forms(part: NamePart, gender: Gender, word: &str) -> ([String; 7], u32) {
        let declension = decline(part, gender, word).expect("a rule should fire");
        let rule = declension.rule.map(u32::from).unwrap_or(0);
        let forms: [String; 7] = declension.forms.try_into().expect("seven cases");
        (forms, rule)
    }

    #[test]
    fn woman_first_names() {
        let (f, rule) = forms(NamePart::FirstName, Gender::Woman, "олена");
        assert_eq!(f, ["олена", "олени", "олені", "олену", "оленою", "олені", "олено"]);
        assert_eq!(rule, 102);

        let (f, _) = forms(NamePart::FirstName, Gender::Woman, "ольга");
        assert_eq!(f[2], "ользі");
        assert_eq!(f[5], "ользі");

        let (f, rule) = forms(NamePart::FirstName, Gender::Woman, "марія");
        assert_eq!(f, ["марія", "марії", "марії", "марію", "марією", "марії", "маріє"]);
        assert_eq!(rule, 103);

        let (f, rule) = forms(NamePart::FirstName, Gender::Woman, "любов");
        assert_eq!(f, ["любов", "любові", "любові", "любов", "любов’ю", "любові", "любове"]);
        assert_eq!(rule, 202);
    }

    #[test]
    fn soft_sign_doubles_before_instrumental() {
        let (f, rule) = forms(NamePart::FirstName, Gender::Woman, "нінель");
        assert_eq!(f, ["нінель", "нінелі", "нінелі", "нінель", "нінеллю", "нінелі", "нінеле"]);
        assert_eq!(rule, 201);
    }

    #[test]
    fn niha_declines_like_noha() {
        let (f, rule) = forms(NamePart::FamilyName, Gender::Woman, "білоніга");
        assert_eq!(f, ["білоніга", "білоноги", "білонозі", "білоногу", "білоногою", "білонозі", "білоного"]);
        assert_eq!(rule, 101);
    }

    #[test]
    fn ihor_and_lazar_are_soft() {
        let (f, rule) = forms(NamePart::FirstName, Gender::Man, "ігор");
        assert_eq!(f[1], "ігоря");
        assert_eq!(rule, 201);

        let (f, rule) = forms(NamePart::FirstName, Gender::Man, "віктор");
        assert_eq!(f[1], "віктора");
        assert_eq!(rule, 202);

        let (f, _) = forms(NamePart::FirstName, Gender::Man, "нестір");
        assert_eq!(f[1], "нестора");
    }

    #[test]
    fn man_first_names() {
        let (f, rule) = forms(NamePart::FirstName, Gender::Man, "петро");
        assert_eq!(f, ["петро", "петра", "петрові", "петра", "петром", "петрові", "петре"]);
        assert_eq!(rule, 304);

        let (f, rule) = forms(NamePart::FirstName, Gender::Man, "андрій");
        assert_eq!(f, ["андрій", "андрія", "андрієві", "андрія", "андрієм", "андрієві", "андрію"]);
        assert_eq!(rule, 307);

        let (f, rule) = forms(NamePart::FirstName, Gender::Man, "олесь");
        assert_eq!(f[1], "олеся");
        assert_eq!(f[6], "олесю");
        assert_eq!(rule, 311);

        let (f, rule) = forms(NamePart::FirstName, Gender::Man, "микола");
        assert_eq!(f[1], "миколи");
        assert_eq!(rule, 101);

        let (f, rule) = forms(NamePart::FirstName, Gender::Man, "ілія");
        assert_eq!(f, ["ілія", "ілії", "ілії", "ілію", "ілією", "ілії", "іліє"]);
        assert_eq!(rule, 102);

        let (f, _) = forms(NamePart::FirstName, Gender::Man, "федір");
        assert_eq!(f[1], "федора");
    }

    #[test]
    fn fleeting_and_inserted_vowels() {
        let (f, rule) = forms(NamePart::FirstName, Gender::Man, "прокіп");
        assert_eq!(f[1], "прокопа");
        assert_eq!(rule, 304);

        let (f, rule) = forms(NamePart::FirstName, Gender::Man, "тиміш");
        assert_eq!(f[1], "тимоша");
        assert_eq!(rule, 305);

        // -ін keeps its і: the rule declines the unaltered word
        let (f, _) = forms(NamePart::FirstName, Gender::Man, "антін");
        assert_eq!(f[1], "антіна");

        let (f, _) = forms(NamePart::FirstName, Gender::Man, "гліб");
        assert_eq!(f[1], "гліба");

        let (f, _) = forms(NamePart::FamilyName, Gender::Man, "орел");
        assert_eq!(f[1], "орла");
    }

    #[test]
    fn soft_group_special_cases() {
        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "соловей");
        assert_eq!(f[1], "солов’я");
        assert_eq!(rule, 306);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "швець");
        assert_eq!(f[1], "шевця");
        assert_eq!(rule, 308);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "кравець");
        assert_eq!(f[1], "кравця");
        assert_eq!(rule, 309);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "заєць");
        assert_eq!(f[1], "зайця");
        assert_eq!(rule, 310);
    }

    #[test]
    fn man_family_names() {
        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "іванов");
        assert_eq!(f, ["іванов", "іванова", "іванову", "іванова", "івановим", "іванову", "іванове"]);
        assert_eq!(rule, 302);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "петренко");
        assert_eq!(f[1], "петренка");
        assert_eq!(f[6], "петренче");
        assert_eq!(rule, 304);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "тихий");
        assert_eq!(f[1], "тихого");
        assert_eq!(rule, 5);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "кущ");
        assert_eq!(f[1], "куща");
        assert_eq!(rule, 305);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "сморжевські");
        assert_eq!(f[1], "сморжевських");
        assert_eq!(rule, 4);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "пушкін");
        assert_eq!(f, ["пушкін", "пушкіна", "пушкіну", "пушкіна", "пушкіном", "пушкіну", "пушкіне"]);
        assert_eq!(rule, 303);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Man, "гайок");
        assert_eq!(f[1], "гайка");
        assert_eq!(rule, 301);
    }

    #[test]
    fn woman_family_names() {
        let (f, rule) = forms(NamePart::FamilyName, Gender::Woman, "іванова");
        assert_eq!(f, ["іванова", "іванової", "івановій", "іванову", "івановою", "івановій", "іваново"]);
        assert_eq!(rule, 302);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Woman, "ковальська");
        assert_eq!(f[1], "ковальської");
        assert_eq!(rule, 302);

        let (f, rule) = forms(NamePart::FamilyName, Gender::Woman, "донская");
        assert_eq!(f[1], "донскої");
        assert_eq!(rule, 301);

        assert_eq!(decline(NamePart::FamilyName, Gender::Woman, "петренко"), None);
    }

    #[test]
    fn patronymics() {
        let (f, rule) = forms(NamePart::Patronymic, Gender::Man, "петрович");
        assert_eq!(f, ["петрович", "петровича", "петровичу", "петровича", "петровичем", "петровичу", "петровичу"]);
        assert_eq!(rule, 601);

        let (f, rule) = forms(NamePart::Patronymic, Gender::Woman, "петрівна");
        assert_eq!(f, ["петрівна", "петрівни", "петрівні", "петрівну", "петрівною", "петрівні", "петрівно"]);
        assert_eq!(rule, 602);

        assert_eq!(decline(NamePart::Patronymic, Gender::Man, "петрівна"), None);
    }

    #[test]
    fn first_match_wins() {
        // -ий is caught by the adjectival rule before the consonant rule sees the й
        let declension = decline(NamePart::FamilyName, Gender::Man, "білий").expect("adjectival");
        assert_eq!(declension.rule, Some(RuleId::new(5)));
        // ...but a first name never reaches it
        let declension = decline(NamePart::FirstName, Gender::Man, "білий").expect("soft group");
        assert_eq!(declension.rule, Some(RuleId::new(307)));
    }

    #[test]
    fn single_letters_do_not_panic() {
        for part in NamePart::ALL {
            for gender in [Gender::Man, Gender::Woman] {
                for word in ["а", "я", "й", "ь", "і", "о", "р", ""] {
                    if let Some(declension) = decline(part, gender, word) {
                        assert_eq!(declension.forms.len(), 7);
                    }
                }
            }
        }
    }
}
