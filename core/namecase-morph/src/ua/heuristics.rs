//! Weighted signals for guessing a word's gender and its place in a full name.
//!
//! Signals are evaluated in table order and every one that fires adds its
//! weight; nothing is normalized. Keep the order: the sums are floating point.

use namecase_protocol::{Gender, GenderScore, NamePart, NamePartScore};

use super::phonology::LetterClass;
use crate::context::DeclensionContext;
use crate::suffix::{in_list, in_names};

/// Something observable about a word.
#[derive(Debug, Clone, Copy)]
pub enum Cue {
    /// The last `window` letters are one of `endings`.
    Ending { window: usize, endings: &'static [&'static str] },
    /// The last letter belongs to a class.
    LastLetter(LetterClass),
    /// The whole word is one of these names, ignoring case.
    Names(&'static [&'static str]),
}

impl Cue {
    pub fn fires(&self, ctx: &DeclensionContext<'_>) -> bool {
        match *self {
            Cue::Ending { window, endings } => in_list(ctx.last(window), endings),
            Cue::LastLetter(class) => class.matches(ctx.last(1)),
            Cue::Names(names) => in_names(ctx.word(), names),
        }
    }
}

/// Adds `weight` to `target` when any of `cues` fires.
#[derive(Debug, Clone, Copy)]
pub struct Signal<T> {
    pub cues: &'static [Cue],
    pub target: T,
    pub weight: f64,
}

impl<T> Signal<T> {
    fn fires(&self, ctx: &DeclensionContext<'_>) -> bool {
        self.cues.iter().any(|cue| cue.fires(ctx))
    }
}

/// `signal!(Target, weight; cue, ...)`, fired when any cue fires.
macro_rules! signal {
    ($target:expr, $weight:expr; $($cue:expr),+ $(,)?) => {
        Signal { cues: &[$($cue),+], target: $target, weight: $weight }
    };
}

/// `ending!(window, [..])`: the last `window` letters are one of the list.
macro_rules! ending {
    ($window:literal, [$($e:literal),+ $(,)?]) => {
        Cue::Ending { window: $window, endings: &[$($e),+] }
    };
}

pub const FIRST_NAME_GENDER: &[Signal<Gender>] = &[
    signal!(Gender::Man, 0.9; ending!(1, ["й"])),
    signal!(Gender::Man, 30.0; Cue::Names(&["Петро", "Микола"])),
    signal!(Gender::Man, 0.5; ending!(2, ["он", "ов", "ав", "ам", "ол", "ан", "рд", "мп", "ко", "ло"])),
    signal!(Gender::Woman, 0.5; ending!(3, ["бов", "нка", "яра", "ила", "опа"])),
    signal!(Gender::Man, 0.01; Cue::LastLetter(LetterClass::CONSONANT)),
    signal!(Gender::Man, 0.02; ending!(1, ["ь"])),
    signal!(Gender::Woman, 0.1; ending!(2, ["дь"])),
    signal!(Gender::Woman, 0.4; ending!(3, ["ель", "бов"])),
];

pub const FAMILY_NAME_GENDER: &[Signal<Gender>] = &[
    signal!(Gender::Man, 0.4; ending!(2, ["ов", "ин", "ев", "єв", "ін", "їн", "ий", "їв", "ів", "ой", "ей"])),
    signal!(Gender::Woman, 0.4; ending!(3, ["ова", "ина", "ева", "єва", "іна", "мін"])),
    signal!(Gender::Woman, 0.4; ending!(2, ["ая"])),
];

pub const PATRONYMIC_GENDER: &[Signal<Gender>] = &[
    signal!(Gender::Man, 10.0; ending!(2, ["ич"])),
    signal!(Gender::Woman, 12.0; ending!(2, ["на"])),
];

pub const NAME_PART: &[Signal<NamePart>] = &[
    signal!(NamePart::Patronymic, 3.0;
        ending!(3, ["вна", "чна", "ліч"]),
        ending!(4, ["ьмич", "ович"]),
    ),
    signal!(NamePart::FirstName, 0.5;
        ending!(3, ["тин"]),
        ending!(4, ["ьмич", "юбов", "івна", "явка", "орив", "кіян"]),
    ),
    signal!(NamePart::FirstName, 10.0;
        Cue::Names(&[
            "Лев", "Гаїна", "Афіна", "Антоніна", "Ангеліна", "Альвіна", "Альбіна", "Аліна", "Павло",
            "Олесь", "Микола", "Мая", "Англеліна", "Елькін", "Мерлін", "Петро",
        ]),
    ),
    signal!(NamePart::FamilyName, 0.4;
        ending!(2, [
            "ов", "ін", "ев", "єв", "ий", "ин", "ой", "ко", "ук", "як", "ца", "их", "ик", "ун", "ок",
            "ша", "ая", "га", "єк", "аш", "ив", "юк", "ус", "це", "ак", "бр", "яр", "іл", "ів", "ич",
            "сь", "ей", "нс", "яс", "ер", "ай", "ян", "ах", "ць", "ющ", "іс", "ач", "уб", "ох", "юх",
            "ут", "ча", "ул", "вк", "зь", "уц", "їн", "де", "уз", "юр", "ік", "іч", "ро",
        ]),
    ),
    signal!(NamePart::FamilyName, 0.4;
        ending!(3, [
            "ова", "ева", "єва", "тих", "рик", "вач", "аха", "шен", "мей", "арь", "вка", "шир", "бан",
            "чий", "іна", "їна", "ька", "ань", "ива", "аль", "ура", "ран", "ало", "ола", "кур", "оба",
            "оль", "нта", "зій", "ґан", "іло", "шта", "юпа", "рна", "бла", "еїн", "има", "мар", "кар",
            "оха", "чур", "ниш", "ета", "тна", "зур", "нір", "йма", "орж", "рба", "іла", "лас", "дід",
            "роз", "аба", "чан", "ган",
        ]),
    ),
    signal!(NamePart::FamilyName, 0.4;
        ending!(4, [
            "ьник", "нчук", "тник", "кирь", "ский", "шена", "шина", "вина", "нина", "гана", "гана",
            "хній", "зюба", "орош", "орон", "сило", "руба", "лест", "мара", "обка", "рока", "сика",
            "одна", "нчар", "вата", "ндар", "грій",
        ]),
    ),
    signal!(NamePart::FamilyName, 0.2; ending!(1, ["і"])),
];

/// Gender signals that apply to a word used as `part`.
pub fn gender_signals(part: NamePart) -> &'static [Signal<Gender>] {
    match part {
        NamePart::FirstName => FIRST_NAME_GENDER,
        NamePart::FamilyName => FAMILY_NAME_GENDER,
        NamePart::Patronymic => PATRONYMIC_GENDER,
    }
}

pub fn gender_score(part: NamePart, ctx: &DeclensionContext<'_>) -> GenderScore {
    let mut score = GenderScore::default();
    for signal in gender_signals(part).iter().filter(|s| s.fires(ctx)) {
        score.add(signal.target, signal.weight);
    }
    score
}

pub fn name_part_score(ctx: &DeclensionContext<'_>) -> NamePartScore {
    let mut score = NamePartScore::default();
    for signal in NAME_PART.iter().filter(|s| s.fires(ctx)) {
        score.add(signal.target, signal.weight);
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gender(part: NamePart, word: &str) -> GenderScore {
        gender_score(part, &DeclensionContext::new(word, 7))
    }

    fn name_part(word: &str) -> NamePart {
        name_part_score(&DeclensionContext::new(word, 7)).best()
    }

    #[test]
    fn patronymic_gender_is_decisive() {
        assert_eq!(gender(NamePart::Patronymic, "петрович"), GenderScore::new(10.0, 0.0));
        assert_eq!(gender(NamePart::Patronymic, "петрівна"), GenderScore::new(0.0, 12.0));
        assert_eq!(gender(NamePart::Patronymic, "ілліч"), GenderScore::default());
    }

    #[test]
    fn first_name_signals_add_up() {
        // й (0.9) + consonant (0.01)
        let score = gender(NamePart::FirstName, "андрій");
        assert!((score.man - 0.91).abs() < 1e-9);
        assert_eq!(score.woman, 0.0);

        assert_eq!(gender(NamePart::FirstName, "петро").man, 30.0);

        // -бов fires for both sides of the table
        let score = gender(NamePart::FirstName, "любов");
        assert!((score.woman - 0.9).abs() < 1e-9);
        assert!((score.man - 0.51).abs() < 1e-9);
    }

    #[test]
    fn family_name_signals() {
        assert_eq!(gender(NamePart::FamilyName, "іванов"), GenderScore::new(0.4, 0.0));
        assert_eq!(gender(NamePart::FamilyName, "іванова"), GenderScore::new(0.0, 0.4));
        assert_eq!(gender(NamePart::FamilyName, "петренко"), GenderScore::default());
    }

    #[test]
    fn name_parts() {
        assert_eq!(name_part("петрович"), NamePart::Patronymic);
        assert_eq!(name_part("петрівна"), NamePart::Patronymic);
        assert_eq!(name_part("петренко"), NamePart::FamilyName);
        assert_eq!(name_part("іванов"), NamePart::FamilyName);
        assert_eq!(name_part("петро"), NamePart::FirstName);
        assert_eq!(name_part("микола"), NamePart::FirstName);
        assert_eq!(name_part("олена"), NamePart::FirstName);
    }

    #[test]
    fn unknown_word_defaults_to_first_name() {
        let score = name_part_score(&DeclensionContext::new("xyz", 7));
        assert_eq!(score, NamePartScore::default());
        assert_eq!(score.best(), NamePart::FirstName);
    }

    #[test]
    fn endings_match_their_window() {
        let tables = [FIRST_NAME_GENDER, FAMILY_NAME_GENDER, PATRONYMIC_GENDER];
        let cues = tables
            .iter()
            .flat_map(|t| t.iter().flat_map(|s| s.cues.iter()))
            .chain(NAME_PART.iter().flat_map(|s| s.cues.iter()));
        for cue in cues {
            if let Cue::Ending { window, endings } = cue {
                for e in endings.iter() {
                    assert_eq!(e.chars().count(), *window, "{e}");
                }
            }
        }
    }
}
