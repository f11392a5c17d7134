use rkyv::{Archive, Deserialize, Serialize};
use crate::grammar::{Gender, NamePart};
use crate::ids::RuleId;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Accumulated gender evidence for one word.
///
/// The two sides are raw sums of heuristic weights, comparable only with each
/// other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct GenderScore {
    pub man: f64,
    pub woman: f64,
}

impl GenderScore {
    pub const fn new(man: f64, woman: f64) -> Self {
        Self { man, woman }
    }

    pub fn add(&mut self, gender: Gender, weight: f64) {
        match gender {
            Gender::Man => self.man += weight,
            Gender::Woman => self.woman += weight,
        }
    }

    /// Distance between the stronger and the weaker side.
    pub fn gap(&self) -> f64 {
        self.man.max(self.woman) - self.man.min(self.woman)
    }

    /// Gender this score points at on its own; a tie counts as `Man`.
    pub fn leaning(&self) -> Gender {
        if self.man >= self.woman {
            Gender::Man
        } else {
            Gender::Woman
        }
    }
}

/// Accumulated name-part evidence for one word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NamePartScore {
    pub first: f64,
    pub family: f64,
    pub patronymic: f64,
}

impl NamePartScore {
    pub fn add(&mut self, part: NamePart, weight: f64) {
        match part {
            NamePart::FirstName => self.first += weight,
            NamePart::FamilyName => self.family += weight,
            NamePart::Patronymic => self.patronymic += weight,
        }
    }

    /// Highest-scoring part. Ties go to the first name, then the family name.
    pub fn best(&self) -> NamePart {
        let max = self.first.max(self.family).max(self.patronymic);
        if max == self.first {
            NamePart::FirstName
        } else if max == self.family {
            NamePart::FamilyName
        } else {
            NamePart::Patronymic
        }
    }
}

/// Case forms of one word, index 0 being the nominative.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Declension {
    pub forms: Vec<String>,
    /// `None` when no rule matched and every form is a copy of the word.
    pub rule: Option<RuleId>,
}

impl Declension {
    pub fn identity(word: &str, case_count: usize) -> Self {
        Self {
            forms: (0..case_count).map(|_| String::from(word)).collect(),
            rule: None,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rule.is_none()
    }
}
