use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use core::fmt;

/// Grammatical case, indexed the way callers address declension results.
///
/// A six-case profile uses indices `0..6`; the Ukrainian profile adds the
/// vocative at index 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Case {
    Nominative = 0,
    Genitive = 1,
    Dative = 2,
    Accusative = 3,
    Instrumental = 4,
    Locative = 5,
    Vocative = 6,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Locative,
        Case::Vocative,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, CaseIndexError> {
        Self::ALL.get(index).copied().ok_or(CaseIndexError {
            index,
            count: Self::ALL.len(),
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Locative => "locative",
            Case::Vocative => "vocative",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A case index outside of the profile's case range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseIndexError {
    pub index: usize,
    pub count: usize,
}

impl fmt::Display for CaseIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "case index {} is out of range for a {}-case profile",
            self.index, self.count
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CaseIndexError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    Man = 0,
    Woman = 1,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Man => f.write_str("man"),
            Gender::Woman => f.write_str("woman"),
        }
    }
}

/// Role a word plays inside a full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum NamePart {
    FirstName = 0,
    FamilyName = 1,
    Patronymic = 2,
}

impl NamePart {
    pub const ALL: [NamePart; 3] = [NamePart::FirstName, NamePart::FamilyName, NamePart::Patronymic];

    /// Single-letter code used by the full-name format string:
    /// `N` given name, `S` family name, `F` patronymic.
    pub const fn letter(self) -> char {
        match self {
            NamePart::FirstName => 'N',
            NamePart::FamilyName => 'S',
            NamePart::Patronymic => 'F',
        }
    }
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePart::FirstName => f.write_str("first name"),
            NamePart::FamilyName => f.write_str("family name"),
            NamePart::Patronymic => f.write_str("patronymic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_index_bounds() {
        assert_eq!(Case::from_index(1), Ok(Case::Genitive));
        assert_eq!(Case::from_index(6), Ok(Case::Vocative));
        assert_eq!(
            Case::from_index(7),
            Err(CaseIndexError { index: 7, count: 7 })
        );
    }

    #[test]
    fn case_order_matches_index() {
        for (i, case) in Case::ALL.iter().enumerate() {
            assert_eq!(case.index(), i);
        }
    }
}
