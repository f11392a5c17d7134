#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod context;
pub mod suffix;
pub mod ua;

pub use context::DeclensionContext;
pub use ua::Ukrainian;

use namecase_protocol::{Declension, Gender, GenderScore, NamePart, NamePartScore};

/// One language's declension catalogue and classification heuristics.
///
/// Every method takes the lowercase form of a single word. Implementations
/// are pure: the same word always yields the same answer.
pub trait LanguageProfile {
    /// Number of grammatical cases a declension produces, nominative included.
    fn case_count(&self) -> usize;

    /// Revision tag of the rule catalogue.
    fn language_build(&self) -> &'static str;

    /// Runs the rule chain for `part` and `gender`; `None` when no rule fires.
    fn decline(&self, part: NamePart, gender: Gender, word: &str) -> Option<Declension>;

    /// Gender evidence for `word` read as a `part`.
    fn gender_score(&self, part: NamePart, word: &str) -> GenderScore;

    /// Evidence for which part of a full name `word` is.
    fn name_part_score(&self, word: &str) -> NamePartScore;

    /// Like [`Self::decline`], falling back to identity forms.
    fn decline_or_identity(&self, part: NamePart, gender: Gender, word: &str) -> Declension {
        self.decline(part, gender, word)
            .unwrap_or_else(|| Declension::identity(word, self.case_count()))
    }
}
