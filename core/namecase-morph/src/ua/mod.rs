//! Ukrainian profile: seven cases, vocative last.

pub mod heuristics;
pub mod phonology;
pub mod rules;

use namecase_protocol::{Declension, Gender, GenderScore, NamePart, NamePartScore};

use crate::context::DeclensionContext;
use crate::LanguageProfile;

/// Revision of the Ukrainian rule catalogue.
pub const LANGUAGE_BUILD: &str = "11071222";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ukrainian;

impl Ukrainian {
    pub const CASE_COUNT: usize = 7;
}

impl LanguageProfile for Ukrainian {
    fn case_count(&self) -> usize {
        Self::CASE_COUNT
    }

    fn language_build(&self) -> &'static str {
        LANGUAGE_BUILD
    }

    fn decline(&self, part: NamePart, gender: Gender, word: &str) -> Option<Declension> {
        let ctx = DeclensionContext::new(word, Self::CASE_COUNT);
        rules::run_chain(rules::chain(part, gender), &ctx)
    }

    fn gender_score(&self, part: NamePart, word: &str) -> GenderScore {
        heuristics::gender_score(part, &DeclensionContext::new(word, Self::CASE_COUNT))
    }

    fn name_part_score(&self, word: &str) -> NamePartScore {
        heuristics::name_part_score(&DeclensionContext::new(word, Self::CASE_COUNT))
    }
}
