use std::collections::BTreeMap;

use namecase_morph::{LanguageProfile, Ukrainian};
use namecase_protocol::{CaseIndexError, Gender, GenderScore, NamePart};
use tracing::{debug, trace};

use crate::error::{NameCaseError, Result};
use crate::tokenize;
use crate::word::WordRecord;

pub const VERSION: &str = "0.4.1";

/// How far a [`Person`] has been processed since the last change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Words may be missing a role or a gender.
    Collecting,
    /// Every word has a role and the person has a gender.
    Classified,
    /// Every word has its case forms.
    Declined,
}

/// The words of one person's name and what has been inferred about them.
///
/// Work is done lazily: queries classify and decline on demand and cache the
/// result until the next mutation.
#[derive(Debug, Clone)]
pub struct Person<P: LanguageProfile = Ukrainian> {
    profile: P,
    words: Vec<WordRecord>,
    index: BTreeMap<NamePart, Vec<usize>>,
    stage: Stage,
    confidence: f64,
}

impl Person<Ukrainian> {
    pub fn new() -> Self {
        Self::with_profile(Ukrainian)
    }
}

impl Default for Person<Ukrainian> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: LanguageProfile> Person<P> {
    pub fn with_profile(profile: P) -> Self {
        Self {
            profile,
            words: Vec::new(),
            index: BTreeMap::new(),
            stage: Stage::Collecting,
            confidence: 0.0,
        }
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn language_version(&self) -> &'static str {
        self.profile.language_build()
    }

    pub fn case_count(&self) -> usize {
        self.profile.case_count()
    }

    /// Drops every word.
    pub fn reset(&mut self) -> &mut Self {
        self.words.clear();
        self.index.clear();
        self.stage = Stage::Collecting;
        self.confidence = 0.0;
        self
    }

    pub fn add_first_name(&mut self, text: &str) -> &mut Self {
        self.push(text, Some(NamePart::FirstName))
    }

    pub fn add_last_name(&mut self, text: &str) -> &mut Self {
        self.push(text, Some(NamePart::FamilyName))
    }

    pub fn add_father_name(&mut self, text: &str) -> &mut Self {
        self.push(text, Some(NamePart::Patronymic))
    }

    /// Adds a whole name at once: the first name, then the family name, then
    /// the patronymic. Blank parts are skipped.
    pub fn set_full_name(&mut self, family: &str, first: &str, father: &str) -> &mut Self {
        self.add_first_name(first)
            .add_last_name(family)
            .add_father_name(father)
    }

    /// Forces `gender` onto every word added so far.
    pub fn set_gender(&mut self, gender: Gender) -> &mut Self {
        for word in &mut self.words {
            word.pin(gender);
        }
        self.invalidate();
        self
    }

    fn push(&mut self, text: &str, part: Option<NamePart>) -> &mut Self {
        let text = text.trim();
        if text.is_empty() {
            return self;
        }
        let word = match part {
            Some(part) => WordRecord::with_part(text, part),
            None => WordRecord::new(text),
        };
        self.words.push(word);
        self.invalidate();
        self
    }

    fn invalidate(&mut self) {
        if self.stage != Stage::Collecting {
            trace!(words = self.words.len(), "invalidating cached results");
        }
        for word in &mut self.words {
            word.invalidate();
        }
        self.index.clear();
        self.stage = Stage::Collecting;
    }

    /// Gives every word a role and the person a gender.
    fn prepare(&mut self) {
        if self.stage != Stage::Collecting {
            return;
        }

        let profile = &self.profile;
        for word in self.words.iter_mut().filter(|w| w.name_part().is_none()) {
            let part = profile.name_part_score(word.normalized()).best();
            trace!(word = word.original(), %part, "classified word");
            word.set_name_part(part);
        }

        let gender = self.solve_gender();
        for word in &mut self.words {
            word.resolve(gender);
        }

        self.index.clear();
        for (position, word) in self.words.iter().enumerate() {
            if let Some(part) = word.name_part() {
                self.index.entry(part).or_default().push(position);
            }
        }

        self.stage = Stage::Classified;
        debug!(words = self.words.len(), %gender, "person classified");
    }

    /// The first word with a known gender decides for everyone. Otherwise
    /// each word is scored by its role and the summed scores are compared;
    /// `Man` needs a strictly larger sum.
    fn solve_gender(&mut self) -> Gender {
        if let Some(gender) = self.words.iter().find_map(WordRecord::resolved) {
            return gender;
        }

        let mut total = GenderScore::default();
        let profile = &self.profile;
        for word in &mut self.words {
            let Some(part) = word.name_part() else { continue };
            let scores = profile.gender_score(part, word.normalized());
            word.set_scores(scores);
            total.man += scores.man;
            total.woman += scores.woman;
        }

        if total.man > total.woman {
            Gender::Man
        } else {
            Gender::Woman
        }
    }

    fn decline_all(&mut self) {
        self.prepare();
        if self.stage != Stage::Classified {
            return;
        }

        let profile = &self.profile;
        for word in &mut self.words {
            let Some(part) = word.name_part() else { continue };
            let declension = profile.decline_or_identity(part, word.gender(), word.normalized());
            trace!(word = word.original(), %part, rule = ?declension.rule, "declined word");
            word.set_declension(declension);
        }

        self.stage = Stage::Declined;
        debug!(words = self.words.len(), "person declined");
    }

    /// Gender of the person, taken from the word whose scores disagree the
    /// most. `None` when there are no words.
    pub fn detect_gender(&mut self) -> Option<Gender> {
        self.prepare();

        let mut best: Option<(&WordRecord, f64)> = None;
        for word in &self.words {
            let gap = word.scores().gap();
            if best.map_or(true, |(_, max)| gap > max) {
                best = Some((word, gap));
            }
        }

        let (word, gap) = best?;
        self.confidence = gap;
        Some(word.gender())
    }

    /// Score gap behind the last [`Self::detect_gender`] answer.
    pub fn gender_confidence(&mut self) -> f64 {
        self.detect_gender();
        self.confidence
    }

    /// Every case of the words playing `role`, space-joined per case.
    ///
    /// A role with no words yields one empty string per case.
    pub fn decline(&mut self, role: NamePart) -> Result<Vec<String>> {
        if self.words.is_empty() {
            return Err(NameCaseError::NoWords);
        }
        self.decline_all();

        let positions = self.index.get(&role).map(Vec::as_slice).unwrap_or_default();
        let joined = (0..self.case_count())
            .map(|case| {
                positions
                    .iter()
                    .map(|&position| self.words[position].forms()[case].as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Ok(joined)
    }

    /// A single case of [`Self::decline`].
    pub fn decline_case(&mut self, role: NamePart, case_index: usize) -> Result<String> {
        if self.words.is_empty() {
            return Err(NameCaseError::NoWords);
        }
        let count = self.case_count();
        if case_index >= count {
            return Err(CaseIndexError { index: case_index, count }.into());
        }
        let mut forms = self.decline(role)?;
        Ok(forms.swap_remove(case_index))
    }

    /// Replaces the words with those of `full_name` and infers their roles.
    pub fn classify(&mut self, full_name: &str) -> Vec<NamePart> {
        self.load(full_name);
        self.prepare();
        self.words.iter().filter_map(WordRecord::name_part).collect()
    }

    /// Role letters of `full_name` (`N` first name, `S` family name,
    /// `F` patronymic), space separated: `"S N F"`.
    pub fn name_format(&mut self, full_name: &str) -> String {
        self.classify(full_name)
            .into_iter()
            .map(|part| part.letter().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn detect_gender_of(&mut self, full_name: &str) -> Option<Gender> {
        self.load(full_name);
        self.detect_gender()
    }

    fn load(&mut self, full_name: &str) {
        self.reset();
        for text in tokenize::split(full_name) {
            self.push(text, None);
        }
    }

    pub fn first_name_case(&mut self, word: &str, case_index: usize, gender: Gender) -> Result<String> {
        self.one_shot(word, NamePart::FirstName, case_index, gender)
    }

    pub fn last_name_case(&mut self, word: &str, case_index: usize, gender: Gender) -> Result<String> {
        self.one_shot(word, NamePart::FamilyName, case_index, gender)
    }

    pub fn father_name_case(&mut self, word: &str, case_index: usize, gender: Gender) -> Result<String> {
        self.one_shot(word, NamePart::Patronymic, case_index, gender)
    }

    fn one_shot(&mut self, word: &str, part: NamePart, case_index: usize, gender: Gender) -> Result<String> {
        self.reset().push(word, Some(part)).set_gender(gender);
        self.decline_case(part, case_index)
    }
}
