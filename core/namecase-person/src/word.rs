use namecase_protocol::{Declension, Gender, GenderScore, NamePart, RuleId};

/// One word of a name together with everything learned about it.
///
/// Pattern matching always runs on [`WordRecord::normalized`]; the letter
/// case mask taken from the input is put back onto every declined form.
#[derive(Debug, Clone, PartialEq)]
pub struct WordRecord {
    original: String,
    normalized: String,
    letter_case_mask: Vec<bool>,
    is_fully_upper: bool,
    name_part: Option<NamePart>,
    scores: GenderScore,
    resolved: Option<Gender>,
    pinned: bool,
    forms: Vec<String>,
    rule: Option<RuleId>,
}

impl WordRecord {
    pub fn new(text: &str) -> Self {
        let letter_case_mask: Vec<bool> = text.chars().map(|c| !c.is_lowercase()).collect();
        let is_fully_upper = letter_case_mask.iter().all(|&upper| upper);
        Self {
            original: text.to_owned(),
            normalized: text.to_lowercase(),
            letter_case_mask,
            is_fully_upper,
            name_part: None,
            scores: GenderScore::default(),
            resolved: None,
            pinned: false,
            forms: Vec::new(),
            rule: None,
        }
    }

    pub fn with_part(text: &str, part: NamePart) -> Self {
        let mut word = Self::new(text);
        word.name_part = Some(part);
        word
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// `true` per character of the input that is not lowercase.
    pub fn letter_case_mask(&self) -> &[bool] {
        &self.letter_case_mask
    }

    pub fn is_fully_upper(&self) -> bool {
        self.is_fully_upper
    }

    pub fn name_part(&self) -> Option<NamePart> {
        self.name_part
    }

    pub(crate) fn set_name_part(&mut self, part: NamePart) {
        self.name_part = Some(part);
    }

    pub fn scores(&self) -> GenderScore {
        self.scores
    }

    pub(crate) fn set_scores(&mut self, scores: GenderScore) {
        self.scores = scores;
    }

    pub fn resolved(&self) -> Option<Gender> {
        self.resolved
    }

    /// Gender chosen by the caller; survives invalidation.
    pub(crate) fn pin(&mut self, gender: Gender) {
        self.resolved = Some(gender);
        self.pinned = true;
    }

    /// Gender inferred for the whole person; dropped on invalidation.
    pub(crate) fn resolve(&mut self, gender: Gender) {
        self.resolved = Some(gender);
    }

    /// The resolved gender, or the leaning of the scores when unresolved.
    pub fn gender(&self) -> Gender {
        self.resolved.unwrap_or_else(|| self.scores.leaning())
    }

    /// Declined forms, index 0 being the nominative. Empty until declined.
    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    /// Rule that produced [`Self::forms`]; `None` when no rule matched.
    pub fn rule(&self) -> Option<RuleId> {
        self.rule
    }

    pub fn is_declined(&self) -> bool {
        !self.forms.is_empty()
    }

    /// Stores a declension of [`Self::normalized`], restoring the input's casing.
    pub(crate) fn set_declension(&mut self, declension: Declension) {
        let mut forms: Vec<String> = declension
            .forms
            .iter()
            .map(|form| self.restore_casing(form))
            .collect();
        if let Some(first) = forms.first_mut() {
            first.clone_from(&self.original);
        }
        self.forms = forms;
        self.rule = declension.rule;
    }

    /// Clears everything derived from the other words of the person.
    pub(crate) fn invalidate(&mut self) {
        if !self.pinned {
            self.resolved = None;
        }
        self.forms.clear();
        self.rule = None;
    }

    /// Applies the input's casing to a lowercase `form`.
    ///
    /// A fully uppercase input gives a fully uppercase form. Otherwise each
    /// position flagged in the mask is uppercased, up to the shorter of the
    /// two, and the rest of the form is kept as is.
    pub fn restore_casing(&self, form: &str) -> String {
        if self.is_fully_upper {
            return form.to_uppercase();
        }
        let mut restored = String::with_capacity(form.len());
        let mut mask = self.letter_case_mask.iter();
        for c in form.chars() {
            match mask.next() {
                Some(true) => restored.extend(c.to_uppercase()),
                _ => restored.push(c),
            }
        }
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_tracks_lowercase_letters() {
        let word = WordRecord::new("МакКей");
        assert_eq!(word.letter_case_mask(), [true, false, false, true, false, false]);
        assert!(!word.is_fully_upper());
        assert_eq!(word.normalized(), "маккей");
    }

    #[test]
    fn non_letters_count_as_upper() {
        let word = WordRecord::new("д'арк");
        assert_eq!(word.letter_case_mask(), [false, true, false, false, false]);
        assert!(WordRecord::new("ОЛЕНА").is_fully_upper());
        assert!(WordRecord::new("").is_fully_upper());
    }

    #[test]
    fn casing_follows_the_mask() {
        let word = WordRecord::new("Олена");
        assert_eq!(word.restore_casing("олені"), "Олені");
        assert_eq!(word.restore_casing("оленою"), "Оленою");

        let upper = WordRecord::new("ОЛЕНА");
        assert_eq!(upper.restore_casing("оленою"), "ОЛЕНОЮ");

        let mixed = WordRecord::new("ПеТро");
        assert_eq!(mixed.restore_casing("петрові"), "ПеТрові");
        assert_eq!(mixed.restore_casing("пе"), "Пе");
    }

    #[test]
    fn declension_keeps_the_original_nominative() {
        let mut word = WordRecord::with_part("ОлЕна", NamePart::FirstName);
        word.set_declension(Declension {
            forms: vec!["олена".into(), "олени".into()],
            rule: Some(RuleId::new(102)),
        });
        assert_eq!(word.forms(), ["ОлЕна", "ОлЕни"]);
        assert_eq!(word.rule(), Some(RuleId::new(102)));
    }

    #[test]
    fn invalidation_keeps_pinned_gender() {
        let mut inferred = WordRecord::new("Олена");
        inferred.resolve(Gender::Woman);
        inferred.invalidate();
        assert_eq!(inferred.resolved(), None);

        let mut pinned = WordRecord::new("Олена");
        pinned.pin(Gender::Man);
        pinned.invalidate();
        assert_eq!(pinned.resolved(), Some(Gender::Man));
    }

    #[test]
    fn unresolved_gender_leans_on_scores() {
        let mut word = WordRecord::new("Саша");
        assert_eq!(word.gender(), Gender::Man);
        word.set_scores(GenderScore::new(0.1, 0.4));
        assert_eq!(word.gender(), Gender::Woman);
    }
}
