use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::ops::Range;

use namecase_protocol::{Declension, RuleId};

use crate::suffix;

/// The word a rule chain is currently working on, plus a memo of the tail
/// windows already cut from it.
///
/// One context lives for one declension or scoring attempt; a new word means
/// a new context, so the memo never outlives the word it describes.
#[derive(Debug)]
pub struct DeclensionContext<'a> {
    word: &'a str,
    case_count: usize,
    windows: RefCell<BTreeMap<(usize, usize), Range<usize>>>,
}

impl<'a> DeclensionContext<'a> {
    pub fn new(word: &'a str, case_count: usize) -> Self {
        Self {
            word,
            case_count,
            windows: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn word(&self) -> &'a str {
        self.word
    }

    pub fn case_count(&self) -> usize {
        self.case_count
    }

    /// Last `length` letters of the word.
    pub fn last(&self, length: usize) -> &'a str {
        self.last_keep(length, 0)
    }

    /// First `keep` letters of the last-`length` window (see [`suffix::tail_keep`]).
    pub fn last_keep(&self, length: usize, keep: usize) -> &'a str {
        let word = self.word;
        let range = self
            .windows
            .borrow_mut()
            .entry((length, keep))
            .or_insert_with(|| suffix::tail_range(word, length, keep))
            .clone();
        &word[range]
    }

    /// Builds the full case list: the word itself, then `stem_source` minus
    /// its last `replace_last` letters followed by each ending in turn.
    pub fn forms<S: AsRef<str>>(&self, stem_source: &str, endings: &[S], replace_last: usize) -> Vec<String> {
        let stem = suffix::strip_tail(stem_source, replace_last);
        let mut forms = Vec::with_capacity(self.case_count);
        forms.push(String::from(self.word));
        for ending in endings.iter().take(self.case_count.saturating_sub(1)) {
            let mut form = String::with_capacity(stem.len() + ending.as_ref().len());
            form.push_str(stem);
            form.push_str(ending.as_ref());
            forms.push(form);
        }
        forms
    }

    /// [`Self::forms`] tagged with the rule that produced them.
    pub fn declension<S: AsRef<str>>(
        &self,
        rule: u32,
        stem_source: &str,
        endings: &[S],
        replace_last: usize,
    ) -> Declension {
        Declension {
            forms: self.forms(stem_source, endings, replace_last),
            rule: Some(RuleId::new(rule)),
        }
    }
}
