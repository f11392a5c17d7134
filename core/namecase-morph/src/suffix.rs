//! Fixed-width windows over the end of a word.
//!
//! Every width counts characters, not bytes. A window wider than the word is
//! empty, and empty needles never match, so a short word simply fails every
//! pattern that is longer than itself.

use core::ops::Range;

/// Byte offset of the `count`-th character from the end, if the word has that many.
fn tail_start(word: &str, count: usize) -> Option<usize> {
    if count == 0 {
        return Some(word.len());
    }
    word.char_indices().rev().nth(count - 1).map(|(i, _)| i)
}

/// First `count` characters of `word` (all of it when shorter).
pub fn head(word: &str, count: usize) -> &str {
    match word.char_indices().nth(count) {
        Some((i, _)) => &word[..i],
        None => word,
    }
}

/// Byte range of the window `tail_keep(word, length, keep)` selects.
pub fn tail_range(word: &str, length: usize, keep: usize) -> Range<usize> {
    let Some(start) = tail_start(word, length) else {
        return word.len()..word.len();
    };
    if keep == 0 {
        return start..word.len();
    }
    start..start + head(&word[start..], keep).len()
}

/// Last `length` characters of `word`.
pub fn tail(word: &str, length: usize) -> &str {
    &word[tail_range(word, length, 0)]
}

/// The first `keep` characters of the `length`-wide tail window; `keep == 0`
/// returns the whole window.
///
/// `tail_keep("петро", 2, 1)` is `"р"`, the letter before the last one.
pub fn tail_keep(word: &str, length: usize, keep: usize) -> &str {
    &word[tail_range(word, length, keep)]
}

/// `word` without its last `count` characters; empty if it has fewer.
pub fn strip_tail(word: &str, count: usize) -> &str {
    match tail_start(word, count) {
        Some(start) => &word[..start],
        None => &word[..0],
    }
}

/// True iff `needle` is non-empty and occurs inside the character set `set`.
pub fn in_chars(needle: &str, set: &str) -> bool {
    !needle.is_empty() && set.contains(needle)
}

/// True iff `needle` is non-empty and equals one of `list`.
pub fn in_list(needle: &str, list: &[&str]) -> bool {
    !needle.is_empty() && list.contains(&needle)
}

/// Case-insensitive exact match against an exception list.
pub fn in_names(word: &str, names: &[&str]) -> bool {
    let word = word.to_lowercase();
    names.iter().any(|name| name.to_lowercase() == word)
}
