//! Search-query normalisation and keyword-set matching.

use std::collections::HashSet;

use adtarget_core::constants::SEARCH_QUERY_WORD_COUNT_LIMIT;

/// Lowercase, replace punctuation with spaces, collapse whitespace, and keep
/// at most [`SEARCH_QUERY_WORD_COUNT_LIMIT`] words.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .take(SEARCH_QUERY_WORD_COUNT_LIMIT)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Distinct words of an already-normalised query.
pub fn word_set(normalized: &str) -> HashSet<&str> {
    normalized.split_whitespace().collect()
}

/// A keyword set matches when every one of its words occurs in the query.
pub fn matches(query_words: &HashSet<&str>, keywords: &str) -> bool {
    let keywords = normalize(keywords);
    let mut words = keywords.split_whitespace().peekable();
    if words.peek().is_none() {
        return false;
    }
    words.all(|word| query_words.contains(word))
}
