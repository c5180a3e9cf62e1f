//! Rules for the header search form.

use crate::messages;
use crate::types::Notice;

pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// What to do with a search form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Let the browser submit the form.
    Allow,
    /// Cancel the submission and show the notice instead.
    Block(Notice),
}

pub fn check_submission(raw_query: &str) -> Submission {
    if raw_query.trim().is_empty() {
        Submission::Block(Notice::warning(messages::EMPTY_QUERY))
    } else {
        Submission::Allow
    }
}

/// Whether a debounced input value is long enough for a type-ahead lookup.
pub fn wants_lookup(query: &str, min_chars: usize) -> bool {
    query.chars().count() >= min_chars
}
