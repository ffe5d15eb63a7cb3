//! Case-insensitive deduplication of matched term names.
//!
//! The same term is often found more than once in a scan ("Milk" in "Milk"
//! and again in "Milk chocolate"), and users spell their own keywords in
//! different cases ("MSG", "msg"). Result lists must contain each term once.
//!
//! `TermList` keeps insertion order and the first-seen spelling, and uses a
//! folded `term_key` to decide whether two names are the same.

use std::collections::HashSet;

use super::normalize::fold;

/// Comparison key for a term name (its folded matching form).
pub(crate) fn term_key(name: &str) -> String {
    fold(name)
}

/// Ordered list of names without case-insensitive duplicates.
#[derive(Debug, Clone, Default)]
pub(crate) struct TermList {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl TermList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless an equivalent name is already present.
    ///
    /// Returns true when the name was added.
    pub fn push(&mut self, name: &str) -> bool {
        if self.seen.insert(term_key(name)) {
            self.names.push(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}
