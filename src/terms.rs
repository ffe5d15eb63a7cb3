//! Built-in restriction term tables.
//!
//! These are versioned domain data, not derived values: every synonym here is
//! a deliberate statement that the pattern indicates the presence of the term
//! (allergens) or violates it (preference conflict sets). Extending a set
//! changes verdicts, so bump [`crate::BUILTIN_TERMS_VERSION`] when editing.
//!
//! Patterns are lowercase and matched as whole words (see
//! `engine::matcher`), so plural forms are listed explicitly.

#[path = "terms/allergens.rs"]
pub(crate) mod allergens;
#[path = "terms/preferences.rs"]
pub(crate) mod preferences;
#[cfg(test)]
#[path = "terms/tests.rs"]
mod tests;

/// Static description of one term, expanded into a
/// [`crate::RestrictionTerm`] when the built-in dictionary is loaded.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TermSpec {
    pub name: &'static str,
    /// Alternative spellings of the *name* that resolve to this term.
    pub aliases: &'static [&'static str],
    pub patterns: &'static [&'static str],
    /// Longer phrases that contain a pattern but do not indicate the term
    /// ("cocoa butter" for Milk).
    pub excludes: &'static [&'static str],
}
