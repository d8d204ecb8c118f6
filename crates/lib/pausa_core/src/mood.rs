//! Keyword rules for mood text.
//!
//! Matching is a fixed, ordered list of substring rules applied to the
//! lower-cased mood. The first rule with a matching keyword wins; when none
//! match, the fallback applies.

/// One rule: any of `keywords` appearing in the mood selects `outcome`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

/// Classify `mood` against `rules`, first match wins.
pub fn classify<T: Copy>(mood: &str, rules: &[KeywordRule<T>], fallback: T) -> T {
    let lowered = mood.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
        .map(|rule| rule.outcome)
        .unwrap_or(fallback)
}
