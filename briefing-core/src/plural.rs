//! Plural forms for main keywords.
//!
//! The plural only feeds the page title. It is a vocabulary heuristic, not
//! general Dutch pluralization: multi-word keywords get the suffix glued to
//! the last word (`betonverf binnen` becomes `betonverf binnenen`). Swap in a
//! different [`PluralRule`] for other product ranges.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Derives the plural form of a main keyword.
pub trait PluralRule: Debug + Send + Sync {
    fn pluralize(&self, keyword: &str) -> String;
}

/// Appends `suffix` unless the keyword already ends with `reserved_suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixPluralRule {
    pub reserved_suffix: String,
    pub suffix: String,
}

impl SuffixPluralRule {
    pub fn new(reserved_suffix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            reserved_suffix: reserved_suffix.into(),
            suffix: suffix.into(),
        }
    }
}

impl Default for SuffixPluralRule {
    /// Paint vocabulary: "verf" is already used as a mass noun.
    fn default() -> Self {
        Self::new("verf", "en")
    }
}

impl PluralRule for SuffixPluralRule {
    fn pluralize(&self, keyword: &str) -> String {
        if !self.reserved_suffix.is_empty() && keyword.ends_with(&self.reserved_suffix) {
            keyword.to_string()
        } else {
            format!("{}{}", keyword, self.suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_keywords_ending_in_reserved_suffix() {
        let rule = SuffixPluralRule::default();
        assert_eq!(rule.pluralize("betonverf"), "betonverf");
        assert_eq!(rule.pluralize("muurverf"), "muurverf");
    }

    #[test]
    fn appends_suffix_otherwise() {
        let rule = SuffixPluralRule::default();
        assert_eq!(rule.pluralize("betonverf binnen"), "betonverf binnenen");
        assert_eq!(rule.pluralize("kwast"), "kwasten");
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        let rule = SuffixPluralRule::default();
        assert_eq!(rule.pluralize("BETONVERF"), "BETONVERFen");
    }

    #[test]
    fn custom_rule() {
        let rule = SuffixPluralRule::new("s", "s");
        assert_eq!(rule.pluralize("rollers"), "rollers");
        assert_eq!(rule.pluralize("roller"), "rollers");
    }

    #[test]
    fn empty_reserved_suffix_always_appends() {
        let rule = SuffixPluralRule::new("", "en");
        assert_eq!(rule.pluralize("kwast"), "kwasten");
    }
}
