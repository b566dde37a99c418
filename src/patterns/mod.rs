pub mod banking;
pub mod credentials;
pub mod identity;

pub use credentials::PrefixScanner;

use regex::Regex;

use crate::error::{Result, TextscrubError};
use crate::span::{Span, SpanSource};

/// A named redaction category bound to a compiled expression. Built once
/// at registry construction, immutable afterwards.
pub struct RedactionRule {
    category: String,
    regex: Regex,
}

impl RedactionRule {
    pub fn new(category: impl Into<String>, pattern: &str) -> Result<Self> {
        let category = category.into();
        let regex = Regex::new(pattern).map_err(|e| TextscrubError::InvalidPattern {
            category: category.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { category, regex })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// All match offsets in the text. Never fails; an unmatched pattern
    /// simply yields nothing.
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        self.regex
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect()
    }
}

/// The fixed category -> rule mapping covering structured identifiers,
/// banking details, and credential families, plus the vendor-prefix
/// token scanner.
pub struct RuleRegistry {
    rules: Vec<RedactionRule>,
    prefix_scanner: PrefixScanner,
}

impl RuleRegistry {
    /// Registry with the built-in rule tables. Built-in patterns are
    /// known-good, so this cannot fail.
    pub fn builtin() -> Self {
        Self::with_rules(Self::builtin_rule_table(), &[])
            .expect("built-in patterns should compile")
    }

    /// Registry with built-ins minus `disabled` categories, plus caller
    /// supplied extra rules.
    pub fn with_extras(
        disabled: &[String],
        extras: &[(String, String)],
    ) -> Result<Self> {
        let table: Vec<(&str, &str)> = Self::builtin_rule_table()
            .into_iter()
            .filter(|(cat, _)| !disabled.iter().any(|d| d == cat))
            .collect();
        Self::with_rules(table, extras)
    }

    fn with_rules(table: Vec<(&str, &str)>, extras: &[(String, String)]) -> Result<Self> {
        let mut rules = Vec::with_capacity(table.len() + extras.len());
        for (category, pattern) in table {
            rules.push(RedactionRule::new(category, pattern)?);
        }
        for (category, pattern) in extras {
            rules.push(RedactionRule::new(category.clone(), pattern)?);
        }
        Ok(Self {
            rules,
            prefix_scanner: PrefixScanner::new(credentials::vendor_prefixes()),
        })
    }

    fn builtin_rule_table() -> Vec<(&'static str, &'static str)> {
        let mut table = identity::rules();
        table.extend(banking::rules());
        table.extend(credentials::rules());
        table
    }

    pub fn get(&self, category: &str) -> Option<&RedactionRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.category.as_str())
    }

    /// Run every rule plus the vendor-prefix scanner over the text.
    pub fn find_spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for rule in &self.rules {
            for (start, end) in rule.find_all(text) {
                spans.push(Span::new(start, end, rule.category.clone(), SpanSource::Rule));
            }
        }
        spans.extend(self.prefix_scanner.find(text));
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_unique() {
        let registry = RuleRegistry::builtin();
        let mut seen = std::collections::HashSet::new();
        for cat in registry.categories() {
            assert!(seen.insert(cat.to_string()), "duplicate category {cat}");
        }
    }

    #[test]
    fn test_get_known_and_unknown() {
        let registry = RuleRegistry::builtin();
        assert!(registry.get("sa_id").is_some());
        assert!(registry.get("email").is_some());
        assert!(registry.get("no_such_rule").is_none());
    }

    #[test]
    fn test_sa_id_matches() {
        let registry = RuleRegistry::builtin();
        let rule = registry.get("sa_id").unwrap();
        let matches = rule.find_all("id 9901015080084 here");
        assert_eq!(matches, vec![(3, 16)]);
    }

    #[test]
    fn test_invalid_extra_pattern_rejected() {
        let err = RuleRegistry::with_extras(&[], &[("bad".into(), "(".into())]);
        assert!(matches!(
            err,
            Err(TextscrubError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_disabled_category_removed() {
        let registry = RuleRegistry::with_extras(&["postal_code".into()], &[]).unwrap();
        assert!(registry.get("postal_code").is_none());
        assert!(registry.get("sa_id").is_some());
    }

    #[test]
    fn test_marker_is_never_matched() {
        let registry = RuleRegistry::builtin();
        let spans = registry.find_spans("before [REDACTED] after [REDACTED]");
        assert!(spans.is_empty(), "marker must not re-match: {spans:?}");
    }
}
