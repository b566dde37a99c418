pub mod gazetteer;
pub mod exclusions;
pub mod scorer;

pub use scorer::NameScorer;

use std::collections::HashSet;

use aho_corasick::{AhoCorasick, MatchKind};

/// Static name gazetteers, the false-positive exclusion set, and the
/// context trigger-word automata. Built once at engine construction and
/// read-only afterwards.
pub struct NameDatabases {
    first_names: HashSet<&'static str>,
    surnames: HashSet<&'static str>,
    regional_names: HashSet<&'static str>,
    false_positives: HashSet<&'static str>,
    trigger_words: HashSet<&'static str>,
    before_triggers: AhoCorasick,
    after_triggers: AhoCorasick,
}

impl NameDatabases {
    pub fn new() -> Self {
        let before_triggers = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(exclusions::BEFORE_TRIGGERS)
            .expect("before-trigger automaton");
        let after_triggers = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(exclusions::AFTER_TRIGGERS)
            .expect("after-trigger automaton");

        Self {
            first_names: gazetteer::FIRST_NAMES.iter().copied().collect(),
            surnames: gazetteer::SURNAMES.iter().copied().collect(),
            regional_names: gazetteer::REGIONAL_NAMES.iter().copied().collect(),
            false_positives: exclusions::FALSE_POSITIVE_TERMS.iter().copied().collect(),
            trigger_words: exclusions::BEFORE_TRIGGERS
                .iter()
                .chain(exclusions::AFTER_TRIGGERS)
                .copied()
                .collect(),
            before_triggers,
            after_triggers,
        }
    }

    pub fn is_first_name(&self, word: &str) -> bool {
        self.first_names.contains(word.to_lowercase().as_str())
    }

    pub fn is_surname(&self, word: &str) -> bool {
        self.surnames.contains(word.to_lowercase().as_str())
    }

    pub fn is_regional_name(&self, word: &str) -> bool {
        self.regional_names.contains(word.to_lowercase().as_str())
    }

    /// True if the word matches any gazetteer. Used by the statistical
    /// tagger as per-token evidence.
    pub fn is_known_name(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.first_names.contains(lower.as_str())
            || self.surnames.contains(lower.as_str())
            || self.regional_names.contains(lower.as_str())
    }

    pub fn is_false_positive(&self, term: &str) -> bool {
        self.false_positives.contains(term.to_lowercase().as_str())
    }

    /// True if the word is itself a context trigger (title, role noun,
    /// reporting verb). Trigger words flank names; they are not name
    /// material.
    pub fn is_trigger_word(&self, word: &str) -> bool {
        self.trigger_words.contains(word.to_lowercase().as_str())
    }

    pub fn has_before_trigger(&self, context: &str) -> bool {
        Self::bounded_match(&self.before_triggers, context)
    }

    pub fn has_after_trigger(&self, context: &str) -> bool {
        Self::bounded_match(&self.after_triggers, context)
    }

    // The automata match raw substrings; only hits flanked by non-word
    // characters count, so "mr" never fires inside "summer".
    fn bounded_match(automaton: &AhoCorasick, context: &str) -> bool {
        automaton.find_iter(context).any(|m| {
            let before_ok = context[..m.start()]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric());
            let after_ok = context[m.end()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric());
            before_ok && after_ok
        })
    }
}

impl Default for NameDatabases {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gazetteer_lookups_case_insensitive() {
        let db = NameDatabases::new();
        assert!(db.is_first_name("Jane"));
        assert!(db.is_surname("MBEKI"));
        assert!(db.is_regional_name("Thabo"));
        assert!(!db.is_first_name("xyzzy"));
    }

    #[test]
    fn test_false_positive_membership() {
        let db = NameDatabases::new();
        assert!(db.is_false_positive("Yesterday"));
        assert!(db.is_false_positive("cape town"));
        assert!(db.is_false_positive("redacted"));
        assert!(!db.is_false_positive("mbeki"));
    }

    #[test]
    fn test_trigger_automata() {
        let db = NameDatabases::new();
        assert!(db.has_before_trigger("please contact Mr "));
        assert!(db.has_after_trigger(" phoned the office"));
        assert!(!db.has_after_trigger(" xxxx yyyy"));
    }

    #[test]
    fn test_triggers_require_word_boundaries() {
        let db = NameDatabases::new();
        // "mr" inside "summer" and "works" inside "networks" are not
        // trigger hits.
        assert!(!db.has_before_trigger("late in summer "));
        assert!(!db.has_after_trigger(" networks were down"));
        assert!(db.has_before_trigger("summer with Mr "));
        assert!(db.has_after_trigger(" works at networks"));
    }
}
