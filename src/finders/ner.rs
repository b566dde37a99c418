//! Statistical person tagger with tiered acquisition.
//!
//! The full tier chunks capitalized token runs (bridging surname
//! particles) and keeps only runs with gazetteer or title evidence; the
//! chunker tier proposes every capitalized run and leans entirely on the
//! name scorer; the disabled tier emits nothing. Construction never
//! fails -- each tier that cannot be acquired logs a warning and the
//! next one is tried.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::names::scorer::{NameCandidate, NameScorer};
use crate::names::NameDatabases;
use crate::span::{Span, SpanSource};

use super::Finder;

/// Which acquisition tier the tagger is running at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NerTier {
    /// Gazetteer-weighted token-run tagger.
    Full,
    /// Bare capitalized-run chunker, no gazetteer evidence.
    Chunker,
    /// No statistical pass at all.
    Disabled,
}

impl NerTier {
    fn rank(self) -> u8 {
        match self {
            NerTier::Full => 2,
            NerTier::Chunker => 1,
            NerTier::Disabled => 0,
        }
    }
}

/// A word token with its byte offsets.
#[derive(Debug, Clone, Copy)]
struct Token {
    start: usize,
    end: usize,
}

/// Minimum fraction of tokens in a run that must be gazetteer-known for
/// the full tier to propose it without a title cue.
const FULL_TIER_EVIDENCE: f64 = 0.25;

const MAX_RUN_TOKENS: usize = 4;

pub struct NerNameFinder {
    db: Arc<NameDatabases>,
    tier: NerTier,
    threshold: f64,
    single_word_threshold: f64,
    window: usize,
}

impl NerNameFinder {
    /// Acquire the best available tier at or below `preferred`. The
    /// ordered strategy list is explicit so the chosen tier is always
    /// observable; every step down is logged.
    pub fn acquire(
        db: Arc<NameDatabases>,
        preferred: NerTier,
        threshold: f64,
        single_word_threshold: f64,
        window: usize,
    ) -> Self {
        let mut tier = NerTier::Disabled;
        for candidate in [NerTier::Full, NerTier::Chunker, NerTier::Disabled] {
            if candidate.rank() > preferred.rank() {
                warn!(?candidate, ?preferred, "person tagger tier capped by config");
                continue;
            }
            tier = candidate;
            break;
        }
        debug!(?tier, "person tagger acquired");
        Self {
            db,
            tier,
            threshold,
            single_word_threshold,
            window,
        }
    }

    pub fn tier(&self) -> NerTier {
        self.tier
    }

    fn tokenize(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;
        for (idx, ch) in text.char_indices() {
            let word_char = ch.is_alphabetic() || ch == '\'' || ch == '-';
            match (word_char, start) {
                (true, None) => start = Some(idx),
                (false, Some(s)) => {
                    tokens.push(Token { start: s, end: idx });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            tokens.push(Token {
                start: s,
                end: text.len(),
            });
        }
        tokens
    }

    fn is_capitalized(word: &str) -> bool {
        let mut chars = word.chars();
        chars.next().is_some_and(|c| c.is_uppercase())
    }

    fn is_particle(word: &str) -> bool {
        matches!(
            word.to_lowercase().as_str(),
            "van" | "von" | "der" | "den" | "de" | "du" | "le" | "la"
        )
    }

    fn is_title(word: &str) -> bool {
        matches!(
            word.to_lowercase().trim_end_matches('.'),
            "mr" | "mrs" | "ms" | "miss" | "dr" | "prof" | "adv"
        )
    }

    /// True when nothing but whitespace separates two adjacent tokens.
    /// Runs never cross punctuation, so "Jane. Peter" stays two runs and
    /// bracketed text cannot be stitched into one candidate.
    fn ws_gap(text: &str, a: &Token, b: &Token) -> bool {
        text[a.end..b.start].chars().all(char::is_whitespace)
    }

    /// Maximal runs of capitalized tokens, bridging lowercase surname
    /// particles between them ("Johan van der Merwe" is one run).
    fn person_runs(&self, text: &str, tokens: &[Token]) -> Vec<(usize, usize, f64, bool)> {
        let mut runs = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let word = &text[tokens[i].start..tokens[i].end];
            if !Self::is_capitalized(word) || Self::is_title(word) {
                i += 1;
                continue;
            }

            let run_start = i;
            let mut run_end = i; // inclusive index of last accepted token
            let mut j = i + 1;
            while j < tokens.len() && (run_end - run_start + 1) < MAX_RUN_TOKENS {
                if !Self::ws_gap(text, &tokens[j - 1], &tokens[j]) {
                    break;
                }
                let w = &text[tokens[j].start..tokens[j].end];
                if Self::is_capitalized(w) {
                    run_end = j;
                    j += 1;
                    continue;
                }
                // Bridge a chain of lowercase particles when a
                // capitalized surname follows it ("van der Merwe").
                let mut k = j;
                while k < tokens.len()
                    && Self::is_particle(&text[tokens[k].start..tokens[k].end])
                    && Self::ws_gap(text, &tokens[k - 1], &tokens[k])
                {
                    k += 1;
                }
                if k > j
                    && k < tokens.len()
                    && Self::is_capitalized(&text[tokens[k].start..tokens[k].end])
                    && Self::ws_gap(text, &tokens[k - 1], &tokens[k])
                {
                    run_end = k;
                    j = k + 1;
                } else {
                    break;
                }
            }

            // Role nouns, greetings, and other excluded words at the run
            // edges are context, not name material: "Thanks Jane" tags
            // "Jane", not nothing.
            let mut s = run_start;
            let mut e = run_end;
            while s <= e {
                let w = &text[tokens[s].start..tokens[s].end];
                if self.db.is_false_positive(w) || self.db.is_trigger_word(w) {
                    s += 1;
                } else {
                    break;
                }
            }
            while e > s {
                let w = &text[tokens[e].start..tokens[e].end];
                if self.db.is_false_positive(w) || self.db.is_trigger_word(w) {
                    e -= 1;
                } else {
                    break;
                }
            }
            if s > e {
                i = run_end + 1;
                continue;
            }

            // Particles carry no evidence either way; score the rest.
            let content: Vec<&str> = (s..=e)
                .map(|k| &text[tokens[k].start..tokens[k].end])
                .filter(|w| !Self::is_particle(w))
                .collect();
            let known = content.iter().filter(|w| self.db.is_known_name(w)).count();
            let evidence = if content.is_empty() {
                0.0
            } else {
                known as f64 / content.len() as f64
            };
            let titled = s > 0
                && Self::is_title(&text[tokens[s - 1].start..tokens[s - 1].end])
                && Self::ws_gap(text, &tokens[s - 1], &tokens[s]);

            runs.push((tokens[s].start, tokens[e].end, evidence, titled));
            i = run_end + 1;
        }
        runs
    }
}

impl Finder for NerNameFinder {
    fn find(&self, text: &str) -> Vec<Span> {
        if self.tier == NerTier::Disabled {
            return Vec::new();
        }

        let tokens = Self::tokenize(text);
        let scorer =
            NameScorer::with_thresholds(&self.db, self.threshold, self.single_word_threshold);
        let mut spans = Vec::new();

        for (start, end, evidence, titled) in self.person_runs(text, &tokens) {
            if self.tier == NerTier::Full && evidence < FULL_TIER_EVIDENCE && !titled {
                continue;
            }
            // Tagger proposals are not trusted blindly; they must also
            // clear the scoring bar.
            let candidate = NameCandidate::from_offsets(text, start, end, self.window);
            if scorer.is_likely_name(&candidate) {
                spans.push(Span::new(start, end, "ner_name", SpanSource::NerName));
            }
        }
        spans
    }

    fn name(&self) -> &str {
        "ner_name"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::scorer::{CONTEXT_WINDOW, NAME_THRESHOLD, SINGLE_WORD_THRESHOLD};

    fn finder(tier: NerTier) -> NerNameFinder {
        NerNameFinder::acquire(
            Arc::new(NameDatabases::new()),
            tier,
            NAME_THRESHOLD,
            SINGLE_WORD_THRESHOLD,
            CONTEXT_WINDOW,
        )
    }

    fn covered<'a>(text: &'a str, spans: &[Span]) -> Vec<&'a str> {
        spans.iter().map(|s| &text[s.start..s.end]).collect()
    }

    #[test]
    fn test_full_tier_tags_known_names() {
        let f = finder(NerTier::Full);
        let text = "Thabo Mbeki called Jane Doe yesterday.";
        let found = covered(text, &f.find(text));
        assert!(found.contains(&"Thabo Mbeki"), "{found:?}");
        assert!(found.contains(&"Jane Doe"), "{found:?}");
    }

    #[test]
    fn test_full_tier_bridges_particles() {
        let f = finder(NerTier::Full);
        let text = "Policyholder Johan van der Merwe phoned.";
        let found = covered(text, &f.find(text));
        assert!(
            found.iter().any(|s| s.contains("van der Merwe")),
            "{found:?}"
        );
    }

    #[test]
    fn test_full_tier_skips_unknown_runs() {
        let f = finder(NerTier::Full);
        // No gazetteer evidence and no title: the full tier does not
        // even propose it.
        let text = "Quantum Flux happened again.";
        assert!(f.find(text).is_empty());
    }

    #[test]
    fn test_runs_break_at_punctuation() {
        let f = finder(NerTier::Full);
        let text = "Thanks Jane. Peter will call.";
        let found = covered(text, &f.find(text));
        assert!(found.contains(&"Jane"), "{found:?}");
        assert!(found.contains(&"Peter"), "{found:?}");
    }

    #[test]
    fn test_excluded_edge_words_trimmed_from_runs() {
        let f = finder(NerTier::Full);
        let text = "Dear Jane Doe";
        assert_eq!(covered(text, &f.find(text)), vec!["Jane Doe"]);
    }

    #[test]
    fn test_masked_output_is_not_retagged() {
        let f = finder(NerTier::Full);
        assert!(f.find("Mr [REDACTED], [REDACTED]").is_empty());
        let f = finder(NerTier::Chunker);
        assert!(f.find("Mr [REDACTED], [REDACTED]").is_empty());
    }

    #[test]
    fn test_scorer_still_gates_proposals() {
        let f = finder(NerTier::Chunker);
        let text = "The meeting is on Monday at the Cape Town office.";
        assert!(f.find(text).is_empty());
    }

    #[test]
    fn test_disabled_tier_finds_nothing() {
        let f = finder(NerTier::Disabled);
        assert!(f.find("Jane Doe was here").is_empty());
    }

    #[test]
    fn test_config_caps_tier() {
        let f = finder(NerTier::Chunker);
        assert_eq!(f.tier(), NerTier::Chunker);
    }
}
