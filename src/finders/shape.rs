//! Pattern-shape name finder: a battery of capitalization/shape regexes
//! plus a sliding-window pass over lowercase word runs, for names the
//! statistical tagger can miss. Every match must still clear the name
//! scorer before acceptance.

use std::sync::Arc;

use regex::{Regex, RegexSet};

use crate::error::{Result, TextscrubError};
use crate::names::scorer::{NameCandidate, NameScorer};
use crate::names::NameDatabases;
use crate::span::{Span, SpanSource};

use super::Finder;

pub struct ShapeNameFinder {
    regex_set: RegexSet,
    patterns: Vec<Regex>,
    word_re: Regex,
    db: Arc<NameDatabases>,
    threshold: f64,
    single_word_threshold: f64,
    window: usize,
}

impl ShapeNameFinder {
    pub fn new(
        db: Arc<NameDatabases>,
        threshold: f64,
        single_word_threshold: f64,
        window: usize,
    ) -> Result<Self> {
        let shapes = Self::default_shapes();
        let compile = |p: &str| {
            Regex::new(p).map_err(|e| TextscrubError::InvalidPattern {
                category: "pattern_name".into(),
                reason: e.to_string(),
            })
        };
        let regex_set = RegexSet::new(&shapes).map_err(|e| TextscrubError::InvalidPattern {
            category: "pattern_name".into(),
            reason: e.to_string(),
        })?;
        let patterns = shapes
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>>>()?;
        let word_re = compile(r"[a-z]{2,}")?;
        Ok(Self {
            regex_set,
            patterns,
            word_re,
            db,
            threshold,
            single_word_threshold,
            window,
        })
    }

    /// Shape battery. Where a pattern carries a leading trigger (e.g. a
    /// title), group 1 marks the name portion to keep as the candidate.
    fn default_shapes() -> Vec<String> {
        vec![
            // Title-prefixed single or double names.
            r"\b(?:Mr|Mrs|Ms|Miss|Dr|Prof|Adv)\.?\s+([A-Z][A-Za-z'\-]+(?:\s+[A-Z][A-Za-z'\-]+)?)".into(),
            // Two or three capitalized words.
            r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2}\b".into(),
            // Capitalized word next to an all-caps word.
            r"\b[A-Z][a-z]+\s+[A-Z]{2,}\b|\b[A-Z]{2,}\s+[A-Z][a-z]+\b".into(),
            // All-uppercase two/three-word runs ("JOHN SMITH").
            r"\b[A-Z]{2,}(?:\s+[A-Z]{2,}){1,2}\b".into(),
            // Initials plus surname: "J. Smith", "J.P. van Wyk".
            r"\b(?:[A-Z]\.\s*){1,3}[A-Z][A-Za-z'\-]+\b".into(),
            // Hyphenated and apostrophe names.
            r"\b[A-Z][a-z]+-[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?\b".into(),
            r"\b(?:O'|Mc|Mac)[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?\b".into(),
            // Surname-particle constructions: "Johan van der Merwe".
            r"\b[A-Z][a-z]+\s+(?:van|von|de|du|le|la)(?:\s+(?:der|den))?\s+[A-Z][a-z]+\b".into(),
            // Nguni-style consonant-cluster given names plus surname.
            r"\b(?:Nk|Nd|Ng|Nx|Mth|Mkh|Dl|Hl|Kh|Tsh|Zw)[a-z]+\s+[A-Z][a-z]+\b".into(),
        ]
    }

    /// Lowercase two/three-word runs are enumerated with a sliding
    /// window rather than a single regex pass: greedy non-overlapping
    /// matching would swallow "the client jane" and never offer
    /// "jane doe" to the scorer.
    fn lowercase_candidates(&self, text: &str, scorer: &NameScorer<'_>, spans: &mut Vec<Span>) {
        let words: Vec<(usize, usize)> = self
            .word_re
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect();

        for width in [2usize, 3] {
            for run in words.windows(width) {
                let (start, end) = (run[0].0, run[width - 1].1);
                // Consecutive words only: a run broken by other tokens
                // (digits, punctuation, capitalized words) is not a name.
                let gap_ok = run
                    .windows(2)
                    .all(|pair| text[pair[0].1..pair[1].0].chars().all(|c| c == ' '));
                if !gap_ok {
                    continue;
                }
                // Trigger words flank names; drop runs that start or end
                // with one so "doe signed" does not outgrow "jane doe".
                let first = &text[run[0].0..run[0].1];
                let last = &text[run[width - 1].0..run[width - 1].1];
                if self.db.is_trigger_word(first) || self.db.is_trigger_word(last) {
                    continue;
                }
                let candidate = NameCandidate::from_offsets(text, start, end, self.window);
                if scorer.is_likely_name(&candidate) {
                    spans.push(Span::new(start, end, "pattern_name", SpanSource::PatternName));
                }
            }
        }
    }
}

impl Finder for ShapeNameFinder {
    fn find(&self, text: &str) -> Vec<Span> {
        let scorer =
            NameScorer::with_thresholds(&self.db, self.threshold, self.single_word_threshold);
        let mut spans = Vec::new();

        let matching: Vec<usize> = self.regex_set.matches(text).into_iter().collect();
        for &idx in &matching {
            for caps in self.patterns[idx].captures_iter(text) {
                // Group 1, when present, isolates the name from its trigger.
                let Some(m) = caps.get(1).or_else(|| caps.get(0)) else {
                    continue;
                };
                let candidate = NameCandidate::from_offsets(text, m.start(), m.end(), self.window);
                if scorer.is_likely_name(&candidate) {
                    spans.push(Span::new(
                        m.start(),
                        m.end(),
                        "pattern_name",
                        SpanSource::PatternName,
                    ));
                }
            }
        }

        self.lowercase_candidates(text, &scorer, &mut spans);
        spans
    }

    fn name(&self) -> &str {
        "pattern_name"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::scorer::{CONTEXT_WINDOW, NAME_THRESHOLD, SINGLE_WORD_THRESHOLD};

    fn finder() -> ShapeNameFinder {
        ShapeNameFinder::new(
            Arc::new(NameDatabases::new()),
            NAME_THRESHOLD,
            SINGLE_WORD_THRESHOLD,
            CONTEXT_WINDOW,
        )
        .unwrap()
    }

    fn covered<'a>(text: &'a str, spans: &[Span]) -> Vec<&'a str> {
        spans.iter().map(|s| &text[s.start..s.end]).collect()
    }

    #[test]
    fn test_title_case_pair() {
        let f = finder();
        let text = "Please call Jane Doe about the claim.";
        let found = covered(text, &f.find(text));
        assert!(found.contains(&"Jane Doe"), "{found:?}");
    }

    #[test]
    fn test_title_prefixed_name_excludes_title() {
        let f = finder();
        let text = "Spoke to Mr Khumalo earlier.";
        let found = covered(text, &f.find(text));
        assert!(found.contains(&"Khumalo"), "{found:?}");
        assert!(!found.iter().any(|s| s.contains("Mr")), "{found:?}");
    }

    #[test]
    fn test_lowercase_name_with_gazetteer_hits() {
        let f = finder();
        let text = "the client jane doe signed";
        let found = covered(text, &f.find(text));
        assert!(found.contains(&"jane doe"), "{found:?}");
    }

    #[test]
    fn test_particle_surname() {
        let f = finder();
        let text = "Insured: Johan van der Merwe.";
        let found = covered(text, &f.find(text));
        assert!(
            found.iter().any(|s| s.contains("van der Merwe")),
            "{found:?}"
        );
    }

    #[test]
    fn test_capitalized_non_names_rejected() {
        let f = finder();
        for text in [
            "The meeting is on Monday at the Cape Town office.",
            "ABC Corporation sent the invoice.",
            "Monday Morning is busy.",
        ] {
            let spans = f.find(text);
            assert!(spans.is_empty(), "{text}: {:?}", covered(text, &spans));
        }
    }
}
