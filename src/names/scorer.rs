use super::gazetteer::{NAME_SUFFIXES, SURNAME_PARTICLES};
use super::NameDatabases;

/// Default number of context characters inspected on each side of a
/// candidate.
pub const CONTEXT_WINDOW: usize = 50;

/// Minimum score to classify a candidate as a name.
pub const NAME_THRESHOLD: f64 = 0.5;

/// Higher bar applied to single-word candidates.
pub const SINGLE_WORD_THRESHOLD: f64 = 0.7;

/// A span of text hypothesized to be a personal name, together with its
/// surrounding context windows.
#[derive(Debug, Clone)]
pub struct NameCandidate<'a> {
    pub text: &'a str,
    pub before: &'a str,
    pub after: &'a str,
}

impl<'a> NameCandidate<'a> {
    /// Slice a candidate and its context windows out of the full text.
    pub fn from_offsets(text: &'a str, start: usize, end: usize, window: usize) -> Self {
        let before_start = floor_char_boundary(text, start.saturating_sub(window));
        let after_end = ceil_char_boundary(text, (end + window).min(text.len()));
        Self {
            text: &text[start..end],
            before: &text[before_start..start],
            after: &text[end..after_end],
        }
    }
}

fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_char_boundary(s: &str, mut idx: usize) -> usize {
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

/// Additive confidence scoring for name candidates. Weights are part of
/// the engine's behavioral contract; see the tests before touching them.
pub struct NameScorer<'db> {
    db: &'db NameDatabases,
    threshold: f64,
    single_word_threshold: f64,
}

impl<'db> NameScorer<'db> {
    pub fn new(db: &'db NameDatabases) -> Self {
        Self {
            db,
            threshold: NAME_THRESHOLD,
            single_word_threshold: SINGLE_WORD_THRESHOLD,
        }
    }

    pub fn with_thresholds(db: &'db NameDatabases, threshold: f64, single_word: f64) -> Self {
        Self {
            db,
            threshold,
            single_word_threshold: single_word,
        }
    }

    /// Compute the confidence score for a candidate. Returns 0.0 for
    /// disqualified candidates.
    pub fn score(&self, candidate: &NameCandidate<'_>) -> f64 {
        let trimmed = candidate.text.trim();
        let lower = trimmed.to_lowercase();
        let words: Vec<&str> = trimmed.split_whitespace().collect();

        // Hard disqualifiers.
        if trimmed.chars().filter(|c| !c.is_whitespace()).count() < 2 {
            return 0.0;
        }
        if trimmed.chars().any(|c| c.is_ascii_digit()) {
            return 0.0;
        }
        if trimmed
            .chars()
            .all(|c| c.is_ascii_punctuation() || c.is_whitespace())
        {
            return 0.0;
        }
        // Membership checks ignore punctuation clinging to a word, so
        // "[redacted]," still hits the "redacted" exclusion.
        let strip = |w: &str| -> String {
            w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
        };
        if self.db.is_false_positive(&strip(trimmed))
            || words.iter().any(|w| self.db.is_false_positive(&strip(w)))
        {
            return 0.0;
        }

        let mut score = 0.0;

        // Gazetteer evidence, additive per word.
        for word in &words {
            if self.db.is_first_name(word) {
                score += 0.4;
            }
            if self.db.is_surname(word) {
                score += 0.3;
            }
            if self.db.is_regional_name(word) {
                score += 0.35;
            }
        }

        // Capitalization.
        if trimmed.chars().next().is_some_and(|c| c.is_uppercase()) {
            score += 0.1;
            if words
                .iter()
                .all(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
            {
                score += 0.15;
            }
        }

        // Structure.
        if (2..=4).contains(&words.len()) {
            score += 0.2;
        }
        if words
            .iter()
            .all(|w| (2..=15).contains(&w.chars().count()))
        {
            score += 0.1;
        }

        // Context triggers, checked independently on each side.
        if self.db.has_before_trigger(candidate.before) {
            score += 0.2;
        }
        if self.db.has_after_trigger(candidate.after) {
            score += 0.15;
        }

        // Locale surname particles: multi-word particles match as a
        // substring, single-word ones as a whole word.
        for particle in SURNAME_PARTICLES {
            let hit = if particle.contains(' ') {
                lower.contains(particle)
            } else {
                words.iter().any(|w| w.eq_ignore_ascii_case(particle))
            };
            if hit {
                score += 0.25;
                break;
            }
        }

        // Surname-like suffix on the last word.
        if let Some(last) = words.last() {
            let last_lower = last.to_lowercase();
            if NAME_SUFFIXES
                .iter()
                .any(|s| last_lower.len() >= s.len() + 2 && last_lower.ends_with(s))
            {
                score += 0.1;
            }
        }

        score
    }

    /// Classification: the score must clear the base threshold, and
    /// single-word candidates must clear a higher bar. Multi-word
    /// structure is required for borderline scores so that common single
    /// words coinciding with rare surnames are not masked.
    pub fn is_likely_name(&self, candidate: &NameCandidate<'_>) -> bool {
        let score = self.score(candidate);
        let word_count = candidate.text.split_whitespace().count();
        score >= self.threshold && (word_count >= 2 || score >= self.single_word_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate<'a>(text: &'a str, before: &'a str, after: &'a str) -> NameCandidate<'a> {
        NameCandidate {
            text,
            before,
            after,
        }
    }

    fn scorer_db() -> NameDatabases {
        NameDatabases::new()
    }

    #[test]
    fn test_full_name_scores_high() {
        let db = scorer_db();
        let scorer = NameScorer::new(&db);
        let score = scorer.score(&candidate("Jane Doe", "", ""));
        assert!(score >= 1.0, "got {score}");
        assert!(scorer.is_likely_name(&candidate("Jane Doe", "", "")));
    }

    #[test]
    fn test_false_positive_word_disqualifies() {
        let db = scorer_db();
        let scorer = NameScorer::new(&db);
        assert_eq!(scorer.score(&candidate("Cape Town", "", "")), 0.0);
        assert_eq!(scorer.score(&candidate("Monday Morning", "", "")), 0.0);
        assert_eq!(scorer.score(&candidate("ABC Corporation", "", "")), 0.0);
    }

    #[test]
    fn test_punctuation_wrapped_exclusions_still_disqualify() {
        let db = scorer_db();
        let scorer = NameScorer::new(&db);
        assert_eq!(scorer.score(&candidate("[REDACTED], [REDACTED]", "Mr ", "")), 0.0);
        assert_eq!(scorer.score(&candidate("REDACTED], [REDACTED", "Mr [", "]")), 0.0);
        assert_eq!(scorer.score(&candidate("Yesterday,", "", "")), 0.0);
    }

    #[test]
    fn test_digits_disqualify() {
        let db = scorer_db();
        let scorer = NameScorer::new(&db);
        assert_eq!(scorer.score(&candidate("Jane D03", "", "")), 0.0);
    }

    #[test]
    fn test_punctuation_only_disqualifies() {
        let db = scorer_db();
        let scorer = NameScorer::new(&db);
        assert_eq!(scorer.score(&candidate("-- --", "", "")), 0.0);
    }

    #[test]
    fn test_score_monotonicity() {
        let db = scorer_db();
        let scorer = NameScorer::new(&db);
        let first_only = scorer.score(&candidate("jane", "", ""));
        let surname_only = scorer.score(&candidate("doe", "", ""));
        let both = scorer.score(&candidate("jane doe", "", ""));
        assert!(both > first_only);
        assert!(both > surname_only);
    }

    #[test]
    fn test_context_triggers_add() {
        let db = scorer_db();
        let scorer = NameScorer::new(&db);
        let bare = scorer.score(&candidate("Thabo Mbeki", "", ""));
        let with_before = scorer.score(&candidate("Thabo Mbeki", "dear Mr ", ""));
        let with_both = scorer.score(&candidate("Thabo Mbeki", "dear Mr ", " phoned us"));
        assert!(with_before > bare);
        assert!(with_both > with_before);
    }

    #[test]
    fn test_single_word_needs_high_score() {
        let db = scorer_db();
        let scorer = NameScorer::new(&db);
        // Gazetteer surname alone (0.3) plus lowercase structure is not
        // enough for a single word.
        assert!(!scorer.is_likely_name(&candidate("murray", "", "")));
        // Strong context pushes a capitalized gazetteer hit over 0.7.
        assert!(scorer.is_likely_name(&candidate("Thabo", "policyholder Mr ", " phoned")));
    }

    #[test]
    fn test_surname_particle_bonus() {
        let db = scorer_db();
        let scorer = NameScorer::new(&db);
        let plain = scorer.score(&candidate("Piet Merwe", "", ""));
        let particled = scorer.score(&candidate("Piet van der Merwe", "", ""));
        assert!(particled > plain);
    }

    #[test]
    fn test_candidate_windows_respect_char_boundaries() {
        let text = "señor José lives at the café nearby";
        let start = text.find("José").unwrap();
        let end = start + "José".len();
        let cand = NameCandidate::from_offsets(text, start, end, 50);
        assert_eq!(cand.text, "José");
        assert!(cand.before.contains("señor"));
    }
}
