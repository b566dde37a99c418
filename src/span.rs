use serde::{Deserialize, Serialize};

/// Which detection pass produced a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanSource {
    /// Direct registry rule match (category carries the rule name).
    Rule,
    /// Statistical person tagger, re-validated by the name scorer.
    NerName,
    /// Capitalization/shape regex battery, re-validated by the name scorer.
    PatternName,
    /// Keyword-anchored banking detail matcher.
    BankingDetail,
    /// Compound credential disclosure matcher.
    SecuritySecret,
}

impl SpanSource {
    pub fn tag(&self) -> &'static str {
        match self {
            SpanSource::Rule => "rule",
            SpanSource::NerName => "ner_name",
            SpanSource::PatternName => "pattern_name",
            SpanSource::BankingDetail => "banking_detail",
            SpanSource::SecuritySecret => "security_secret",
        }
    }

    /// NER-sourced spans win merges regardless of length.
    pub fn is_ner(&self) -> bool {
        matches!(self, SpanSource::NerName)
    }
}

/// A detected sensitive region: byte offsets into the scanned text plus
/// the category that matched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub category: String,
    pub source: SpanSource,
}

impl Span {
    pub fn new(start: usize, end: usize, category: impl Into<String>, source: SpanSource) -> Self {
        debug_assert!(start < end, "span must be non-empty");
        Self {
            start,
            end,
            category: category.into(),
            source,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Resolve overlapping candidate spans into a non-overlapping set sorted
/// by start offset.
///
/// When an incoming span overlaps (or abuts) the previous kept span, the
/// longer of the two survives with its own boundaries -- except that an
/// NER-sourced span wins regardless of length, since its boundaries come
/// from token structure rather than a blind shape match. The losing
/// span is dropped, not absorbed, which can occasionally under-merge
/// when three candidates chain through one another.
pub fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    if spans.is_empty() {
        return spans;
    }
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => {
                let incoming_wins =
                    span.source.is_ner() || (!last.source.is_ner() && span.len() > last.len());
                if incoming_wins {
                    *last = span;
                }
            }
            _ => merged.push(span),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize, source: SpanSource) -> Span {
        Span::new(start, end, "test", source)
    }

    #[test]
    fn test_disjoint_spans_kept() {
        let merged = merge_spans(vec![
            span(0, 5, SpanSource::Rule),
            span(10, 15, SpanSource::Rule),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_overlap_keeps_longer() {
        let merged = merge_spans(vec![
            span(0, 5, SpanSource::Rule),
            span(3, 20, SpanSource::PatternName),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!((merged[0].start, merged[0].end), (3, 20));
        assert_eq!(merged[0].source, SpanSource::PatternName);
    }

    #[test]
    fn test_shorter_incoming_dropped() {
        let merged = merge_spans(vec![
            span(0, 20, SpanSource::Rule),
            span(5, 12, SpanSource::PatternName),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!((merged[0].start, merged[0].end), (0, 20));
    }

    #[test]
    fn test_ner_wins_even_when_shorter() {
        let merged = merge_spans(vec![
            span(0, 30, SpanSource::PatternName),
            span(5, 12, SpanSource::NerName),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].source, SpanSource::NerName);
        // The NER span keeps its own token-derived boundaries.
        assert_eq!((merged[0].start, merged[0].end), (5, 12));
    }

    #[test]
    fn test_unsorted_input() {
        let merged = merge_spans(vec![
            span(10, 15, SpanSource::Rule),
            span(0, 5, SpanSource::Rule),
        ]);
        assert_eq!(merged[0].start, 0);
        assert_eq!(merged[1].start, 10);
    }

    #[test]
    fn test_no_overlaps_after_merge() {
        let merged = merge_spans(vec![
            span(0, 8, SpanSource::Rule),
            span(4, 12, SpanSource::BankingDetail),
            span(11, 20, SpanSource::NerName),
            span(25, 30, SpanSource::Rule),
        ]);
        for pair in merged.windows(2) {
            assert!(pair[0].end < pair[1].start, "{merged:?}");
        }
    }
}
