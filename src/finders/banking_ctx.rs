//! Keyword-anchored banking detail finder. Account, reference, routing,
//! SWIFT and card mentions are only matched when an explicit labeling
//! keyword precedes them, which keeps bare digit runs out of scope.

use regex::Regex;

use crate::error::{Result, TextscrubError};
use crate::span::{Span, SpanSource};

use super::Finder;

pub struct BankingContextFinder {
    patterns: Vec<Regex>,
}

impl BankingContextFinder {
    pub fn new() -> Result<Self> {
        let patterns = Self::default_patterns()
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| TextscrubError::InvalidPattern {
                    category: "banking_detail".into(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    fn default_patterns() -> Vec<&'static str> {
        vec![
            r"(?i:\b(?:account|acct|acc)\s*(?:no|number|#)?\s*[:\-]?\s*)\d{6,12}\b",
            r"\b(?i:(?:ref|reference)\s*(?:no|number|#)?\s*[:\-]?\s*)[A-Z0-9]{6,20}\b",
            r"(?i:\b(?:branch|routing|sort)\s*(?:code|no|number)?\s*[:\-]?\s*)\d{6,9}\b",
            r"(?i:\bswift\s*(?:code|bic)?\s*[:\-]?\s*)[A-Z]{4}[A-Z0-9]{4,7}\b",
            r"(?i:\bcard\s*(?:no|number)?\s*[:\-]?\s*)(?:\d[\s-]?){13,19}\b",
        ]
    }
}

impl Finder for BankingContextFinder {
    fn find(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for re in &self.patterns {
            for m in re.find_iter(text) {
                spans.push(Span::new(
                    m.start(),
                    m.end(),
                    "banking_detail",
                    SpanSource::BankingDetail,
                ));
            }
        }
        spans
    }

    fn name(&self) -> &str {
        "banking_detail"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_gated_account() {
        let f = BankingContextFinder::new().unwrap();
        assert_eq!(f.find("account number: 62123456789").len(), 1);
        // Bare digits without the keyword are left to the registry rules.
        assert!(f.find("just 62123456789 digits").is_empty());
    }

    #[test]
    fn test_swift_requires_keyword() {
        let f = BankingContextFinder::new().unwrap();
        assert_eq!(f.find("SWIFT: SBZAZAJJ").len(), 1);
        assert!(f.find("SBZAZAJJ by itself").is_empty());
    }

    #[test]
    fn test_card_with_separators() {
        let f = BankingContextFinder::new().unwrap();
        let spans = f.find("card no 4111 1111 1111 1111 expires soon");
        assert_eq!(spans.len(), 1);
    }
}
