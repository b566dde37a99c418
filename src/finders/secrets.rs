//! Compound credential disclosure finder: multi-field secrets on one
//! line that the single-field registry rules do not cover as a unit.

use regex::Regex;

use crate::error::{Result, TextscrubError};
use crate::span::{Span, SpanSource};

use super::Finder;

pub struct SecretContextFinder {
    patterns: Vec<Regex>,
}

impl SecretContextFinder {
    pub fn new() -> Result<Self> {
        let patterns = Self::default_patterns()
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| TextscrubError::InvalidPattern {
                    category: "security_secret".into(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    fn default_patterns() -> Vec<&'static str> {
        vec![
            // Username+password pairs disclosed together.
            r"(?i)\buser(?:name)?\s*[:=]\s*\S+[,;]?\s+(?:and\s+)?pass(?:word)?\s*[:=]\s*\S+",
            // OAuth client credential pairs.
            r"(?i)\bclient[_-]?id\s*[:=]\s*\S+[,;]?\s+client[_-]?secret\s*[:=]\s*\S+",
            // Authorization headers.
            r"(?i)\bauthorization\s*:\s*bearer\s+\S+",
            r"(?i)\bauthorization\s*:\s*basic\s+[A-Za-z0-9+/=]+",
            // Custom API-key headers.
            r"(?i)\bx-api-key\s*:\s*\S+",
        ]
    }
}

impl Finder for SecretContextFinder {
    fn find(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for re in &self.patterns {
            for m in re.find_iter(text) {
                spans.push(Span::new(
                    m.start(),
                    m.end(),
                    "security_secret",
                    SpanSource::SecuritySecret,
                ));
            }
        }
        spans
    }

    fn name(&self) -> &str {
        "security_secret"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_password_pair() {
        let f = SecretContextFinder::new().unwrap();
        let spans = f.find("login with username: admin password: hunter2");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_authorization_bearer_header() {
        let f = SecretContextFinder::new().unwrap();
        let spans = f.find("Authorization: Bearer abc.def.ghi");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_basic_auth_header() {
        let f = SecretContextFinder::new().unwrap();
        let spans = f.find("Authorization: Basic dXNlcjpwYXNz");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_plain_text_clean() {
        let f = SecretContextFinder::new().unwrap();
        assert!(f.find("no credentials in this sentence").is_empty());
    }
}
