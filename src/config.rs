use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextscrubError};
use crate::finders::ner::NerTier;
use crate::names::scorer::{CONTEXT_WINDOW, NAME_THRESHOLD, SINGLE_WORD_THRESHOLD};

/// A caller-supplied rule added on top of the built-in registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraRule {
    pub category: String,
    pub pattern: String,
}

/// Engine configuration. Every field has a default, so an empty or
/// absent file yields the stock engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Replacement marker for redacted spans. Default: `[REDACTED]`.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Minimum name-scorer confidence. Default: 0.5.
    #[serde(default = "default_name_threshold")]
    pub name_threshold: f64,

    /// Higher bar for single-word name candidates. Default: 0.7.
    #[serde(default = "default_single_word_threshold")]
    pub single_word_threshold: f64,

    /// Context characters inspected around a candidate. Default: 50.
    #[serde(default = "default_context_window")]
    pub context_window: usize,

    /// Registry categories to switch off.
    #[serde(default)]
    pub disabled_categories: Vec<String>,

    /// Extra (category, pattern) rules; invalid patterns fail engine
    /// construction.
    #[serde(default)]
    pub extra_rules: Vec<ExtraRule>,

    /// Highest person-tagger tier the engine may acquire. Default: full.
    #[serde(default = "default_ner_tier")]
    pub ner_tier: NerTier,
}

fn default_marker() -> String {
    "[REDACTED]".into()
}
fn default_name_threshold() -> f64 {
    NAME_THRESHOLD
}
fn default_single_word_threshold() -> f64 {
    SINGLE_WORD_THRESHOLD
}
fn default_context_window() -> usize {
    CONTEXT_WINDOW
}
fn default_ner_tier() -> NerTier {
    NerTier::Full
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            name_threshold: NAME_THRESHOLD,
            single_word_threshold: SINGLE_WORD_THRESHOLD,
            context_window: CONTEXT_WINDOW,
            disabled_categories: Vec::new(),
            extra_rules: Vec::new(),
            ner_tier: NerTier::Full,
        }
    }
}

impl EngineConfig {
    /// Load config from a YAML file. Returns defaults if the file does
    /// not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| TextscrubError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
