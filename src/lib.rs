//! textscrub: best-effort PII and credential redaction for free text.
//!
//! The engine combines a fixed regex rule registry (identifiers,
//! banking details, credential families), name gazetteers with a
//! heuristic confidence scorer, and four finder passes (statistical
//! person tagger, shape battery, keyword-anchored banking and compound
//! secret matchers). Overlapping detections are merged and every
//! surviving span is replaced with `[REDACTED]`.
//!
//! `redact` is fail-open by design: on any internal failure it returns
//! the original text unchanged and logs a warning. Callers that must
//! not ship unredacted text should use [`RedactionEngine::try_redact`]
//! and check for [`RedactionOutcome::Degraded`].
//!
//! ```
//! use textscrub::RedactionEngine;
//!
//! let engine = RedactionEngine::new();
//! let out = engine.redact("call Thabo Mbeki on +27 82 555 1234");
//! assert_eq!(out.matches("[REDACTED]").count(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod finders;
pub mod names;
pub mod patterns;
pub mod span;

pub use config::{EngineConfig, ExtraRule};
pub use engine::{RedactionEngine, RedactionOutcome, RedactionReport};
pub use error::{Result, TextscrubError};
pub use finders::ner::NerTier;
pub use span::{merge_spans, Span, SpanSource};
