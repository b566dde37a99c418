pub mod banking_ctx;
pub mod ner;
pub mod secrets;
pub mod shape;

use crate::span::Span;

/// A single detection pass over the input text. All finders run
/// unconditionally on every call; recall is favored over latency.
pub trait Finder: Send + Sync {
    /// Scan the text and return candidate spans.
    fn find(&self, text: &str) -> Vec<Span>;

    /// Name of this finder (for logging/debugging).
    fn name(&self) -> &str;
}
