use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TextscrubError {
    #[error("invalid pattern for category {category}: {reason}")]
    InvalidPattern { category: String, reason: String },

    #[error("unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("scan failed: {reason}")]
    ScanFailed { reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TextscrubError>;
