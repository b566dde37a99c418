pub mod redact;
pub mod scan;

use std::path::Path;

use crate::config::EngineConfig;
use crate::engine::RedactionEngine;
use crate::error::Result;

/// Build an engine from an optional config path, falling back to
/// `.textscrub.yml` in the working directory.
pub fn build_engine(config_path: Option<&Path>) -> Result<RedactionEngine> {
    let config = match config_path {
        Some(path) => EngineConfig::load_from(path)?,
        None => EngineConfig::load_from(Path::new(".textscrub.yml"))?,
    };
    RedactionEngine::with_config(config)
}
