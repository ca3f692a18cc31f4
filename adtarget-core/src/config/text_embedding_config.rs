use serde::{Deserialize, Serialize};

use super::defaults;

/// Text embedding model parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextEmbeddingConfig {
    pub enabled: bool,
    /// Number of most-recent events kept by the purge.
    pub history_size: usize,
    pub resource_version: u32,
    /// Locale recorded on every event.
    pub locale: String,
}

impl Default for TextEmbeddingConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_TEXT_EMBEDDING_ENABLED,
            history_size: defaults::DEFAULT_TEXT_EMBEDDING_HISTORY_SIZE,
            resource_version: defaults::DEFAULT_TEXT_EMBEDDING_RESOURCE_VERSION,
            locale: defaults::DEFAULT_TEXT_EMBEDDING_LOCALE.to_string(),
        }
    }
}
