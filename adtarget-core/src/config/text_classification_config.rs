use serde::{Deserialize, Serialize};

use super::defaults;

/// Text classification model parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextClassificationConfig {
    pub enabled: bool,
    /// Number of page distributions retained.
    pub page_probabilities_history_size: usize,
    /// Maximum number of interest segments returned.
    pub max_segments: usize,
    pub resource_version: u32,
}

impl Default for TextClassificationConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_TEXT_CLASSIFICATION_ENABLED,
            page_probabilities_history_size: defaults::DEFAULT_PAGE_PROBABILITIES_HISTORY_SIZE,
            max_segments: defaults::DEFAULT_TEXT_CLASSIFICATION_MAX_SEGMENTS,
            resource_version: defaults::DEFAULT_TEXT_CLASSIFICATION_RESOURCE_VERSION,
        }
    }
}
