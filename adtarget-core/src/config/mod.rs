//! Engine configuration.
//!
//! Every section defaults independently, so an empty TOML document is a valid
//! configuration. Each model section carries its own `enabled` flag.

mod bandit_config;
pub mod defaults;
mod observability_config;
mod purchase_intent_config;
mod storage_config;
mod text_classification_config;
mod text_embedding_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use bandit_config::BanditConfig;
pub use observability_config::ObservabilityConfig;
pub use purchase_intent_config::PurchaseIntentConfig;
pub use storage_config::StorageConfig;
pub use text_classification_config::TextClassificationConfig;
pub use text_embedding_config::TextEmbeddingConfig;

use crate::errors::{ConfigError, TargetingResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    pub storage: StorageConfig,
    pub purchase_intent: PurchaseIntentConfig,
    pub text_classification: TextClassificationConfig,
    pub text_embedding: TextEmbeddingConfig,
    pub bandit: BanditConfig,
    pub observability: ObservabilityConfig,
}

impl TargetingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> TargetingResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> TargetingResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    /// Reject values no model can operate with.
    pub fn validate(&self) -> TargetingResult<()> {
        if !(0.0..=1.0).contains(&self.bandit.epsilon) {
            return Err(invalid("bandit.epsilon", "must be within [0, 1]"));
        }
        if self.bandit.max_segments == 0 {
            return Err(invalid("bandit.max_segments", "must be at least 1"));
        }
        if self.purchase_intent.time_window_secs == 0 {
            return Err(invalid("purchase_intent.time_window_secs", "must be non-zero"));
        }
        if self.purchase_intent.max_history_entries_per_segment == 0 {
            return Err(invalid(
                "purchase_intent.max_history_entries_per_segment",
                "must be at least 1",
            ));
        }
        if self.text_classification.page_probabilities_history_size == 0 {
            return Err(invalid(
                "text_classification.page_probabilities_history_size",
                "must be at least 1",
            ));
        }
        if self.text_classification.max_segments == 0 {
            return Err(invalid("text_classification.max_segments", "must be at least 1"));
        }
        if self.text_embedding.history_size == 0 {
            return Err(invalid("text_embedding.history_size", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::TargetingError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
