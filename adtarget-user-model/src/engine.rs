//! TargetingEngine: owns every model over a shared storage engine.
//!
//! The `process_*` entry points never fail from the caller's point of view:
//! rejected input and unloaded resources are no-ops, and storage failures are
//! logged. Resource loading reports errors so the caller can retry with a
//! fresh payload.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use adtarget_bandit::EpsilonGreedyBanditModel;
use adtarget_core::config::TargetingConfig;
use adtarget_core::errors::{TargetingError, TargetingResult};
use adtarget_core::models::{AdEventType, BanditFeedback, UserModel};
use adtarget_core::segment::Segment;
use adtarget_purchase_intent::PurchaseIntentModel;
use adtarget_storage::StorageEngine;
use adtarget_text_classification::TextClassificationModel;
use adtarget_text_embedding::TextEmbeddingModel;

use crate::builder::UserModelBuilder;

/// Options for opening an engine.
#[derive(Debug, Default)]
pub struct EngineOptions {
    /// SQLite database path. `None` keeps everything in memory.
    pub db_path: Option<PathBuf>,
    /// TOML configuration. `None` uses defaults.
    pub config_toml: Option<String>,
}

pub struct TargetingEngine {
    config: TargetingConfig,
    storage: Arc<StorageEngine>,
    purchase_intent: PurchaseIntentModel,
    text_classification: TextClassificationModel,
    text_embedding: TextEmbeddingModel,
    bandit: EpsilonGreedyBanditModel,
}

impl TargetingEngine {
    /// Build every model over `storage`. The configuration is validated first.
    pub fn new(config: TargetingConfig, storage: Arc<StorageEngine>) -> TargetingResult<Self> {
        config.validate()?;
        Ok(Self {
            purchase_intent: PurchaseIntentModel::new(
                storage.clone(),
                config.purchase_intent.clone(),
            ),
            text_classification: TextClassificationModel::new(
                storage.clone(),
                config.text_classification.clone(),
            ),
            text_embedding: TextEmbeddingModel::new(storage.clone(), config.text_embedding.clone()),
            bandit: EpsilonGreedyBanditModel::new(storage.clone(), config.bandit.clone()),
            config,
            storage,
        })
    }

    /// Parse the configuration, install tracing, open storage, and build the
    /// engine.
    pub fn open(opts: EngineOptions) -> TargetingResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => TargetingConfig::from_toml(toml_str)?,
            None => TargetingConfig::default(),
        };
        adtarget_observability::init_tracing(&config.observability);

        let storage = match &opts.db_path {
            Some(path) => StorageEngine::open(path)?,
            None => StorageEngine::open_in_memory()?,
        };
        info!(
            db_path = ?opts.db_path,
            schema_version = storage.schema_version()?,
            "targeting engine opened"
        );
        Self::new(config, Arc::new(storage))
    }

    pub fn config(&self) -> &TargetingConfig {
        &self.config
    }

    pub fn storage(&self) -> &Arc<StorageEngine> {
        &self.storage
    }

    pub fn purchase_intent(&self) -> &PurchaseIntentModel {
        &self.purchase_intent
    }

    pub fn text_classification(&self) -> &TextClassificationModel {
        &self.text_classification
    }

    pub fn text_embedding(&self) -> &TextEmbeddingModel {
        &self.text_embedding
    }

    pub fn bandit(&self) -> &EpsilonGreedyBanditModel {
        &self.bandit
    }

    // ── resources ──

    pub fn load_purchase_intent_resource(&self, json: &str) -> TargetingResult<()> {
        self.purchase_intent.load_resource_from_json(json)
    }

    pub fn load_text_classification_resource(&self, json: &str) -> TargetingResult<()> {
        self.text_classification.load_resource_from_json(json)
    }

    pub fn load_text_embedding_resource(&self, json: &str) -> TargetingResult<()> {
        self.text_embedding.load_resource_from_json(json)
    }

    /// Return every resource to not-ready.
    pub fn reset_resources(&self) {
        self.purchase_intent.resource().reset();
        self.text_classification.classifier().reset();
        self.text_embedding.embedder().reset();
        info!("targeting resources reset");
    }

    /// Opt the user out: resources return to not-ready and every persisted
    /// signal, page window, arm statistic, and embedding event is deleted.
    pub fn opt_out(&self) -> TargetingResult<()> {
        self.reset_resources();
        self.storage.clear_all()?;
        info!("targeting state cleared");
        Ok(())
    }

    pub fn set_bandit_eligible_segments(&self, segments: Vec<Segment>) {
        self.bandit.set_eligible_segments(segments);
    }

    // ── signals ──

    pub fn process_url_visit(&self, url: &str) {
        self.process_url_visit_at(url, Utc::now());
    }

    pub fn process_url_visit_at(&self, url: &str, now: DateTime<Utc>) {
        if !self.config.purchase_intent.enabled {
            return;
        }
        log_outcome(
            "purchase_intent",
            self.purchase_intent.process_url_visit(url, now).map(drop),
        );
    }

    /// Feed page text to the classification and embedding models.
    pub fn process_page_text(&self, text: &str) {
        self.process_page_text_at(text, Utc::now());
    }

    pub fn process_page_text_at(&self, text: &str, now: DateTime<Utc>) {
        if self.config.text_classification.enabled {
            log_outcome("text_classification", self.text_classification.process(text));
        }
        if self.config.text_embedding.enabled {
            let locale = &self.config.text_embedding.locale;
            log_outcome("text_embedding", self.text_embedding.process(text, locale, now));
        }
    }

    pub fn process_ad_feedback(&self, segment: &str, event_type: AdEventType) {
        if !self.config.bandit.enabled {
            return;
        }
        let feedback = BanditFeedback {
            segment: segment.to_string(),
            event_type,
        };
        log_outcome("bandit", self.bandit.process(&feedback));
    }

    // ── user model ──

    pub fn builder(&self) -> UserModelBuilder<'_> {
        UserModelBuilder::new(
            &self.purchase_intent,
            &self.bandit,
            &self.text_classification,
            &self.text_embedding,
        )
    }

    pub fn build_user_model(&self) -> UserModel {
        self.builder().build()
    }
}

/// Build the user model on the blocking pool.
pub async fn build_user_model_async(engine: Arc<TargetingEngine>) -> TargetingResult<UserModel> {
    tokio::task::spawn_blocking(move || engine.build_user_model())
        .await
        .map_err(|e| TargetingError::LoadFailure {
            what: "user model".to_string(),
            reason: e.to_string(),
        })
}

fn log_outcome(model: &'static str, outcome: TargetingResult<()>) {
    match outcome {
        Ok(()) => {}
        Err(e @ (TargetingError::InvalidInput { .. } | TargetingError::ResourceError(_))) => {
            debug!(model, error = %e, "input ignored");
        }
        Err(e) => warn!(model, error = %e, "signal processing failed"),
    }
}
