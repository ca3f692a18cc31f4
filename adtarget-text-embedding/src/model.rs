//! TextEmbeddingModel: records one embedding event per processed page and
//! purges all but the most recent `history_size` events.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info};

use adtarget_core::config::TextEmbeddingConfig;
use adtarget_core::errors::{ResourceError, TargetingResult};
use adtarget_core::models::TextEmbeddingEvent;
use adtarget_core::resource::ResourceHandle;
use adtarget_core::traits::{ITextEmbedder, ITextEmbeddingEventStore, IVersionedResource};
use adtarget_observability::text_embedding_span;

use crate::embedder::{WordVectorEmbedder, RESOURCE_NAME};
use crate::hashing::hash_text;

pub struct TextEmbeddingModel<E = WordVectorEmbedder> {
    store: Arc<dyn ITextEmbeddingEventStore>,
    config: TextEmbeddingConfig,
    embedder: Arc<ResourceHandle<E>>,
}

impl<E> TextEmbeddingModel<E>
where
    E: ITextEmbedder + IVersionedResource,
{
    pub fn new(store: Arc<dyn ITextEmbeddingEventStore>, config: TextEmbeddingConfig) -> Self {
        Self {
            store,
            config,
            embedder: Arc::new(ResourceHandle::new(RESOURCE_NAME)),
        }
    }

    pub fn config(&self) -> &TextEmbeddingConfig {
        &self.config
    }

    pub fn embedder(&self) -> &Arc<ResourceHandle<E>> {
        &self.embedder
    }

    pub fn load_embedder(&self, embedder: E) -> TargetingResult<()> {
        let dimensions = embedder.dimensions();
        self.embedder
            .set_checked(embedder, self.config.resource_version)?;
        info!(dimensions, "text embedder loaded");
        Ok(())
    }

    /// Embed `text` and store the event, then purge stale events.
    ///
    /// Blank text and an unloaded embedder are silent no-ops.
    pub fn process(&self, text: &str, locale: &str, now: DateTime<Utc>) -> TargetingResult<()> {
        let _span = text_embedding_span!("process").entered();
        if text.trim().is_empty() {
            debug!("blank page text, skipping");
            return Ok(());
        }
        let Some(embedder) = self.embedder.get() else {
            debug!("embedder not ready, skipping");
            return Ok(());
        };

        let embedding = embedder.embed(text)?;
        if embedding.len() != embedder.dimensions() {
            return Err(ResourceError::DimensionMismatch {
                expected: embedder.dimensions(),
                actual: embedding.len(),
            }
            .into());
        }

        // Stored timestamps carry microsecond precision.
        let event = TextEmbeddingEvent {
            created_at: now.trunc_subsecs(6),
            locale: locale.to_string(),
            hashed_text_base64: hash_text(text),
            embedding,
        };
        self.store.insert_text_embedding_event(&event)?;
        self.purge_stale()?;
        Ok(())
    }

    /// Delete all but the `history_size` most recent events. Idempotent.
    pub fn purge_stale(&self) -> TargetingResult<usize> {
        let deleted = self
            .store
            .delete_text_embedding_events_except_most_recent(self.config.history_size)?;
        if deleted > 0 {
            debug!(deleted, keep = self.config.history_size, "stale embedding events purged");
        }
        Ok(deleted)
    }

    /// Stored events, newest first.
    pub fn history(&self) -> TargetingResult<Vec<TextEmbeddingEvent>> {
        self.store.get_text_embedding_events()
    }
}

impl TextEmbeddingModel<WordVectorEmbedder> {
    /// Parse a word-vector resource and install it.
    pub fn load_resource_from_json(&self, json: &str) -> TargetingResult<()> {
        match WordVectorEmbedder::from_json(json) {
            Ok(embedder) => self.load_embedder(embedder),
            Err(e) => {
                self.embedder.reset();
                Err(e)
            }
        }
    }
}
