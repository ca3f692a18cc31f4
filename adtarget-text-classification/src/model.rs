//! TextClassificationModel: page text in, interest segments out.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use adtarget_core::config::TextClassificationConfig;
use adtarget_core::errors::{StorageError, TargetingResult};
use adtarget_core::models::ClassificationHistory;
use adtarget_core::resource::ResourceHandle;
use adtarget_core::segment::Segment;
use adtarget_core::traits::{IClassificationStore, ITextClassifier, IVersionedResource};
use adtarget_observability::text_classification_span;

use crate::classifier::{LinearTextClassifier, RESOURCE_NAME};
use crate::ranking::{RankingStrategy, SummedProbabilityRanking};

/// Classification model over any versioned classifier; the linear reference
/// classifier by default.
pub struct TextClassificationModel<C = LinearTextClassifier> {
    store: Arc<dyn IClassificationStore>,
    config: TextClassificationConfig,
    classifier: Arc<ResourceHandle<C>>,
    ranking: Box<dyn RankingStrategy>,
    write_lock: Mutex<()>,
}

impl<C> TextClassificationModel<C>
where
    C: ITextClassifier + IVersionedResource,
{
    pub fn new(store: Arc<dyn IClassificationStore>, config: TextClassificationConfig) -> Self {
        Self {
            store,
            config,
            classifier: Arc::new(ResourceHandle::new(RESOURCE_NAME)),
            ranking: Box::new(SummedProbabilityRanking),
            write_lock: Mutex::new(()),
        }
    }

    /// Replace the ranking strategy.
    pub fn with_ranking(mut self, ranking: Box<dyn RankingStrategy>) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn config(&self) -> &TextClassificationConfig {
        &self.config
    }

    pub fn classifier(&self) -> &Arc<ResourceHandle<C>> {
        &self.classifier
    }

    /// Install a classifier if its version matches the configured one.
    pub fn load_classifier(&self, classifier: C) -> TargetingResult<()> {
        self.classifier
            .set_checked(classifier, self.config.resource_version)?;
        info!(classifier = self.classifier.name(), "text classifier loaded");
        Ok(())
    }

    /// Classify `text` and prepend the result to the stored window.
    ///
    /// Blank text and an unloaded classifier are silent no-ops.
    pub fn process(&self, text: &str) -> TargetingResult<()> {
        let _span = text_classification_span!("process").entered();
        if text.trim().is_empty() {
            debug!("blank page text, skipping");
            return Ok(());
        }
        let Some(classifier) = self.classifier.get() else {
            debug!("classifier not ready, skipping");
            return Ok(());
        };

        let distribution = classifier.classify(text)?;

        let _guard = self.write_lock.lock().map_err(|e| StorageError::LockPoisoned {
            details: e.to_string(),
        })?;
        let mut history = self.load_history()?;
        history.push_front(distribution, self.config.page_probabilities_history_size);
        self.store.save_classification_history(&history)?;

        debug!(window = history.len(), "page probabilities recorded");
        Ok(())
    }

    /// Ranked interest segments over the stored window.
    pub fn top_segments(&self) -> TargetingResult<Vec<Segment>> {
        let history = self.load_history()?;
        let segments = self.ranking.rank(&history, self.config.max_segments);
        debug!(
            strategy = self.ranking.name(),
            window = history.len(),
            ranked = segments.len(),
            "interest segments ranked"
        );
        Ok(segments)
    }

    fn load_history(&self) -> TargetingResult<ClassificationHistory> {
        match self.store.load_classification_history() {
            Err(e) if e.is_malformed_state() => {
                warn!(error = %e, "stored page probabilities are malformed, starting empty");
                Ok(ClassificationHistory::default())
            }
            other => other,
        }
    }
}

impl TextClassificationModel<LinearTextClassifier> {
    /// Parse a linear classifier resource and install it.
    ///
    /// A payload that fails to parse leaves the model without a classifier.
    pub fn load_resource_from_json(&self, json: &str) -> TargetingResult<()> {
        match LinearTextClassifier::from_json(json) {
            Ok(classifier) => self.load_classifier(classifier),
            Err(e) => {
                self.classifier.reset();
                Err(e)
            }
        }
    }
}
