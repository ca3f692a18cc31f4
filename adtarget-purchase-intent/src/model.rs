//! PurchaseIntentModel: ingests signals, persists histories, predicts segments.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use adtarget_core::config::PurchaseIntentConfig;
use adtarget_core::constants::PURCHASE_INTENT_MAX_SEGMENTS;
use adtarget_core::errors::{StorageError, TargetingError, TargetingResult};
use adtarget_core::models::{
    PurchaseIntentHistoryEntry, PurchaseIntentSignal, PurchaseIntentSignalHistory, SegmentScore,
};
use adtarget_core::resource::ResourceHandle;
use adtarget_core::segment::{is_valid_segment, Segment};
use adtarget_core::traits::IPurchaseIntentStore;
use adtarget_observability::purchase_intent_span;

use crate::classifier;
use crate::resource::{PurchaseIntentResource, RESOURCE_NAME};
use crate::scoring::{self, ScoringParams};

pub struct PurchaseIntentModel {
    store: Arc<dyn IPurchaseIntentStore>,
    config: PurchaseIntentConfig,
    resource: Arc<ResourceHandle<PurchaseIntentResource>>,
    /// Serializes load-modify-save of the stored history.
    write_lock: Mutex<()>,
}

impl PurchaseIntentModel {
    pub fn new(store: Arc<dyn IPurchaseIntentStore>, config: PurchaseIntentConfig) -> Self {
        Self {
            store,
            config,
            resource: Arc::new(ResourceHandle::new(RESOURCE_NAME)),
            write_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &PurchaseIntentConfig {
        &self.config
    }

    pub fn resource(&self) -> &Arc<ResourceHandle<PurchaseIntentResource>> {
        &self.resource
    }

    /// Parse a resource payload and install it if its version is the one
    /// this model is configured for.
    pub fn load_resource_from_json(&self, json: &str) -> TargetingResult<()> {
        let resource = match PurchaseIntentResource::from_json(json) {
            Ok(resource) => resource,
            Err(e) => {
                self.resource.reset();
                return Err(e);
            }
        };
        let (sites, keyword_sets) = (resource.sites.len(), resource.segment_keywords.len());
        self.resource
            .set_checked(resource, self.config.resource_version)?;
        info!(sites, keyword_sets, "purchase intent resource loaded");
        Ok(())
    }

    /// Turn a visited URL into a signal and record it.
    ///
    /// A no-op while the resource is not loaded or when the URL carries no
    /// intent. Returns the recorded signal, if any.
    pub fn process_url_visit(
        &self,
        url: &str,
        now: DateTime<Utc>,
    ) -> TargetingResult<Option<PurchaseIntentSignal>> {
        let _span = purchase_intent_span!("process_url_visit").entered();
        let Some(resource) = self.resource.get() else {
            debug!("resource not ready, ignoring visit");
            return Ok(None);
        };
        let Some(signal) = classifier::extract_signal(url, &resource, now) else {
            return Ok(None);
        };
        self.buy_signal(&signal)?;
        Ok(Some(signal))
    }

    /// Record `signal` against each of its segments.
    pub fn buy_signal(&self, signal: &PurchaseIntentSignal) -> TargetingResult<()> {
        if signal.segments.is_empty() {
            return Err(TargetingError::invalid_input("signal has no segments"));
        }
        if !signal.segments.iter().all(|s| is_valid_segment(s)) {
            return Err(TargetingError::invalid_input("signal has an empty segment"));
        }

        let _guard = self.write_lock.lock().map_err(|e| StorageError::LockPoisoned {
            details: e.to_string(),
        })?;

        let mut history = self.load_history()?;
        let entry = PurchaseIntentHistoryEntry {
            occurred_at: signal.occurred_at,
            weight: signal.weight,
        };
        for segment in &signal.segments {
            history.append(segment, entry, self.config.max_history_entries_per_segment);
        }
        self.store.save_purchase_intent_history(&history)?;

        debug!(
            segments = ?signal.segments,
            weight = signal.weight,
            "purchase intent signal recorded"
        );
        Ok(())
    }

    /// Non-zero scores at `now`, ascending.
    pub fn segment_scores(&self, now: DateTime<Utc>) -> TargetingResult<Vec<SegmentScore>> {
        let history = self.load_history()?;
        Ok(scoring::compute_segment_scores(&history, self.scoring_params(), now))
    }

    /// Up to three segments whose score reaches the configured threshold,
    /// highest first.
    pub fn predict(&self, now: DateTime<Utc>) -> TargetingResult<Vec<Segment>> {
        let _span = purchase_intent_span!("predict").entered();
        let scores = self.segment_scores(now)?;
        let segments = scoring::predict_segments(
            &scores,
            self.config.threshold,
            PURCHASE_INTENT_MAX_SEGMENTS,
        );
        debug!(scored = scores.len(), predicted = segments.len(), "purchase intent predicted");
        Ok(segments)
    }

    /// Stored history; an undecodable blob counts as empty so the next save
    /// replaces it.
    fn load_history(&self) -> TargetingResult<PurchaseIntentSignalHistory> {
        match self.store.load_purchase_intent_history() {
            Err(e) if e.is_malformed_state() => {
                warn!(error = %e, "stored purchase intent history is malformed, starting empty");
                Ok(PurchaseIntentSignalHistory::default())
            }
            other => other,
        }
    }

    fn scoring_params(&self) -> ScoringParams {
        ScoringParams {
            time_window: self.config.time_window(),
            signal_level: self.config.signal_level,
        }
    }
}
