//! EpsilonGreedyBanditModel: persisted arm statistics plus selection.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, RwLock};

use rand::Rng;
use tracing::{debug, info, warn};

use adtarget_core::config::BanditConfig;
use adtarget_core::errors::{StorageError, TargetingError, TargetingResult};
use adtarget_core::models::{BanditArms, BanditFeedback};
use adtarget_core::segment::{is_valid_segment, Segment};
use adtarget_core::traits::IBanditStore;
use adtarget_observability::bandit_span;

use crate::selection;

pub struct EpsilonGreedyBanditModel {
    store: Arc<dyn IBanditStore>,
    config: BanditConfig,
    eligible: RwLock<Vec<Segment>>,
    /// Serializes read-modify-write of the arm statistics.
    write_lock: Mutex<()>,
}

impl EpsilonGreedyBanditModel {
    /// Create a model whose arms are `config.eligible_segments`.
    pub fn new(store: Arc<dyn IBanditStore>, config: BanditConfig) -> Self {
        let eligible = dedup_segments(config.eligible_segments.iter().cloned());
        Self {
            store,
            config,
            eligible: RwLock::new(eligible),
            write_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &BanditConfig {
        &self.config
    }

    /// Replace the arm set. Duplicates and blank names are dropped; order is
    /// kept. Statistics of arms no longer eligible stay in storage.
    pub fn set_eligible_segments(&self, segments: Vec<Segment>) {
        let segments = dedup_segments(segments);
        info!(arms = segments.len(), "bandit eligible segments updated");
        let mut eligible = self.eligible.write().unwrap_or_else(|e| e.into_inner());
        *eligible = segments;
    }

    pub fn eligible_segments(&self) -> Vec<Segment> {
        self.eligible.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Record a click or dismissal against an arm.
    ///
    /// Event types without a reward and blank segments are rejected.
    pub fn process(&self, feedback: &BanditFeedback) -> TargetingResult<()> {
        let _span = bandit_span!("process").entered();
        if !is_valid_segment(&feedback.segment) {
            return Err(TargetingError::invalid_input("feedback segment is empty"));
        }
        let Some(reward) = feedback.event_type.reward() else {
            return Err(TargetingError::invalid_input(format!(
                "`{}` events carry no bandit reward",
                feedback.event_type
            )));
        };

        let _guard = self.write_lock.lock().map_err(|e| StorageError::LockPoisoned {
            details: e.to_string(),
        })?;
        let mut arms = self.load_arms()?;
        let stats = arms.entry(feedback.segment.clone()).or_default();
        stats.record(reward);
        let (pulls, value) = (stats.pulls, stats.value());
        self.store.save_bandit_arms(&arms)?;

        debug!(
            segment = %feedback.segment,
            event = %feedback.event_type,
            pulls,
            value,
            "bandit arm updated"
        );
        Ok(())
    }

    /// Persisted statistics for every arm ever rewarded.
    pub fn arm_statistics(&self) -> TargetingResult<BanditArms> {
        self.load_arms()
    }

    /// Select latent interest segments with the thread-local RNG.
    pub fn select_segments(&self, epsilon: f64) -> TargetingResult<Vec<Segment>> {
        self.select_segments_with_rng(epsilon, &mut rand::thread_rng())
    }

    /// Select latent interest segments: explore with probability `epsilon`
    /// (clamped to [0, 1]), otherwise exploit the best mean rewards.
    pub fn select_segments_with_rng<R: Rng + ?Sized>(
        &self,
        epsilon: f64,
        rng: &mut R,
    ) -> TargetingResult<Vec<Segment>> {
        let _span = bandit_span!("select").entered();
        let eligible = self.eligible_segments();
        let max_segments = self.config.max_segments;

        if selection::should_explore(epsilon, rng) {
            let picked = selection::explore(&eligible, max_segments, rng);
            debug!(picked = picked.len(), "bandit explored");
            return Ok(picked);
        }

        let arms = self.load_arms()?;
        let picked = selection::exploit(&eligible, &arms, max_segments);
        debug!(picked = picked.len(), "bandit exploited");
        Ok(picked)
    }
}

impl EpsilonGreedyBanditModel {
    /// Stored arms; an undecodable blob counts as no statistics so the next
    /// feedback overwrites it.
    fn load_arms(&self) -> TargetingResult<BanditArms> {
        match self.store.load_bandit_arms() {
            Err(e) if e.is_malformed_state() => {
                warn!(error = %e, "stored bandit arms are malformed, starting empty");
                Ok(BanditArms::default())
            }
            other => other,
        }
    }
}

fn dedup_segments(segments: impl IntoIterator<Item = Segment>) -> Vec<Segment> {
    let mut seen = HashSet::new();
    segments
        .into_iter()
        .filter(|s| is_valid_segment(s) && seen.insert(s.clone()))
        .collect()
}
