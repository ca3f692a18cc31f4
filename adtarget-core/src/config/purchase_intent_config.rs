use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Purchase-intent model parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseIntentConfig {
    pub enabled: bool,
    /// Minimum score a segment needs to be predicted.
    pub threshold: u64,
    /// Age after which a signal stops contributing (seconds).
    pub time_window_secs: u64,
    /// Multiplier applied to every signal weight.
    pub signal_level: u64,
    /// Per-segment history cap; oldest entries are dropped first.
    pub max_history_entries_per_segment: usize,
    /// Resource version this build understands.
    pub resource_version: u32,
}

impl PurchaseIntentConfig {
    pub fn time_window(&self) -> Duration {
        i64::try_from(self.time_window_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }
}

impl Default for PurchaseIntentConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_PURCHASE_INTENT_ENABLED,
            threshold: defaults::DEFAULT_PURCHASE_INTENT_THRESHOLD,
            time_window_secs: defaults::DEFAULT_PURCHASE_INTENT_TIME_WINDOW_SECS,
            signal_level: defaults::DEFAULT_PURCHASE_INTENT_SIGNAL_LEVEL,
            max_history_entries_per_segment: defaults::DEFAULT_PURCHASE_INTENT_MAX_HISTORY_ENTRIES,
            resource_version: defaults::DEFAULT_PURCHASE_INTENT_RESOURCE_VERSION,
        }
    }
}
