use serde::{Deserialize, Serialize};

use super::defaults;
use crate::segment::Segment;

/// Epsilon-greedy bandit parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BanditConfig {
    pub enabled: bool,
    /// Exploration probability in [0, 1].
    pub epsilon: f64,
    /// Arms considered for selection.
    pub eligible_segments: Vec<Segment>,
    /// Maximum number of latent interest segments returned.
    pub max_segments: usize,
}

impl Default for BanditConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_BANDIT_ENABLED,
            epsilon: defaults::DEFAULT_BANDIT_EPSILON,
            eligible_segments: defaults::DEFAULT_BANDIT_ELIGIBLE_SEGMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_segments: defaults::DEFAULT_BANDIT_MAX_SEGMENTS,
        }
    }
}
