use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TargetingError;
use crate::segment::Segment;

/// Running statistics for one bandit arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BanditArmStatistics {
    pub pulls: u64,
    pub reward_sum: f64,
}

impl BanditArmStatistics {
    /// Mean reward. Arms that were never pulled are worth 0.0.
    pub fn value(&self) -> f64 {
        self.reward_sum / self.pulls.max(1) as f64
    }

    /// Record one more observation.
    pub fn record(&mut self, reward: f64) {
        self.pulls += 1;
        self.reward_sum += reward;
    }
}

/// Persisted arm statistics keyed by segment.
pub type BanditArms = BTreeMap<Segment, BanditArmStatistics>;

/// Ad interaction reported back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdEventType {
    Served,
    Viewed,
    Clicked,
    Dismissed,
}

impl AdEventType {
    /// Reward observed by the bandit, or `None` when the event carries no
    /// feedback.
    pub fn reward(self) -> Option<f64> {
        match self {
            Self::Clicked => Some(1.0),
            Self::Dismissed => Some(0.0),
            Self::Served | Self::Viewed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Served => "served",
            Self::Viewed => "viewed",
            Self::Clicked => "clicked",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for AdEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdEventType {
    type Err = TargetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "served" => Ok(Self::Served),
            "viewed" => Ok(Self::Viewed),
            "clicked" => Ok(Self::Clicked),
            "dismissed" => Ok(Self::Dismissed),
            other => Err(TargetingError::invalid_input(format!(
                "unknown ad event type `{other}`"
            ))),
        }
    }
}

/// Feedback for one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanditFeedback {
    pub segment: Segment,
    pub event_type: AdEventType,
}
