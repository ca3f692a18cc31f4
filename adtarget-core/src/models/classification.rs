use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Probability per category for one processed page.
pub type CategoryProbabilities = BTreeMap<Segment, f64>;

/// Bounded window of page distributions, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationHistory {
    distributions: VecDeque<CategoryProbabilities>,
}

impl ClassificationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a distribution and evict the oldest beyond `max_entries`.
    pub fn push_front(&mut self, distribution: CategoryProbabilities, max_entries: usize) {
        self.distributions.push_front(distribution);
        self.distributions.truncate(max_entries.max(1));
    }

    /// Distributions, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryProbabilities> {
        self.distributions.iter()
    }

    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }
}

impl FromIterator<CategoryProbabilities> for ClassificationHistory {
    fn from_iter<I: IntoIterator<Item = CategoryProbabilities>>(iter: I) -> Self {
        Self {
            distributions: iter.into_iter().collect(),
        }
    }
}
