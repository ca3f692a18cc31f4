use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// A weighted purchase-intent observation produced by a URL visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseIntentSignal {
    pub occurred_at: DateTime<Utc>,
    pub segments: Vec<Segment>,
    pub weight: u16,
}

/// One history entry for a single segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseIntentHistoryEntry {
    pub occurred_at: DateTime<Utc>,
    pub weight: u16,
}

type RawHistory = BTreeMap<Segment, Vec<PurchaseIntentHistoryEntry>>;

/// Per-segment purchase-intent history, newest entry first.
///
/// Every list is non-increasing in `occurred_at`. Scoring stops at the first
/// decayed entry, so the ordering is enforced here: entries can only be added
/// through [`append`](Self::append), and histories rebuilt from storage are
/// re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHistory", into = "RawHistory")]
pub struct PurchaseIntentSignalHistory {
    segments: BTreeMap<Segment, VecDeque<PurchaseIntentHistoryEntry>>,
}

impl PurchaseIntentSignalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry for `segment`, keeping newest-first order, then drop
    /// the oldest entries beyond `max_entries`.
    ///
    /// In-order signals land at the front. An entry older than the current
    /// front is placed after every entry at least as new as it.
    pub fn append(
        &mut self,
        segment: &str,
        entry: PurchaseIntentHistoryEntry,
        max_entries: usize,
    ) {
        let entries = self.segments.entry(segment.to_string()).or_default();
        let index = entries
            .iter()
            .position(|existing| existing.occurred_at <= entry.occurred_at)
            .unwrap_or(entries.len());
        entries.insert(index, entry);
        entries.truncate(max_entries.max(1));
    }

    /// Entries for one segment, newest first.
    pub fn get(&self, segment: &str) -> Option<&VecDeque<PurchaseIntentHistoryEntry>> {
        self.segments.get(segment)
    }

    /// Iterate segments in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Segment, &VecDeque<PurchaseIntentHistoryEntry>)> {
        self.segments.iter()
    }

    /// Number of segments with a history.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<RawHistory> for PurchaseIntentSignalHistory {
    fn from(raw: RawHistory) -> Self {
        let segments = raw
            .into_iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(segment, mut entries)| {
                entries.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
                (segment, VecDeque::from(entries))
            })
            .collect();
        Self { segments }
    }
}

impl From<PurchaseIntentSignalHistory> for RawHistory {
    fn from(history: PurchaseIntentSignalHistory) -> Self {
        history
            .segments
            .into_iter()
            .map(|(segment, entries)| (segment, entries.into_iter().collect()))
            .collect()
    }
}

/// Score computed for one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentScore {
    pub segment: Segment,
    pub score: u64,
}
