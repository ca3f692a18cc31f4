//! Decay scoring and top-segment prediction.
//!
//! ```text
//! score(segment) = Σ signal_level × weight
//!                  over entries with now < occurred_at + time_window
//! ```
//!
//! Histories are newest first, so the walk stops at the first decayed entry.

use chrono::{DateTime, Duration, Utc};

use adtarget_core::models::{PurchaseIntentHistoryEntry, PurchaseIntentSignalHistory, SegmentScore};
use adtarget_core::segment::Segment;

/// Scoring parameters.
#[derive(Debug, Clone, Copy)]
pub struct ScoringParams {
    pub time_window: Duration,
    pub signal_level: u64,
}

/// Whether an entry no longer contributes at `now`.
pub fn is_decayed(entry: &PurchaseIntentHistoryEntry, time_window: Duration, now: DateTime<Utc>) -> bool {
    match entry.occurred_at.checked_add_signed(time_window) {
        Some(decay_at) => now >= decay_at,
        // A window reaching past the representable range never decays.
        None => false,
    }
}

/// Score for one segment's newest-first entries.
///
/// `None` when no entry is live, so a live segment scoring zero is still
/// distinguishable from a fully decayed one.
pub fn score_entries<'a, I>(entries: I, params: ScoringParams, now: DateTime<Utc>) -> Option<u64>
where
    I: IntoIterator<Item = &'a PurchaseIntentHistoryEntry>,
{
    let mut score = None;
    for entry in entries {
        if is_decayed(entry, params.time_window, now) {
            break;
        }
        let contribution = params.signal_level.saturating_mul(u64::from(entry.weight));
        score = Some(score.unwrap_or(0u64).saturating_add(contribution));
    }
    score
}

/// Scores for every segment with at least one live entry, ascending.
///
/// Equal scores stay in segment-key order.
pub fn compute_segment_scores(
    history: &PurchaseIntentSignalHistory,
    params: ScoringParams,
    now: DateTime<Utc>,
) -> Vec<SegmentScore> {
    let mut scores: Vec<SegmentScore> = history
        .iter()
        .filter_map(|(segment, entries)| {
            score_entries(entries, params, now).map(|score| SegmentScore {
                segment: segment.clone(),
                score,
            })
        })
        .collect();
    scores.sort_by_key(|s| s.score);
    scores
}

/// Highest-scoring segments at or above `threshold`, at most `max_segments`.
///
/// Walks the ascending scores from the end, so among equal scores the
/// segment with the greater key comes first.
pub fn predict_segments(scores: &[SegmentScore], threshold: u64, max_segments: usize) -> Vec<Segment> {
    scores
        .iter()
        .rev()
        .filter(|s| s.score >= threshold)
        .take(max_segments)
        .map(|s| s.segment.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn params() -> ScoringParams {
        ScoringParams {
            time_window: Duration::days(7),
            signal_level: 1,
        }
    }

    #[test]
    fn entry_decays_exactly_at_window_end() {
        let entry = PurchaseIntentHistoryEntry {
            occurred_at: now() - Duration::days(7),
            weight: 1,
        };
        assert!(is_decayed(&entry, Duration::days(7), now()));
        assert!(!is_decayed(&entry, Duration::days(7), now() - Duration::milliseconds(1)));
    }

    #[test]
    fn walk_stops_at_first_decayed_entry() {
        let entries = [
            PurchaseIntentHistoryEntry { occurred_at: now(), weight: 2 },
            PurchaseIntentHistoryEntry { occurred_at: now() - Duration::days(8), weight: 5 },
        ];
        assert_eq!(score_entries(&entries, params(), now()), Some(2));
    }

    #[test]
    fn signal_level_scales_weights() {
        let entries = [PurchaseIntentHistoryEntry { occurred_at: now(), weight: 3 }];
        let scaled = ScoringParams { signal_level: 4, ..params() };
        assert_eq!(score_entries(&entries, scaled, now()), Some(12));
    }

    #[test]
    fn live_zero_weight_entry_still_scores() {
        let live = [PurchaseIntentHistoryEntry { occurred_at: now(), weight: 0 }];
        assert_eq!(score_entries(&live, params(), now()), Some(0));

        let decayed = [PurchaseIntentHistoryEntry { occurred_at: now() - Duration::days(7), weight: 3 }];
        assert_eq!(score_entries(&decayed, params(), now()), None);
        assert_eq!(score_entries(&[], params(), now()), None);
    }

    #[test]
    fn unbounded_window_never_decays() {
        let entry = PurchaseIntentHistoryEntry {
            occurred_at: now() - Duration::days(10_000),
            weight: 1,
        };
        assert!(!is_decayed(&entry, Duration::MAX, now()));
    }

    #[test]
    fn prediction_respects_threshold_and_cap() {
        let scores = vec![
            SegmentScore { segment: "a".into(), score: 1 },
            SegmentScore { segment: "b".into(), score: 3 },
            SegmentScore { segment: "c".into(), score: 4 },
            SegmentScore { segment: "d".into(), score: 5 },
            SegmentScore { segment: "e".into(), score: 6 },
        ];
        assert_eq!(predict_segments(&scores, 3, 3), vec!["e", "d", "c"]);
        assert_eq!(predict_segments(&scores, 7, 3), Vec::<String>::new());
    }
}
