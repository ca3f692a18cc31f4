//! Interest ranking over the page-probability window.

use std::collections::BTreeMap;

use adtarget_core::models::ClassificationHistory;
use adtarget_core::segment::Segment;

/// Turns a window of page distributions into ranked interest segments.
pub trait RankingStrategy: Send + Sync {
    fn rank(&self, history: &ClassificationHistory, max_segments: usize) -> Vec<Segment>;

    fn name(&self) -> &'static str;
}

/// Sum each segment's probability over the window; highest sum first,
/// ties broken by segment name ascending.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummedProbabilityRanking;

impl RankingStrategy for SummedProbabilityRanking {
    fn rank(&self, history: &ClassificationHistory, max_segments: usize) -> Vec<Segment> {
        let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
        for distribution in history.iter() {
            for (segment, probability) in distribution {
                *sums.entry(segment.as_str()).or_insert(0.0) += probability;
            }
        }

        let mut ranked: Vec<(&str, f64)> = sums.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
            .into_iter()
            .take(max_segments)
            .map(|(segment, _)| segment.to_string())
            .collect()
    }

    fn name(&self) -> &'static str {
        "summed_probability"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adtarget_core::models::CategoryProbabilities;

    fn page(pairs: &[(&str, f64)]) -> CategoryProbabilities {
        pairs.iter().map(|(s, p)| (s.to_string(), *p)).collect()
    }

    #[test]
    fn empty_window_ranks_nothing() {
        let ranked = SummedProbabilityRanking.rank(&ClassificationHistory::new(), 3);
        assert!(ranked.is_empty());
    }

    #[test]
    fn sums_across_pages() {
        let history: ClassificationHistory = [
            page(&[("sports", 0.6), ("travel", 0.4)]),
            page(&[("sports", 0.1), ("travel", 0.5), ("food", 0.4)]),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            SummedProbabilityRanking.rank(&history, 3),
            vec!["travel", "sports", "food"]
        );
    }

    #[test]
    fn ties_break_by_name_and_result_is_truncated() {
        let history: ClassificationHistory =
            [page(&[("c", 0.25), ("a", 0.25), ("b", 0.25), ("d", 0.25)])]
                .into_iter()
                .collect();
        assert_eq!(SummedProbabilityRanking.rank(&history, 2), vec!["a", "b"]);
    }
}
