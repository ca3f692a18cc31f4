//! Integration tests for EpsilonGreedyBanditModel.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use adtarget_bandit::EpsilonGreedyBanditModel;
use adtarget_core::config::BanditConfig;
use adtarget_core::constants::state_keys;
use adtarget_core::errors::TargetingError;
use adtarget_core::models::{AdEventType, BanditFeedback};
use adtarget_storage::queries::client_state;
use adtarget_storage::StorageEngine;

fn config(eligible: &[&str]) -> BanditConfig {
    BanditConfig {
        eligible_segments: eligible.iter().map(|s| s.to_string()).collect(),
        ..BanditConfig::default()
    }
}

fn model(eligible: &[&str]) -> EpsilonGreedyBanditModel {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    EpsilonGreedyBanditModel::new(storage, config(eligible))
}

fn feedback(segment: &str, event_type: AdEventType) -> BanditFeedback {
    BanditFeedback {
        segment: segment.to_string(),
        event_type,
    }
}

// ── feedback ──

#[test]
fn clicks_and_dismissals_update_statistics() {
    let bandit = model(&["travel", "sports"]);
    bandit.process(&feedback("travel", AdEventType::Clicked)).unwrap();
    bandit.process(&feedback("travel", AdEventType::Dismissed)).unwrap();

    let arms = bandit.arm_statistics().unwrap();
    assert_eq!(arms["travel"].pulls, 2);
    assert_eq!(arms["travel"].reward_sum, 1.0);
    assert_eq!(arms["travel"].value(), 0.5);
}

#[test]
fn events_without_reward_are_rejected() {
    let bandit = model(&["travel"]);
    for event in [AdEventType::Served, AdEventType::Viewed] {
        let err = bandit.process(&feedback("travel", event)).unwrap_err();
        assert!(matches!(err, TargetingError::InvalidInput { .. }));
    }
    let err = bandit.process(&feedback("", AdEventType::Clicked)).unwrap_err();
    assert!(matches!(err, TargetingError::InvalidInput { .. }));
    assert!(bandit.arm_statistics().unwrap().is_empty());
}

#[test]
fn feedback_outside_eligible_set_is_kept_but_not_selected() {
    let bandit = model(&["travel", "sports"]);
    bandit.process(&feedback("pets", AdEventType::Clicked)).unwrap();
    assert_eq!(bandit.arm_statistics().unwrap()["pets"].pulls, 1);

    let mut rng = StdRng::seed_from_u64(1);
    let selected = bandit.select_segments_with_rng(0.0, &mut rng).unwrap();
    assert_eq!(selected, vec!["travel", "sports"]);
}

#[test]
fn concurrent_feedback_is_not_lost() {
    let bandit = Arc::new(model(&["travel"]));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let bandit = Arc::clone(&bandit);
            thread::spawn(move || {
                for _ in 0..25 {
                    bandit.process(&feedback("travel", AdEventType::Clicked)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let arms = bandit.arm_statistics().unwrap();
    assert_eq!(arms["travel"].pulls, 200);
    assert_eq!(arms["travel"].reward_sum, 200.0);
}

// ── selection ──

#[test]
fn zero_epsilon_exploits_best_arms() {
    let bandit = model(&["arts", "sports", "travel", "news"]);
    for (segment, event) in [
        ("travel", AdEventType::Clicked),
        ("sports", AdEventType::Clicked),
        ("sports", AdEventType::Dismissed),
        ("arts", AdEventType::Dismissed),
    ] {
        bandit.process(&feedback(segment, event)).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(
        bandit.select_segments_with_rng(0.0, &mut rng).unwrap(),
        vec!["travel", "sports", "arts"]
    );
    assert_eq!(
        bandit.select_segments(0.0).unwrap(),
        vec!["travel", "sports", "arts"]
    );
}

#[test]
fn out_of_range_epsilon_is_clamped() {
    let bandit = model(&["a", "b", "c", "d", "e"]);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        bandit.select_segments_with_rng(-2.0, &mut rng).unwrap(),
        vec!["a", "b", "c"]
    );
    let explored = bandit.select_segments_with_rng(7.0, &mut rng).unwrap();
    assert_eq!(explored.len(), 3);
}

#[test]
fn eligible_segments_are_deduplicated_in_order() {
    let bandit = model(&[]);
    bandit.set_eligible_segments(
        ["news", "arts", "news", "", "sports", "arts"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    assert_eq!(bandit.eligible_segments(), vec!["news", "arts", "sports"]);
}

#[test]
fn empty_arm_set_selects_nothing() {
    let bandit = model(&[]);
    assert!(bandit.select_segments(0.0).unwrap().is_empty());
    assert!(bandit.select_segments(1.0).unwrap().is_empty());
}

// ── persisted state ──

#[test]
fn malformed_stored_arms_count_as_unpulled() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    storage
        .with_conn(|conn| {
            client_state::put_state(conn, state_keys::EPSILON_GREEDY_BANDIT_ARMS, &"{not json")
        })
        .unwrap();
    let bandit = EpsilonGreedyBanditModel::new(storage, config(&["travel", "sports"]));

    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(
        bandit.select_segments_with_rng(0.0, &mut rng).unwrap(),
        vec!["travel", "sports"]
    );

    bandit.process(&feedback("sports", AdEventType::Clicked)).unwrap();
    let arms = bandit.arm_statistics().unwrap();
    assert_eq!(arms.len(), 1);
    assert_eq!(arms["sports"].pulls, 1);
    assert_eq!(
        bandit.select_segments_with_rng(0.0, &mut rng).unwrap(),
        vec!["sports", "travel"]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn selection_is_bounded_and_eligible(epsilon in -1.0f64..2.0, seed in any::<u64>()) {
        let bandit = model(&["a", "b", "c", "d", "e", "f"]);
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = bandit.select_segments_with_rng(epsilon, &mut rng).unwrap();
        prop_assert_eq!(picked.len(), 3);
        let eligible = bandit.eligible_segments();
        prop_assert!(picked.iter().all(|s| eligible.contains(s)));
    }
}
