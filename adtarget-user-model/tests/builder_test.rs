//! UserModelBuilder failure tolerance with failing collaborators.

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use adtarget_bandit::EpsilonGreedyBanditModel;
use adtarget_core::config::{
    BanditConfig, PurchaseIntentConfig, TextClassificationConfig, TextEmbeddingConfig,
};
use adtarget_core::errors::{TargetingError, TargetingResult};
use adtarget_core::models::{AdEventType, BanditArms, BanditFeedback, TextEmbeddingEvent};
use adtarget_core::traits::{IBanditStore, ITextEmbeddingEventStore};
use adtarget_purchase_intent::PurchaseIntentModel;
use adtarget_storage::StorageEngine;
use adtarget_text_classification::TextClassificationModel;
use adtarget_text_embedding::TextEmbeddingModel;
use adtarget_user_model::UserModelBuilder;

struct UnavailableStore;

fn unavailable() -> TargetingError {
    TargetingError::LoadFailure {
        what: "store".to_string(),
        reason: "database is locked".to_string(),
    }
}

impl ITextEmbeddingEventStore for UnavailableStore {
    fn insert_text_embedding_event(&self, _event: &TextEmbeddingEvent) -> TargetingResult<()> {
        Err(unavailable())
    }

    fn get_text_embedding_events(&self) -> TargetingResult<Vec<TextEmbeddingEvent>> {
        Err(unavailable())
    }

    fn delete_text_embedding_events_except_most_recent(&self, _keep: usize) -> TargetingResult<usize> {
        Err(unavailable())
    }
}

impl IBanditStore for UnavailableStore {
    fn load_bandit_arms(&self) -> TargetingResult<BanditArms> {
        Err(unavailable())
    }

    fn save_bandit_arms(&self, _arms: &BanditArms) -> TargetingResult<()> {
        Err(unavailable())
    }
}

fn bandit_config() -> BanditConfig {
    BanditConfig {
        epsilon: 0.0,
        eligible_segments: vec!["travel".to_string(), "sports".to_string()],
        ..BanditConfig::default()
    }
}

#[test]
fn embedding_fetch_failure_yields_empty_events() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let purchase_intent = PurchaseIntentModel::new(storage.clone(), PurchaseIntentConfig::default());
    let bandit = EpsilonGreedyBanditModel::new(storage.clone(), bandit_config());
    let classification: TextClassificationModel =
        TextClassificationModel::new(storage.clone(), TextClassificationConfig::default());
    let embedding: TextEmbeddingModel =
        TextEmbeddingModel::new(Arc::new(UnavailableStore), TextEmbeddingConfig::default());

    bandit
        .process(&BanditFeedback {
            segment: "sports".to_string(),
            event_type: AdEventType::Clicked,
        })
        .unwrap();

    let builder = UserModelBuilder::new(&purchase_intent, &bandit, &classification, &embedding);
    let model = builder.build_with_rng(Utc::now(), &mut StdRng::seed_from_u64(0));
    assert!(model.text_embedding_events.is_empty());
    assert_eq!(model.latent_interest_segments, vec!["sports", "travel"]);
}

#[test]
fn bandit_failure_does_not_affect_other_contributions() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let purchase_intent = PurchaseIntentModel::new(storage.clone(), PurchaseIntentConfig::default());
    let bandit = EpsilonGreedyBanditModel::new(Arc::new(UnavailableStore), bandit_config());
    let classification: TextClassificationModel =
        TextClassificationModel::new(storage.clone(), TextClassificationConfig::default());
    let embedding: TextEmbeddingModel =
        TextEmbeddingModel::new(storage.clone(), TextEmbeddingConfig::default());

    purchase_intent
        .buy_signal(&adtarget_core::models::PurchaseIntentSignal {
            occurred_at: Utc::now(),
            segments: vec!["automotive".to_string()],
            weight: 3,
        })
        .unwrap();

    let builder = UserModelBuilder::new(&purchase_intent, &bandit, &classification, &embedding);
    let model = builder.build_with_rng(Utc::now(), &mut StdRng::seed_from_u64(0));
    assert!(model.latent_interest_segments.is_empty());
    assert_eq!(model.intent_segments, vec!["automotive"]);
}

#[test]
fn fresh_state_builds_an_empty_model() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let purchase_intent = PurchaseIntentModel::new(storage.clone(), PurchaseIntentConfig::default());
    let bandit = EpsilonGreedyBanditModel::new(
        storage.clone(),
        BanditConfig {
            eligible_segments: Vec::new(),
            ..bandit_config()
        },
    );
    let classification: TextClassificationModel =
        TextClassificationModel::new(storage.clone(), TextClassificationConfig::default());
    let embedding: TextEmbeddingModel =
        TextEmbeddingModel::new(storage, TextEmbeddingConfig::default());

    let model = UserModelBuilder::new(&purchase_intent, &bandit, &classification, &embedding).build();
    assert!(model.is_empty());
}
