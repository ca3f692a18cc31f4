//! UserModelBuilder: gathers each enabled model's contribution.
//!
//! Contributions are independent: a failing model is logged and contributes
//! nothing, and a disabled model is never queried.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, warn};

use adtarget_bandit::EpsilonGreedyBanditModel;
use adtarget_core::errors::TargetingResult;
use adtarget_core::models::UserModel;
use adtarget_observability::user_model_span;
use adtarget_purchase_intent::PurchaseIntentModel;
use adtarget_text_classification::TextClassificationModel;
use adtarget_text_embedding::TextEmbeddingModel;

pub struct UserModelBuilder<'a> {
    purchase_intent: &'a PurchaseIntentModel,
    bandit: &'a EpsilonGreedyBanditModel,
    text_classification: &'a TextClassificationModel,
    text_embedding: &'a TextEmbeddingModel,
}

impl<'a> UserModelBuilder<'a> {
    pub fn new(
        purchase_intent: &'a PurchaseIntentModel,
        bandit: &'a EpsilonGreedyBanditModel,
        text_classification: &'a TextClassificationModel,
        text_embedding: &'a TextEmbeddingModel,
    ) -> Self {
        Self {
            purchase_intent,
            bandit,
            text_classification,
            text_embedding,
        }
    }

    /// Build the model at `now`, drawing bandit exploration from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, now: DateTime<Utc>, rng: &mut R) -> UserModel {
        let _span = user_model_span!().entered();

        let intent_segments = contribution(
            "purchase_intent",
            self.purchase_intent.config().enabled,
            || self.purchase_intent.predict(now),
        );
        let latent_interest_segments = contribution("bandit", self.bandit.config().enabled, || {
            self.bandit
                .select_segments_with_rng(self.bandit.config().epsilon, rng)
        });
        let interest_segments = contribution(
            "text_classification",
            self.text_classification.config().enabled,
            || self.text_classification.top_segments(),
        );
        let text_embedding_events = contribution(
            "text_embedding",
            self.text_embedding.config().enabled,
            || self.text_embedding.history(),
        );

        let model = UserModel {
            intent_segments,
            latent_interest_segments,
            interest_segments,
            text_embedding_events,
        };
        debug!(
            intent = model.intent_segments.len(),
            latent_interest = model.latent_interest_segments.len(),
            interest = model.interest_segments.len(),
            embedding_events = model.text_embedding_events.len(),
            "user model built"
        );
        model
    }

    /// Build the model at the current time with the thread-local RNG.
    pub fn build(&self) -> UserModel {
        self.build_with_rng(Utc::now(), &mut rand::thread_rng())
    }
}

fn contribution<T, F>(model: &'static str, enabled: bool, f: F) -> Vec<T>
where
    F: FnOnce() -> TargetingResult<Vec<T>>,
{
    if !enabled {
        return Vec::new();
    }
    f().unwrap_or_else(|e| {
        warn!(model, error = %e, "contribution failed, using empty list");
        Vec::new()
    })
}
