#![allow(dead_code)]

use serde::Deserialize;

use adtarget_core::config::TargetingConfig;
use adtarget_core::models::AdEventType;
use adtarget_user_model::TargetingEngine;
use test_fixtures::{
    load_fixture, load_fixture_string, PURCHASE_INTENT_RESOURCE, TEXT_CLASSIFICATION_RESOURCE,
    TEXT_EMBEDDING_RESOURCE,
};

#[derive(Debug, Deserialize)]
pub struct Feedback {
    pub segment: String,
    pub event_type: AdEventType,
}

#[derive(Debug, Deserialize)]
pub struct Expected {
    pub intent_segments: Vec<String>,
    pub latent_interest_segments: Vec<String>,
    pub interest_segments: Vec<String>,
    pub segments: Vec<String>,
    pub text_embedding_event_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CombinedFixture {
    pub url_visits: Vec<String>,
    pub page_texts: Vec<String>,
    pub ad_feedback: Vec<Feedback>,
    pub text_classification_max_segments: usize,
    pub expected: Expected,
}

pub fn combined_fixture() -> CombinedFixture {
    load_fixture("golden/user_model/combined.json")
}

/// Configuration the combined golden dataset was recorded with.
pub fn golden_config(fixture: &CombinedFixture) -> TargetingConfig {
    let mut config = TargetingConfig::default();
    config.bandit.epsilon = 0.0;
    config.text_classification.max_segments = fixture.text_classification_max_segments;
    config
}

pub fn load_resources(engine: &TargetingEngine) {
    engine
        .load_purchase_intent_resource(&load_fixture_string(PURCHASE_INTENT_RESOURCE))
        .unwrap();
    engine
        .load_text_classification_resource(&load_fixture_string(TEXT_CLASSIFICATION_RESOURCE))
        .unwrap();
    engine
        .load_text_embedding_resource(&load_fixture_string(TEXT_EMBEDDING_RESOURCE))
        .unwrap();
}

/// Replay every recorded signal into `engine`.
pub fn replay(engine: &TargetingEngine, fixture: &CombinedFixture) {
    for url in &fixture.url_visits {
        engine.process_url_visit(url);
    }
    for text in &fixture.page_texts {
        engine.process_page_text(text);
    }
    for feedback in &fixture.ad_feedback {
        engine.process_ad_feedback(&feedback.segment, feedback.event_type);
    }
}
