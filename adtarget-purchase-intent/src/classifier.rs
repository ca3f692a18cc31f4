//! URL visit → purchase-intent signal.
//!
//! Funnel sites win. Otherwise a search query is matched against the segment
//! keyword sets (first match supplies the segments) and weighted by the
//! strongest matching funnel keyword set.

use chrono::{DateTime, Utc};
use url::Url;

use adtarget_core::constants::DEFAULT_SIGNAL_WEIGHT;
use adtarget_core::models::PurchaseIntentSignal;

use crate::keywords;
use crate::resource::PurchaseIntentResource;
use crate::search_engine;

/// Derive a signal from a visited URL, or `None` when the visit carries no
/// purchase intent (or the URL is not a valid http(s) URL).
pub fn extract_signal(
    raw_url: &str,
    resource: &PurchaseIntentResource,
    now: DateTime<Utc>,
) -> Option<PurchaseIntentSignal> {
    let url = Url::parse(raw_url).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    if let Some(site) = url.host_str().and_then(|host| resource.site_for_host(host)) {
        return Some(PurchaseIntentSignal {
            occurred_at: now,
            segments: site.segments.clone(),
            weight: site.weight,
        });
    }

    let query = search_engine::extract_search_query(&url)?;
    let normalized = keywords::normalize(&query);
    let words = keywords::word_set(&normalized);

    let segments = resource
        .segment_keywords
        .iter()
        .find(|entry| keywords::matches(&words, &entry.keywords))
        .map(|entry| entry.segments.clone())?;

    let weight = resource
        .funnel_keywords
        .iter()
        .filter(|entry| keywords::matches(&words, &entry.keywords))
        .map(|entry| entry.weight)
        .max()
        .unwrap_or(DEFAULT_SIGNAL_WEIGHT);

    Some(PurchaseIntentSignal {
        occurred_at: now,
        segments,
        weight,
    })
}
