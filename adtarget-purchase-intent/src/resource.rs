//! Purchase-intent resource: funnel sites, segment keywords, funnel keywords.
//!
//! Delivered as versioned JSON through component updates.

use serde::{Deserialize, Serialize};

use adtarget_core::errors::{ResourceError, TargetingResult};
use adtarget_core::segment::{is_valid_segment, Segment};
use adtarget_core::traits::IVersionedResource;

pub const RESOURCE_NAME: &str = "purchase_intent";

/// A site whose visits signal intent on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelSite {
    /// Host the site is served from, e.g. `"carvana.com"`. Subdomains match.
    pub url_netloc: String,
    pub segments: Vec<Segment>,
    pub weight: u16,
}

/// Keywords that map a search query to segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentKeywords {
    pub keywords: String,
    pub segments: Vec<Segment>,
}

/// Keywords that indicate how far down the purchase funnel a query is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelKeywords {
    pub keywords: String,
    pub weight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseIntentResource {
    pub version: u32,
    #[serde(default)]
    pub sites: Vec<FunnelSite>,
    #[serde(default)]
    pub segment_keywords: Vec<SegmentKeywords>,
    #[serde(default)]
    pub funnel_keywords: Vec<FunnelKeywords>,
}

impl PurchaseIntentResource {
    /// Parse and validate a resource payload.
    pub fn from_json(json: &str) -> TargetingResult<Self> {
        let resource: Self = serde_json::from_str(json).map_err(|e| ResourceError::Malformed {
            resource: RESOURCE_NAME.to_string(),
            reason: e.to_string(),
        })?;
        resource.validate()?;
        Ok(resource)
    }

    fn validate(&self) -> TargetingResult<()> {
        let site_ok = self
            .sites
            .iter()
            .all(|site| !site.url_netloc.trim().is_empty() && has_valid_segments(&site.segments));
        let keywords_ok = self
            .segment_keywords
            .iter()
            .all(|entry| has_valid_segments(&entry.segments));
        if !site_ok || !keywords_ok {
            return Err(ResourceError::Malformed {
                resource: RESOURCE_NAME.to_string(),
                reason: "every site and keyword entry needs a host and non-empty segments"
                    .to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The funnel site serving `host`, if any. A leading `www.` is ignored on
    /// both sides.
    pub fn site_for_host(&self, host: &str) -> Option<&FunnelSite> {
        let host = strip_www(host);
        self.sites.iter().find(|site| {
            let netloc = strip_www(&site.url_netloc);
            host == netloc
                || host
                    .strip_suffix(netloc)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

impl IVersionedResource for PurchaseIntentResource {
    fn version(&self) -> u32 {
        self.version
    }
}

fn has_valid_segments(segments: &[Segment]) -> bool {
    !segments.is_empty() && segments.iter().all(|s| is_valid_segment(s))
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
