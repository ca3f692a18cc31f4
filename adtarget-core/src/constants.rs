/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between parent and child in a hierarchical segment key.
pub const SEGMENT_SEPARATOR: char = '-';

/// Purchase-intent predictions never return more than this many segments.
pub const PURCHASE_INTENT_MAX_SEGMENTS: usize = 3;

/// Weight applied to a search-query signal when no funnel keyword matches.
pub const DEFAULT_SIGNAL_WEIGHT: u16 = 1;

/// Search queries are truncated to this many words before keyword matching.
pub const SEARCH_QUERY_WORD_COUNT_LIMIT: usize = 1000;

/// Client-state keys used by the persistence collaborator.
pub mod state_keys {
    pub const PURCHASE_INTENT_SIGNAL_HISTORY: &str = "purchase_intent_signal_history";
    pub const TEXT_CLASSIFICATION_PROBABILITIES_HISTORY: &str =
        "text_classification_probabilities_history";
    pub const EPSILON_GREEDY_BANDIT_ARMS: &str = "epsilon_greedy_bandit_arms";
}
