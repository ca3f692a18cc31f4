//! Default values for every configuration field.

// Storage
pub const DEFAULT_DB_PATH: &str = "adtarget.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

// Purchase intent
pub const DEFAULT_PURCHASE_INTENT_ENABLED: bool = true;
pub const DEFAULT_PURCHASE_INTENT_THRESHOLD: u64 = 3;
pub const DEFAULT_PURCHASE_INTENT_TIME_WINDOW_SECS: u64 = 7 * 24 * 60 * 60;
pub const DEFAULT_PURCHASE_INTENT_SIGNAL_LEVEL: u64 = 1;
pub const DEFAULT_PURCHASE_INTENT_MAX_HISTORY_ENTRIES: usize = 100;
pub const DEFAULT_PURCHASE_INTENT_RESOURCE_VERSION: u32 = 1;

// Text classification
pub const DEFAULT_TEXT_CLASSIFICATION_ENABLED: bool = true;
pub const DEFAULT_PAGE_PROBABILITIES_HISTORY_SIZE: usize = 5;
pub const DEFAULT_TEXT_CLASSIFICATION_MAX_SEGMENTS: usize = 3;
pub const DEFAULT_TEXT_CLASSIFICATION_RESOURCE_VERSION: u32 = 1;

// Text embedding
pub const DEFAULT_TEXT_EMBEDDING_ENABLED: bool = true;
pub const DEFAULT_TEXT_EMBEDDING_HISTORY_SIZE: usize = 10;
pub const DEFAULT_TEXT_EMBEDDING_RESOURCE_VERSION: u32 = 1;
pub const DEFAULT_TEXT_EMBEDDING_LOCALE: &str = "en-US";

// Epsilon-greedy bandit
pub const DEFAULT_BANDIT_ENABLED: bool = true;
pub const DEFAULT_BANDIT_EPSILON: f64 = 0.25;
pub const DEFAULT_BANDIT_MAX_SEGMENTS: usize = 3;
pub const DEFAULT_BANDIT_ELIGIBLE_SEGMENTS: &[&str] = &[
    "architecture",
    "arts & entertainment",
    "automotive",
    "business",
    "careers",
    "cell phones",
    "drugs",
    "education",
    "family & parenting",
    "fashion",
    "folklore",
    "food & drink",
    "health & fitness",
    "history",
    "hobbies & interests",
    "home",
    "law",
    "military",
    "personal finance",
    "pets",
    "real estate",
    "science",
    "sports",
    "technology & computing",
    "travel",
    "weather",
];

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
