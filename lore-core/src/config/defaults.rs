// Single source of truth for all default values.

// --- Decay ---
pub const DEFAULT_SEEDLING_HALF_LIFE_DAYS: f64 = 30.0;
pub const DEFAULT_GROWING_HALF_LIFE_DAYS: f64 = 90.0;
pub const DEFAULT_EVERGREEN_HALF_LIFE_DAYS: f64 = 365.0;
pub const DEFAULT_FRESH_THRESHOLD: f64 = 0.7;
pub const DEFAULT_STALE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 0.1;

// --- Usage ---
pub const DEFAULT_ACCESS_WEIGHT: f64 = 0.1;
pub const DEFAULT_CITATION_WEIGHT: f64 = 0.3;
pub const DEFAULT_POSITIVE_FEEDBACK_WEIGHT: f64 = 0.4;
pub const DEFAULT_CORRECTION_WEIGHT: f64 = 0.2;
pub const DEFAULT_NEGATIVE_FEEDBACK_WEIGHT: f64 = -0.4;
pub const DEFAULT_STALE_FLAG_WEIGHT: f64 = -0.3;
pub const DEFAULT_LOGISTIC_STEEPNESS: f64 = 1.0;

// --- Reinforcement ---
pub const DEFAULT_DEDUP_SIMILARITY: f64 = 0.8;
pub const DEFAULT_REVIEW_HARM_RATIO: f64 = 0.3;
pub const DEFAULT_REVIEW_MIN_SIGNALS: u64 = 5;
pub const DEFAULT_REVIEW_MIN_HELPFULNESS: f64 = 0.4;
pub const DEFAULT_TOP_PERFORMER_MIN_SIGNALS: u64 = 3;

// --- Lineage ---
pub const DEFAULT_FULL_LINEAGE_IMPORTANCE: f64 = 0.7;
pub const DEFAULT_UPGRADED_SOURCE_CONFIDENCE: f64 = 0.8;

// --- Retrieval ---
pub const DEFAULT_QUERY_WEIGHT: f64 = 0.7;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.3;
pub const DEFAULT_STRONG_THRESHOLD: f64 = 0.8;
pub const DEFAULT_PARTIAL_THRESHOLD: f64 = 0.4;
pub const DEFAULT_EMBEDDING_BASE: f64 = 0.6;
pub const DEFAULT_EMBEDDING_SCALE: f64 = 0.4;
pub const DEFAULT_EMBEDDING_MIN_SIMILARITY: f64 = 0.5;
pub const DEFAULT_QUERY_MIN_SIMILARITY: f64 = 0.3;
pub const DEFAULT_MIN_SCORE: f64 = 0.0;
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
