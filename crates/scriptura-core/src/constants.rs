//! Tunable constants and their defaults.

/// Verse-range cache entries older than this are treated as misses.
pub const DEFAULT_VERSE_TTL_MS: u64 = 300_000;

/// Budget for a single book-file read or remote call.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 4_000;

/// Maximum results returned by local verse search.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// How many hits the synthesizer quotes.
pub const SYNTHESIS_TOP_HITS: usize = 3;

/// Minimum local-search score to count as a hit.
pub const SEARCH_SCORE_THRESHOLD: f64 = 0.15;

/// Fuzzy dictionary lookups allow at least this many edits...
pub const FUZZY_MIN_DISTANCE: usize = 2;
/// ...or this fraction of the term length, whichever is larger.
pub const FUZZY_LENGTH_RATIO: f64 = 0.3;

/// Base confidence for a taxonomy pattern match.
pub const CLASSIFY_BASE_CONFIDENCE: f64 = 0.7;
/// Boost applied per positive confidence signal.
pub const CLASSIFY_SIGNAL_BOOST: f64 = 0.1;

/// Endpoint for the optional licensed text provider.
pub const DEFAULT_REMOTE_API_URL: &str = "https://api.esv.org/v3/passage/text/";

/// Environment variable consulted when no remote token is configured.
pub const REMOTE_TOKEN_ENV: &str = "ESV_API_TOKEN";
