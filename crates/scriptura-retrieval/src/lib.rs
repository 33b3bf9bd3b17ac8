//! # scriptura-retrieval
//!
//! The retrieval layer: a TTL-bounded verse-range cache, the
//! deterministic provider fallback chains, local verse search, and the
//! static lookup indices (cross-references, lexicon, dictionary,
//! geography, religions, feast days) that augment answers.

pub mod cache;
pub mod crossrefs;
pub mod dictionary;
pub mod fallback;
pub mod feasts;
pub mod geography;
pub mod lexicon;
pub mod religions;
pub mod search;

pub use cache::{VerseCache, VerseCacheKey};
pub use crossrefs::CrossReferenceIndex;
pub use dictionary::{levenshtein, max_edit_distance, DictionaryEntry, DictionaryIndex};
pub use fallback::{chain_for, FallbackFetcher};
pub use feasts::FeastIndex;
pub use geography::{Location, LocationIndex};
pub use lexicon::{LexiconEntry, LexiconIndex};
pub use religions::{Religion, ReligionIndex};
pub use search::{search_verses, SearchOptions};
