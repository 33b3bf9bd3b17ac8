//! Time-boxed verse-range cache.
//!
//! A pure read-through cache keyed by the full request tuple. Entries
//! older than the injected TTL read as misses. Empty results are never
//! stored, so a provider miss is retried on every call instead of being
//! cached as a negative result.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use scriptura_core::{TranslationId, Verse};

/// Full request tuple identifying one cached range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseCacheKey {
    pub translation: TranslationId,
    pub book: String,
    pub chapter: u16,
    pub verse: Option<u16>,
    pub verse_end: Option<u16>,
}

/// TTL-bounded verse cache, owned by the orchestrator and shared by
/// reference with the retrieval layer.
pub struct VerseCache {
    inner: Cache<VerseCacheKey, Arc<Vec<Verse>>>,
}

impl VerseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn get(&self, key: &VerseCacheKey) -> Option<Arc<Vec<Verse>>> {
        self.inner.get(key)
    }

    /// Store a result. Empty results are ignored by design: a transient
    /// loading gap must not poison the cache.
    pub fn put(&self, key: VerseCacheKey, verses: Vec<Verse>) {
        if verses.is_empty() {
            return;
        }
        self.inner.insert(key, Arc::new(verses));
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
    }
}
