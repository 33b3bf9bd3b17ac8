//! Lazy per-book file loading with a process-lifetime document cache.
//!
//! The loader is shared by every provider. Missing files are cached as
//! absent (an expected data gap); malformed files fail fast with
//! [`CorpusError::MalformedBook`]; reads run under a timeout so a stalled
//! filesystem cannot stall a whole query.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tracing::{debug, warn};

use scriptura_core::config::CorpusConfig;
use scriptura_core::{AssistantResult, CorpusError};

use crate::document::{TextBook, TokenBook};

type CacheKey = (String, String);

/// Shared book-file loader. Cheap to clone via `Arc`.
pub struct BookLoader {
    data_dir: PathBuf,
    fetch_timeout: Duration,
    text_cache: DashMap<CacheKey, Arc<Option<TextBook>>>,
    token_cache: DashMap<CacheKey, Arc<Option<TokenBook>>>,
    file_reads: AtomicUsize,
}

impl BookLoader {
    pub fn new(config: &CorpusConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            fetch_timeout: config.fetch_timeout(),
            text_cache: DashMap::new(),
            token_cache: DashMap::new(),
            file_reads: AtomicUsize::new(0),
        }
    }

    /// Number of filesystem reads performed so far. Cache hits do no I/O,
    /// so tests can assert on this.
    pub fn file_reads(&self) -> usize {
        self.file_reads.load(Ordering::Relaxed)
    }

    /// Load a text book from `<data_dir>/<subdir>/<book>.json`.
    /// `None` means the file does not exist in this source.
    pub async fn text_book(
        &self,
        subdir: &str,
        book: &str,
    ) -> AssistantResult<Arc<Option<TextBook>>> {
        let key = (subdir.to_string(), book.to_string());
        if let Some(cached) = self.text_cache.get(&key) {
            return Ok(cached.clone());
        }

        let parsed = match self.read_file(subdir, book).await? {
            Some(bytes) => Some(TextBook::parse(&bytes).map_err(|reason| {
                CorpusError::MalformedBook {
                    path: self.path_for(subdir, book),
                    reason,
                }
            })?),
            None => None,
        };

        let entry = Arc::new(parsed);
        self.text_cache.insert(key, entry.clone());
        Ok(entry)
    }

    /// Load a manuscript book from `<data_dir>/<subdir>/<book>.json`.
    pub async fn token_book(
        &self,
        subdir: &str,
        book: &str,
    ) -> AssistantResult<Arc<Option<TokenBook>>> {
        let key = (subdir.to_string(), book.to_string());
        if let Some(cached) = self.token_cache.get(&key) {
            return Ok(cached.clone());
        }

        let parsed = match self.read_file(subdir, book).await? {
            Some(bytes) => Some(TokenBook::parse(&bytes).map_err(|reason| {
                CorpusError::MalformedBook {
                    path: self.path_for(subdir, book),
                    reason,
                }
            })?),
            None => None,
        };

        let entry = Arc::new(parsed);
        self.token_cache.insert(key, entry.clone());
        Ok(entry)
    }

    fn path_for(&self, subdir: &str, book: &str) -> PathBuf {
        self.data_dir.join(subdir).join(format!("{book}.json"))
    }

    async fn read_file(&self, subdir: &str, book: &str) -> AssistantResult<Option<Vec<u8>>> {
        let path = self.path_for(subdir, book);
        self.file_reads.fetch_add(1, Ordering::Relaxed);

        let read = tokio::time::timeout(self.fetch_timeout, tokio::fs::read(&path)).await;
        match read {
            Err(_) => Err(CorpusError::Timeout {
                what: path.display().to_string(),
                millis: self.fetch_timeout.as_millis() as u64,
            }
            .into()),
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "book file absent");
                Ok(None)
            }
            Ok(Err(e)) => {
                warn!(path = %path.display(), error = %e, "book file read failed");
                Err(CorpusError::Io { path, source: e }.into())
            }
            Ok(Ok(bytes)) => {
                debug!(path = %path.display(), bytes = bytes.len(), "book file loaded");
                Ok(Some(bytes))
            }
        }
    }
}
