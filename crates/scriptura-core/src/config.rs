//! Assistant configuration, loadable from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants;

/// Top-level configuration for the answering pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub corpus: CorpusConfig,
    pub cache: CacheConfig,
    pub remote: RemoteConfig,
}

impl AssistantConfig {
    /// Parse a TOML document. Unknown keys are ignored; missing sections
    /// take defaults.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// A config rooted at the given corpus data directory, everything
    /// else defaulted.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            corpus: CorpusConfig {
                data_dir: data_dir.into(),
                ..CorpusConfig::default()
            },
            ..Self::default()
        }
    }
}

/// Corpus file layout and I/O budgets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Root directory holding per-source subdirectories
    /// (`bible/kjv`, `bible/web`, `wlc`, `lxx`, `sinaiticus`,
    /// `apocrypha`, `dictionaries`, ...).
    pub data_dir: PathBuf,
    pub fetch_timeout_ms: u64,
}

impl CorpusConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn source_dir(&self, subdir: &str) -> PathBuf {
        self.data_dir.join(subdir)
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            fetch_timeout_ms: constants::DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

/// Verse-range cache tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub verse_ttl_ms: u64,
}

impl CacheConfig {
    pub fn verse_ttl(&self) -> Duration {
        Duration::from_millis(self.verse_ttl_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            verse_ttl_ms: constants::DEFAULT_VERSE_TTL_MS,
        }
    }
}

/// The one optional licensed provider. No token means the provider is
/// disabled — never an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub api_url: String,
    pub token: Option<String>,
}

impl RemoteConfig {
    /// The configured token, falling back to the environment.
    pub fn resolved_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var(constants::REMOTE_TOKEN_ENV).ok())
            .filter(|t| !t.trim().is_empty())
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_REMOTE_API_URL.to_string(),
            token: None,
        }
    }
}

/// Read a config file from disk, defaulting when the file is absent.
pub fn load_config(path: &Path) -> Result<AssistantConfig, toml::de::Error> {
    match std::fs::read_to_string(path) {
        Ok(text) => AssistantConfig::from_toml(&text),
        Err(_) => Ok(AssistantConfig::default()),
    }
}
