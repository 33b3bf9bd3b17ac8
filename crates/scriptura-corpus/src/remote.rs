//! The one optional licensed provider (ESV passage-text API).
//!
//! Bearer-token authenticated GET with a reference-string query
//! parameter. Absent credentials disable the provider; every network or
//! HTTP failure is logged and reported as a miss so the fallback chain
//! proceeds.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use scriptura_core::config::RemoteConfig;
use scriptura_core::{AssistantResult, TranslationId, Verse, VerseSource};

pub struct RemoteEsvProvider {
    client: Option<reqwest::Client>,
    api_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PassageResponse {
    #[serde(default)]
    passages: Vec<String>,
}

impl RemoteEsvProvider {
    pub fn new(config: &RemoteConfig, timeout: Duration) -> Self {
        let token = config.resolved_token();
        let client = if token.is_some() {
            reqwest::Client::builder().timeout(timeout).build().ok()
        } else {
            None
        };
        if token.is_none() {
            debug!("no remote token configured; ESV provider disabled");
        }
        Self {
            client,
            api_url: config.api_url.clone(),
            token,
        }
    }

    /// Whether credentials are present and the provider will make calls.
    pub fn enabled(&self) -> bool {
        self.token.is_some() && self.client.is_some()
    }

    async fn fetch_passage(&self, reference: &str) -> Option<String> {
        let (client, token) = (self.client.as_ref()?, self.token.as_ref()?);

        let response = client
            .get(&self.api_url)
            .header("Authorization", format!("Token {token}"))
            .query(&[
                ("q", reference),
                ("include-passage-references", "false"),
                ("include-footnotes", "false"),
                ("include-headings", "false"),
                ("include-verse-numbers", "false"),
                ("include-short-copyright", "false"),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!(reference, error = %e, "ESV fetch failed");
                return None;
            }
        };
        if !response.status().is_success() {
            warn!(reference, status = %response.status(), "ESV fetch returned error status");
            return None;
        }

        let body: PassageResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                warn!(reference, error = %e, "ESV response body unreadable");
                return None;
            }
        };

        let text = body.passages.first()?.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl VerseSource for RemoteEsvProvider {
    fn translation(&self) -> TranslationId {
        TranslationId::Esv
    }

    async fn verses(
        &self,
        book: &str,
        chapter: u16,
        verse: Option<u16>,
        verse_end: Option<u16>,
    ) -> AssistantResult<Vec<Verse>> {
        if !self.enabled() {
            return Ok(Vec::new());
        }

        let reference = match (verse, verse_end) {
            (Some(v), Some(e)) => format!("{book} {chapter}:{v}-{e}"),
            (Some(v), None) => format!("{book} {chapter}:{v}"),
            _ => format!("{book} {chapter}"),
        };

        // The API returns a whole passage as one block of text; it is
        // cited as a single verse entry under the requested reference.
        Ok(match self.fetch_passage(&reference).await {
            Some(text) => vec![Verse::english(reference, text, TranslationId::Esv)],
            None => Vec::new(),
        })
    }
}
