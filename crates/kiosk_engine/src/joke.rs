use std::sync::Arc;

use kiosk_logging::kiosk_info;
use url::Url;

use crate::{Clock, FetchJokeError, RetryPolicy, Transport, TransportError, TransportRequest};

const JOKE_DELIMITER: &str = "|||";

/// Placeholder secondary segment when the response carries no delimiter.
pub const TRANSLATION_MISSING: &str = "Translation missing.";

/// A joke split into its displayed segment and its companion
/// translation segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeContent {
    pub primary: String,
    pub secondary: String,
}

/// A parsed joke plus the clock label of the successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedJoke {
    pub content: JokeContent,
    pub fetched_at: String,
}

/// Splits a raw response body on the fixed `"|||"` delimiter. Both
/// segments are trimmed. A missing delimiter (one at index 0 counts as
/// missing) keeps the whole body as the primary segment with a
/// placeholder secondary.
pub fn parse_joke_body(raw: &str) -> JokeContent {
    match raw.find(JOKE_DELIMITER) {
        Some(index) if index > 0 => {
            let (primary, rest) = raw.split_at(index);
            JokeContent {
                primary: primary.trim().to_string(),
                secondary: rest[JOKE_DELIMITER.len()..].trim().to_string(),
            }
        }
        _ => JokeContent {
            primary: raw.trim().to_string(),
            secondary: TRANSLATION_MISSING.to_string(),
        },
    }
}

/// Fetches one joke per call, retrying under its [`RetryPolicy`] until
/// the transport yields a usable body.
pub struct JokeFetcher {
    transport: Arc<dyn Transport>,
    joke_url: String,
    policy: RetryPolicy,
    clock: Clock,
}

impl JokeFetcher {
    pub fn new(transport: Arc<dyn Transport>, joke_url: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            joke_url: joke_url.into(),
            policy,
            // Placeholder label until a real clock is wired up.
            clock: Arc::new(|| "--:--".to_string()),
        }
    }

    /// Replaces the clock used for the `fetched_at` label.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Blocks until a non-error, non-empty body is obtained (or, under a
    /// bounded test policy, the attempt budget is spent). The result
    /// never carries a transport failure in place of joke text.
    pub fn fetch_joke(&self, category: &str) -> Result<FetchedJoke, FetchJokeError> {
        let url = Url::parse_with_params(&self.joke_url, &[("category", category)])
            .map_err(|err| FetchJokeError::InvalidUrl(err.to_string()))?;
        let request = TransportRequest::get(url);

        kiosk_info!("[GetJoke] requesting category '{}'", category);
        let content = self
            .policy
            .run("GetJoke", || self.attempt(&request))
            .map_err(|exhausted| FetchJokeError::RetriesExhausted {
                attempts: exhausted.attempts,
                last: exhausted.last,
            })?;

        Ok(FetchedJoke {
            content,
            fetched_at: (self.clock)(),
        })
    }

    fn attempt(&self, request: &TransportRequest) -> Result<JokeContent, TransportError> {
        let body = self.transport.send(request)?;
        // A one-character body is as useless as none at all.
        if body.trim().len() < 2 {
            return Err(TransportError::EmptyBody);
        }
        Ok(parse_joke_body(&body))
    }
}
