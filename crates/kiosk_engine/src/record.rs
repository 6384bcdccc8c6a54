use std::sync::Arc;

use kiosk_logging::kiosk_info;
use serde::Serialize;

use crate::{LogRatingError, RetryPolicy, Transport, TransportRequest};

#[derive(Debug, Serialize)]
struct RatingRecord<'a> {
    category: &'a str,
    joke: &'a str,
    rating: u8,
}

/// Sends one rating record per call, retrying under its [`RetryPolicy`]
/// until the transport reports success.
///
/// Logging is best-effort analytics, not a ledger: a retry after a
/// server-side success that the client never saw can produce duplicate
/// entries, and that is accepted.
pub struct RatingLogger {
    transport: Arc<dyn Transport>,
    log_url: String,
    policy: RetryPolicy,
}

impl RatingLogger {
    pub fn new(transport: Arc<dyn Transport>, log_url: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            log_url: log_url.into(),
            policy,
        }
    }

    pub fn log_rating(&self, category: &str, joke: &str, rating: u8) -> Result<(), LogRatingError> {
        debug_assert!(
            (1..=5).contains(&rating),
            "rating {rating} outside 1-5 reached the logger"
        );

        let payload = serde_json::to_string(&RatingRecord {
            category,
            joke,
            rating,
        })
        .map_err(|err| LogRatingError::Serialize(err.to_string()))?;
        let request = TransportRequest::post_json(&self.log_url, payload);

        kiosk_info!("[Logger] sending rating {} for '{}'", rating, category);
        self.policy
            .run("Logger", || self.transport.send(&request).map(drop))
            .map_err(|exhausted| LogRatingError::RetriesExhausted {
                attempts: exhausted.attempts,
                last: exhausted.last,
            })
    }
}
