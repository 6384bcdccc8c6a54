use std::sync::Arc;

use kiosk_logging::kiosk_warn;
use serde::Deserialize;

use crate::{Transport, TransportRequest};

/// One leaderboard row: `{rank, joke, rating}` on the wire. Rows arrive
/// already rank-sorted and are never re-sorted here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub joke: String,
    pub rating: f64,
}

/// Fetches the top-rated jokes. Unlike the joke and logging paths this
/// is a single attempt: the leaderboard is decoration, so every failure
/// degrades to an empty list instead of a retry storm.
pub struct RankingFetcher {
    transport: Arc<dyn Transport>,
    ranking_url: String,
}

impl RankingFetcher {
    pub fn new(transport: Arc<dyn Transport>, ranking_url: impl Into<String>) -> Self {
        Self {
            transport,
            ranking_url: ranking_url.into(),
        }
    }

    pub fn fetch_top(&self) -> Vec<RankedEntry> {
        let request = TransportRequest::get(&self.ranking_url).with_redirects();

        let body = match self.transport.send(&request) {
            Ok(body) => body,
            Err(err) => {
                kiosk_warn!("[Ranking] fetch failed: {}", err);
                return Vec::new();
            }
        };

        // Typed decode that fails closed: any missing or mismatched
        // field empties the whole leaderboard.
        match serde_json::from_str::<Vec<RankedEntry>>(&body) {
            Ok(entries) => entries,
            Err(err) => {
                kiosk_warn!("[Ranking] malformed payload: {}", err);
                Vec::new()
            }
        }
    }
}
