use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use kiosk_engine::{RankedEntry, RankingFetcher, Transport, TransportError, TransportRequest};

struct MockTransport {
    responses: Mutex<VecDeque<Result<String, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    fn new(responses: Vec<Result<String, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &TransportRequest) -> Result<String, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::ConnectFailed("mock exhausted".into())))
    }
}

const RANKING_URL: &str = "https://example.com/ranking";

fn fetcher(mock: &Arc<MockTransport>) -> RankingFetcher {
    RankingFetcher::new(mock.clone() as Arc<dyn Transport>, RANKING_URL)
}

#[test]
fn parses_entries_in_wire_order() {
    let body = r#"[
        {"rank": 1, "joke": "First", "rating": 4.8},
        {"rank": 2, "joke": "Second", "rating": 4.5},
        {"rank": 3, "joke": "Third", "rating": 4.1}
    ]"#;
    let mock = MockTransport::new(vec![Ok(body.to_string())]);

    let entries = fetcher(&mock).fetch_top();

    assert_eq!(
        entries,
        vec![
            RankedEntry {
                rank: 1,
                joke: "First".to_string(),
                rating: 4.8
            },
            RankedEntry {
                rank: 2,
                joke: "Second".to_string(),
                rating: 4.5
            },
            RankedEntry {
                rank: 3,
                joke: "Third".to_string(),
                rating: 4.1
            },
        ]
    );
}

#[test]
fn http_error_yields_empty_after_a_single_attempt() {
    let mock = MockTransport::new(vec![
        Err(TransportError::HttpStatus(404)),
        Ok("[]".to_string()),
    ]);

    let entries = fetcher(&mock).fetch_top();

    assert!(entries.is_empty());
    // No retry: the second queued response must remain untouched.
    assert_eq!(mock.calls(), 1);
}

#[test]
fn no_connection_yields_empty() {
    let mock = MockTransport::new(vec![Err(TransportError::NoConnection)]);

    assert!(fetcher(&mock).fetch_top().is_empty());
    assert_eq!(mock.calls(), 1);
}

#[test]
fn malformed_payload_fails_closed_to_empty() {
    let mock = MockTransport::new(vec![Ok("not json at all".to_string())]);

    assert!(fetcher(&mock).fetch_top().is_empty());
}

#[test]
fn missing_field_empties_the_whole_leaderboard() {
    // Second row lacks "rating"; the typed decode rejects everything.
    let body = r#"[
        {"rank": 1, "joke": "First", "rating": 4.8},
        {"rank": 2, "joke": "Second"}
    ]"#;
    let mock = MockTransport::new(vec![Ok(body.to_string())]);

    assert!(fetcher(&mock).fetch_top().is_empty());
}

#[test]
fn ranking_request_opts_into_redirects() {
    let mock = MockTransport::new(vec![Ok("[]".to_string())]);

    fetcher(&mock).fetch_top();

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].follow_redirects);
}
