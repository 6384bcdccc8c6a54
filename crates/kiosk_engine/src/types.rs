use std::sync::Arc;

/// Clock closure injected into the joke fetcher so the "last updated"
/// label stays out of the IO layer (and under test control).
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One request/response exchange as seen by the transport seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub json_body: Option<String>,
    pub follow_redirects: bool,
}

impl TransportRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            json_body: None,
            follow_redirects: false,
        }
    }

    pub fn post_json(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            json_body: Some(body.into()),
            follow_redirects: false,
        }
    }

    /// The ranking endpoint sits behind a redirecting frontend, so that
    /// request opts in; everything else treats a redirect as a failure.
    pub fn with_redirects(mut self) -> Self {
        self.follow_redirects = true;
        self
    }
}

/// Failure of a single exchange. The transport never retries; retry
/// policy belongs to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("no network connection")]
    NoConnection,
    #[error("connect failed: {0}")]
    ConnectFailed(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("empty or malformed body")]
    EmptyBody,
    #[error("transport resource exhausted: {0}")]
    ResourceExhausted(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchJokeError {
    #[error("joke endpoint url is invalid: {0}")]
    InvalidUrl(String),
    /// Only reachable under a bounded retry policy; the production
    /// policy retries forever.
    #[error("joke fetch gave up after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: TransportError },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogRatingError {
    #[error("rating payload could not be serialized: {0}")]
    Serialize(String),
    /// Only reachable under a bounded retry policy; the production
    /// policy retries forever.
    #[error("rating log gave up after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: TransportError },
}
