use std::sync::Arc;
use std::time::Duration;

use kiosk_logging::kiosk_warn;
use reqwest::header::CONTENT_TYPE;

use crate::{Method, TransportError, TransportRequest};

/// One blocking request/response exchange. Implementations never retry
/// internally.
pub trait Transport: Send + Sync {
    fn send(&self, request: &TransportRequest) -> Result<String, TransportError>;
}

/// Connectivity probe for the underlying link. Checked before every
/// exchange; a down link triggers `reconnect` as a side effect and the
/// exchange fails immediately with [`TransportError::NoConnection`].
pub trait LinkMonitor: Send + Sync {
    fn is_up(&self) -> bool;
    fn reconnect(&self);
}

/// Link monitor for hosts with OS-managed networking: always reports up.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysUp;

impl LinkMonitor for AlwaysUp {
    fn is_up(&self) -> bool {
        true
    }

    fn reconnect(&self) {}
}

#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    /// Disables TLS certificate verification for every exchange.
    /// Only for development against endpoints with broken certificates;
    /// off by default, and loudly logged when enabled.
    pub accept_invalid_certs: bool,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            // Generous handshake allowance for embedded-grade links.
            connect_timeout: Duration::from_secs(20),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            accept_invalid_certs: false,
        }
    }
}

/// Blocking HTTP transport over reqwest. A fresh client is built for
/// every exchange and dropped on every exit path, so each exchange
/// owns (and releases) its own connection resources.
pub struct HttpTransport {
    settings: TransportSettings,
    link: Arc<dyn LinkMonitor>,
}

impl HttpTransport {
    pub fn new(settings: TransportSettings) -> Self {
        Self::with_link_monitor(settings, Arc::new(AlwaysUp))
    }

    pub fn with_link_monitor(settings: TransportSettings, link: Arc<dyn LinkMonitor>) -> Self {
        if settings.accept_invalid_certs {
            kiosk_warn!("TLS certificate verification is DISABLED; peers are not authenticated");
        }
        Self { settings, link }
    }

    fn build_client(&self, follow_redirects: bool) -> Result<reqwest::blocking::Client, TransportError> {
        let policy = if follow_redirects {
            reqwest::redirect::Policy::limited(self.settings.redirect_limit)
        } else {
            reqwest::redirect::Policy::none()
        };

        let mut builder = reqwest::blocking::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(policy);
        if self.settings.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        builder
            .build()
            .map_err(|err| TransportError::ResourceExhausted(err.to_string()))
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &TransportRequest) -> Result<String, TransportError> {
        if !self.link.is_up() {
            self.link.reconnect();
            return Err(TransportError::NoConnection);
        }

        let client = self.build_client(request.follow_redirects)?;
        let builder = match request.method {
            Method::Get => client.get(&request.url),
            Method::Post => {
                let builder = client.post(&request.url);
                match &request.json_body {
                    Some(body) => builder
                        .header(CONTENT_TYPE, "application/json")
                        .body(body.clone()),
                    None => builder,
                }
            }
        };

        let response = builder
            .send()
            .map_err(|err| TransportError::ConnectFailed(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .map_err(|err| TransportError::ConnectFailed(err.to_string()))
    }
}
