//! Delivery of extracted text to a consumer.
//!
//! A [`Transport`] sends plain text to one of two [`Endpoint`]s: the current
//! selection, or the text of the whole document. [`RecordingTransport`] keeps
//! everything in memory; with the `http` feature, [`HttpTransport`] posts to
//! a local text server.

use std::fmt;
use std::sync::Mutex;
#[cfg(feature = "http")]
use std::time::Duration;

#[cfg(feature = "http")]
use tracing::{debug, warn};

use crate::error::BackendError;

/// Where delivered text ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The most recent user selection.
    Selection,
    /// Text of the whole document, page by page.
    FullDocument,
}

impl Endpoint {
    /// The URL path this endpoint is served under.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Selection => "/save-text",
            Endpoint::FullDocument => "/save-full-pdf",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Trait abstracting text delivery.
///
/// Sends are fire-and-forget from the caller's point of view: no retry, the
/// outcome is only reported back so a status can be shown.
pub trait Transport {
    /// Deliver `text` to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Transport`] if the consumer cannot be reached
    /// and [`BackendError::Status`] if it rejects the request.
    fn send(&self, endpoint: Endpoint, text: &str) -> Result<(), BackendError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, endpoint: Endpoint, text: &str) -> Result<(), BackendError> {
        (**self).send(endpoint, text)
    }
}

/// In-memory transport that records every send.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<(Endpoint, String)>>,
    failing: Mutex<bool>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose sends all fail until [`set_failing`](Self::set_failing)
    /// turns that off.
    pub fn failing() -> Self {
        let transport = Self::default();
        transport.set_failing(true);
        transport
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap_or_else(|e| e.into_inner()) = failing;
    }

    /// Every send attempt so far, including failed ones, in order.
    pub fn sent(&self) -> Vec<(Endpoint, String)> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Texts sent to `endpoint`, in order.
    pub fn sent_to(&self, endpoint: Endpoint) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(e, _)| *e == endpoint)
            .map(|(_, text)| text)
            .collect()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, endpoint: Endpoint, text: &str) -> Result<(), BackendError> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((endpoint, text.to_string()));
        if *self.failing.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(BackendError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Default base URL of the local text server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

/// Blocking HTTP transport.
///
/// Each send is a `POST` of the raw UTF-8 text to `base_url` joined with the
/// endpoint path. Any 2xx answer counts as success; the response body is
/// ignored.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a transport for `base_url` with an optional request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[cfg(feature = "http")]
impl Transport for HttpTransport {
    fn send(&self, endpoint: Endpoint, text: &str) -> Result<(), BackendError> {
        let url = self.url(endpoint);
        debug!(%url, chars = text.chars().count(), "sending text");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(text.to_string())
            .send()
            .map_err(|e| {
                warn!(%url, error = %e, "send failed");
                BackendError::Transport(e.to_string())
            })?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "server rejected text");
            return Err(BackendError::Status(status.as_u16()));
        }
        Ok(())
    }
}
