//! The HTTP seam underneath [`Client`](crate::Client).
//!
//! A [`Transport`] issues a single GET and reports failures as one of four
//! [`TransportError`] categories. [`HttpTransport`] is the `reqwest`-backed
//! implementation used in production; tests can plug in their own.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::Error;

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest body snippet carried in an error message.
const MAX_BODY_SNIPPET: usize = 500;

/// Failure categories reported by a [`Transport`].
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, TLS, timeout, body read).
    #[error("{message}")]
    Network { message: String },
    /// A redirect the client could not or would not follow.
    #[error("{message}")]
    Redirection { message: String, status: u16 },
    /// The API answered with a 4xx status.
    #[error("{message}")]
    Client { message: String, status: u16 },
    /// The API answered with a 5xx status.
    #[error("{message}")]
    Server { message: String, status: u16 },
}

impl TransportError {
    /// Classifies a final response status. Returns `None` for 1xx and 2xx.
    pub fn from_status(status: u16, message: String) -> Option<Self> {
        match status {
            300..=399 => Some(TransportError::Redirection { message, status }),
            400..=499 => Some(TransportError::Client { message, status }),
            500..=599 => Some(TransportError::Server { message, status }),
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TransportError::Network { message }
            | TransportError::Redirection { message, .. }
            | TransportError::Client { message, .. }
            | TransportError::Server { message, .. } => message,
        }
    }

    /// HTTP status of the failure, or `0` when no response was received.
    pub fn code(&self) -> u16 {
        match self {
            TransportError::Network { .. } => 0,
            TransportError::Redirection { status, .. }
            | TransportError::Client { status, .. }
            | TransportError::Server { status, .. } => *status,
        }
    }
}

/// Issues GET requests relative to some base address.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one GET of `path` with the given query pairs and returns the raw body.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<String, TransportError>;
}

/// `reqwest`-backed transport bound to a base URL.
///
/// The underlying `reqwest::Client` is built once and reused for every call,
/// so connections are pooled for the life of the transport.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport rooted at `base_url`. A trailing `/` is added when missing
    /// so that relative paths resolve underneath the root instead of replacing its
    /// last segment.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let mut root = base_url.to_string();
        if !root.ends_with('/') {
            root.push('/');
        }
        let base_url = Url::parse(&root).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", root, e);
            Error::Configuration(format!("invalid base URL \"{}\": {}", root, e))
        })?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Configuration(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::Network {
                message: format!("invalid request path \"{}\": {}", path, e),
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<String, TransportError> {
        let url = self.url_for(path)?;
        tracing::debug!("GET {}", url.path());

        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| from_reqwest(path, e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| from_reqwest(path, e))?;
        tracing::debug!("{} answered {}", path, status);

        if !(status.is_success() || status.is_informational()) {
            let message = format!(
                "HTTP {} returned for \"{}\": {}",
                status,
                path,
                truncate_body(&body)
            );
            if let Some(err) = TransportError::from_status(status.as_u16(), message) {
                return Err(err);
            }
        }

        Ok(body)
    }
}

/// Maps a `reqwest` failure to a category. The URL is stripped from the message
/// because its query string carries the API token.
fn from_reqwest(path: &str, e: reqwest::Error) -> TransportError {
    let is_redirect = e.is_redirect();
    let status = e.status().map(|s| s.as_u16());
    let message = format!("{} for \"{}\"", e.without_url(), path);

    if is_redirect {
        return TransportError::Redirection {
            message,
            status: status.unwrap_or(0),
        };
    }
    match status.and_then(|s| TransportError::from_status(s, message.clone())) {
        Some(err) => err,
        None => TransportError::Network { message },
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        return body.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        let msg = || "boom".to_string();
        assert!(TransportError::from_status(200, msg()).is_none());
        assert!(TransportError::from_status(101, msg()).is_none());
        assert!(matches!(
            TransportError::from_status(304, msg()),
            Some(TransportError::Redirection { status: 304, .. })
        ));
        assert!(matches!(
            TransportError::from_status(404, msg()),
            Some(TransportError::Client { status: 404, .. })
        ));
        assert!(matches!(
            TransportError::from_status(503, msg()),
            Some(TransportError::Server { status: 503, .. })
        ));
    }

    #[test]
    fn network_errors_have_code_zero() {
        let err = TransportError::Network {
            message: "timed out".to_string(),
        };
        assert_eq!(err.code(), 0);
        assert_eq!(err.message(), "timed out");
        assert_eq!(err.to_string(), "timed out");
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let transport = HttpTransport::new("https://example.com/v3/football").unwrap();
        assert_eq!(
            transport.base_url().as_str(),
            "https://example.com/v3/football/"
        );
    }

    #[test]
    fn paths_resolve_under_base() {
        let transport = HttpTransport::new("https://example.com/v3/football/").unwrap();
        assert_eq!(
            transport.url_for("fixtures/18535517").unwrap().as_str(),
            "https://example.com/v3/football/fixtures/18535517"
        );
        assert_eq!(
            transport.url_for("/leagues").unwrap().as_str(),
            "https://example.com/v3/football/leagues"
        );
    }

    #[test]
    fn invalid_base_url_is_configuration_error() {
        assert!(matches!(
            HttpTransport::new("not a url"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn truncates_long_bodies_on_char_boundary() {
        let body = "é".repeat(400);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert!(snippet.len() <= MAX_BODY_SNIPPET + "...[truncated]".len());
        assert_eq!(truncate_body("short"), "short");
    }
}
