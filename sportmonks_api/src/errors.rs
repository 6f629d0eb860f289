//! Error types for the API client.

use crate::transport::TransportError;

/// Errors that can occur when configuring a client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client could not be constructed (missing API token, bad base URL).
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    /// A request failed. Network, redirect, 4xx and 5xx failures all end up here.
    #[error("API request failed with code {code}: {message}")]
    Api { message: String, code: u16 },
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Api {
            code: e.code(),
            message: e.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_transport_category_becomes_api_error() {
        let cases = [
            TransportError::Network {
                message: "connection refused".to_string(),
            },
            TransportError::Redirection {
                message: "too many redirects".to_string(),
                status: 302,
            },
            TransportError::Client {
                message: "not found".to_string(),
                status: 404,
            },
            TransportError::Server {
                message: "bad gateway".to_string(),
                status: 502,
            },
        ];
        let expected = [
            ("connection refused", 0),
            ("too many redirects", 302),
            ("not found", 404),
            ("bad gateway", 502),
        ];

        for (case, (message, code)) in cases.into_iter().zip(expected) {
            match Error::from(case) {
                Error::Api {
                    message: m,
                    code: c,
                } => {
                    assert_eq!(m, message);
                    assert_eq!(c, code);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = Error::Api {
            message: "HTTP 401 returned for \"fixtures\"".to_string(),
            code: 401,
        };
        assert_eq!(
            err.to_string(),
            "API request failed with code 401: HTTP 401 returned for \"fixtures\""
        );
    }
}
