//! Request error types for the Twilio REST client.
//!
//! [`RestError`] covers every failure that can happen while a request is
//! prepared, sent, or read. HTTP error statuses are not failures at this
//! layer; they come back as an ordinary [`RestResponse`](crate::RestResponse).
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::{HttpMethod, RestError};
//!
//! match client.request("/2010-04-01/Accounts.json", HttpMethod::Get, None).await {
//!     Ok(response) => println!("{}: {}", response.status(), response.body()),
//!     Err(e) if e.is_timeout() => println!("Timed out: {e}"),
//!     Err(e) => println!("Failed: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned when a REST request could not be completed.
#[derive(Debug, Error)]
pub enum RestError {
    /// The HTTP method is not one of GET, POST, PUT, or DELETE.
    #[error("REST request failed: unknown method {method}")]
    UnknownMethod {
        /// The rejected method name.
        method: String,
    },

    /// `endpoint + path` did not form a valid URL.
    #[error("REST request failed: invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// Connecting or sending failed, including the connect timeout.
    #[error("REST request failed: {url}: {source}")]
    Request {
        /// The URL the request was sent to.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// No data arrived within the read timeout while waiting for the
    /// response headers or for the next piece of the body.
    #[error("REST request failed: {url}: no data received for {timeout:?}")]
    ReadTimeout {
        /// The URL the request was sent to.
        url: String,
        /// The configured read timeout.
        timeout: Duration,
        /// The elapsed-timer cause.
        #[source]
        source: tokio::time::error::Elapsed,
    },

    /// The response arrived but its body could not be read.
    #[error("REST request failed: unable to read response from server at {url}: {source}")]
    UnreadableResponse {
        /// The URL the request was sent to.
        url: String,
        /// The underlying read error.
        #[source]
        source: reqwest::Error,
    },
}

impl RestError {
    /// Returns `true` if the failure was caused by the connect timeout or
    /// the read timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request { source, .. } | Self::UnreadableResponse { source, .. } => {
                source.is_timeout()
            }
            Self::ReadTimeout { .. } => true,
            Self::UnknownMethod { .. } | Self::InvalidUrl { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_method_message_names_method() {
        let error = RestError::UnknownMethod {
            method: "PATCH".to_string(),
        };
        assert_eq!(error.to_string(), "REST request failed: unknown method PATCH");
    }

    #[test]
    fn test_invalid_url_message_includes_url_and_reason() {
        let error = RestError::InvalidUrl {
            url: "not a url/Foo".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let message = error.to_string();

        assert!(message.starts_with("REST request failed"));
        assert!(message.contains("not a url/Foo"));
        assert!(message.contains("relative URL without a base"));
    }

    #[test]
    fn test_non_transport_errors_are_not_timeouts() {
        let error = RestError::UnknownMethod {
            method: "HEAD".to_string(),
        };
        assert!(!error.is_timeout());

        let error = RestError::InvalidUrl {
            url: String::new(),
            reason: "empty".to_string(),
        };
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = RestError::UnknownMethod {
            method: "TRACE".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
