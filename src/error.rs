//! Configuration error types for the Twilio REST client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials are rejected before any request is attempted.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AccountSid, ConfigError};
//!
//! let result = AccountSid::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccountSid)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a [`RestClient`](crate::RestClient).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account SID cannot be empty.
    #[error("Account SID cannot be empty. Please provide a valid Twilio account SID.")]
    EmptyAccountSid,

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Twilio auth token.")]
    EmptyAuthToken,

    /// Endpoint cannot be empty.
    #[error("Endpoint cannot be empty. Please provide a base URL such as 'https://api.twilio.com'.")]
    EmptyEndpoint,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be initialized.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClient {
        /// Description of the initialization failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_account_sid_error_message() {
        let message = ConfigError::EmptyAccountSid.to_string();
        assert!(message.contains("Account SID cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "auth_token",
        };
        let message = error.to_string();
        assert!(message.contains("auth_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_http_client_error_includes_reason() {
        let error = ConfigError::HttpClient {
            reason: "no TLS backend".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to initialize HTTP client: no TLS backend"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyEndpoint;
        let _: &dyn std::error::Error = &error;
    }
}
