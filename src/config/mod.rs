//! Configuration types for the Twilio REST client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: immutable settings a [`RestClient`](crate::RestClient) is built from
//! - [`ClientConfigBuilder`]: fluent builder for [`ClientConfig`]
//! - [`AccountSid`], [`AuthToken`], [`Endpoint`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use twilio_api::{AccountSid, AuthToken, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .account_sid(AccountSid::new("AC123").unwrap())
//!     .auth_token(AuthToken::new("token").unwrap())
//!     .read_timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://api.twilio.com");
//! ```

mod newtypes;

pub use newtypes::{AccountSid, AuthToken, Endpoint};

use std::time::Duration;

use crate::error::ConfigError;

/// Base URL used when no endpoint override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.twilio.com";

/// Time allowed for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Time allowed for a complete request/response exchange.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(300_000);

/// Connection settings for a [`RestClient`](crate::RestClient).
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`. Its `Debug` output never
/// contains the auth token.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    account_sid: AccountSid,
    auth_token: AuthToken,
    endpoint: Endpoint,
    connect_timeout: Duration,
    read_timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the account SID.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the endpoint that request paths are appended to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the read timeout, applied to each wait for response data.
    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for [`ClientConfig`].
///
/// `account_sid` and `auth_token` are required.
///
/// # Defaults
///
/// - `endpoint`: [`DEFAULT_ENDPOINT`]
/// - `connect_timeout`: [`DEFAULT_CONNECT_TIMEOUT`]
/// - `read_timeout`: [`DEFAULT_READ_TIMEOUT`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    account_sid: Option<AccountSid>,
    auth_token: Option<AuthToken>,
    endpoint: Option<Endpoint>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account SID (required).
    #[must_use]
    pub fn account_sid(mut self, sid: AccountSid) -> Self {
        self.account_sid = Some(sid);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Overrides the default endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Overrides the connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Overrides the read timeout.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_sid` or
    /// `auth_token` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let account_sid = self.account_sid.ok_or(ConfigError::MissingRequiredField {
            field: "account_sid",
        })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => Endpoint::new(DEFAULT_ENDPOINT)?,
        };

        Ok(ClientConfig {
            account_sid,
            auth_token,
            endpoint,
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            read_timeout: self.read_timeout.unwrap_or(DEFAULT_READ_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
