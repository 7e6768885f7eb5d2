//! REST client for the Twilio API.
//!
//! This module provides [`RestClient`], which sends one authenticated
//! request per call and returns the raw result as a [`RestResponse`].

use std::fmt;

use base64::prelude::*;

use crate::clients::errors::RestError;
use crate::clients::http_request::{HttpMethod, HttpRequest, ParamSet, FORM_CONTENT_TYPE};
use crate::clients::http_response::{join_lines, RestResponse};
use crate::config::{AccountSid, AuthToken, ClientConfig, Endpoint};
use crate::error::ConfigError;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum supported Rust version from Cargo.toml, not the compiler in use.
pub const MIN_RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Client for the Twilio REST API.
///
/// Every call to [`request`](Self::request) performs exactly one HTTP round
/// trip. There are no retries and no shared mutable state, so a single
/// client can be used from any number of tasks at once.
///
/// # Example
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use twilio_api::{HttpMethod, RestClient};
///
/// let client = RestClient::new("AC123", "auth-token")?;
///
/// let mut params = HashMap::new();
/// params.insert("To".to_string(), "+15551234567".to_string());
/// params.insert("Body".to_string(), "Hello".to_string());
///
/// let response = client
///     .request("/2010-04-01/Accounts/AC123/Messages.json", HttpMethod::Post, Some(&params))
///     .await?;
/// println!("{} {}", response.status(), response.body());
/// ```
pub struct RestClient {
    client: reqwest::Client,
    config: ClientConfig,
    authorization: String,
    user_agent: String,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

// The Authorization header embeds the token, so it is left out.
impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("config", &self.config)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Creates a client for the default endpoint with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the SID or token is empty, or if the HTTP
    /// client cannot be initialized.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = ClientConfig::builder()
            .account_sid(AccountSid::new(account_sid)?)
            .auth_token(AuthToken::new(auth_token)?)
            .build()?;
        Self::from_config(config)
    }

    /// Creates a client for a custom endpoint with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the SID, token, or endpoint is empty, or if
    /// the HTTP client cannot be initialized.
    pub fn with_endpoint(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = ClientConfig::builder()
            .account_sid(AccountSid::new(account_sid)?)
            .auth_token(AuthToken::new(auth_token)?)
            .endpoint(Endpoint::new(endpoint)?)
            .build()?;
        Self::from_config(config)
    }

    /// Creates a client from a prepared configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying HTTP client
    /// cannot be initialized.
    pub fn from_config(config: ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        let authorization = basic_authorization(config.account_sid(), config.auth_token());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!(
            "{user_agent_prefix}Twilio REST Library v{SDK_VERSION} | Rust MSRV {MIN_RUST_VERSION}"
        );

        Ok(Self {
            client,
            config,
            authorization,
            user_agent,
        })
    }

    /// Returns the account SID.
    #[must_use]
    pub fn account_sid(&self) -> &str {
        self.config.account_sid().as_ref()
    }

    /// Returns the auth token.
    #[must_use]
    pub fn auth_token(&self) -> &str {
        self.config.auth_token().as_ref()
    }

    /// Returns the endpoint request paths are appended to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.config.endpoint().as_ref()
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the `User-Agent` header sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends one request to `endpoint + path`.
    ///
    /// For GET the params are appended to the query string; for POST and
    /// PUT they form the `application/x-www-form-urlencoded` body; DELETE
    /// sends neither. The body is read in full whatever the status, with
    /// line breaks removed.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if:
    /// - `endpoint + path` is not a valid URL (`InvalidUrl`)
    /// - connecting or sending fails, or the connect timeout expires (`Request`)
    /// - no data arrives within the read timeout, while waiting either for
    ///   the response headers or for the next piece of the body (`ReadTimeout`)
    /// - the response body cannot be read (`UnreadableResponse`)
    ///
    /// A 4xx or 5xx status is not an error.
    pub async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        params: Option<&ParamSet>,
    ) -> Result<RestResponse, RestError> {
        let request = HttpRequest::prepare(self.endpoint(), path, method, params)?;
        let url = request.url();
        let read_timeout = self.config.read_timeout();

        tracing::debug!("Sending {} request to {}", request.method(), url);

        let mut builder = self
            .client
            .request(request.method().into(), request.target().clone())
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .header(reqwest::header::USER_AGENT, &self.user_agent);

        if let Some(body) = request.body() {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body.to_owned());
        }

        // The read timeout bounds each wait for data, not the whole exchange.
        let mut res = tokio::time::timeout(read_timeout, builder.send())
            .await
            .map_err(|source| self.read_timed_out(url, source))?
            .map_err(|source| {
                tracing::warn!("{} request to {} failed: {}", request.method(), url, source);
                RestError::Request {
                    url: url.to_owned(),
                    source,
                }
            })?;

        let status = res.status().as_u16();
        let mut bytes = Vec::new();
        loop {
            let chunk = tokio::time::timeout(read_timeout, res.chunk())
                .await
                .map_err(|source| self.read_timed_out(url, source))?
                .map_err(|source| {
                    tracing::warn!(
                        "Unable to read response from {} (status {}): {}",
                        url,
                        status,
                        source
                    );
                    RestError::UnreadableResponse {
                        url: url.to_owned(),
                        source,
                    }
                })?;
            match chunk {
                Some(chunk) => bytes.extend_from_slice(&chunk),
                None => break,
            }
        }
        let body = join_lines(&String::from_utf8_lossy(&bytes));

        tracing::debug!(
            "Received status {} from {} ({} bytes)",
            status,
            url,
            body.len()
        );

        Ok(RestResponse::new(url, body, status))
    }

    fn read_timed_out(&self, url: &str, source: tokio::time::error::Elapsed) -> RestError {
        let timeout = self.config.read_timeout();
        tracing::warn!("No data received from {} within {:?}", url, timeout);
        RestError::ReadTimeout {
            url: url.to_owned(),
            timeout,
            source,
        }
    }

    /// Sends a GET request. See [`request`](Self::request).
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request).
    pub async fn get(
        &self,
        path: &str,
        params: Option<&ParamSet>,
    ) -> Result<RestResponse, RestError> {
        self.request(path, HttpMethod::Get, params).await
    }

    /// Sends a POST request. See [`request`](Self::request).
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request).
    pub async fn post(
        &self,
        path: &str,
        params: Option<&ParamSet>,
    ) -> Result<RestResponse, RestError> {
        self.request(path, HttpMethod::Post, params).await
    }

    /// Sends a PUT request. See [`request`](Self::request).
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request).
    pub async fn put(
        &self,
        path: &str,
        params: Option<&ParamSet>,
    ) -> Result<RestResponse, RestError> {
        self.request(path, HttpMethod::Put, params).await
    }

    /// Sends a DELETE request. See [`request`](Self::request).
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request).
    pub async fn delete(&self, path: &str) -> Result<RestResponse, RestError> {
        self.request(path, HttpMethod::Delete, None).await
    }
}

/// Builds the `Authorization` header value: `Basic base64(sid:token)`.
fn basic_authorization(account_sid: &AccountSid, auth_token: &AuthToken) -> String {
    let credentials = format!("{}:{}", account_sid.as_ref(), auth_token.as_ref());
    format!("Basic {}", BASE64_STANDARD.encode(credentials.as_bytes()))
}
