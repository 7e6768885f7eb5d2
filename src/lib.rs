//! # Twilio REST API client
//!
//! A small client for the Twilio REST API. It authenticates every request
//! with HTTP Basic auth, encodes parameters as a query string or form body,
//! and returns the raw status, body, and URL of each call.
//!
//! ## Quick Start
//!
//! ```rust
//! use twilio_api::{ClientConfig, AccountSid, AuthToken, RestClient};
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder()
//!     .account_sid(AccountSid::new("AC123").unwrap())
//!     .auth_token(AuthToken::new("your-auth-token").unwrap())
//!     .connect_timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::from_config(config).unwrap();
//! assert_eq!(client.account_sid(), "AC123");
//! ```
//!
//! ## Sending Requests
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use twilio_api::{HttpMethod, RestClient};
//!
//! let client = RestClient::new("AC123", "your-auth-token")?;
//!
//! let mut params = HashMap::new();
//! params.insert("PageSize".to_string(), "20".to_string());
//!
//! let response = client
//!     .request("/2010-04-01/Accounts/AC123/Calls.json", HttpMethod::Get, Some(&params))
//!     .await?;
//!
//! if response.is_error() {
//!     eprintln!("Twilio returned {}: {}", response.status(), response.body());
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **One call, one round trip**: no retries, caching, or pagination
//! - **Statuses are data**: 4xx and 5xx responses are returned, not raised
//! - **Fail fast**: empty credentials are rejected when the client is built
//! - **Thread-safe**: [`RestClient`] is `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;

pub use config::{
    AccountSid, AuthToken, ClientConfig, ClientConfigBuilder, Endpoint, DEFAULT_CONNECT_TIMEOUT,
    DEFAULT_ENDPOINT, DEFAULT_READ_TIMEOUT,
};
pub use error::ConfigError;

pub use clients::{HttpMethod, ParamSet, RestClient, RestError, RestResponse};
