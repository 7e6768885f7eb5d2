//! HTTP client types for the Twilio REST API.
//!
//! # Overview
//!
//! - [`RestClient`]: sends authenticated requests, one round trip per call
//! - [`RestResponse`]: URL, body text, and status of a completed request
//! - [`HttpRequest`]: the URL and body prepared for one call
//! - [`HttpMethod`]: GET, POST, PUT, DELETE
//! - [`RestError`]: why a request could not be completed
//!
//! # Status Codes
//!
//! The client never turns an HTTP status into an error. A 404 or 500 comes
//! back as a [`RestResponse`] whose body holds the server's diagnostic text.
//! Only transport failures, timeouts, and malformed URLs produce a
//! [`RestError`]. Nothing is retried.

mod errors;
mod http_request;
mod http_response;
mod rest_client;

pub use errors::RestError;
pub use http_request::{encode_vars, HttpMethod, HttpRequest, ParamSet, FORM_CONTENT_TYPE};
pub use http_response::RestResponse;
pub use rest_client::{RestClient, MIN_RUST_VERSION, SDK_VERSION};
