//! The response value returned by [`RestClient::request`](crate::RestClient::request).

use serde::de::DeserializeOwned;

/// A snapshot of one completed request: the URL sent, the body text
/// received, and the HTTP status code.
///
/// Any status is accepted. 4xx and 5xx responses are delivered as
/// `RestResponse` values so callers can inspect the diagnostic body.
///
/// # Example
///
/// ```rust
/// use twilio_api::RestResponse;
///
/// let response = RestResponse::new("https://api.twilio.com/Foo", "oops", 500);
/// assert!(response.is_server_error());
/// assert_eq!(response.body(), "oops");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestResponse {
    url: String,
    body: String,
    status: u16,
}

impl RestResponse {
    /// Creates a new response value.
    #[must_use]
    pub fn new(url: impl Into<String>, body: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            status,
        }
    }

    /// Returns the URL the request was sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the response body with line breaks removed.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns `true` for any status of 400 or above.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Returns `true` for 4xx statuses.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns `true` for 5xx statuses and above.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Concatenates the lines of `text`, dropping `\n`, `\r`, and `\r\n`.
pub(crate) fn join_lines(text: &str) -> String {
    text.split(['\r', '\n']).collect()
}
