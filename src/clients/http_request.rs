//! Request preparation for the Twilio REST client.
//!
//! [`HttpRequest::prepare`] turns an endpoint, a path, a method, and a
//! parameter set into the exact URL and body that will go on the wire,
//! without touching the network.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::clients::errors::RestError;

/// Parameters sent with a request: appended to the query string for GET,
/// written as a form body for POST and PUT.
pub type ParamSet = HashMap<String, String>;

/// `Content-Type` of POST and PUT bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP methods supported by the REST client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieve a resource. Params go in the query string.
    Get,
    /// Create a resource. Params go in the body.
    Post,
    /// Update a resource. Params go in the body.
    Put,
    /// Remove a resource. No params are sent.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if this method sends the encoded params as its body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = RestError;

    /// Parses a method name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnknownMethod`] for anything other than
    /// GET, POST, PUT, or DELETE.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(RestError::UnknownMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Encodes params as `key=value` pairs joined by `&`.
///
/// Values are percent-encoded as UTF-8 (space becomes `%20`); keys are
/// written as given. Pairs are emitted in ascending key order. An empty or
/// absent set encodes to the empty string.
///
/// ```rust
/// use std::collections::HashMap;
/// use twilio_api::clients::encode_vars;
///
/// let mut params = HashMap::new();
/// params.insert("b".to_string(), "x".to_string());
/// params.insert("a".to_string(), "1 2".to_string());
///
/// assert_eq!(encode_vars(Some(&params)), "a=1%202&b=x");
/// assert_eq!(encode_vars(None), "");
/// ```
#[must_use]
pub fn encode_vars(params: Option<&ParamSet>) -> String {
    let Some(params) = params else {
        return String::new();
    };

    let mut pairs: Vec<(&String, &String)> = params.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A fully prepared request: method, final URL, and optional body.
///
/// The fields are read-only so the reported [`url`](Self::url) always
/// matches the [`target`](Self::target) that is sent.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    method: HttpMethod,
    url: String,
    body: Option<String>,
    target: reqwest::Url,
}

impl HttpRequest {
    /// Builds the request for `endpoint + path`.
    ///
    /// GET appends the encoded params to the URL, using `&` when `path`
    /// already carries a query string and `?` otherwise. POST and PUT carry
    /// them as the body. DELETE ignores them.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidUrl`] if the resulting URL does not parse.
    pub fn prepare(
        endpoint: &str,
        path: &str,
        method: HttpMethod,
        params: Option<&ParamSet>,
    ) -> Result<Self, RestError> {
        let encoded = encode_vars(params);

        let mut url = format!("{endpoint}{path}");
        if method == HttpMethod::Get && !encoded.is_empty() {
            url.push(if path.contains('?') { '&' } else { '?' });
            url.push_str(&encoded);
        }

        let target = reqwest::Url::parse(&url).map_err(|e| RestError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let body = method.has_body().then_some(encoded);

        Ok(Self {
            method,
            url,
            body,
            target,
        })
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the URL as sent, including any query string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the form-encoded body for POST and PUT, `None` otherwise.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the parsed form of [`url`](Self::url).
    #[must_use]
    pub const fn target(&self) -> &reqwest::Url {
        &self.target
    }
}
