use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single entry of a Twitter error body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Structured error body returned by the API, e.g.
/// `{"errors":[{"code":88,"message":"Rate limit exceeded"}]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl ApiError {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(first) => write!(f, "twitter: {} {}", first.code, first.message),
            None => write!(f, "twitter: empty error response"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Failures of the timestamp codecs.
#[derive(Debug, Error)]
pub enum TimeError {
    /// The JSON value has the wrong kind (string where a number was expected, etc).
    #[error("cannot decode JSON {found} as {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The string does not follow the Ruby date layout. `source` is unset
    /// when chrono accepted the string but its field widths are off
    /// (`+00:00` offset, 2-digit year, ...).
    #[error("cannot parse {input:?} as a Ruby date")]
    Parse {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}

/// Errors returned by the API client.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read.
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-empty structured error body.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Non-2xx response without a usable error body.
    #[error("HTTP error {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// A 2xx body did not match the expected shape.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),
}

/// Picks the error to surface for a non-2xx response: the structured API
/// error when the body holds one, the raw status and body otherwise.
pub fn relevant_error(status: StatusCode, body: String) -> Error {
    match serde_json::from_str::<ApiError>(&body) {
        Ok(api) if !api.is_empty() => Error::Api(api),
        _ => Error::Http { status, body },
    }
}
