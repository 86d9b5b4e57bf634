//! Error types for the Elsevier MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use serde_json::Value;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Non-2xx response from the Elsevier API, after fallback authentication
    /// was exhausted or skipped.
    #[error("Elsevier API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body
        message: String,
    },

    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body is not JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// Origin and path do not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Create an API error.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api { status, message: message.into() }
    }

    /// HTTP status carried by the error, if it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) | Self::Decode(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }

    /// Returns true if the API rejected the request as unauthorized.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(err @ ClientError::Api { .. }) => err.to_string(),
            Self::Client(err) => format!("Error: {err}"),
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            Self::Serialization(err) => format!("Error: invalid arguments: {err}"),
        }
    }
}

/// Build a human-readable message for a failed API response.
///
/// Looks for the Elsevier error shapes in order (`service-error.status`,
/// `error`, `error-response`); the first one present must be an object to be
/// used. Anything else falls back to `HTTP <status>: <status_text>`.
#[must_use]
pub fn parse_error_message(status: u16, status_text: &str, body: Option<&Value>) -> String {
    let err = body.and_then(|b| {
        [
            b.get("service-error").and_then(|s| s.get("status")),
            b.get("error"),
            b.get("error-response"),
        ]
        .into_iter()
        .flatten()
        .find(|v| !v.is_null())
    });

    match err {
        Some(err) if err.is_object() || err.is_array() => {
            let code = first_present(err, &["statusText", "statusCode"]).unwrap_or_default();
            let detail = first_present(err, &["detail", "message"]).unwrap_or_else(|| err.to_string());
            format!("HTTP {status}: {code} - {detail}")
        }
        _ => format!("HTTP {status}: {status_text}"),
    }
}

/// First non-null field among `keys`, rendered as text.
fn first_present(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().filter_map(|k| obj.get(*k)).find(|v| !v.is_null()).map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
