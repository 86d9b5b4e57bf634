//! IP-based fallback authentication.
//!
//! Some institutions are entitled by network origin rather than by API key.
//! `GET /authenticate?platform=...` asks the API to recognize the caller's
//! address and issue a session token. A 300 response lists several possible
//! contexts; the first one offered is used.

use reqwest::StatusCode;
use serde_json::Value;

use super::{ElsevierClient, QueryParams};
use crate::config::api;
use crate::error::{ClientError, ClientResult};

/// Platform the authenticate endpoint is asked to recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Scopus.
    Scopus,
    /// ScienceDirect.
    ScienceDirect,
}

impl Platform {
    /// Platforms in the order they are tried.
    pub const ORDER: [Self; 2] = [Self::Scopus, Self::ScienceDirect];

    /// Value of the `platform` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scopus => "SCOPUS",
            Self::ScienceDirect => "SCIDIR",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known locations of the token in a 200 response, in priority order.
const TOKEN_PATHS: &[&[&str]] =
    &[&["authenticate-response", "authtoken"], &["authtoken"], &["authentication-token"]];

/// Known locations of the choice list in a 300 response, in priority order.
const CHOICE_PATHS: &[&[&str]] = &[&["authenticate-response", "choice"], &["choice"]];

/// First non-null value found along `paths`.
fn first_at<'a>(body: &'a Value, paths: &[&[&str]]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| path.iter().try_fold(body, |node, key| node.get(*key)))
        .find(|v| !v.is_null())
}

/// Render a scalar as query/header text. Objects and arrays have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `""`, `false` and zero are not tokens.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Extract the session token from an authenticate response body.
///
/// The first non-null location wins, even when its value is falsy: a falsy
/// token means no token, later locations are not consulted.
#[must_use]
pub fn extract_token(body: &Value) -> Option<String> {
    first_at(body, TOKEN_PATHS)
        .filter(|v| !is_falsy(v))
        .and_then(scalar_text)
}

/// Extract the list of choices from a 300 authenticate response body.
#[must_use]
pub fn extract_choices(body: &Value) -> Option<&Vec<Value>> {
    first_at(body, CHOICE_PATHS).and_then(Value::as_array)
}

/// Identifier of one choice: its `@id`, its `id`, or the value itself.
#[must_use]
pub fn choice_id(choice: &Value) -> Option<String> {
    [choice.get("@id"), choice.get("id"), Some(choice)]
        .into_iter()
        .flatten()
        .find(|v| !v.is_null())
        .and_then(scalar_text)
}

impl ElsevierClient {
    /// Run the fallback authentication handshake.
    ///
    /// Tries each platform in [`Platform::ORDER`] and stops at the first one
    /// that yields a token. Never fails: transport and decode errors count as
    /// "this platform did not work".
    pub(super) async fn authenticate(&self) -> bool {
        for platform in Platform::ORDER {
            match self.authenticate_platform(platform).await {
                Ok(Some(token)) => {
                    *self.session.authtoken.write().await = Some(token);
                    tracing::info!(%platform, "IP authentication succeeded");
                    return true;
                }
                Ok(None) => tracing::debug!(%platform, "IP authentication returned no token"),
                Err(e) => tracing::debug!(%platform, error = %e, "IP authentication request failed"),
            }
        }

        tracing::warn!("IP authentication failed, the client may not be on an institutional network");
        false
    }

    async fn authenticate_platform(&self, platform: Platform) -> ClientResult<Option<String>> {
        let params = QueryParams::new().with("platform", platform.as_str());
        let response = self.send_authenticate(&params).await?;

        match response.status() {
            StatusCode::OK => {
                let body: Value = response.json().await.map_err(ClientError::Decode)?;
                Ok(extract_token(&body))
            }
            StatusCode::MULTIPLE_CHOICES => {
                let body: Value = response.json().await.map_err(ClientError::Decode)?;
                let Some(choice) = extract_choices(&body).and_then(|c| c.first()).and_then(choice_id)
                else {
                    return Ok(None);
                };

                tracing::debug!(%platform, %choice, "Authenticate offered several choices, using the first");

                let retry = self.send_authenticate(&params.with("choice", choice)).await?;
                if retry.status() != StatusCode::OK {
                    return Ok(None);
                }

                let body: Value = retry.json().await.map_err(ClientError::Decode)?;
                Ok(extract_token(&body))
            }
            _ => Ok(None),
        }
    }

    /// Authenticate requests carry the key and institutional token, never a
    /// session token.
    async fn send_authenticate(&self, params: &QueryParams) -> ClientResult<reqwest::Response> {
        let url = self.build_url(api::AUTHENTICATE_PATH, params)?;
        let request = self.with_credentials(self.http.get(url), None);

        Ok(request.send().await?)
    }
}
