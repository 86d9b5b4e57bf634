//! Elsevier API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - API key / institutional token headers on every request
//! - One-shot IP-based fallback authentication on the first 401
//! - Error normalization into [`ClientError::Api`]

mod auth;
mod query;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

pub use auth::{Platform, choice_id, extract_choices, extract_token};
pub use query::{ParamValue, QueryParams};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult, parse_error_message};

/// Authentication state shared by every clone of a client.
///
/// `attempted` flips to `true` at most once and never resets. Once set,
/// `authtoken` is sent with every later request.
#[derive(Debug, Default)]
struct AuthSession {
    authtoken: RwLock<Option<String>>,
    attempted: AtomicBool,
}

/// Elsevier API client.
#[derive(Clone)]
pub struct ElsevierClient {
    /// HTTP client.
    http: Client,

    /// API key.
    api_key: String,

    /// Institutional token (optional).
    inst_token: Option<String>,

    /// API origin.
    base_url: String,

    /// Session-scoped fallback authentication state.
    session: Arc<AuthSession>,
}

impl ElsevierClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .gzip(true);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_key: config.api_key,
            inst_token: config.inst_token,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: Arc::new(AuthSession::default()),
        })
    }

    /// API origin requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if an institutional token is configured.
    #[must_use]
    pub fn has_inst_token(&self) -> bool {
        self.inst_token.is_some()
    }

    /// Check if fallback authentication has already been tried.
    #[must_use]
    pub fn auth_attempted(&self) -> bool {
        self.session.attempted.load(Ordering::SeqCst)
    }

    /// Check if fallback authentication produced a token.
    pub async fn has_auth_token(&self) -> bool {
        self.session.authtoken.read().await.is_some()
    }

    /// GET `path` with `params` and decode the JSON body.
    ///
    /// On the first 401 seen by this client (and its clones), runs the
    /// fallback authentication handshake and, if it yields a token, retries
    /// the request once with the token attached. Later 401s fail immediately.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] for any non-2xx response
    /// - [`ClientError::Http`] on transport failure
    /// - [`ClientError::Decode`] if a 2xx body is not JSON
    pub async fn get(&self, path: &str, params: &QueryParams) -> ClientResult<Value> {
        let url = self.build_url(path, params)?;

        let response = self.send(url.clone()).await?;
        tracing::debug!(path, status = response.status().as_u16(), "Elsevier API response");

        if response.status().is_success() {
            return response.json().await.map_err(ClientError::Decode);
        }

        if response.status() == StatusCode::UNAUTHORIZED && !self.claim_auth_attempt() {
            let original = FailedResponse::read(response).await;

            tracing::warn!(path, "Got 401, attempting IP-based authentication");

            if self.authenticate().await {
                let retry = self.send(url).await?;
                tracing::debug!(path, status = retry.status().as_u16(), "Retried after authentication");

                if retry.status().is_success() {
                    return retry.json().await.map_err(ClientError::Decode);
                }

                return Err(FailedResponse::read(retry).await.into_error());
            }

            return Err(original.into_error());
        }

        Err(FailedResponse::read(response).await.into_error())
    }

    /// Mark fallback authentication as attempted. Returns the previous value.
    fn claim_auth_attempt(&self) -> bool {
        self.session.attempted.swap(true, Ordering::SeqCst)
    }

    fn build_url(&self, path: &str, params: &QueryParams) -> ClientResult<Url> {
        let separator = if path.starts_with('/') { "" } else { "/" };
        let mut url = Url::parse(&format!("{}{}{}", self.base_url, separator, path))?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        Ok(url)
    }

    /// Issue a GET carrying the credentials and the session token, if any.
    async fn send(&self, url: Url) -> ClientResult<Response> {
        let authtoken = self.session.authtoken.read().await.clone();
        let request = self.with_credentials(self.http.get(url), authtoken.as_deref());

        Ok(request.send().await?)
    }

    fn with_credentials(&self, request: RequestBuilder, authtoken: Option<&str>) -> RequestBuilder {
        let mut request = request
            .header(api::API_KEY_HEADER, self.api_key.as_str())
            .header(ACCEPT, "application/json");

        if let Some(ref inst_token) = self.inst_token {
            request = request.header(api::INST_TOKEN_HEADER, inst_token.as_str());
        }

        if let Some(token) = authtoken {
            request = request.header(api::AUTH_TOKEN_HEADER, token);
        }

        request
    }
}

impl std::fmt::Debug for ElsevierClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElsevierClient")
            .field("base_url", &self.base_url)
            .field("has_inst_token", &self.has_inst_token())
            .field("auth_attempted", &self.auth_attempted())
            .finish()
    }
}

/// Status and best-effort decoded body of a non-2xx response.
struct FailedResponse {
    status: StatusCode,
    body: Option<Value>,
}

impl FailedResponse {
    /// Read the body as JSON; an unreadable or non-JSON body becomes `None`.
    async fn read(response: Response) -> Self {
        let status = response.status();
        let body = response.bytes().await.ok().and_then(|b| serde_json::from_slice(&b).ok());

        Self { status, body }
    }

    fn into_error(self) -> ClientError {
        let status_text = self.status.canonical_reason().unwrap_or_default();
        let message = parse_error_message(self.status.as_u16(), status_text, self.body.as_ref());

        ClientError::api(self.status.as_u16(), message)
    }
}
