//! Configuration for the Elsevier MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    /// Base URL for the Elsevier APIs.
    pub const BASE_URL: &str = "https://api.elsevier.com";

    /// Header carrying the API key.
    pub const API_KEY_HEADER: &str = "X-ELS-APIKey";

    /// Header carrying the institutional token.
    pub const INST_TOKEN_HEADER: &str = "X-ELS-Insttoken";

    /// Header carrying the token issued by `/authenticate`.
    pub const AUTH_TOKEN_HEADER: &str = "X-ELS-Authtoken";

    /// IP-based authentication endpoint.
    pub const AUTHENTICATE_PATH: &str = "/authenticate";

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;
}

/// Environment variable names read by [`Config::from_env`].
pub mod env {
    pub const API_KEY: &str = "ELSEVIER_API_KEY";
    pub const INST_TOKEN: &str = "ELSEVIER_INST_TOKEN";
    pub const ENABLE_ALL_TOOLS: &str = "ELSEVIER_ENABLE_ALL_TOOLS";
    pub const SERVER_AUTH_TOKEN: &str = "MCP_SERVER_AUTH_TOKEN";
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// Elsevier API key (required).
    pub api_key: String,

    /// Institutional token (optional).
    pub inst_token: Option<String>,

    /// API origin (overridden in tests with a mock server).
    pub base_url: String,

    /// Register the tools that need institutional access or extra subscriptions.
    pub enable_all_tools: bool,

    /// Per-request timeout. `None` leaves deadlines to the caller.
    pub request_timeout: Option<Duration>,

    /// Bearer token guarding the HTTP transport (optional).
    pub auth_token: Option<String>,
}

impl Config {
    /// Create a new configuration against the production API.
    #[must_use]
    pub fn new(api_key: impl Into<String>, inst_token: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            inst_token: non_blank(inst_token),
            base_url: api::BASE_URL.to_string(),
            enable_all_tools: false,
            request_timeout: None,
            auth_token: None,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: "test-api-key".to_string(),
            inst_token: None,
            base_url: base_url.trim_end_matches('/').to_string(),
            enable_all_tools: true,
            request_timeout: Some(Duration::from_secs(5)),
            auth_token: None,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if `ELSEVIER_API_KEY` is missing or blank.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = non_blank(std::env::var(env::API_KEY).ok()).ok_or_else(|| {
            anyhow::anyhow!(
                "{} environment variable is required. Get one at https://dev.elsevier.com",
                env::API_KEY
            )
        })?;

        let mut config = Self::new(api_key, std::env::var(env::INST_TOKEN).ok());
        config.enable_all_tools = flag_enabled(std::env::var(env::ENABLE_ALL_TOOLS).ok().as_deref());
        config.auth_token = non_blank(std::env::var(env::SERVER_AUTH_TOKEN).ok());
        Ok(config)
    }

    /// Enable or disable the extended tool set.
    #[must_use]
    pub const fn with_all_tools(mut self, enabled: bool) -> Self {
        self.enable_all_tools = enabled;
        self
    }

    /// Require a bearer token on the HTTP transport.
    #[must_use]
    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = non_blank(token);
        self
    }

    /// Check if an institutional token is configured.
    #[must_use]
    pub const fn has_inst_token(&self) -> bool {
        self.inst_token.is_some()
    }
}

/// Boolean switches are on only for the exact value `true`.
#[must_use]
pub fn flag_enabled(value: Option<&str>) -> bool {
    value == Some("true")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("has_inst_token", &self.has_inst_token())
            .field("enable_all_tools", &self.enable_all_tools)
            .field("request_timeout", &self.request_timeout)
            .field("http_auth", &self.auth_token.is_some())
            .finish()
    }
}
