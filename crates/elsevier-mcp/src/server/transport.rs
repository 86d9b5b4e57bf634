//! HTTP transport (MCP streamable HTTP, request/response only).
//!
//! Routes:
//! - `GET /`, `GET /health`: liveness
//! - `GET /ready`: readiness with tool count
//! - `POST /mcp`: JSON-RPC, optionally guarded by a bearer token

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::protocol::{JsonRpcRequest, JsonRpcResponse, McpHandler, PARSE_ERROR};

/// Header carrying the session id assigned on `initialize`.
pub const SESSION_HEADER: &str = "mcp-session-id";

/// Shared state for HTTP handlers.
pub struct HttpState {
    pub handler: Arc<McpHandler>,
    /// Bearer token required on `/mcp`, if any.
    pub auth_token: Option<String>,
}

/// Create the HTTP router for MCP.
pub fn create_router(handler: Arc<McpHandler>, auth_token: Option<String>) -> Router {
    let state = Arc::new(HttpState { handler, auth_token });

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/mcp", post(handle_mcp_post))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn readiness_check(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ready",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "tools": state.handler.tools().len()
    }))
}

fn is_authorized(state: &HttpState, bearer: Option<&Authorization<Bearer>>) -> bool {
    match (&state.auth_token, bearer) {
        (None, _) => true,
        (Some(expected), Some(auth)) => auth.token() == expected,
        (Some(_), None) => false,
    }
}

/// Handle POST requests to /mcp.
///
/// The bearer token is checked before the body is parsed.
async fn handle_mcp_post(
    State(state): State<Arc<HttpState>>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    body: Bytes,
) -> Response {
    if !is_authorized(&state, bearer.as_ref().map(|TypedHeader(auth)| auth)) {
        tracing::warn!("Rejected MCP request without valid bearer token");
        return (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(serde_json::json!({"error": "unauthorized"})),
        )
            .into_response();
    }

    let req = match serde_json::from_slice::<JsonRpcRequest>(&body) {
        Ok(req) => req,
        Err(e) => {
            let error = JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {e}"));
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let Some(response) = state.handler.handle(&req).await else {
        return StatusCode::ACCEPTED.into_response();
    };

    let mut res = Json(response).into_response();

    if req.method == "initialize" {
        let session_id = uuid::Uuid::new_v4().to_string();
        if let Ok(value) = HeaderValue::from_str(&session_id) {
            tracing::debug!(%session_id, "Assigned MCP session");
            res.headers_mut().insert(SESSION_HEADER, value);
        }
    }

    res
}
