//! Stateless HTTP transport
//!
//! Every POST builds its own [`McpServer`] and session, answers the JSON-RPC
//! body, and tears both down. No session id is issued and nothing survives
//! between requests.

use crate::config::{HttpConfig, ServerConfig};
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse};
use crate::mcp::{weather_server, McpServer};
use crate::types::{Result, WeatherError};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

type ServerFactory = Arc<dyn Fn() -> McpServer + Send + Sync>;

#[derive(Clone)]
struct HttpState {
    new_server: ServerFactory,
}

/// A POST body: one message or a batch
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Incoming {
    Single(JsonRpcRequest),
    Batch(Vec<JsonRpcRequest>),
}

/// One request's server. Dropped when the request completes or its
/// connection goes away.
struct StatelessSession {
    server: McpServer,
}

impl StatelessSession {
    fn open(server: McpServer) -> Self {
        debug!("Opening stateless session for {}", server.config().name);
        Self { server }
    }

    /// Serialized response body, or `None` when the body held only
    /// notifications
    async fn handle(&self, incoming: Incoming) -> Result<Option<Vec<u8>>> {
        match incoming {
            Incoming::Single(request) => match self.server.handle_request(request).await {
                Some(response) => Ok(Some(serde_json::to_vec(&response)?)),
                None => Ok(None),
            },
            Incoming::Batch(requests) => {
                if requests.is_empty() {
                    return Err(WeatherError::Transport("empty JSON-RPC batch".to_string()));
                }

                let mut responses = Vec::with_capacity(requests.len());
                for request in requests {
                    if let Some(response) = self.server.handle_request(request).await {
                        responses.push(response);
                    }
                }

                if responses.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(serde_json::to_vec(&responses)?))
                }
            }
        }
    }
}

impl Drop for StatelessSession {
    fn drop(&mut self) {
        debug!("Request closed");
    }
}

/// Router answering MCP at `path` with the built-in weather server
pub fn router(server_config: ServerConfig, path: &str) -> Router {
    router_with(path, move || weather_server(server_config.clone()))
}

/// Router answering MCP at `path`, building a fresh server per request
fn router_with<F>(path: &str, new_server: F) -> Router
where
    F: Fn() -> McpServer + Send + Sync + 'static,
{
    let state = HttpState {
        new_server: Arc::new(new_server),
    };

    Router::new()
        .route(path, post(handle_post).fallback(method_not_allowed))
        .with_state(state)
}

async fn handle_post(State(state): State<HttpState>, body: Bytes) -> Response {
    match handle_stateless(&state, &body).await {
        Ok(response) => response,
        Err(e) => {
            error!("MCP error: {}", e);
            internal_error()
        }
    }
}

async fn handle_stateless(state: &HttpState, body: &[u8]) -> Result<Response> {
    let session = StatelessSession::open((state.new_server)());

    let incoming: Incoming = serde_json::from_slice(body)?;

    let response = match session.handle(incoming).await? {
        Some(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    };

    Ok(response)
}

async fn method_not_allowed(method: Method) -> Response {
    debug!("Rejecting {} request", method);
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
}

fn internal_error() -> Response {
    match serde_json::to_vec(&JsonRpcResponse::internal_server_error()) {
        Ok(body) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Bind and serve until Ctrl-C
pub async fn run(config: HttpConfig, server_config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|e| WeatherError::Transport(format!("Failed to bind to {}: {}", config.bind, e)))?;

    let local_addr = listener.local_addr()?;
    info!("MCP server listening on http://{}{}", local_addr, config.path);

    axum::serve(listener, router(server_config, &config.path))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
