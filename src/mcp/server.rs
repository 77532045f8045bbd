//! MCP server implementation
//!
//! Decodes JSON-RPC messages and dispatches them to the registry. The server
//! is transport-agnostic and holds no mutable state, so one instance can
//! serve a long-lived stdio stream or be built fresh for every HTTP request.

use crate::config::ServerConfig;
use crate::mcp::protocol::*;
use crate::mcp::registry::Registry;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub struct McpServer {
    config: ServerConfig,
    registry: Registry,
}

impl McpServer {
    pub fn new(config: ServerConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handle one raw message. Returns `None` for notifications.
    ///
    /// Bytes that are not JSON get a parse error; JSON that is not a request
    /// gets an invalid-request error.
    pub async fn handle_message(&self, content: &[u8]) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_slice(content) {
            Ok(value) => value,
            Err(e) => {
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error(e)));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(req) => req,
            Err(e) => return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request(e))),
        };

        self.handle_request(request).await
    }

    /// Handle a decoded request. Returns `None` for notifications.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            self.handle_notification(&request);
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);

        if id.is_null() {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request("id must not be null"),
            ));
        }

        if request.jsonrpc != JSONRPC_VERSION {
            let message = format!("unsupported jsonrpc version {}", request.jsonrpc);
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request(message)));
        }

        debug!("Handling {} (id {})", request.method, id);

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.params),
            "ping" => Ok(Value::Object(Default::default())),
            "tools/list" => self.handle_list_tools(),
            "tools/call" => self.handle_call_tool(request.params).await,
            "prompts/list" => self.handle_list_prompts(),
            "prompts/get" => self.handle_get_prompt(request.params).await,
            _ => Err(JsonRpcError::method_not_found(&request.method)),
        };

        Some(match result {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => {
                debug!("{} failed: {}", request.method, error.message);
                JsonRpcResponse::error(id, error)
            }
        })
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => debug!("Client initialized"),
            "notifications/cancelled" => debug!("Client cancelled a request"),
            other => warn!("Ignoring unknown notification: {}", other),
        }
    }

    fn handle_initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| {
                JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e))
            })?;

        if let Some(client) = &params.client_info {
            debug!("Initialize from {} {}", client.name, client.version);
        }

        let requested = params.protocol_version.as_str();
        let protocol_version = if SUPPORTED_PROTOCOL_VERSIONS.contains(&requested) {
            params.protocol_version
        } else {
            warn!(
                "Client requested unsupported protocol version {}, offering {}",
                params.protocol_version, LATEST_PROTOCOL_VERSION
            );
            LATEST_PROTOCOL_VERSION.to_string()
        };

        to_result(InitializeResult {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: Some(serde_json::json!({})),
                prompts: Some(serde_json::json!({})),
            },
            server_info: Implementation {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
            },
        })
    }

    fn handle_list_tools(&self) -> Result<Value, JsonRpcError> {
        to_result(ListToolsResult {
            tools: self.registry.tools(),
        })
    }

    async fn handle_call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| {
                JsonRpcError::invalid_params(format!("Invalid tool call params: {}", e))
            })?;

        let result = self
            .registry
            .call_tool(&params.name, params.arguments)
            .await?;

        to_result(result)
    }

    fn handle_list_prompts(&self) -> Result<Value, JsonRpcError> {
        to_result(ListPromptsResult {
            prompts: self.registry.prompts(),
        })
    }

    async fn handle_get_prompt(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: GetPromptParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid prompt params: {}", e)))?;

        let result = self
            .registry
            .get_prompt(&params.name, params.arguments)
            .await?;

        to_result(result)
    }
}

fn to_result<T: Serialize>(result: T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(result)
        .map_err(|e| JsonRpcError::internal(format!("Failed to serialize result: {}", e)))
}
