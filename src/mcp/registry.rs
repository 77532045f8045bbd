//! Typed registry of tools and prompts
//!
//! Each entry pairs the definition advertised to clients with a handler.
//! Handlers decode their own arguments into a typed struct with
//! [`decode_args`], so a missing or mistyped field is rejected before any
//! lookup runs.

use crate::mcp::protocol::{CallToolResult, GetPromptResult, Prompt, Tool};
use crate::types::{Result, WeatherError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Decode call arguments into `T`. Absent arguments decode as `null`.
pub fn decode_args<T: DeserializeOwned>(arguments: Option<Value>) -> Result<T> {
    serde_json::from_value(arguments.unwrap_or(Value::Null))
        .map_err(|e| WeatherError::SchemaValidation(e.to_string()))
}

#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, arguments: Option<Value>) -> Result<CallToolResult>;
}

#[async_trait]
pub trait PromptHandler: Send + Sync {
    async fn get(&self, arguments: Option<Value>) -> Result<GetPromptResult>;
}

struct ToolEntry {
    tool: Tool,
    handler: Arc<dyn ToolHandler>,
}

struct PromptEntry {
    prompt: Prompt,
    handler: Arc<dyn PromptHandler>,
}

/// Tools and prompts live in separate namespaces, so one name can be both.
#[derive(Default)]
pub struct Registry {
    tools: BTreeMap<String, ToolEntry>,
    prompts: BTreeMap<String, PromptEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any previous tool of the same name
    pub fn register_tool(&mut self, tool: Tool, handler: Arc<dyn ToolHandler>) {
        debug!("Registering tool: {}", tool.name);
        self.tools.insert(tool.name.clone(), ToolEntry { tool, handler });
    }

    /// Register a prompt, replacing any previous prompt of the same name
    pub fn register_prompt(&mut self, prompt: Prompt, handler: Arc<dyn PromptHandler>) {
        debug!("Registering prompt: {}", prompt.name);
        self.prompts.insert(prompt.name.clone(), PromptEntry { prompt, handler });
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|entry| entry.tool.clone())
            .collect()
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|entry| entry.prompt.clone())
            .collect()
    }

    pub async fn call_tool(&self, name: &str, arguments: Option<Value>) -> Result<CallToolResult> {
        let entry = self
            .tools
            .get(name)
            .ok_or_else(|| WeatherError::UnknownTool(name.to_string()))?;

        entry.handler.call(arguments).await
    }

    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<GetPromptResult> {
        let entry = self
            .prompts
            .get(name)
            .ok_or_else(|| WeatherError::UnknownPrompt(name.to_string()))?;

        let mut result = entry.handler.get(arguments).await?;
        if result.description.is_none() {
            result.description = entry.prompt.description.clone();
        }
        Ok(result)
    }
}
