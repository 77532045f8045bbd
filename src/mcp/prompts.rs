//! MCP prompts
//!
//! The `weather` prompt renders the same report as the tool, wrapped as a
//! single assistant message.

use crate::mcp::protocol::{
    GetPromptResult, Prompt, PromptArgument, PromptMessage, Role, ToolContent,
};
use crate::mcp::registry::{decode_args, PromptHandler, Registry};
use crate::mcp::tools::{CityArgs, CITY_DESCRIPTION, WEATHER_DESCRIPTION};
use crate::types::Result;
use crate::weather::{report, WeatherSource};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub const WEATHER_PROMPT: &str = "weather";

fn weather_prompt_definition() -> Prompt {
    Prompt {
        name: WEATHER_PROMPT.to_string(),
        description: Some(WEATHER_DESCRIPTION.to_string()),
        arguments: vec![PromptArgument {
            name: "city".to_string(),
            description: Some(CITY_DESCRIPTION.to_string()),
            required: true,
        }],
    }
}

pub struct WeatherPrompt {
    source: Arc<dyn WeatherSource>,
}

impl WeatherPrompt {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl PromptHandler for WeatherPrompt {
    async fn get(&self, arguments: Option<Value>) -> Result<GetPromptResult> {
        let args: CityArgs = decode_args(arguments)?;
        let text = report(self.source.as_ref(), &args.city).await?;

        Ok(GetPromptResult {
            description: None,
            messages: vec![PromptMessage {
                role: Role::Assistant,
                content: ToolContent::Text { text },
            }],
        })
    }
}

/// Add all prompts to the registry
pub fn register(registry: &mut Registry, source: Arc<dyn WeatherSource>) {
    registry.register_prompt(weather_prompt_definition(), Arc::new(WeatherPrompt::new(source)));
}
