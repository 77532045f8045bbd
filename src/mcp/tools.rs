//! MCP tools implementation
//!
//! The `weather` tool: looks up a city and returns the record as a single
//! text content block.

use crate::mcp::protocol::{CallToolResult, Tool};
use crate::mcp::registry::{decode_args, Registry, ToolHandler};
use crate::types::Result;
use crate::weather::{report, WeatherSource};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const WEATHER_TOOL: &str = "weather";

pub(crate) const WEATHER_DESCRIPTION: &str = "Get current weather for the city";

/// Arguments shared by the weather tool and the weather prompt
#[derive(Debug, Deserialize)]
pub(crate) struct CityArgs {
    pub city: String,
}

pub(crate) const CITY_DESCRIPTION: &str = "Name of the city, e.g. Delhi";

fn weather_tool_definition() -> Tool {
    Tool {
        name: WEATHER_TOOL.to_string(),
        description: WEATHER_DESCRIPTION.to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": CITY_DESCRIPTION
                }
            },
            "required": ["city"]
        }),
    }
}

pub struct WeatherTool {
    source: Arc<dyn WeatherSource>,
}

impl WeatherTool {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl ToolHandler for WeatherTool {
    async fn call(&self, arguments: Option<Value>) -> Result<CallToolResult> {
        let args: CityArgs = decode_args(arguments)?;
        debug!("weather tool called for {}", args.city);

        let text = report(self.source.as_ref(), &args.city).await?;
        Ok(CallToolResult::text(text))
    }
}

/// Add all tools to the registry
pub fn register(registry: &mut Registry, source: Arc<dyn WeatherSource>) {
    registry.register_tool(weather_tool_definition(), Arc::new(WeatherTool::new(source)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::ToolContent;
    use crate::types::WeatherError;
    use crate::weather::{StaticWeather, WeatherRecord};
    use serde_json::json;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        register(&mut registry, Arc::new(StaticWeather));
        registry
    }

    fn decode(result: &CallToolResult) -> WeatherRecord {
        assert_eq!(result.content.len(), 1);
        let ToolContent::Text { text } = &result.content[0];
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_weather_tool_delhi_any_case() {
        let registry = registry();
        for city in ["Delhi", "delhi", "DELHI"] {
            let result = registry
                .call_tool(WEATHER_TOOL, Some(json!({ "city": city })))
                .await
                .unwrap();
            assert_eq!(decode(&result), WeatherRecord::new("20", "It's Raining"));
            assert!(result.is_error.is_none());
        }
    }

    #[tokio::test]
    async fn test_weather_tool_unknown_city() {
        let result = registry()
            .call_tool(WEATHER_TOOL, Some(json!({"city": "Oslo"})))
            .await
            .unwrap();
        assert_eq!(decode(&result), WeatherRecord::no_data());
    }

    #[tokio::test]
    async fn test_weather_tool_is_idempotent() {
        let registry = registry();
        let first = registry
            .call_tool(WEATHER_TOOL, Some(json!({"city": "Mumbai"})))
            .await
            .unwrap();
        let second = registry
            .call_tool(WEATHER_TOOL, Some(json!({"city": "Mumbai"})))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_weather_tool_rejects_missing_city() {
        let err = registry()
            .call_tool(WEATHER_TOOL, Some(json!({"town": "Delhi"})))
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::SchemaValidation(_)));
    }

    #[tokio::test]
    async fn test_weather_tool_rejects_non_string_city() {
        let err = registry()
            .call_tool(WEATHER_TOOL, Some(json!({"city": 12})))
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::SchemaValidation(_)));
    }

    #[test]
    fn test_tool_definition() {
        let tools = registry().tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "weather");
        assert_eq!(tools[0].input_schema["required"], json!(["city"]));
        assert_eq!(tools[0].input_schema["properties"]["city"]["type"], "string");
    }
}
