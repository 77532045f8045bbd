//! MCP server, registry, tools and prompts

pub mod prompts;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod tools;

pub use registry::Registry;
pub use server::McpServer;

use crate::config::ServerConfig;
use crate::weather::{StaticWeather, WeatherSource};
use std::sync::Arc;

/// Registry holding the `weather` tool and the `weather` prompt, both backed
/// by `source`
pub fn weather_registry(source: Arc<dyn WeatherSource>) -> Registry {
    let mut registry = Registry::new();
    tools::register(&mut registry, Arc::clone(&source));
    prompts::register(&mut registry, source);
    registry
}

/// A server answering from the built-in city table
pub fn weather_server(config: ServerConfig) -> McpServer {
    McpServer::new(config, weather_registry(Arc::new(StaticWeather)))
}
