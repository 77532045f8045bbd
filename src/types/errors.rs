use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Invalid arguments: {0}")]
    SchemaValidation(String),

    #[error("Tool {0} not found")]
    UnknownTool(String),

    #[error("Prompt {0} not found")]
    UnknownPrompt(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Framing error: {0}")]
    Codec(#[from] tokio_util::codec::AnyDelimiterCodecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WeatherError>;
