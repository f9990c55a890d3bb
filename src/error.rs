use crate::gateway::GatewayErrorSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockPressError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No post found with id {id}")]
    NotFound { id: String },

    #[error("Upstream query failed: {0}")]
    UpstreamQuery(GatewayErrorSet),
}

pub type Result<T> = std::result::Result<T, BlockPressError>;
