//! SDK Error Types

use thiserror::Error;

/// Errors surfaced by the gateway client, the registry and the context adapter
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Gateway error: {status} {status_text}")]
    Gateway { status: u16, status_text: String },

    #[error("FHEVM client is not ready")]
    NotReady,

    #[error("No FHEVM provider in scope")]
    NoProvider,

    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;
