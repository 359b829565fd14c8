use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuildboardError {
    /// Non-2xx response from the backend API, body kept verbatim.
    #[error("[{status}] {body}")]
    Api { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GuildboardError>;
