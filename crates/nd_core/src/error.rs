use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

/// Failure of a single article fetch.
///
/// Every variant renders the same user-facing message; the distinction only
/// matters for logs. Cloneable so a failed fetch can be kept in a load state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("API error: {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Response has no `{0}` article list")]
    Envelope(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

pub type Result<T> = std::result::Result<T, Error>;
