use thiserror::Error;

/// Why a cart mutation did not go through.
///
/// The user sees one localized message for every variant; the distinction is
/// kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered HTTP {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("server rejected the request: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::Decode(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid storefront config: {0}")]
    Parse(#[from] serde_json::Error),
}
