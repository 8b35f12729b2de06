use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Faults raised while starting the gateway.
///
/// Upstream failures during a request never show up here; the service
/// clients fold them into [`crate::ai::AiAnswer`] and
/// [`crate::shopify::TokenExchange`] instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
