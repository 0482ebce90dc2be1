use crate::transport::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the api url cannot be empty")]
    MissingUrl,
    #[error("invalid api url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("impossible to read the configuration file: {0}")]
    ConfigFile(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("impossible to query: {0}")]
    Network(#[source] TransportError),
    #[error("invalid json: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// the client could not be configured
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingUrl
                | Error::InvalidUrl { .. }
                | Error::ConfigFile(_)
                | Error::InvalidConfig(_)
        )
    }
}
