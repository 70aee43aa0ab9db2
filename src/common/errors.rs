use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Expected {expected} feature entries, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("Feature at position {position} has an empty title")]
    EmptyTitle { position: usize },

    #[error("Feature at position {position} has an empty description")]
    EmptyDescription { position: usize },

    #[error("Feature at position {position} has an empty icon")]
    EmptyIcon { position: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Feature list error: {0}")]
    Feature(#[from] FeatureError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
