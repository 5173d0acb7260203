use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("unknown exchange: {0}")]
    UnknownExchange(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to load pair mapping for {id}: {source}")]
    MappingLoad {
        id: String,
        #[source]
        source: MappingError,
    },
    #[error("{0} has not loaded its pair mapping")]
    Unmapped(String),
    #[error("pair {pair} is not listed on {exchange}")]
    UnknownPair { exchange: String, pair: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// No pair mapping is registered under this key.
    #[error("no pair mapping registered under {0}")]
    MissingKey(String),
    #[error("pair mapping source for {key} failed: {reason}")]
    Source { key: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse yaml config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("config {path} has more than one section for {name}")]
    DuplicateSection { path: PathBuf, name: String },
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
