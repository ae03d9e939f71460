use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LibraryError {
    #[error("Host is offline")]
    Offline,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
