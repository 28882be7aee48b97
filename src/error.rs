use crate::types::ItemId;
use thiserror::Error;

/// Errors raised before a mining run starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MiningError {
    #[error("invalid minimum support: {0} (must be at least 1)")]
    InvalidSupport(usize),
    #[error("invalid maximum pattern length: {0} (must be at least 1)")]
    InvalidMaxLength(usize),
}

/// Errors while reading SPMF result rows
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing support annotation in `{0}`")]
    MissingSupport(String),
    #[error("invalid support annotation `{0}`")]
    InvalidSupport(String),
    #[error("invalid token `{0}`")]
    InvalidToken(String),
    #[error("missing sequence terminator in `{0}`")]
    MissingTerminator(String),
    #[error("item {0} does not occur in the database")]
    UnknownItem(ItemId),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}
