use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TokenError {
    #[error("Invalid category name: {0}")]
    InvalidCategory(String),

    #[error("{0} is not a valid chain name")]
    InvalidChain(String),

    #[error("{0} is not a valid address")]
    InvalidAddress(String),

    #[error("Token parse error: {0}")]
    ParseError(String),
}
