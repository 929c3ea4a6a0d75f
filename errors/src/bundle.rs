use alloy::dyn_abi::Error as DynAbiError;
use std::sync::Arc;
use thiserror::Error;

use crate::token::TokenError;

#[derive(Debug, Error, Clone)]
pub enum BundleErrors {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("ABI Error: {0}")]
    ABIError(String),

    #[error("Encode error: {0}")]
    Encode(#[source] Arc<DynAbiError>),

    #[error("Function {0} not found or no overloads")]
    FunctionNotFound(String),
}

impl From<DynAbiError> for BundleErrors {
    fn from(error: DynAbiError) -> Self {
        BundleErrors::Encode(Arc::new(error))
    }
}

// Encode errors compare by message, the codec error has no `PartialEq`.
impl PartialEq for BundleErrors {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Token(a), Self::Token(b)) => a == b,
            (Self::ABIError(a), Self::ABIError(b)) => a == b,
            (Self::Encode(a), Self::Encode(b)) => a.to_string() == b.to_string(),
            (Self::FunctionNotFound(a), Self::FunctionNotFound(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for BundleErrors {}
