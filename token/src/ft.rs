use crate::Result;
use alloy::primitives::{Address, U256};
use errors::token::TokenError;
use serde::{Deserialize, Serialize};

/// Fungible token holding as reported by the asset indexer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub token_address: Address,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub decimals: u8,
    #[serde(with = "crate::u256_dec")]
    pub balance: U256,
    #[serde(default)]
    pub possible_spam: bool,
    #[serde(default)]
    pub verified_contract: bool,
}

impl Token {
    pub fn from_json(value: &str) -> Result<Self> {
        serde_json::from_str(value).map_err(|e| TokenError::ParseError(e.to_string()))
    }

    pub fn list_from_json(value: &str) -> Result<Vec<Self>> {
        serde_json::from_str(value).map_err(|e| TokenError::ParseError(e.to_string()))
    }

    pub fn is_trusted(&self) -> bool {
        self.verified_contract && !self.possible_spam
    }
}
