use crate::{category::Category, Result};
use alloy::primitives::{Address, U256};
use errors::token::TokenError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NFT {
    #[serde(with = "crate::u256_dec")]
    pub token_id: U256,
    pub token_address: Address,
    pub contract_type: String,
    #[serde(default)]
    pub last_metadata_sync: Option<String>,
    #[serde(default)]
    pub last_token_uri_sync: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub token_hash: Option<String>,
    #[serde(default)]
    pub token_uri: Option<String>,
    #[serde(default)]
    pub verified_collection: bool,
    #[serde(default)]
    pub possible_spam: bool,
    #[serde(default)]
    pub collection_logo: Option<String>,
    #[serde(default)]
    pub collection_banner_image: Option<String>,
}

/// Page of NFTs returned by the indexer's wallet NFT endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NFTResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub cursor: Option<String>,
    pub result: Vec<NFT>,
}

impl NFT {
    pub fn category(&self) -> Result<Category> {
        self.contract_type.parse()
    }

    pub fn from_json(value: &str) -> Result<Self> {
        serde_json::from_str(value).map_err(|e| TokenError::ParseError(e.to_string()))
    }
}

impl NFTResponse {
    pub fn from_json(value: &str) -> Result<Self> {
        serde_json::from_str(value).map_err(|e| TokenError::ParseError(e.to_string()))
    }
}
