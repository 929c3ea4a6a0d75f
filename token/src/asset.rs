use crate::{category::Category, ft::Token, nft::NFT, Result};
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Flat view of a single holding, uniform across token standards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub name: String,
    pub ticker: String,
    pub logo_url: Option<String>,
    pub price: Option<String>,
    pub category: Category,
    pub address: Address,
    #[serde(with = "crate::u256_dec")]
    pub id: U256,
    #[serde(with = "crate::u256_dec")]
    pub amount: U256,
    pub decimals: u8,
}

impl From<&Token> for Asset {
    fn from(token: &Token) -> Self {
        Asset {
            name: token.name.clone(),
            ticker: token.symbol.clone(),
            logo_url: token.logo.clone().or_else(|| token.thumbnail.clone()),
            price: None,
            category: Category::ERC20,
            address: token.token_address,
            id: U256::ZERO,
            amount: token.balance,
            decimals: token.decimals,
        }
    }
}

impl TryFrom<&NFT> for Asset {
    type Error = errors::token::TokenError;

    fn try_from(nft: &NFT) -> Result<Self> {
        Ok(Asset {
            category: nft.category()?,
            name: nft.name.clone().unwrap_or_default(),
            ticker: nft.symbol.clone().unwrap_or_default(),
            logo_url: nft.collection_logo.clone(),
            price: None,
            address: nft.token_address,
            id: nft.token_id,
            amount: U256::from(1u8),
            decimals: 0,
        })
    }
}
