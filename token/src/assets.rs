use crate::{ft::Token, nft::NFT, Result};
use errors::token::TokenError;
use serde::{Deserialize, Serialize};

/// Snapshot of a wallet's holdings on one chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Assets {
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub nfts: Vec<NFT>,
}

impl Assets {
    pub fn from_json(value: &str) -> Result<Self> {
        serde_json::from_str(value).map_err(|e| TokenError::ParseError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| TokenError::ParseError(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.nfts.is_empty()
    }

    /// Drops holdings the indexer flags as possible spam.
    pub fn without_spam(&self) -> Self {
        Self {
            tokens: self
                .tokens
                .iter()
                .filter(|t| !t.possible_spam)
                .cloned()
                .collect(),
            nfts: self
                .nfts
                .iter()
                .filter(|n| !n.possible_spam)
                .cloned()
                .collect(),
        }
    }
}
