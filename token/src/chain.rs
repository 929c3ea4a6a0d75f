use crate::Result;
use alloy::primitives::Address;
use config::{
    address::{ADDR_LEN, ADDR_PREFIX},
    chains::{ETH_CHAIN, SEPOLIA_CHAIN},
};
use errors::token::TokenError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Eth,
    Sepolia,
}

impl Chain {
    pub fn name(&self) -> &'static str {
        match self {
            Chain::Eth => ETH_CHAIN,
            Chain::Sepolia => SEPOLIA_CHAIN,
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Chain::Eth => 1,
            Chain::Sepolia => 11155111,
        }
    }
}

impl FromStr for Chain {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            ETH_CHAIN => Ok(Chain::Eth),
            SEPOLIA_CHAIN => Ok(Chain::Sepolia),
            _ => Err(TokenError::InvalidChain(s.to_string())),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a `0x`-prefixed, 20 byte hex address. Checksums are not enforced.
pub fn parse_address(value: &str) -> Result<Address> {
    let hex_part = value
        .strip_prefix(ADDR_PREFIX)
        .ok_or_else(|| TokenError::InvalidAddress(value.to_string()))?;

    if hex_part.len() != ADDR_LEN * 2 || !hex_part.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(TokenError::InvalidAddress(value.to_string()));
    }

    Address::from_str(value).map_err(|_| TokenError::InvalidAddress(value.to_string()))
}
