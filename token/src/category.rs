use crate::Result;
use errors::token::TokenError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Asset standard understood by the bundler contract. The discriminant is the
/// `uint8` value of `MultiToken.Category` on chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    ERC20 = 0,
    ERC721 = 1,
    ERC1155 = 2,
    #[serde(rename = "CRYPTOKITTIES")]
    CryptoKitties = 3,
}

impl Category {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_fungible(self) -> bool {
        matches!(self, Category::ERC20)
    }
}

impl FromStr for Category {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ERC20" => Ok(Category::ERC20),
            "ERC721" => Ok(Category::ERC721),
            "ERC1155" => Ok(Category::ERC1155),
            "CRYPTOKITTIES" => Ok(Category::CryptoKitties),
            _ => Err(TokenError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::ERC20 => write!(f, "ERC20"),
            Category::ERC721 => write!(f, "ERC721"),
            Category::ERC1155 => write!(f, "ERC1155"),
            Category::CryptoKitties => write!(f, "CRYPTOKITTIES"),
        }
    }
}
