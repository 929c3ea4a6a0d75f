use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use serde::{Deserialize, Serialize};
use token::{category::Category, nft::NFT, Result};

/// One `MultiToken.Asset` line item of a bundle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetParam {
    pub category: Category,
    pub address: Address,
    pub id: U256,
    pub amount: U256,
}

impl AssetParam {
    pub fn fungible(address: Address, amount: U256) -> Self {
        Self {
            category: Category::ERC20,
            address,
            id: U256::ZERO,
            amount,
        }
    }

    pub fn from_nft(nft: &NFT) -> Result<Self> {
        Ok(Self {
            category: nft.category()?,
            address: nft.token_address,
            id: nft.token_id,
            amount: U256::ZERO,
        })
    }

    /// `(uint8 category, address assetAddress, uint256 id, uint256 amount)`
    pub fn to_sol_value(&self) -> DynSolValue {
        DynSolValue::Tuple(vec![
            DynSolValue::Uint(U256::from(self.category.code()), 8),
            DynSolValue::Address(self.address),
            DynSolValue::Uint(self.id, 256),
            DynSolValue::Uint(self.amount, 256),
        ])
    }
}

impl From<&AssetParam> for DynSolValue {
    fn from(param: &AssetParam) -> Self {
        param.to_sol_value()
    }
}
