//! Serde adapter for `U256` values carried as base-10 strings, the shape the
//! asset indexer uses for balances and token ids.

use alloy::primitives::U256;
use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    U256::from_str_radix(value.trim(), 10)
        .map_err(|e| D::Error::custom(format!("invalid uint256 {}: {}", value, e)))
}
