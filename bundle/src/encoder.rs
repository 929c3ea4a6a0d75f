use crate::{
    abi::{create_function, TokenBundlerABI},
    param::AssetParam,
    Result,
};
use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    primitives::{Address, Bytes, U256},
};
use config::abi::CREATE_FN_NAME;
use std::collections::BTreeMap;
use token::nft::NFT;
use tracing::debug;

/// Fungible tokens to wrap, keyed by contract address.
pub type TokenAmounts = BTreeMap<Address, U256>;
/// NFTs to wrap, keyed by any caller chosen id.
pub type NFTSelection = BTreeMap<String, NFT>;

/// Assembles the `create` line items: every token entry in ascending address
/// order, followed by every NFT entry in ascending key order.
///
/// Tokens get a zero id and NFTs a zero amount. Nothing is deduplicated or
/// validated beyond classifying each NFT's contract type; the first unknown
/// type aborts the whole batch.
pub fn build_params(tokens: &TokenAmounts, nfts: &NFTSelection) -> Result<Vec<AssetParam>> {
    let mut params = Vec::with_capacity(tokens.len() + nfts.len());

    params.extend(
        tokens
            .iter()
            .map(|(address, amount)| AssetParam::fungible(*address, *amount)),
    );

    for nft in nfts.values() {
        params.push(AssetParam::from_nft(nft)?);
    }

    Ok(params)
}

fn to_create_inputs(params: &[AssetParam]) -> Vec<DynSolValue> {
    vec![DynSolValue::Array(
        params.iter().map(AssetParam::to_sol_value).collect(),
    )]
}

/// ABI-encoded arguments of `create(MultiToken.Asset[])`, without selector.
pub fn encode_assets(tokens: &TokenAmounts, nfts: &NFTSelection) -> Result<Vec<u8>> {
    let func = create_function()?;
    let params = build_params(tokens, nfts)?;

    debug!(schema = ?func.inputs, params = ?params, "encoding bundle assets");

    Ok(func.abi_encode_input_raw(&to_create_inputs(&params))?)
}

/// Complete `create` call data, selector included.
pub fn encode_create_call(tokens: &TokenAmounts, nfts: &NFTSelection) -> Result<Bytes> {
    let func = create_function()?;
    let params = build_params(tokens, nfts)?;

    debug!(schema = ?func.inputs, params = ?params, "encoding bundle create call");

    TokenBundlerABI::get()?.encode_function_call(CREATE_FN_NAME, &to_create_inputs(&params))
}

pub fn encode_unwrap_call(bundle_id: U256) -> Result<Bytes> {
    TokenBundlerABI::get()?.encode_function_call("unwrap", &[DynSolValue::Uint(bundle_id, 256)])
}
