use crate::Result;
use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    json_abi::{Function, JsonAbi},
    primitives::Bytes,
};
use config::abi::{CREATE_FN_NAME, TOKEN_BUNDLER_ABI};
use errors::bundle::BundleErrors;
use std::sync::LazyLock;

static TOKEN_BUNDLER: LazyLock<std::result::Result<TokenBundlerABI, BundleErrors>> =
    LazyLock::new(TokenBundlerABI::new);

/// Parsed interface of the bundler contract.
#[derive(Debug)]
pub struct TokenBundlerABI {
    abi: JsonAbi,
}

impl TokenBundlerABI {
    fn new() -> Result<Self> {
        Ok(Self {
            abi: serde_json::from_str(TOKEN_BUNDLER_ABI).map_err(|e| {
                BundleErrors::ABIError(format!("Failed to parse TokenBundler ABI: {}", e))
            })?,
        })
    }

    /// Process-wide instance, parsed on first use.
    pub fn get() -> Result<&'static Self> {
        TOKEN_BUNDLER.as_ref().map_err(Clone::clone)
    }

    pub fn get_function(&self, name: &str) -> Result<&Function> {
        self.abi
            .function(name)
            .and_then(|f| f.first())
            .ok_or_else(|| BundleErrors::FunctionNotFound(name.to_string()))
    }

    /// Encodes `inputs` against the parameter list of `name`, no selector.
    pub fn encode_params(&self, name: &str, inputs: &[DynSolValue]) -> Result<Vec<u8>> {
        Ok(self.get_function(name)?.abi_encode_input_raw(inputs)?)
    }

    /// Encodes a full call, selector included.
    pub fn encode_function_call(&self, name: &str, inputs: &[DynSolValue]) -> Result<Bytes> {
        let encoded = self.get_function(name)?.abi_encode_input(inputs)?;

        Ok(Bytes::from(encoded))
    }
}

pub fn create_function() -> Result<&'static Function> {
    TokenBundlerABI::get()?.get_function(CREATE_FN_NAME)
}
