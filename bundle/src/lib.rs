use errors::bundle::BundleErrors;

pub type Result<T> = std::result::Result<T, BundleErrors>;

pub mod abi;
pub mod encoder;
pub mod param;

pub use encoder::{build_params, encode_assets, encode_create_call, encode_unwrap_call};
pub use param::AssetParam;
