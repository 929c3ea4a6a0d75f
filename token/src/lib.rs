use errors::token::TokenError;

pub type Result<T> = std::result::Result<T, TokenError>;

pub mod asset;
pub mod assets;
pub mod category;
pub mod chain;
pub mod ft;
pub mod nft;
pub mod u256_dec;
