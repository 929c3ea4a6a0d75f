pub const ETH_CHAIN: &str = "eth";
pub const SEPOLIA_CHAIN: &str = "sepolia";

pub const SUPPORTED_CHAINS: &[&str] = &[ETH_CHAIN, SEPOLIA_CHAIN];
