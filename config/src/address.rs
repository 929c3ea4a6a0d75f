pub const ADDR_LEN: usize = 20;
pub const ADDR_PREFIX: &str = "0x";
