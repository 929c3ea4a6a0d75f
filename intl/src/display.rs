use crate::wei::from_wei;
use alloy::primitives::U256;
use errors::intl::IntlErrors;
use token::ft::Token;

/// Human scale of a raw amount: `value / 10^decimals`. Plain float division,
/// callers that need exact digits should use [`display_balance`].
pub fn display_value(token: &Token, value: f64) -> f64 {
    value / 10f64.powi(token.decimals as i32)
}

pub fn display_amount(token: &Token, value: U256) -> f64 {
    display_value(token, f64::from(value))
}

pub fn display_balance(token: &Token) -> Result<String, IntlErrors> {
    from_wei(token.balance, token.decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::Address;

    fn token(decimals: u8, balance: u64) -> Token {
        Token {
            token_address: Address::ZERO,
            symbol: "TST".to_string(),
            name: "Test".to_string(),
            logo: None,
            thumbnail: None,
            decimals,
            balance: U256::from(balance),
            possible_spam: false,
            verified_contract: false,
        }
    }

    #[test]
    fn test_zero_value() {
        for decimals in [0u8, 6, 18, 77] {
            assert_eq!(display_value(&token(decimals, 0), 0.0), 0.0);
        }
    }

    #[test]
    fn test_zero_decimals_is_identity() {
        let t = token(0, 0);
        for v in [0.0, 1.0, 42.5, 1e30, -7.0] {
            assert_eq!(display_value(&t, v), v);
        }
    }

    #[test]
    fn test_scaled() {
        assert_eq!(display_value(&token(2, 0), 12345.0), 123.45);
        assert_eq!(display_value(&token(6, 0), 25_000_000.0), 25.0);
        assert_eq!(display_value(&token(18, 0), 1e18), 1.0);
    }

    #[test]
    fn test_display_amount() {
        let t = token(6, 0);
        assert_eq!(display_amount(&t, U256::from(1_500_000u64)), 1.5);
        assert_eq!(display_amount(&t, U256::ZERO), 0.0);
        assert_eq!(display_amount(&token(0, 0), U256::from(1u64 << 53)), 9007199254740992.0);
        assert!(display_amount(&token(0, 0), U256::MAX) > 1.1e77);
    }

    #[test]
    fn test_display_balance_exact() {
        assert_eq!(display_balance(&token(6, 1)).unwrap(), "0.000001");
        assert_eq!(display_balance(&token(0, 10)).unwrap(), "10");
        assert_eq!(display_balance(&token(3, 2500)).unwrap(), "2.5");
    }
}
