use alloy::primitives::U256;
use bigdecimal::{num_bigint::BigInt, BigDecimal};
use errors::intl::IntlErrors;
use std::str::FromStr;

/// Decimal digits in `U256::MAX`.
const U256_MAX_DIGITS: i64 = 78;

fn bigint_to_u256(value: &BigInt) -> Result<U256, IntlErrors> {
    let value_str = value.to_string();

    U256::from_str_radix(&value_str, 10).map_err(|_| IntlErrors::Overflow(value_str))
}

/// Splits a decimal string into its integer digits and the number of
/// fractional places, e.g. `"123.45"` -> `(12345, 2)`.
pub fn to_wei(value: &str) -> Result<(U256, u8), IntlErrors> {
    let decimals_value = BigDecimal::from_str(value)
        .map_err(|e| IntlErrors::BigDecimalParseError(value.to_string(), e.to_string()))?;
    let (big_value, decimals) = decimals_value.as_bigint_and_exponent();

    if !(0..=u8::MAX as i64).contains(&decimals) {
        return Err(IntlErrors::InvalidDecimals(decimals));
    }

    Ok((bigint_to_u256(&big_value)?, decimals as u8))
}

/// Scales a human-entered amount into base units of a token with `decimals`
/// places, e.g. `("1.5", 6)` -> `1500000`.
pub fn parse_units(value: &str, decimals: u8) -> Result<U256, IntlErrors> {
    let decimals_value = BigDecimal::from_str(value)
        .map_err(|e| IntlErrors::BigDecimalParseError(value.to_string(), e.to_string()))?;
    let scale = BigDecimal::new(BigInt::from(1), -(decimals as i64));
    let (big_value, exponent) = (decimals_value * scale).normalized().as_bigint_and_exponent();

    if exponent > 0 {
        return Err(IntlErrors::InvalidDecimals(exponent));
    }

    if -exponent > U256_MAX_DIGITS {
        return Err(IntlErrors::Overflow(value.to_string()));
    }

    let power = u32::try_from(-exponent).map_err(|_| IntlErrors::Overflow(value.to_string()))?;
    let big_value = big_value * BigInt::from(10).pow(power);

    bigint_to_u256(&big_value)
}

pub fn from_wei(value: U256, decimals: u8) -> Result<String, IntlErrors> {
    let value_str = value.to_string();
    let big_value = BigInt::from_str(&value_str)
        .map_err(|e| IntlErrors::BigDecimalParseError(value_str, e.to_string()))?;
    let big_decimal = BigDecimal::new(big_value, decimals as i64);

    Ok(big_decimal.normalized().to_plain_string())
}

#[cfg(test)]
mod tests_wei {
    use super::*;

    #[test]
    fn test_to_wei_integer() {
        let result = to_wei("100");
        assert_eq!(result, Ok((U256::from(100), 0u8)));
    }

    #[test]
    fn test_to_wei_decimal() {
        let result = to_wei("123.45");
        assert_eq!(result, Ok((U256::from(12345), 2u8)));
    }

    #[test]
    fn test_to_wei_small_decimal() {
        let result = to_wei("0.000000000000000001");
        assert_eq!(result, Ok((U256::from(1), 18u8)));
    }

    #[test]
    fn test_to_wei_large_number() {
        let value = "1000000000000000000000000000000";
        let expected = U256::from_str_radix(value, 10).unwrap();
        assert_eq!(to_wei(value), Ok((expected, 0u8)));
    }

    #[test]
    fn test_to_wei_negative() {
        let result = to_wei("-5");
        assert_eq!(result, Err(IntlErrors::Overflow("-5".to_string())));
    }

    #[test]
    fn test_to_wei_invalid_input() {
        let value = "not_a_number";
        match to_wei(value).err().unwrap() {
            IntlErrors::BigDecimalParseError(val, _) => assert_eq!(val, value),
            _ => panic!("Expected BigDecimalParseError"),
        }
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("1.5", 6), Ok(U256::from(1_500_000u64)));
        assert_eq!(parse_units("100", 0), Ok(U256::from(100u64)));
        assert_eq!(
            parse_units("1", 18),
            Ok(U256::from(1_000_000_000_000_000_000u64))
        );
        assert_eq!(parse_units("0", 18), Ok(U256::ZERO));
    }

    #[test]
    fn test_parse_units_too_precise() {
        let result = parse_units("0.0000001", 6);
        assert_eq!(result, Err(IntlErrors::InvalidDecimals(1)));
    }

    #[test]
    fn test_parse_units_overflow() {
        assert_eq!(
            parse_units("1e4294967297", 0),
            Err(IntlErrors::Overflow("1e4294967297".to_string()))
        );
        assert_eq!(
            parse_units("1e1000000000", 18),
            Err(IntlErrors::Overflow("1e1000000000".to_string()))
        );
        assert!(matches!(parse_units("1e78", 0), Err(IntlErrors::Overflow(_))));
        assert!(matches!(parse_units("1", 78), Err(IntlErrors::Overflow(_))));
        assert!(matches!(parse_units("1", 77), Ok(_)));
    }

    #[test]
    fn test_from_wei_zero_decimals() {
        let result = from_wei(U256::from(12345), 0).unwrap();
        assert_eq!(result, "12345");
    }

    #[test]
    fn test_from_wei_with_decimals() {
        let result = from_wei(U256::from(12345), 2).unwrap();
        assert_eq!(result, "123.45");
    }

    #[test]
    fn test_from_wei_less_than_one() {
        let result = from_wei(U256::from(1), 18).unwrap();
        assert_eq!(result, "0.000000000000000001");
    }

    #[test]
    fn test_from_wei_leading_zeros_in_bigint() {
        let result = from_wei(U256::from(500), 3).unwrap();
        assert_eq!(result, "0.5");
    }

    #[test]
    fn test_from_wei_large_number_with_decimals() {
        let value = U256::from_str_radix("123456789000000000000", 10).unwrap();
        let result = from_wei(value, 18).unwrap();
        assert_eq!(result, "123.456789");
    }
}
