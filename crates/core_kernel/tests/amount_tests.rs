//! Unit tests for token amounts and the token registry
//!
//! Tests cover raw amount parsing over the uint256 range, scaling to whole
//! tokens and registry lookups.

use core_kernel::{
    vcow_registry, AmountError, SupportedNetwork, Token, TokenAmount, TokenRegistry, U256,
};
use rust_decimal_macros::dec;

fn mainnet_vcow() -> Token {
    Token::vcow(SupportedNetwork::Mainnet)
}

mod parsing {
    use super::*;

    #[test]
    fn test_parses_plain_integer() {
        let amount = TokenAmount::from_raw_amount(mainnet_vcow(), "123").unwrap();
        assert_eq!(amount.raw(), U256::from(123u64));
    }

    #[test]
    fn test_ignores_surrounding_whitespace() {
        let amount = TokenAmount::from_raw_amount(mainnet_vcow(), "  42\n").unwrap();
        assert_eq!(amount.raw(), U256::from(42u64));
    }

    #[test]
    fn test_zero() {
        let amount = TokenAmount::from_raw_amount(mainnet_vcow(), "0").unwrap();
        assert!(amount.raw().is_zero());
        assert_eq!(amount.to_string(), "0 vCOW");
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(matches!(
            TokenAmount::from_raw_amount(mainnet_vcow(), ""),
            Err(AmountError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_rejects_decimal_point() {
        assert!(matches!(
            TokenAmount::from_raw_amount(mainnet_vcow(), "1.0"),
            Err(AmountError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_max_u128() {
        let amount = TokenAmount::from_raw_amount(mainnet_vcow(), &u128::MAX.to_string()).unwrap();
        assert_eq!(amount.raw(), U256::from(u128::MAX));
    }

    #[test]
    fn test_just_above_u128() {
        let two_pow_128 = "340282366920938463463374607431768211456";
        let amount = TokenAmount::from_raw_amount(mainnet_vcow(), two_pow_128).unwrap();
        assert_eq!(amount.raw(), U256::from(u128::MAX) + U256::from(1u64));
        assert_eq!(amount.raw().to_string(), two_pow_128);
    }

    #[test]
    fn test_max_uint256() {
        let amount = TokenAmount::from_raw_amount(mainnet_vcow(), &U256::MAX.to_string()).unwrap();
        assert_eq!(amount.raw(), U256::MAX);

        let hex = TokenAmount::from_raw_amount(mainnet_vcow(), &format!("0x{}", "f".repeat(64)))
            .unwrap();
        assert_eq!(hex.raw(), U256::MAX);
    }

    #[test]
    fn test_two_pow_256_overflows() {
        let two_pow_256 =
            "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert_eq!(
            TokenAmount::from_raw_amount(mainnet_vcow(), two_pow_256),
            Err(AmountError::Overflow)
        );
    }
}

mod scaling {
    use super::*;

    #[test]
    fn test_to_decimal_scales_by_decimals() {
        let amount =
            TokenAmount::from_raw(mainnet_vcow(), U256::from(16_660_000_000_000_000_000u128));
        assert_eq!(amount.to_decimal().unwrap(), dec!(16.66));
    }

    #[test]
    fn test_to_decimal_smallest_unit() {
        let amount = TokenAmount::from_raw(mainnet_vcow(), U256::from(1u64));
        assert_eq!(amount.to_decimal().unwrap(), dec!(0.000000000000000001));
    }

    #[test]
    fn test_to_decimal_overflow() {
        let amount = TokenAmount::from_raw(mainnet_vcow(), U256::from(u128::MAX));
        assert_eq!(amount.to_decimal(), Err(AmountError::Overflow));

        let huge = TokenAmount::from_raw(mainnet_vcow(), U256::MAX);
        assert_eq!(huge.to_decimal(), Err(AmountError::Overflow));
    }

    #[test]
    fn test_display_smallest_unit() {
        let amount = TokenAmount::from_raw(mainnet_vcow(), U256::from(1u64));
        assert_eq!(amount.to_string(), "0.000000000000000001 vCOW");
    }

    #[test]
    fn test_display_above_u128() {
        // 2^128 wei
        let amount = TokenAmount::from_raw(mainnet_vcow(), U256::from(1u64) << 128usize);
        assert_eq!(amount.to_string(), "340282366920938463463.374607431768211456 vCOW");
    }
}

mod registry {
    use super::*;

    #[test]
    fn test_shared_registry_resolves_each_network() {
        for network in SupportedNetwork::ALL {
            let token = vcow_registry().get(network.chain_id()).unwrap();
            assert_eq!(token, &Token::vcow(network));
        }
    }

    #[test]
    fn test_with_token_replaces_existing() {
        let custom = Token::new(1, "0x0000000000000000000000000000000000000001", 6, "TST", "Test");
        let registry = TokenRegistry::vcow().with_token(custom.clone());
        assert_eq!(registry.get(1), Some(&custom));
        assert_eq!(registry.get(4), Some(&Token::vcow(SupportedNetwork::Rinkeby)));
    }

    #[test]
    fn test_token_serialization() {
        let json = serde_json::to_value(mainnet_vcow()).unwrap();
        assert_eq!(json["symbol"], "vCOW");
        assert_eq!(json["decimals"], 18);
        assert_eq!(json["chain_id"], 1);
    }
}
