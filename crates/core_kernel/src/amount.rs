//! Token amounts in smallest units
//!
//! Claim data carries amounts as raw integer strings in the token's smallest
//! unit (wei for an 18 decimal token). [`TokenAmount`] keeps that raw integer
//! exactly, over the full uint256 range, and only scales it when converting
//! for display or arithmetic with prices.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::token::Token;

/// Errors that can occur when constructing or converting token amounts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// An amount of a specific token, stored un-scaled
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenAmount {
    token: Token,
    raw: U256,
}

impl TokenAmount {
    /// Creates an amount from an already parsed raw value
    pub fn from_raw(token: Token, raw: U256) -> Self {
        Self { token, raw }
    }

    /// Parses a raw integer string in the token's smallest unit
    ///
    /// Accepts decimal digits or a `0x` prefixed hex string, with surrounding
    /// whitespace ignored. Fractions, signs and anything else are rejected,
    /// as is any value above 2^256 - 1.
    pub fn from_raw_amount(token: Token, value: &str) -> Result<Self, AmountError> {
        let raw = parse_raw(value)?;
        Ok(Self::from_raw(token, raw))
    }

    /// Returns the token
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the raw, un-scaled amount
    pub fn raw(&self) -> U256 {
        self.raw
    }

    /// Amount in whole tokens as a decimal
    ///
    /// Fails with [`AmountError::Overflow`] when the amount does not fit a
    /// 96-bit decimal mantissa.
    pub fn to_decimal(&self) -> Result<Decimal, AmountError> {
        let raw = u128::try_from(self.raw).map_err(|_| AmountError::Overflow)?;
        let raw = i128::try_from(raw).map_err(|_| AmountError::Overflow)?;
        Decimal::try_from_i128_with_scale(raw, u32::from(self.token.decimals))
            .map(|d| d.normalize())
            .map_err(|_| AmountError::Overflow)
    }
}

fn parse_raw(value: &str) -> Result<U256, AmountError> {
    let trimmed = value.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16u32),
        None => (trimmed, 10u32),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(AmountError::InvalidAmount(value.to_string()));
    }

    // Only digits remain, so the one failure left is exceeding uint256
    U256::from_str_radix(digits, u64::from(radix)).map_err(|_| AmountError::Overflow)
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = usize::from(self.token.decimals);
        let unit = U256::from(10u64).checked_pow(U256::from(decimals));
        match unit {
            Some(unit) if decimals > 0 => {
                let whole = self.raw / unit;
                let fraction = self.raw % unit;
                if fraction.is_zero() {
                    write!(f, "{} {}", whole, self.token.symbol)
                } else {
                    let digits = fraction.to_string();
                    let padded = format!("{}{}", "0".repeat(decimals - digits.len()), digits);
                    write!(f, "{}.{} {}", whole, padded.trim_end_matches('0'), self.token.symbol)
                }
            }
            _ => write!(f, "{} {}", self.raw, self.token.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::SupportedNetwork;
    use rust_decimal_macros::dec;

    fn vcow() -> Token {
        Token::vcow(SupportedNetwork::Mainnet)
    }

    #[test]
    fn test_from_raw_amount_decimal() {
        let amount = TokenAmount::from_raw_amount(vcow(), "1500000000000000000").unwrap();
        assert_eq!(amount.raw(), U256::from(1_500_000_000_000_000_000u128));
        assert_eq!(amount.to_decimal().unwrap(), dec!(1.5));
    }

    #[test]
    fn test_from_raw_amount_hex() {
        let amount = TokenAmount::from_raw_amount(vcow(), "0x1f").unwrap();
        assert_eq!(amount.raw(), U256::from(31u64));
    }

    #[test]
    fn test_from_raw_amount_rejects_malformed() {
        for bad in ["abc", "1.5", "-5", "0x", "12 34"] {
            assert!(
                matches!(
                    TokenAmount::from_raw_amount(vcow(), bad),
                    Err(AmountError::InvalidAmount(_))
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_raw_amount_above_u128() {
        // 2^128
        let amount =
            TokenAmount::from_raw_amount(vcow(), "340282366920938463463374607431768211456").unwrap();
        assert_eq!(amount.raw(), U256::from(1u64) << 128usize);
    }

    #[test]
    fn test_from_raw_amount_overflow() {
        let too_big = "1".repeat(80);
        assert_eq!(
            TokenAmount::from_raw_amount(vcow(), &too_big),
            Err(AmountError::Overflow)
        );
    }

    #[test]
    fn test_display() {
        let amount = TokenAmount::from_raw(vcow(), U256::from(1_250_000_000_000_000_000u128));
        assert_eq!(amount.to_string(), "1.25 vCOW");

        let whole = TokenAmount::from_raw(vcow(), U256::from(3_000_000_000_000_000_000u128));
        assert_eq!(whole.to_string(), "3 vCOW");
    }
}
