//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for claims, networks and tokens.
//! These fixtures are designed to be consistent and predictable for unit tests.

use core_kernel::{ChainId, SupportedNetwork, Token, TokenAmount, U256};
use domain_claims::{ClaimType, RepoClaim, UserClaim};

/// Fixture for account addresses
pub struct AccountFixtures;

impl AccountFixtures {
    /// A checksummed mainnet-style address
    pub fn alice() -> &'static str {
        "0x9A4C7E1f3D0b2e5A8c6F4b1D3e7a9C2f5B8d0E6a"
    }

    /// A lowercase address
    pub fn bob() -> &'static str {
        "0x5b1e8d2c4a6f9e3b7d0c2a5f8e1b4d7c9a3e6f0b"
    }
}

/// Fixture for network ids
pub struct NetworkFixtures;

impl NetworkFixtures {
    pub fn mainnet() -> ChainId {
        SupportedNetwork::MAINNET_ID
    }

    pub fn rinkeby() -> ChainId {
        SupportedNetwork::RINKEBY_ID
    }

    pub fn gnosis_chain() -> ChainId {
        SupportedNetwork::XDAI_ID
    }

    /// A well-formed chain id the claims were never deployed on
    pub fn unsupported() -> ChainId {
        7
    }
}

/// Fixture for vCOW tokens and amounts
pub struct TokenFixtures;

impl TokenFixtures {
    pub fn mainnet_vcow() -> Token {
        Token::vcow(SupportedNetwork::Mainnet)
    }

    pub fn rinkeby_vcow() -> Token {
        Token::vcow(SupportedNetwork::Rinkeby)
    }

    /// One whole vCOW in smallest units
    pub fn one_vcow_raw() -> &'static str {
        "1000000000000000000"
    }

    /// One whole vCOW on mainnet
    pub fn one_mainnet_vcow() -> TokenAmount {
        TokenAmount::from_raw(Self::mainnet_vcow(), U256::from(1_000_000_000_000_000_000u128))
    }
}

/// Fixture for claims
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A repository claim with the given index and type key
    pub fn repo_claim(index: u64, key: &str) -> RepoClaim {
        RepoClaim {
            index,
            claim_type: key.to_string(),
            amount: TokenFixtures::one_vcow_raw().to_string(),
            proof: vec![
                "0x2f1c0b6a4e9d8c7b6a5f4e3d2c1b0a9f8e7d6c5b4a3f2e1d0c9b8a7f6e5d4c3b".to_string(),
            ],
        }
    }

    /// A resolved claim with the given index and type
    pub fn user_claim(index: u64, claim_type: ClaimType) -> UserClaim {
        UserClaim {
            index,
            claim_type: Some(claim_type),
            amount: TokenFixtures::one_vcow_raw().to_string(),
            proof: Vec::new(),
        }
    }

    /// One claim of every type, indexed by the type's numeric value
    pub fn one_of_each() -> Vec<UserClaim> {
        ClaimType::ALL
            .into_iter()
            .map(|t| Self::user_claim(u64::from(t.as_u8()), t))
            .collect()
    }

    /// Repository JSON with an airdrop and a GNO option
    pub fn repo_json() -> &'static str {
        r#"[
            {"index": 3, "type": "Airdrop", "amount": "1000000000000000000", "proof": ["0x01"]},
            {"index": 7, "type": "GnoOption", "amount": "2500000000000000000", "proof": ["0x02", "0x03"]}
        ]"#
    }
}
