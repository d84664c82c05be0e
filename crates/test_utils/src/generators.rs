//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random claims and network ids.

use core_kernel::{ChainId, SupportedNetwork};
use domain_claims::{ClaimType, RepoClaim, UserClaim};
use proptest::prelude::*;

/// Strategy for generating any ClaimType
pub fn claim_type_strategy() -> impl Strategy<Value = ClaimType> {
    prop_oneof![
        Just(ClaimType::Airdrop),
        Just(ClaimType::GnoOption),
        Just(ClaimType::UserOption),
        Just(ClaimType::Investor),
        Just(ClaimType::Team),
        Just(ClaimType::Advisor),
    ]
}

/// Strategy for repository type keys, mostly known with some unknown ones
pub fn repo_type_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => claim_type_strategy().prop_map(|t| t.as_str().to_string()),
        1 => "[a-z]{3,10}",
    ]
}

/// Strategy for raw amounts in smallest units
pub fn raw_amount_strategy() -> impl Strategy<Value = String> {
    any::<u64>().prop_map(|n| n.to_string())
}

/// Strategy for repository claims
pub fn repo_claim_strategy() -> impl Strategy<Value = RepoClaim> {
    (
        any::<u32>(),
        repo_type_key_strategy(),
        raw_amount_strategy(),
        proptest::collection::vec("0x[0-9a-f]{64}", 0..4),
    )
        .prop_map(|(index, claim_type, amount, proof)| RepoClaim {
            index: u64::from(index),
            claim_type,
            amount,
            proof,
        })
}

/// Strategy for resolved claims, occasionally untyped
pub fn user_claim_strategy() -> impl Strategy<Value = UserClaim> {
    (
        any::<u32>(),
        proptest::option::weighted(0.9, claim_type_strategy()),
        raw_amount_strategy(),
    )
        .prop_map(|(index, claim_type, amount)| UserClaim {
            index: u64::from(index),
            claim_type,
            amount,
            proof: Vec::new(),
        })
}

/// Strategy for lists of resolved claims
pub fn user_claims_strategy() -> impl Strategy<Value = Vec<UserClaim>> {
    proptest::collection::vec(user_claim_strategy(), 0..20)
}

/// Strategy for supported chain ids
pub fn supported_chain_id_strategy() -> impl Strategy<Value = ChainId> {
    prop_oneof![
        Just(SupportedNetwork::MAINNET_ID),
        Just(SupportedNetwork::RINKEBY_ID),
        Just(SupportedNetwork::XDAI_ID),
    ]
}

/// Strategy for chain ids the claims are not deployed on
pub fn unsupported_chain_id_strategy() -> impl Strategy<Value = ChainId> {
    any::<ChainId>().prop_filter("supported chain id", |id| {
        SupportedNetwork::try_from(*id).is_err()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn supported_ids_resolve(id in supported_chain_id_strategy()) {
            prop_assert!(SupportedNetwork::try_from(id).is_ok());
        }

        #[test]
        fn unsupported_ids_do_not_resolve(id in unsupported_chain_id_strategy()) {
            prop_assert!(SupportedNetwork::try_from(id).is_err());
        }

        #[test]
        fn raw_amounts_are_digits(amount in raw_amount_strategy()) {
            prop_assert!(amount.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
