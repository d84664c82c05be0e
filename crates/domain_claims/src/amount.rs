//! Claim amount parsing
//!
//! Claim amounts are raw vCOW integer strings. They are resolved against the
//! vCOW instance of the connected network, or the Rinkeby instance when no
//! network is connected.

use tracing::debug;

use core_kernel::{vcow_registry, ChainId, SupportedNetwork, TokenAmount, TokenRegistry};

use crate::error::ClaimError;

/// Network whose token is used when no chain id is given
pub const DEFAULT_CHAIN_ID: ChainId = SupportedNetwork::RINKEBY_ID;

/// Parses a raw claim amount into a vCOW amount
///
/// Returns `Ok(None)` when `value` is empty or the chain has no vCOW
/// deployment. A malformed number is an error.
pub fn parse_claim_amount(
    value: &str,
    chain_id: Option<ChainId>,
) -> Result<Option<TokenAmount>, ClaimError> {
    parse_claim_amount_with(vcow_registry(), DEFAULT_CHAIN_ID, value, chain_id)
}

/// [`parse_claim_amount`] against an explicit registry and fallback chain
pub fn parse_claim_amount_with(
    registry: &TokenRegistry,
    default_chain_id: ChainId,
    value: &str,
    chain_id: Option<ChainId>,
) -> Result<Option<TokenAmount>, ClaimError> {
    // Chain id 0 means "not connected" the same as None
    let chain_id = match chain_id.filter(|id| *id != 0) {
        Some(id) => id,
        None => {
            debug!(default_chain_id, "No chain id, falling back to default network token");
            default_chain_id
        }
    };

    let Some(token) = registry.get(chain_id) else {
        debug!(chain_id, "No governance token for chain");
        return Ok(None);
    };
    if value.is_empty() {
        return Ok(None);
    }

    let amount = TokenAmount::from_raw_amount(token.clone(), value)?;
    Ok(Some(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{AmountError, Token, U256};

    #[test]
    fn test_empty_value_is_no_amount() {
        assert_eq!(parse_claim_amount("", Some(1)).unwrap(), None);
    }

    #[test]
    fn test_missing_chain_falls_back_to_rinkeby() {
        let amount = parse_claim_amount("100", None).unwrap().unwrap();
        assert_eq!(amount.raw(), U256::from(100u64));
        assert_eq!(amount.token().chain_id, SupportedNetwork::RINKEBY_ID);

        let amount = parse_claim_amount("100", Some(0)).unwrap().unwrap();
        assert_eq!(amount.token().chain_id, SupportedNetwork::RINKEBY_ID);
    }

    #[test]
    fn test_uses_connected_chain_token() {
        let amount = parse_claim_amount("42", Some(100)).unwrap().unwrap();
        assert_eq!(amount.token(), &Token::vcow(SupportedNetwork::GnosisChain));
    }

    #[test]
    fn test_unknown_chain_is_no_amount() {
        assert_eq!(parse_claim_amount("100", Some(5)).unwrap(), None);
    }

    #[test]
    fn test_malformed_value_is_error() {
        let err = parse_claim_amount("12abc", Some(1)).unwrap_err();
        assert!(matches!(err, ClaimError::Amount(AmountError::InvalidAmount(_))));
    }

    #[test]
    fn test_custom_registry_without_default() {
        let registry = TokenRegistry::new().with_token(Token::vcow(SupportedNetwork::Mainnet));
        assert_eq!(
            parse_claim_amount_with(&registry, DEFAULT_CHAIN_ID, "1", None).unwrap(),
            None
        );
        assert!(parse_claim_amount_with(&registry, DEFAULT_CHAIN_ID, "1", Some(1))
            .unwrap()
            .is_some());
    }
}
