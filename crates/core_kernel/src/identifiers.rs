//! Composite identifiers
//!
//! Claims are cached per account per network. The key for that lookup is the
//! chain id and the account address joined by a colon.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::network::ChainId;

/// Lookup key for the claims of one account on one network
///
/// The account is kept verbatim; no address validation or case
/// normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClaimKey {
    chain_id: ChainId,
    account: String,
}

impl ClaimKey {
    pub fn new(account: impl Into<String>, chain_id: ChainId) -> Self {
        Self {
            chain_id,
            account: account.into(),
        }
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn account(&self) -> &str {
        &self.account
    }
}

impl fmt::Display for ClaimKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.account)
    }
}

impl FromStr for ClaimKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the first colon only; the account part is opaque
        let (chain, account) = s
            .split_once(':')
            .ok_or_else(|| CoreError::validation(format!("Missing ':' in claim key {s:?}")))?;
        let chain_id = chain
            .parse::<ChainId>()
            .map_err(|_| CoreError::validation(format!("Invalid chain id in claim key {s:?}")))?;
        Ok(Self::new(account, chain_id))
    }
}

impl From<ClaimKey> for String {
    fn from(key: ClaimKey) -> String {
        key.to_string()
    }
}

impl TryFrom<String> for ClaimKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(ClaimKey::new("0xABC", 1).to_string(), "1:0xABC");
    }

    #[test]
    fn test_parse_keeps_colons_in_account() {
        let key: ClaimKey = "100:weird:account".parse().unwrap();
        assert_eq!(key.chain_id(), 100);
        assert_eq!(key.account(), "weird:account");
    }

    #[test]
    fn test_parse_rejects_bad_chain() {
        assert!("mainnet:0xABC".parse::<ClaimKey>().is_err());
        assert!("0xABC".parse::<ClaimKey>().is_err());
    }
}
