//! Supported networks
//!
//! Chain ids arrive as plain integers from wallets and URLs. Only a small
//! closed set of them is supported by the claims feature; everything that
//! needs to dispatch on the network goes through [`SupportedNetwork`] so the
//! unsupported case is handled exactly once.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raw network identifier as reported by a wallet
pub type ChainId = u64;

/// Errors raised when resolving a chain id
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Network not supported: {0}")]
    Unsupported(ChainId),
}

/// Networks the claims feature is deployed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportedNetwork {
    Mainnet,
    Rinkeby,
    /// Gnosis Chain, formerly xDai
    GnosisChain,
}

impl SupportedNetwork {
    /// All supported networks, ordered by chain id
    pub const ALL: [SupportedNetwork; 3] = [
        SupportedNetwork::Mainnet,
        SupportedNetwork::Rinkeby,
        SupportedNetwork::GnosisChain,
    ];

    pub const MAINNET_ID: ChainId = 1;
    pub const RINKEBY_ID: ChainId = 4;
    pub const XDAI_ID: ChainId = 100;

    /// Returns the numeric chain id
    pub fn chain_id(&self) -> ChainId {
        match self {
            SupportedNetwork::Mainnet => Self::MAINNET_ID,
            SupportedNetwork::Rinkeby => Self::RINKEBY_ID,
            SupportedNetwork::GnosisChain => Self::XDAI_ID,
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            SupportedNetwork::Mainnet => "Ethereum",
            SupportedNetwork::Rinkeby => "Rinkeby",
            SupportedNetwork::GnosisChain => "Gnosis Chain",
        }
    }

    /// Symbol of the native currency
    pub fn native_currency(&self) -> &'static str {
        match self {
            SupportedNetwork::Mainnet | SupportedNetwork::Rinkeby => "ETH",
            SupportedNetwork::GnosisChain => "XDAI",
        }
    }
}

impl TryFrom<ChainId> for SupportedNetwork {
    type Error = NetworkError;

    fn try_from(id: ChainId) -> Result<Self, Self::Error> {
        match id {
            Self::MAINNET_ID => Ok(SupportedNetwork::Mainnet),
            Self::RINKEBY_ID => Ok(SupportedNetwork::Rinkeby),
            Self::XDAI_ID => Ok(SupportedNetwork::GnosisChain),
            other => Err(NetworkError::Unsupported(other)),
        }
    }
}

impl From<SupportedNetwork> for ChainId {
    fn from(network: SupportedNetwork) -> ChainId {
        network.chain_id()
    }
}

impl fmt::Display for SupportedNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
