//! Governance token registry
//!
//! Claims are denominated in the vCOW virtual token, which is deployed at a
//! different address on every supported network. The registry resolves the
//! token instance for a chain id.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::network::{ChainId, SupportedNetwork};

/// Decimals of the vCOW token on every network
pub const VCOW_DECIMALS: u8 = 18;

/// Ticker of the vCOW token
pub const VCOW_SYMBOL: &str = "vCOW";

/// Full name of the vCOW token
pub const VCOW_NAME: &str = "CoW Protocol Virtual Token";

/// An ERC-20 token deployed on a specific chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Chain the token lives on
    pub chain_id: ChainId,
    /// Contract address, checksummed hex
    pub address: String,
    /// Number of decimals of the smallest unit
    pub decimals: u8,
    /// Ticker symbol
    pub symbol: String,
    /// Display name
    pub name: String,
}

impl Token {
    /// Creates a new token
    pub fn new(
        chain_id: ChainId,
        address: impl Into<String>,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address: address.into(),
            decimals,
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// The vCOW instance deployed on `network`
    pub fn vcow(network: SupportedNetwork) -> Self {
        let address = match network {
            SupportedNetwork::Mainnet => "0xD057B63f5E69CF1B929b356b579Cba08D7688048",
            SupportedNetwork::Rinkeby => "0x69E0E2b3d523D3b247d798a49C3fa022a46DD6bd",
            SupportedNetwork::GnosisChain => "0xc20C9C13E853fc64d054b73fF21d3636B2d97eaB",
        };
        Self::new(network.chain_id(), address, VCOW_DECIMALS, VCOW_SYMBOL, VCOW_NAME)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.chain_id)
    }
}

/// Lookup from chain id to the governance token deployed there
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<ChainId, Token>,
}

impl TokenRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry containing vCOW on every supported network
    pub fn vcow() -> Self {
        SupportedNetwork::ALL
            .into_iter()
            .fold(Self::new(), |registry, network| registry.with_token(Token::vcow(network)))
    }

    /// Adds or replaces the token for its chain
    pub fn with_token(mut self, token: Token) -> Self {
        self.tokens.insert(token.chain_id, token);
        self
    }

    /// Resolves the token for a chain id
    pub fn get(&self, chain_id: ChainId) -> Option<&Token> {
        self.tokens.get(&chain_id)
    }
}

static VCOW_REGISTRY: Lazy<TokenRegistry> = Lazy::new(TokenRegistry::vcow);

/// Shared vCOW registry
pub fn vcow_registry() -> &'static TokenRegistry {
    &VCOW_REGISTRY
}
