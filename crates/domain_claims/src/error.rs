//! Claims domain errors

use thiserror::Error;

use core_kernel::{AmountError, ChainId, NetworkError};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Network not supported: {0}")]
    UnsupportedNetwork(ChainId),

    #[error("Unknown claim type: {0}")]
    UnknownClaimType(String),

    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("Malformed claims data: {0}")]
    MalformedData(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClaimError {
    pub fn unknown_claim_type(key: impl Into<String>) -> Self {
        ClaimError::UnknownClaimType(key.into())
    }
}

impl From<NetworkError> for ClaimError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::Unsupported(id) => ClaimError::UnsupportedNetwork(id),
        }
    }
}

impl From<serde_json::Error> for ClaimError {
    fn from(err: serde_json::Error) -> Self {
        ClaimError::MalformedData(err.to_string())
    }
}

impl From<config::ConfigError> for ClaimError {
    fn from(err: config::ConfigError) -> Self {
        ClaimError::Configuration(err.to_string())
    }
}
