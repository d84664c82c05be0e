//! Core Kernel - Foundational types for the vCOW claims system
//!
//! This crate provides the building blocks used by the claims domain:
//! - Supported networks and chain id resolution
//! - The per-network governance token registry
//! - Token amounts held exactly in smallest units
//! - Composite claim lookup keys

pub mod network;
pub mod token;
pub mod amount;
pub mod identifiers;
pub mod error;

pub use network::{ChainId, SupportedNetwork, NetworkError};
pub use token::{Token, TokenRegistry, vcow_registry};
pub use amount::{TokenAmount, AmountError};
pub use identifiers::ClaimKey;
pub use error::CoreError;
pub use alloy_primitives::U256;
