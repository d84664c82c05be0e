//! Claim types and their free/paid classification
//!
//! The claims repository encodes types as strings ("Airdrop", "GnoOption",
//! ...) while the contract and the rest of the application use the numeric
//! enum value. [`ClaimType::from_repo_key`] is the one place that translates
//! between the two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClaimError;

/// Kind of claim, with the numeric value used on-chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ClaimType {
    /// Free airdrop allocation
    Airdrop = 0,
    /// Investment option paid in GNO
    GnoOption = 1,
    /// Investment option paid in the native currency
    UserOption = 2,
    /// Investment option paid in USDC
    Investor = 3,
    /// Team allocation
    Team = 4,
    /// Advisor allocation
    Advisor = 5,
}

/// Claims that require no payment
pub const FREE_CLAIM_TYPES: [ClaimType; 3] =
    [ClaimType::Airdrop, ClaimType::Team, ClaimType::Advisor];

/// Claims that must be paid for to be realised
pub const PAID_CLAIM_TYPES: [ClaimType; 3] =
    [ClaimType::GnoOption, ClaimType::UserOption, ClaimType::Investor];

/// Repository string key to claim type
pub const REVERSE_CLAIM_TYPE_MAPPING: [(&str, ClaimType); 6] = [
    ("Airdrop", ClaimType::Airdrop),
    ("GnoOption", ClaimType::GnoOption),
    ("UserOption", ClaimType::UserOption),
    ("Investor", ClaimType::Investor),
    ("Team", ClaimType::Team),
    ("Advisor", ClaimType::Advisor),
];

impl ClaimType {
    pub const ALL: [ClaimType; 6] = [
        ClaimType::Airdrop,
        ClaimType::GnoOption,
        ClaimType::UserOption,
        ClaimType::Investor,
        ClaimType::Team,
        ClaimType::Advisor,
    ];

    /// Numeric value used by the claim contract
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Key used by the claims repository
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Airdrop => "Airdrop",
            ClaimType::GnoOption => "GnoOption",
            ClaimType::UserOption => "UserOption",
            ClaimType::Investor => "Investor",
            ClaimType::Team => "Team",
            ClaimType::Advisor => "Advisor",
        }
    }

    /// Resolves a repository key, `None` if the key is unknown
    pub fn from_repo_key(key: &str) -> Option<ClaimType> {
        REVERSE_CLAIM_TYPE_MAPPING
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, claim_type)| *claim_type)
    }

    pub fn is_free(&self) -> bool {
        FREE_CLAIM_TYPES.contains(self)
    }

    pub fn is_paid(&self) -> bool {
        PAID_CLAIM_TYPES.contains(self)
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimType::from_repo_key(s).ok_or_else(|| ClaimError::unknown_claim_type(s))
    }
}

impl TryFrom<u8> for ClaimType {
    type Error = ClaimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ClaimType::ALL
            .into_iter()
            .find(|t| t.as_u8() == value)
            .ok_or_else(|| ClaimError::unknown_claim_type(value.to_string()))
    }
}

/// Returns true if `claim_type` requires no payment
pub fn is_free_claim(claim_type: ClaimType) -> bool {
    claim_type.is_free()
}
