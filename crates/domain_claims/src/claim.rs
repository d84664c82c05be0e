//! Claim records and classification helpers
//!
//! [`RepoClaim`] is a claim exactly as stored in the claims repository;
//! [`UserClaim`] is the same record with its type resolved to [`ClaimType`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::claim_type::ClaimType;
use crate::error::ClaimError;

/// A claim as delivered by the claims repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoClaim {
    /// Position of the claim in the merkle distribution
    pub index: u64,
    /// Repository key of the claim type
    #[serde(rename = "type")]
    pub claim_type: String,
    /// Raw amount in the token's smallest unit
    pub amount: String,
    /// Merkle proof
    #[serde(default)]
    pub proof: Vec<String>,
}

/// A claim with its type resolved
///
/// `claim_type` is `None` when the repository used a key with no mapping;
/// such claims are neither free nor paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaim {
    /// Position of the claim in the merkle distribution
    pub index: u64,
    /// Resolved claim type, `None` for unmapped repository keys
    #[serde(rename = "type")]
    pub claim_type: Option<ClaimType>,
    /// Raw amount in the token's smallest unit, as delivered
    pub amount: String,
    /// Merkle proof
    #[serde(default)]
    pub proof: Vec<String>,
}

impl UserClaim {
    pub fn is_free(&self) -> bool {
        self.claim_type.is_some_and(|t| t.is_free())
    }

    pub fn is_paid(&self) -> bool {
        self.claim_type.is_some_and(|t| t.is_paid())
    }
}

impl From<&RepoClaim> for UserClaim {
    fn from(claim: &RepoClaim) -> Self {
        let claim_type = ClaimType::from_repo_key(&claim.claim_type);
        if claim_type.is_none() {
            warn!(index = claim.index, key = %claim.claim_type, "Unmapped claim type in repository data");
        }
        Self {
            index: claim.index,
            claim_type,
            amount: claim.amount.clone(),
            proof: claim.proof.clone(),
        }
    }
}

/// Parses a repository JSON document into claims
pub fn parse_repo_claims(json: &str) -> Result<Vec<RepoClaim>, ClaimError> {
    Ok(serde_json::from_str(json)?)
}

/// Converts repository claims to user claims, keeping order and length
///
/// Unknown type keys do not fail the conversion; the resulting claim has no
/// type. Use [`try_transform_repo_claims`] to reject them instead.
pub fn transform_repo_claims_to_user_claims(repo_claims: &[RepoClaim]) -> Vec<UserClaim> {
    debug!(count = repo_claims.len(), "Transforming repository claims");
    repo_claims.iter().map(UserClaim::from).collect()
}

/// Strict variant of [`transform_repo_claims_to_user_claims`]
pub fn try_transform_repo_claims(repo_claims: &[RepoClaim]) -> Result<Vec<UserClaim>, ClaimError> {
    repo_claims
        .iter()
        .map(|claim| {
            let claim_type: ClaimType = claim.claim_type.parse()?;
            Ok(UserClaim {
                index: claim.index,
                claim_type: Some(claim_type),
                amount: claim.amount.clone(),
                proof: claim.proof.clone(),
            })
        })
        .collect()
}

/// Whether any claim is an investment option; `None` counts as no claims
pub fn has_paid_claim(claims: Option<&[UserClaim]>) -> bool {
    claims.is_some_and(|claims| claims.iter().any(UserClaim::is_paid))
}

/// Whether any claim is an airdrop-style free claim; `None` counts as no claims
pub fn has_free_claim(claims: Option<&[UserClaim]>) -> bool {
    claims.is_some_and(|claims| claims.iter().any(UserClaim::is_free))
}

/// Investment option claims, in input order
pub fn get_paid_claims(claims: &[UserClaim]) -> Vec<UserClaim> {
    claims.iter().filter(|c| c.is_paid()).cloned().collect()
}

/// Free claims, in input order
pub fn get_free_claims(claims: &[UserClaim]) -> Vec<UserClaim> {
    claims.iter().filter(|c| c.is_free()).cloned().collect()
}

/// Distribution indexes of the claims, in input order
pub fn get_indexes(claims: &[UserClaim]) -> Vec<u64> {
    claims.iter().map(|c| c.index).collect()
}
