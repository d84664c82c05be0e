//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_claims::{ClaimType, RepoClaim, UserClaim};

use crate::fixtures::TokenFixtures;

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    index: u64,
    claim_type: Option<ClaimType>,
    amount: String,
    proof: Vec<String>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            index: 0,
            claim_type: Some(ClaimType::Airdrop),
            amount: TokenFixtures::one_vcow_raw().to_string(),
            proof: Vec::new(),
        }
    }

    /// Sets the distribution index
    pub fn with_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Sets the claim type
    pub fn with_type(mut self, claim_type: ClaimType) -> Self {
        self.claim_type = Some(claim_type);
        self
    }

    /// Leaves the claim without a resolved type
    pub fn untyped(mut self) -> Self {
        self.claim_type = None;
        self
    }

    /// Sets the raw amount
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Adds a proof element
    pub fn with_proof_element(mut self, element: impl Into<String>) -> Self {
        self.proof.push(element.into());
        self
    }

    /// Builds a resolved claim
    pub fn build(self) -> UserClaim {
        UserClaim {
            index: self.index,
            claim_type: self.claim_type,
            amount: self.amount,
            proof: self.proof,
        }
    }

    /// Builds the repository form; an untyped claim gets the key "Unknown"
    pub fn build_repo(self) -> RepoClaim {
        RepoClaim {
            index: self.index,
            claim_type: self
                .claim_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            amount: self.amount,
            proof: self.proof,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let claim = TestClaimBuilder::new().build();
        assert_eq!(claim.index, 0);
        assert_eq!(claim.claim_type, Some(ClaimType::Airdrop));
        assert!(claim.proof.is_empty());
    }

    #[test]
    fn test_builder_repo_form() {
        let claim = TestClaimBuilder::new()
            .with_index(9)
            .with_type(ClaimType::Investor)
            .with_proof_element("0xaa")
            .build_repo();
        assert_eq!(claim.index, 9);
        assert_eq!(claim.claim_type, "Investor");
        assert_eq!(claim.proof, vec!["0xaa".to_string()]);

        assert_eq!(TestClaimBuilder::new().untyped().build_repo().claim_type, "Unknown");
    }
}
