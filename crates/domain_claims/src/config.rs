//! Claims configuration
//!
//! Defaults match the production deployment. Deployments pointing at a fork
//! of the data repository, or defaulting to another network, override them
//! through `CLAIMS_*` environment variables.

use serde::Deserialize;

use core_kernel::{vcow_registry, ChainId, TokenAmount};

use crate::amount::{parse_claim_amount_with, DEFAULT_CHAIN_ID};
use crate::error::ClaimError;
use crate::repo::{claims_repo_path, CLAIMS_REPO};

/// Claims configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClaimsConfig {
    /// Base location of the claims data, must end with '/'
    pub repo_base_url: String,
    /// Network used to resolve amounts when no chain is connected
    pub default_chain_id: ChainId,
}

impl Default for ClaimsConfig {
    fn default() -> Self {
        Self {
            repo_base_url: CLAIMS_REPO.to_string(),
            default_chain_id: DEFAULT_CHAIN_ID,
        }
    }
}

impl ClaimsConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, ClaimError> {
        let config: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("CLAIMS").try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values are usable
    pub fn validate(&self) -> Result<(), ClaimError> {
        if !self.repo_base_url.ends_with('/') {
            return Err(ClaimError::Configuration(format!(
                "repo_base_url must end with '/': {}",
                self.repo_base_url
            )));
        }
        if vcow_registry().get(self.default_chain_id).is_none() {
            return Err(ClaimError::Configuration(format!(
                "no governance token for default_chain_id {}",
                self.default_chain_id
            )));
        }
        Ok(())
    }

    /// Repository path for network `id` under the configured base
    pub fn repo_path(&self, id: ChainId) -> Result<String, ClaimError> {
        claims_repo_path(&self.repo_base_url, id)
    }

    /// Parses a claim amount, falling back to the configured network
    pub fn parse_claim_amount(
        &self,
        value: &str,
        chain_id: Option<ChainId>,
    ) -> Result<Option<TokenAmount>, ClaimError> {
        parse_claim_amount_with(vcow_registry(), self.default_chain_id, value, chain_id)
    }
}
