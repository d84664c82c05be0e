//! Claims repository locations and claim cache keys

use core_kernel::{ChainId, ClaimKey, SupportedNetwork};

use crate::error::ClaimError;

/// Base location of the merkle drop data chunks
pub const CLAIMS_REPO: &str =
    "https://raw.githubusercontent.com/gnosis/cow-mrkl-drop-data-chunks/main/final/";

/// Directory of a network's data inside the claims repository
pub fn repo_segment(network: SupportedNetwork) -> &'static str {
    match network {
        SupportedNetwork::Mainnet => "mainnet",
        SupportedNetwork::Rinkeby => "rinkeby",
        SupportedNetwork::GnosisChain => "gnosis-chain",
    }
}

/// Joins `base` and the network's directory, with a trailing slash
pub fn claims_repo_path(base: &str, id: ChainId) -> Result<String, ClaimError> {
    let network = SupportedNetwork::try_from(id)?;
    Ok(format!("{}{}/", base, repo_segment(network)))
}

/// Repository path for network `id`
///
/// Fails with [`ClaimError::UnsupportedNetwork`] for any network the claims
/// were not deployed on.
pub fn get_claims_repo_path(id: ChainId) -> Result<String, ClaimError> {
    claims_repo_path(CLAIMS_REPO, id)
}

/// Cache key for the claims of `account` on `chain_id`, as `{chain_id}:{account}`
pub fn get_claim_key(account: &str, chain_id: ChainId) -> String {
    ClaimKey::new(account, chain_id).to_string()
}
