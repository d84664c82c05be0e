//! Payment currency per investment option
//!
//! The currency shown next to each paid claim. GNO and USDC options are the
//! same everywhere; the user option is paid in the network's native currency.

use std::collections::HashMap;

use core_kernel::{ChainId, SupportedNetwork};

use crate::claim_type::ClaimType;

/// Currency symbol per claim type
pub type TypeToCurrencyMap = HashMap<ClaimType, String>;

/// Builds the display currency for each investment option on `chain_id`
///
/// Returns an empty map when no chain is connected (`None` or chain id 0).
/// On a chain that is not supported the user option has no currency.
pub fn get_type_to_currency_map(chain_id: Option<ChainId>) -> TypeToCurrencyMap {
    let Some(chain_id) = chain_id.filter(|id| *id != 0) else {
        return TypeToCurrencyMap::new();
    };

    let user_option = match SupportedNetwork::try_from(chain_id) {
        Ok(network) => network.native_currency(),
        Err(_) => "",
    };

    HashMap::from([
        (ClaimType::GnoOption, "GNO".to_string()),
        (ClaimType::Investor, "USDC".to_string()),
        (ClaimType::UserOption, user_option.to_string()),
    ])
}
