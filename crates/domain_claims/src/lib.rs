//! vCOW Claims Domain
//!
//! Helpers that shape and classify the claims a user holds in the vCOW
//! airdrop. Claims come in two kinds:
//!
//! - **Free**: airdrop, team and advisor allocations
//! - **Paid**: investment options bought with GNO, USDC or the native currency
//!
//! # Data Flow
//!
//! ```text
//! repository JSON -> RepoClaim -> UserClaim -> free / paid / indexes / amounts
//! ```
//!
//! Every function here is pure. The repository fetch and the UI live
//! elsewhere.

pub mod claim_type;
pub mod claim;
pub mod amount;
pub mod currency;
pub mod pricing;
pub mod repo;
pub mod config;
pub mod error;

pub use claim_type::{
    is_free_claim, ClaimType, FREE_CLAIM_TYPES, PAID_CLAIM_TYPES, REVERSE_CLAIM_TYPE_MAPPING,
};
pub use claim::{
    get_free_claims, get_indexes, get_paid_claims, has_free_claim, has_paid_claim,
    parse_repo_claims, transform_repo_claims_to_user_claims, try_transform_repo_claims,
    RepoClaim, UserClaim,
};
pub use amount::{parse_claim_amount, parse_claim_amount_with, DEFAULT_CHAIN_ID};
pub use currency::{get_type_to_currency_map, TypeToCurrencyMap};
pub use pricing::{get_type_to_price_map, HardcodedPrices, PriceSource, TypeToPriceMap};
pub use repo::{get_claim_key, get_claims_repo_path, CLAIMS_REPO};
pub use config::ClaimsConfig;
pub use error::ClaimError;
