//! vCOW prices per investment option
//!
//! Prices are not fetched from a feed. They are the fixed terms of the
//! investment options and live in [`HARDCODED_PRICES`]; callers go through
//! [`PriceSource`] so a live source can be plugged in later.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::claim_type::ClaimType;

/// Price of one vCOW per claim type
pub type TypeToPriceMap = HashMap<ClaimType, Decimal>;

/// Hardcoded vCOW prices, in units of the option's payment currency
pub const HARDCODED_PRICES: [(ClaimType, Decimal); 3] = [
    // 16.66
    (ClaimType::GnoOption, Decimal::from_parts(1666, 0, 0, false, 2)),
    // 26.66
    (ClaimType::Investor, Decimal::from_parts(2666, 0, 0, false, 2)),
    // 36.66
    (ClaimType::UserOption, Decimal::from_parts(3666, 0, 0, false, 2)),
];

/// Source of vCOW prices for paid claims
pub trait PriceSource {
    /// Price for a claim type, `None` for types that are not sold
    fn price(&self, claim_type: ClaimType) -> Option<Decimal>;

    /// Prices for every priced claim type
    fn price_map(&self) -> TypeToPriceMap {
        ClaimType::ALL
            .into_iter()
            .filter_map(|t| self.price(t).map(|p| (t, p)))
            .collect()
    }
}

/// Prices from [`HARDCODED_PRICES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HardcodedPrices;

impl PriceSource for HardcodedPrices {
    fn price(&self, claim_type: ClaimType) -> Option<Decimal> {
        HARDCODED_PRICES
            .iter()
            .find(|(t, _)| *t == claim_type)
            .map(|(_, price)| *price)
    }
}

/// Returns the fixed vCOW price for each investment option
pub fn get_type_to_price_map() -> TypeToPriceMap {
    HardcodedPrices.price_map()
}
