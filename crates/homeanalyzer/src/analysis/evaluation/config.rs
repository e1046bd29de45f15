use serde::{Deserialize, Serialize};

/// Dials for the deal evaluator's classification band and key-factor rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Half-width of the fairly-priced band around the model estimate.
    pub fair_price_band: f64,
    /// Gap ratio at which pricing becomes a named key factor.
    pub notable_gap_ratio: f64,
    /// Years since construction within which a home counts as modern.
    pub modern_construction_window: u16,
    /// Homes built before this year may need updates.
    pub dated_home_year: u16,
    pub large_home_sqft: u32,
    pub compact_home_sqft: u32,
    pub sqft_per_bedroom_target: u32,
    pub family_bedroom_count: u8,
    /// Recent comparable sales at or above this count indicate an active market.
    pub active_market_sales: u32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            fair_price_band: 0.07,
            notable_gap_ratio: 0.10,
            modern_construction_window: 5,
            dated_home_year: 1980,
            large_home_sqft: 2_500,
            compact_home_sqft: 1_200,
            sqft_per_bedroom_target: 600,
            family_bedroom_count: 4,
            active_market_sales: 3,
        }
    }
}
