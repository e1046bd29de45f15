mod config;
mod narrative;
mod score;

pub use config::EvaluatorConfig;
pub use narrative::PricingAssessment;

use super::domain::{InvalidInput, MarketContext, PropertyRecord, ValuationResult};
use score::DriverSignals;
use serde::{Deserialize, Serialize};

/// Stateless evaluator turning a listing price and a model estimate into the
/// user-facing deal assessment. Pure and deterministic: identical inputs
/// always produce identical assessments.
pub struct DealEvaluator {
    config: EvaluatorConfig,
}

impl DealEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn evaluate(
        &self,
        property: &PropertyRecord,
        valuation: &ValuationResult,
        context: &MarketContext,
    ) -> Result<DealAssessment, InvalidInput> {
        if property.price == 0 {
            return Err(InvalidInput::NonPositivePrice);
        }
        if property.sqft == 0 {
            return Err(InvalidInput::NonPositiveSqft);
        }
        if !valuation.predicted_value.is_finite() || valuation.predicted_value <= 0.0 {
            return Err(InvalidInput::NonPositivePrediction);
        }

        let diff_ratio = score::diff_ratio(property.price, valuation.predicted_value);
        let deal_score = score::deal_score(diff_ratio);
        let pricing_assessment = narrative::classify(diff_ratio, self.config.fair_price_band);

        let value_drivers = score::value_drivers(DriverSignals {
            condition: property.year_built > 0,
            market_timing: context.recent_sales.is_some(),
        });

        let key_factors: Vec<String> = score::key_factors(property, context, diff_ratio, &self.config)
            .into_iter()
            .map(|hit| hit.label.to_string())
            .collect();

        let explanation = narrative::explanation(
            pricing_assessment,
            valuation.predicted_value,
            diff_ratio,
            &key_factors,
        );

        Ok(DealAssessment {
            deal_score,
            pricing_assessment,
            value_drivers,
            explanation,
            key_factors,
        })
    }
}

/// Complete scoring output for a single analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealAssessment {
    /// 0.0 through 10.0, one decimal.
    pub deal_score: f64,
    pub pricing_assessment: PricingAssessment,
    pub value_drivers: ValueDrivers,
    pub explanation: String,
    /// Relevance-ordered, two to six entries.
    pub key_factors: Vec<String>,
}

/// Percentage attribution across the four driver categories. Always sums to
/// exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDrivers {
    pub location: u8,
    pub size: u8,
    pub condition: u8,
    pub market_timing: u8,
}

impl ValueDrivers {
    pub fn total(&self) -> u32 {
        self.location as u32 + self.size as u32 + self.condition as u32 + self.market_timing as u32
    }
}
