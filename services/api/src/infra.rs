use chrono::{Duration, NaiveDate};
use homeanalyzer::analysis::{
    ComparableSale, ComparableSales, ComparablesError, EvaluatorConfig, ListingResolver,
    ModelError, PropertyRecord, PropertyType, ResolveError, ValuationModel, ValuationResult,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Hedonic pricing baseline standing in for the trained model artifact. The
/// coefficients mirror the synthetic market the model was fit on: dollars per
/// square foot plus bedroom/bathroom premiums, minus straight-line age
/// depreciation, scaled by an address-derived location multiplier.
pub(crate) struct HedonicValuationModel {
    valuation_year: i32,
}

const DOLLARS_PER_SQFT: f64 = 150.0;
const BEDROOM_PREMIUM: f64 = 10_000.0;
const BATHROOM_PREMIUM: f64 = 8_000.0;
const GARAGE_PREMIUM: f64 = 5_000.0;
const LOT_DOLLARS_PER_SQFT: f64 = 2.0;
const AGE_DEPRECIATION: f64 = 1_000.0;
const ASSUMED_GARAGE_SPOTS: f64 = 2.0;
const ASSUMED_LOT_SQFT: f64 = 8_000.0;
const MIN_PREDICTION: f64 = 50_000.0;
const MAX_PREDICTION: f64 = 2_000_000.0;

impl HedonicValuationModel {
    pub(crate) fn new(valuation_year: i32) -> Self {
        Self { valuation_year }
    }
}

impl ValuationModel for HedonicValuationModel {
    fn predict(&self, property: &PropertyRecord) -> Result<ValuationResult, ModelError> {
        let age = (self.valuation_year - property.year_built as i32).max(0) as f64;
        let type_factor = match property.property_type {
            PropertyType::House => 1.0,
            PropertyType::Townhouse => 0.96,
            PropertyType::Condo => 0.92,
        };

        let base = property.sqft as f64 * DOLLARS_PER_SQFT
            + property.bedrooms as f64 * BEDROOM_PREMIUM
            + property.bathrooms * BATHROOM_PREMIUM
            + ASSUMED_GARAGE_SPOTS * GARAGE_PREMIUM
            + ASSUMED_LOT_SQFT * LOT_DOLLARS_PER_SQFT
            - age * AGE_DEPRECIATION;

        let predicted = (base * location_multiplier(&property.address) * type_factor)
            .clamp(MIN_PREDICTION, MAX_PREDICTION);

        Ok(ValuationResult::from_value(predicted, property.sqft))
    }
}

fn location_multiplier(address: &str) -> f64 {
    let address = address.to_ascii_lowercase();
    if ["downtown", "center", "main st"]
        .iter()
        .any(|marker| address.contains(marker))
    {
        1.5
    } else if ["lake", "park", "hill", "view"]
        .iter()
        .any(|marker| address.contains(marker))
    {
        1.3
    } else if ["suburb", "residential"]
        .iter()
        .any(|marker| address.contains(marker))
    {
        1.1
    } else {
        1.0
    }
}

/// In-process comparable sales stand-in: nearby sales derived from the
/// subject listing, stepped down in price and back in time.
pub(crate) struct NearbySalesIndex {
    today: NaiveDate,
}

impl NearbySalesIndex {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl ComparableSales for NearbySalesIndex {
    fn find_comparables(
        &self,
        property: &PropertyRecord,
        limit: usize,
    ) -> Result<Vec<ComparableSale>, ComparablesError> {
        Ok((0..limit.min(3))
            .map(|idx| {
                let price_scale = 0.92 + 0.03 * idx as f64;
                let sqft_scale = 0.95 + 0.04 * idx as f64;
                ComparableSale {
                    address: format!("Similar property near {}", property.address),
                    sale_price: (property.price as f64 * price_scale).round() as u64,
                    sale_date: self.today - Duration::days(30 * (idx as i64 + 1)),
                    sqft: (property.sqft as f64 * sqft_scale).round() as u32,
                    bedrooms: property.bedrooms,
                    bathrooms: property.bathrooms,
                }
            })
            .collect())
    }
}

/// Listing resolver stand-in for the scraping pipeline. Recovers the address
/// from the URL slug and fills the remaining fields with the scraper's
/// historical fallbacks.
#[derive(Default)]
pub(crate) struct StaticListingResolver;

impl ListingResolver for StaticListingResolver {
    fn resolve(&self, zillow_url: &str) -> Result<PropertyRecord, ResolveError> {
        let trimmed = zillow_url.trim();
        if trimmed.is_empty() || !trimmed.contains("zillow.com") {
            return Err(ResolveError::UnsupportedUrl(trimmed.to_string()));
        }

        let address = trimmed
            .split("/homedetails/")
            .nth(1)
            .and_then(|rest| rest.split('/').next())
            .map(|slug| slug.replace('-', " "))
            .filter(|candidate| !candidate.trim().is_empty())
            .unwrap_or_else(|| "Unknown address".to_string());

        Ok(PropertyRecord {
            address,
            price: 400_000,
            sqft: 1_800,
            bedrooms: 3,
            bathrooms: 2.0,
            year_built: 1990,
            property_type: PropertyType::House,
        })
    }
}

pub(crate) fn default_evaluator_config(fair_price_band: Option<f64>) -> EvaluatorConfig {
    let mut config = EvaluatorConfig::default();
    if let Some(band) = fair_price_band {
        config.fair_price_band = band;
    }
    config
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "house" | "single-family" => Ok(PropertyType::House),
        "condo" => Ok(PropertyType::Condo),
        "townhouse" => Ok(PropertyType::Townhouse),
        other => Err(format!(
            "unknown property type '{other}' (expected house, condo, or townhouse)"
        )),
    }
}
