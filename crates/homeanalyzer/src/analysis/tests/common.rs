use std::sync::Arc;

use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::analysis::domain::{ComparableSale, PropertyRecord, PropertyType, ValuationResult};
use crate::analysis::evaluation::{DealEvaluator, EvaluatorConfig};
use crate::analysis::seams::{
    ComparableSales, ComparablesError, ListingResolver, ModelError, ResolveError, ValuationModel,
};
use crate::analysis::service::PropertyAnalysisService;

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date")
}

pub(super) fn sample_property() -> PropertyRecord {
    PropertyRecord {
        address: "742 Evergreen Terrace, Springfield".to_string(),
        price: 450_000,
        sqft: 1_850,
        bedrooms: 3,
        bathrooms: 2.0,
        year_built: 1998,
        property_type: PropertyType::House,
    }
}

pub(super) fn evaluator() -> DealEvaluator {
    DealEvaluator::new(EvaluatorConfig::default())
}

pub(super) fn valuation_for(property: &PropertyRecord, predicted_value: f64) -> ValuationResult {
    ValuationResult::from_value(predicted_value, property.sqft)
}

/// Model double returning a fixed estimate regardless of the property.
pub(super) struct FixedModel {
    pub(super) value: f64,
}

impl ValuationModel for FixedModel {
    fn predict(&self, property: &PropertyRecord) -> Result<ValuationResult, ModelError> {
        Ok(ValuationResult::from_value(self.value, property.sqft))
    }
}

/// Model double simulating a missing artifact.
pub(super) struct OfflineModel;

impl ValuationModel for OfflineModel {
    fn predict(&self, _property: &PropertyRecord) -> Result<ValuationResult, ModelError> {
        Err(ModelError::Unavailable("artifact not loaded".to_string()))
    }
}

/// Comparables double returning `count` synthetic nearby sales.
pub(super) struct StaticComparables {
    pub(super) count: usize,
}

impl ComparableSales for StaticComparables {
    fn find_comparables(
        &self,
        property: &PropertyRecord,
        limit: usize,
    ) -> Result<Vec<ComparableSale>, ComparablesError> {
        let count = self.count.min(limit);
        Ok((0..count)
            .map(|idx| ComparableSale {
                address: format!("Similar property near {}", property.address),
                sale_price: property.price.saturating_sub(10_000 * (idx as u64 + 1)),
                sale_date: as_of() - Duration::days(30 * (idx as i64 + 1)),
                sqft: property.sqft,
                bedrooms: property.bedrooms,
                bathrooms: property.bathrooms,
            })
            .collect())
    }
}

/// Comparables double simulating a transport outage.
pub(super) struct FailingComparables;

impl ComparableSales for FailingComparables {
    fn find_comparables(
        &self,
        _property: &PropertyRecord,
        _limit: usize,
    ) -> Result<Vec<ComparableSale>, ComparablesError> {
        Err(ComparablesError::Transport("lookup timed out".to_string()))
    }
}

/// Resolver double returning the sample property for any supported URL.
pub(super) struct SampleResolver;

impl ListingResolver for SampleResolver {
    fn resolve(&self, zillow_url: &str) -> Result<PropertyRecord, ResolveError> {
        if !zillow_url.contains("zillow.com") {
            return Err(ResolveError::UnsupportedUrl(zillow_url.to_string()));
        }
        Ok(sample_property())
    }
}

/// Resolver double simulating an unreachable listing page.
pub(super) struct DeadResolver;

impl ListingResolver for DeadResolver {
    fn resolve(&self, zillow_url: &str) -> Result<PropertyRecord, ResolveError> {
        Err(ResolveError::Unreachable(zillow_url.to_string()))
    }
}

pub(super) fn build_service(
    predicted_value: f64,
) -> PropertyAnalysisService<FixedModel, StaticComparables, SampleResolver> {
    PropertyAnalysisService::new(
        Arc::new(FixedModel {
            value: predicted_value,
        }),
        Arc::new(StaticComparables { count: 3 }),
        Arc::new(SampleResolver),
        EvaluatorConfig::default(),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
