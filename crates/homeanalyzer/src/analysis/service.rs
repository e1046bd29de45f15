use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use super::domain::{
    AnalyzeRequest, ComparableSale, InvalidInput, MarketContext, PropertyRecord, ValuationResult,
};
use super::evaluation::{DealAssessment, DealEvaluator, EvaluatorConfig};
use super::intake::PropertyIntake;
use super::seams::{ComparableSales, ListingResolver, ModelError, ResolveError, ValuationModel};

const DEFAULT_COMPARABLE_LIMIT: usize = 3;

/// Composes intake validation, the valuation model, the comparable-sales
/// lookup, and the deal evaluator behind one entry point. Every handle is an
/// injected `Arc`; the service holds no mutable state and each request is
/// independent and idempotent.
pub struct PropertyAnalysisService<M, C, L> {
    model: Arc<M>,
    comparables: Arc<C>,
    resolver: Arc<L>,
    intake: PropertyIntake,
    evaluator: DealEvaluator,
    comparable_limit: usize,
}

impl<M, C, L> PropertyAnalysisService<M, C, L>
where
    M: ValuationModel + 'static,
    C: ComparableSales + 'static,
    L: ListingResolver + 'static,
{
    pub fn new(model: Arc<M>, comparables: Arc<C>, resolver: Arc<L>, config: EvaluatorConfig) -> Self {
        Self {
            model,
            comparables,
            resolver,
            intake: PropertyIntake::default(),
            evaluator: DealEvaluator::new(config),
            comparable_limit: DEFAULT_COMPARABLE_LIMIT,
        }
    }

    /// Run a full analysis: normalize the request into one canonical record,
    /// predict, gather comparables (degrading to none on transport failure),
    /// and evaluate.
    pub fn analyze(
        &self,
        request: AnalyzeRequest,
        as_of: NaiveDate,
    ) -> Result<AnalysisReport, AnalysisServiceError> {
        let property = match request {
            AnalyzeRequest::ZillowUrl { zillow_url } => self.resolver.resolve(&zillow_url)?,
            AnalyzeRequest::Property(property) => property,
        };
        let property = self.intake.validate(property, as_of)?;

        let valuation = self.model.predict(&property)?;

        let comparables = match self
            .comparables
            .find_comparables(&property, self.comparable_limit)
        {
            Ok(sales) => sales,
            Err(err) => {
                warn!(error = %err, address = %property.address, "comparable sales lookup degraded");
                Vec::new()
            }
        };

        let context = if comparables.is_empty() {
            MarketContext::neutral(as_of)
        } else {
            MarketContext::with_recent_sales(as_of, comparables.len() as u32)
        };

        let assessment = self.evaluator.evaluate(&property, &valuation, &context)?;
        let analysis = AnalysisView::new(&property, &valuation, assessment);

        Ok(AnalysisReport {
            property,
            analysis,
            comparables,
        })
    }
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Input(#[from] InvalidInput),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Wire shape of the `analysis` block: the deal assessment plus the derived
/// price-per-square-foot figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    pub predicted_value: u64,
    #[serde(flatten)]
    pub assessment: DealAssessment,
    pub price_per_sqft: u32,
    pub predicted_price_per_sqft: u32,
}

impl AnalysisView {
    pub(crate) fn new(
        property: &PropertyRecord,
        valuation: &ValuationResult,
        assessment: DealAssessment,
    ) -> Self {
        Self {
            predicted_value: valuation.predicted_value.round().max(0.0) as u64,
            assessment,
            price_per_sqft: (property.price as f64 / property.sqft as f64).round() as u32,
            predicted_price_per_sqft: valuation.predicted_price_per_sqft.round().max(0.0) as u32,
        }
    }
}

/// Complete response payload for one analysis request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub property: PropertyRecord,
    pub analysis: AnalysisView,
    pub comparables: Vec<ComparableSale>,
}
