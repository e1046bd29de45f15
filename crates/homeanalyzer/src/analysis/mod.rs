//! Property analysis: intake validation, deal evaluation, and market trends.
//!
//! The valuation model, comparable-sales lookup, and listing resolver are
//! external collaborators reached through the traits in [`seams`]; the
//! [`service::PropertyAnalysisService`] composes them with the pure
//! [`evaluation::DealEvaluator`].

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod router;
pub mod seams;
pub mod service;
pub mod trends;

#[cfg(test)]
mod tests;

pub use domain::{
    AnalyzeRequest, ComparableSale, InvalidInput, MarketContext, MarketStatus, NeighborhoodTrends,
    PropertyRecord, PropertyType, TrendPoint, ValuationResult,
};
pub use evaluation::{DealAssessment, DealEvaluator, EvaluatorConfig, PricingAssessment, ValueDrivers};
pub use intake::{IntakeLimits, PropertyIntake};
pub use router::analysis_router;
pub use seams::{
    ComparableSales, ComparablesError, ListingResolver, ModelError, ResolveError, ValuationModel,
};
pub use service::{AnalysisReport, AnalysisServiceError, AnalysisView, PropertyAnalysisService};
pub use trends::neighborhood_trends;
