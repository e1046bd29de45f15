use super::domain::{ComparableSale, PropertyRecord, ValuationResult};

/// The predictive valuation model. Opaque to the core: one property record
/// in, one estimate out. Failures are non-retryable and surfaced unchanged.
pub trait ValuationModel: Send + Sync {
    fn predict(&self, property: &PropertyRecord) -> Result<ValuationResult, ModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("valuation model unavailable: {0}")]
    Unavailable(String),
    #[error("feature outside model domain: {field}")]
    InvalidFeatureVector { field: String },
}

/// Nearby recent sales for display context. An empty list is a successful
/// answer; only transport failures error, and callers degrade on those.
pub trait ComparableSales: Send + Sync {
    fn find_comparables(
        &self,
        property: &PropertyRecord,
        limit: usize,
    ) -> Result<Vec<ComparableSale>, ComparablesError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ComparablesError {
    #[error("comparable sales lookup unreachable: {0}")]
    Transport(String),
}

/// Resolves a listing URL into a canonical property record, for the
/// `{ "zillow_url": ... }` input mode.
pub trait ListingResolver: Send + Sync {
    fn resolve(&self, zillow_url: &str) -> Result<PropertyRecord, ResolveError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("unsupported listing url: {0}")]
    UnsupportedUrl(String),
    #[error("listing page unreachable: {0}")]
    Unreachable(String),
}
