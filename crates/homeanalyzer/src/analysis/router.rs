use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::AnalyzeRequest;
use super::seams::{ComparableSales, ListingResolver, ValuationModel};
use super::service::{AnalysisServiceError, PropertyAnalysisService};
use super::trends::neighborhood_trends;

/// Router builder exposing the analysis endpoints.
pub fn analysis_router<M, C, L>(service: Arc<PropertyAnalysisService<M, C, L>>) -> Router
where
    M: ValuationModel + 'static,
    C: ComparableSales + 'static,
    L: ListingResolver + 'static,
{
    Router::new()
        .route("/api/analyze-property", post(analyze_handler::<M, C, L>))
        .route(
            "/api/neighborhood-trends",
            post(trends_handler::<M, C, L>),
        )
        .with_state(service)
}

pub(crate) async fn analyze_handler<M, C, L>(
    State(service): State<Arc<PropertyAnalysisService<M, C, L>>>,
    axum::Json(request): axum::Json<AnalyzeRequest>,
) -> Response
where
    M: ValuationModel + 'static,
    C: ComparableSales + 'static,
    L: ListingResolver + 'static,
{
    let as_of = Local::now().date_naive();
    match service.analyze(request, as_of) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AnalysisServiceError::Input(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(AnalysisServiceError::Resolve(error)) => {
            warn!(error = %error, "listing resolution failed");
            let payload = json!({ "error": "could not fetch property data" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(AnalysisServiceError::Model(error)) => {
            warn!(error = %error, "valuation model failure");
            let payload = json!({ "error": "analysis failed" });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendsRequest {
    pub(crate) address: String,
}

pub(crate) async fn trends_handler<M, C, L>(
    State(_service): State<Arc<PropertyAnalysisService<M, C, L>>>,
    axum::Json(request): axum::Json<TrendsRequest>,
) -> Response
where
    M: ValuationModel + 'static,
    C: ComparableSales + 'static,
    L: ListingResolver + 'static,
{
    let as_of = Local::now().date_naive();
    match neighborhood_trends(&request.address, as_of) {
        Ok(trends) => (StatusCode::OK, axum::Json(trends)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
