use crate::cli::ServeArgs;
use crate::infra::{
    default_evaluator_config, AppState, HedonicValuationModel, NearbySalesIndex,
    StaticListingResolver,
};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Datelike, Local};
use homeanalyzer::analysis::PropertyAnalysisService;
use homeanalyzer::config::AppConfig;
use homeanalyzer::error::AppError;
use homeanalyzer::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let today = Local::now().date_naive();
    let service = Arc::new(PropertyAnalysisService::new(
        Arc::new(HedonicValuationModel::new(today.year())),
        Arc::new(NearbySalesIndex::new(today)),
        Arc::new(StaticListingResolver),
        default_evaluator_config(config.fair_price_band),
    ));

    let app = with_service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "home analyzer api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
