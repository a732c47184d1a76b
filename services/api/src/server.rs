use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryRecommendationRepository};
use crate::routes::app;
use axum_prometheus::PrometheusMetricLayer;
use rigsmith::config::AppConfig;
use rigsmith::error::AppError;
use rigsmith::recommendation::{BuildSessionService, RecommendationEngine};
use rigsmith::telemetry;
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

    let catalog = load_catalog(config.engine.catalog_path.as_deref())?.install()?;
    let engine = Arc::new(RecommendationEngine::with_config(catalog, &config.engine));
    let repository = Arc::new(InMemoryRecommendationRepository::default());
    let service = Arc::new(BuildSessionService::new(engine, repository));

    let app = app(service, app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        components = catalog.len(),
        "build recommendation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
