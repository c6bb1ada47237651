use analytics::AnalyticsEngine;
use axum::{
    Router,
    routing::{get, post},
};
use configuration::AnalysisSettings;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// The engine is stateless and the settings are immutable, so handlers can
/// recompute concurrently without any locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: AnalyticsEngine,
    pub settings: AnalysisSettings,
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, settings: AnalysisSettings) -> anyhow::Result<()> {
    // Note: Tracing is initialized by the main application, so we don't
    // initialize it again here.
    let app_state = Arc::new(AppState {
        engine: AnalyticsEngine::new(),
        settings,
    });

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    let app = Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/trend", get(handlers::get_trend))
        .route("/api/target-comparison", get(handlers::get_target_comparison))
        .route("/api/analysis", get(handlers::get_analysis))
        .route("/api/recompute", post(handlers::recompute))
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every
        // incoming request.
        .layer(TraceLayer::new_for_http());

    tracing::info!("Dashboard server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
