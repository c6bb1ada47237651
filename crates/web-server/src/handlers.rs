use crate::{AppState, error::AppError};
use analytics::{SummaryStatistics, TargetComparison, TrendRecord};
use axum::{extract::State, response::Html, Json};
use charts::ChartRenderer;
use chrono::{DateTime, Utc};
use core_types::ObservationSeries;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// One full recomputation of the analysis: the input series and target plus
/// every record the engine derives from them.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSnapshot {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub target: Decimal,
    pub series: ObservationSeries,
    pub summary: SummaryStatistics,
    pub trend: TrendRecord,
    pub target_comparison: TargetComparison,
}

/// Recomputes everything from the configured series.
///
/// There is no cached state to invalidate; each call rebuilds the series and
/// derives all three records from scratch.
fn build_snapshot(state: &AppState) -> Result<AnalysisSnapshot, AppError> {
    let series = state.settings.to_series()?;
    let summary = state.engine.compute_summary(&series)?;
    let trend = state.engine.compute_trend(&series)?;
    let target_comparison = state
        .engine
        .compute_target_comparison(&series, state.settings.target_cac)?;

    Ok(AnalysisSnapshot {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        target: state.settings.target_cac,
        series,
        summary,
        trend,
        target_comparison,
    })
}

/// # GET /
/// The performance dashboard, re-rendered from a fresh computation on every
/// request.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let snapshot = build_snapshot(&state)?;
    let document = ChartRenderer::new().dashboard(
        &snapshot.series,
        &snapshot.summary,
        &snapshot.trend,
        &snapshot.target_comparison,
    )?;
    Ok(Html(document))
}

/// # GET /api/summary
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SummaryStatistics>, AppError> {
    let series = state.settings.to_series()?;
    Ok(Json(state.engine.compute_summary(&series)?))
}

/// # GET /api/trend
pub async fn get_trend(State(state): State<Arc<AppState>>) -> Result<Json<TrendRecord>, AppError> {
    let series = state.settings.to_series()?;
    Ok(Json(state.engine.compute_trend(&series)?))
}

/// # GET /api/target-comparison
pub async fn get_target_comparison(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TargetComparison>, AppError> {
    let series = state.settings.to_series()?;
    Ok(Json(
        state
            .engine
            .compute_target_comparison(&series, state.settings.target_cac)?,
    ))
}

/// # GET /api/analysis
/// The full snapshot: series, target, and all three derived records.
pub async fn get_analysis(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalysisSnapshot>, AppError> {
    Ok(Json(build_snapshot(&state)?))
}

/// # POST /api/recompute
/// Accepts no input; triggers a fresh computation and returns the new
/// snapshot under a new run id.
pub async fn recompute(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalysisSnapshot>, AppError> {
    tracing::info!("recompute requested");
    Ok(Json(build_snapshot(&state)?))
}
