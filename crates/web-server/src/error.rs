use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] analytics::AnalyticsError),

    #[error("Series error: {0}")]
    Series(#[from] core_types::CoreError),

    #[error("Chart rendering error: {0}")]
    Chart(#[from] charts::ChartError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Engine and series failures are validation failures of the
            // configured input; the message is safe to surface.
            AppError::Engine(engine_err) => {
                tracing::error!(error = ?engine_err, "Engine error.");
                (StatusCode::UNPROCESSABLE_ENTITY, engine_err.to_string())
            }
            AppError::Series(series_err) => {
                tracing::error!(error = ?series_err, "Series error.");
                (StatusCode::UNPROCESSABLE_ENTITY, series_err.to_string())
            }
            AppError::Chart(chart_err) => {
                tracing::error!(error = ?chart_err, "Chart rendering error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while rendering the dashboard".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
