use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Cannot compute statistics over an empty series")]
    EmptySeries,

    #[error("Not enough data to perform calculation: trend analysis requires at least 2 observations, got {0}")]
    InsufficientData(usize),

    #[error("Calculation error: Division by zero encountered in metric '{0}'")]
    DivisionByZero(String),

    #[error("Comparison target must be positive, got {0}")]
    InvalidTarget(Decimal),

    #[error("An unexpected error occurred during analytics calculation: {0}")]
    InternalError(String),
}
