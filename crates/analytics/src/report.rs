use core_types::{Direction, GrowthShift};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Descriptive statistics derived from one observation series.
///
/// This struct is one of the outputs of the `AnalyticsEngine` and serves as
/// the data transfer object for summary results throughout the system. It has
/// no identity beyond its source series and is recomputed whenever the series
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean: Decimal,
    pub median: Decimal,
    /// Population standard deviation (divide by N, not N-1). The series is
    /// the entire observed population for the year, not a sample of it.
    pub standard_deviation: Decimal,
    /// Standard deviation as a percentage of the mean.
    pub coefficient_of_variation_pct: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub range: Decimal,
}

/// Percentage change between two chronologically adjacent observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodGrowth {
    pub from_period: String,
    pub to_period: String,
    pub growth_pct: Decimal,
}

/// A change in the growth rate itself, observed at `period`.
///
/// The shift compares the growth into `period` against the growth into the
/// period before it (a second difference of the raw values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthTransition {
    pub period: String,
    pub shift: GrowthShift,
}

/// Trend metrics derived from one observation series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    /// One entry per consecutive pair of observations, in chronological order.
    pub growth: Vec<PeriodGrowth>,
    /// Judged from the first and last observations only.
    pub overall_direction: Direction,
    /// Acceleration labels require at least 3 observations; with fewer the
    /// field is omitted entirely rather than defaulted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<Vec<GrowthTransition>>,
}

/// One observation measured against the comparison target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationGap {
    pub period: String,
    pub value: Decimal,
    /// value - target. Positive when the observation overshoots the target.
    pub gap: Decimal,
    /// gap / target, as a percentage.
    pub percent_above_target: Decimal,
}

/// A series measured against a single benchmark value, both per observation
/// and in aggregate (using the arithmetic mean).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetComparison {
    pub target: Decimal,
    pub mean_gap: Decimal,
    pub mean_percent_above_target: Decimal,
    pub per_observation: Vec<ObservationGap>,
}
