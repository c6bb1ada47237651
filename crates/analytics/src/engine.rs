use crate::error::AnalyticsError;
use crate::report::{
    GrowthTransition, ObservationGap, PeriodGrowth, SummaryStatistics, TargetComparison,
    TrendRecord,
};
use core_types::{Direction, GrowthShift, ObservationSeries};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use std::cmp::Ordering;

/// A stateless calculator for deriving summary and trend metrics from a
/// series of periodic observations.
///
/// The three operations are independent and composable; callers invoke them
/// in isolation on the same `ObservationSeries` without an orchestrating
/// layer. None of them mutate their input or hold state between calls, so
/// identical input always yields identical output.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes descriptive statistics over a non-empty series.
    ///
    /// # Errors
    ///
    /// - `EmptySeries` if the series has zero observations.
    /// - `DivisionByZero` if the mean is zero while deriving the coefficient
    ///   of variation. The failure is surfaced, never replaced by a default.
    pub fn compute_summary(
        &self,
        series: &ObservationSeries,
    ) -> Result<SummaryStatistics, AnalyticsError> {
        if series.is_empty() {
            return Err(AnalyticsError::EmptySeries);
        }
        tracing::debug!(observations = series.len(), "computing summary statistics");

        let values = series.values();
        let n = Decimal::from(values.len());

        let sum: Decimal = values.iter().sum();
        let mean = sum / n;

        let mut sorted = values.clone();
        sorted.sort();
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / Decimal::from(2)
        };

        // Population variance: the series is the entire observed population
        // for the reporting horizon, so divide by N rather than N-1.
        let variance = values
            .iter()
            .map(|v| (*v - mean) * (*v - mean))
            .sum::<Decimal>()
            / n;
        let standard_deviation = variance.sqrt().ok_or_else(|| {
            AnalyticsError::InternalError(
                "Failed to calculate square root for variance".to_string(),
            )
        })?;

        if mean.is_zero() {
            return Err(AnalyticsError::DivisionByZero(
                "coefficient_of_variation".to_string(),
            ));
        }
        let coefficient_of_variation_pct = standard_deviation / mean * Decimal::from(100);

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        Ok(SummaryStatistics {
            mean,
            median,
            standard_deviation,
            coefficient_of_variation_pct,
            min,
            max,
            range: max - min,
        })
    }

    /// Computes period-over-period growth and qualitative trend labels.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if the series has fewer than 2 observations.
    /// - `DivisionByZero` if any prior-period value is zero. The whole
    ///   operation fails atomically; no partial growth vector is returned.
    pub fn compute_trend(
        &self,
        series: &ObservationSeries,
    ) -> Result<TrendRecord, AnalyticsError> {
        let observations = series.observations();
        if observations.len() < 2 {
            return Err(AnalyticsError::InsufficientData(observations.len()));
        }
        tracing::debug!(observations = observations.len(), "computing trend record");

        let mut growth = Vec::with_capacity(observations.len() - 1);
        for pair in observations.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);
            if prev.value.is_zero() {
                return Err(AnalyticsError::DivisionByZero(format!(
                    "period_over_period_growth from '{}'",
                    prev.period
                )));
            }
            growth.push(PeriodGrowth {
                from_period: prev.period.clone(),
                to_period: curr.period.clone(),
                growth_pct: (curr.value - prev.value) / prev.value * Decimal::from(100),
            });
        }

        let first = observations[0].value;
        let last = observations[observations.len() - 1].value;
        let overall_direction = match last.cmp(&first) {
            Ordering::Greater => Direction::Increasing,
            Ordering::Less => Direction::Decreasing,
            Ordering::Equal => Direction::Flat,
        };

        // A second difference needs two growth measurements, hence three
        // observations. Below that the field is omitted, not defaulted.
        let acceleration = if observations.len() >= 3 {
            Some(
                growth
                    .windows(2)
                    .map(|w| GrowthTransition {
                        period: w[1].to_period.clone(),
                        shift: match w[1].growth_pct.cmp(&w[0].growth_pct) {
                            Ordering::Greater => GrowthShift::Accelerating,
                            Ordering::Less => GrowthShift::Decelerating,
                            Ordering::Equal => GrowthShift::Steady,
                        },
                    })
                    .collect(),
            )
        } else {
            None
        };

        Ok(TrendRecord {
            growth,
            overall_direction,
            acceleration,
        })
    }

    /// Measures every observation, and the aggregate mean, against a single
    /// benchmark value.
    ///
    /// # Errors
    ///
    /// - `InvalidTarget` if the target is zero or negative.
    /// - `EmptySeries` if the series has zero observations (the aggregate
    ///   figures use the mean).
    pub fn compute_target_comparison(
        &self,
        series: &ObservationSeries,
        target: Decimal,
    ) -> Result<TargetComparison, AnalyticsError> {
        if target <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidTarget(target));
        }
        if series.is_empty() {
            return Err(AnalyticsError::EmptySeries);
        }
        tracing::debug!(observations = series.len(), %target, "computing target comparison");

        let per_observation = series
            .observations()
            .iter()
            .map(|obs| {
                let gap = obs.value - target;
                ObservationGap {
                    period: obs.period.clone(),
                    value: obs.value,
                    gap,
                    percent_above_target: gap / target * Decimal::from(100),
                }
            })
            .collect();

        let values = series.values();
        let mean = values.iter().sum::<Decimal>() / Decimal::from(values.len());
        let mean_gap = mean - target;

        Ok(TargetComparison {
            target,
            mean_gap,
            mean_percent_above_target: mean_gap / target * Decimal::from(100),
            per_observation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Observation;
    use rust_decimal_macros::dec;

    fn series(entries: &[(&str, Decimal)]) -> ObservationSeries {
        let observations = entries
            .iter()
            .map(|(period, value)| Observation::new(*period, *value).unwrap())
            .collect();
        ObservationSeries::new(observations).unwrap()
    }

    /// The fiscal 2024 quarterly dataset used throughout the repository.
    fn quarterly_2024() -> ObservationSeries {
        series(&[
            ("Q1 2024", dec!(225.60)),
            ("Q2 2024", dec!(228.97)),
            ("Q3 2024", dec!(234.24)),
            ("Q4 2024", dec!(234.71)),
        ])
    }

    #[test]
    fn summary_matches_fiscal_2024_scenario() {
        let engine = AnalyticsEngine::new();
        let summary = engine.compute_summary(&quarterly_2024()).unwrap();

        assert_eq!(summary.mean, dec!(230.88));
        assert_eq!(summary.median, dec!(231.605));
        assert_eq!(summary.min, dec!(225.60));
        assert_eq!(summary.max, dec!(234.71));
        assert_eq!(summary.range, dec!(9.11));
        // Population formula: sqrt(57.4850 / 4).
        assert_eq!(summary.standard_deviation.round_dp(2), dec!(3.79));
        assert_eq!(summary.coefficient_of_variation_pct.round_dp(2), dec!(1.64));
    }

    #[test]
    fn summary_bounds_hold_for_unordered_values() {
        let engine = AnalyticsEngine::new();
        let summary = engine
            .compute_summary(&series(&[
                ("Q1", dec!(40.00)),
                ("Q2", dec!(10.00)),
                ("Q3", dec!(25.00)),
            ]))
            .unwrap();

        assert!(summary.min <= summary.median && summary.median <= summary.max);
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
        assert_eq!(summary.median, dec!(25.00));
    }

    #[test]
    fn summary_is_deterministic() {
        let engine = AnalyticsEngine::new();
        let data = quarterly_2024();
        assert_eq!(
            engine.compute_summary(&data).unwrap(),
            engine.compute_summary(&data).unwrap()
        );
    }

    #[test]
    fn identical_values_have_zero_deviation() {
        let engine = AnalyticsEngine::new();
        let summary = engine
            .compute_summary(&series(&[
                ("Q1", dec!(150.00)),
                ("Q2", dec!(150.00)),
                ("Q3", dec!(150.00)),
            ]))
            .unwrap();

        assert_eq!(summary.standard_deviation, Decimal::ZERO);
        assert_eq!(summary.coefficient_of_variation_pct, Decimal::ZERO);
        assert_eq!(summary.range, Decimal::ZERO);
    }

    #[test]
    fn spread_values_have_positive_deviation() {
        let engine = AnalyticsEngine::new();
        let summary = engine
            .compute_summary(&series(&[("Q1", dec!(100.00)), ("Q2", dec!(200.00))]))
            .unwrap();
        assert!(summary.standard_deviation > Decimal::ZERO);
    }

    #[test]
    fn empty_series_is_rejected() {
        let engine = AnalyticsEngine::new();
        let empty = ObservationSeries::new(vec![]).unwrap();
        assert_eq!(
            engine.compute_summary(&empty),
            Err(AnalyticsError::EmptySeries)
        );
    }

    #[test]
    fn all_zero_series_fails_coefficient_of_variation() {
        let engine = AnalyticsEngine::new();
        let result = engine.compute_summary(&series(&[
            ("Q1", Decimal::ZERO),
            ("Q2", Decimal::ZERO),
        ]));
        assert!(matches!(result, Err(AnalyticsError::DivisionByZero(_))));
    }

    #[test]
    fn trend_matches_fiscal_2024_scenario() {
        let engine = AnalyticsEngine::new();
        let trend = engine.compute_trend(&quarterly_2024()).unwrap();

        let rounded: Vec<Decimal> = trend.growth.iter().map(|g| g.growth_pct.round_dp(2)).collect();
        assert_eq!(rounded, vec![dec!(1.49), dec!(2.30), dec!(0.20)]);
        assert_eq!(trend.growth[0].from_period, "Q1 2024");
        assert_eq!(trend.growth[0].to_period, "Q2 2024");
        assert_eq!(trend.overall_direction, Direction::Increasing);

        let transitions = trend.acceleration.unwrap();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].period, "Q3 2024");
        assert_eq!(transitions[0].shift, GrowthShift::Accelerating);
        assert_eq!(transitions[1].period, "Q4 2024");
        assert_eq!(transitions[1].shift, GrowthShift::Decelerating);
    }

    #[test]
    fn single_observation_is_insufficient_for_trend() {
        let engine = AnalyticsEngine::new();
        let result = engine.compute_trend(&series(&[("Q1", dec!(225.60))]));
        assert_eq!(result, Err(AnalyticsError::InsufficientData(1)));
    }

    #[test]
    fn two_observations_omit_acceleration() {
        let engine = AnalyticsEngine::new();
        let trend = engine
            .compute_trend(&series(&[("Q1", dec!(100.00)), ("Q2", dec!(100.00))]))
            .unwrap();
        assert_eq!(trend.growth.len(), 1);
        assert_eq!(trend.overall_direction, Direction::Flat);
        assert!(trend.acceleration.is_none());
    }

    #[test]
    fn declining_series_is_labeled_decreasing() {
        let engine = AnalyticsEngine::new();
        let trend = engine
            .compute_trend(&series(&[("Q1", dec!(200.00)), ("Q2", dec!(180.00))]))
            .unwrap();
        assert_eq!(trend.overall_direction, Direction::Decreasing);
        assert_eq!(trend.growth[0].growth_pct, dec!(-10.00));
    }

    #[test]
    fn zero_prior_period_fails_atomically() {
        let engine = AnalyticsEngine::new();
        let result = engine.compute_trend(&series(&[
            ("Q1", dec!(100.00)),
            ("Q2", Decimal::ZERO),
            ("Q3", dec!(50.00)),
        ]));
        assert!(matches!(result, Err(AnalyticsError::DivisionByZero(_))));
    }

    #[test]
    fn target_comparison_matches_fiscal_2024_scenario() {
        let engine = AnalyticsEngine::new();
        let comparison = engine
            .compute_target_comparison(&quarterly_2024(), dec!(150.00))
            .unwrap();

        assert_eq!(comparison.mean_gap, dec!(80.88));
        assert_eq!(comparison.mean_percent_above_target, dec!(53.92));
        assert_eq!(comparison.per_observation.len(), 4);
        assert_eq!(comparison.per_observation[0].gap, dec!(75.60));
        assert_eq!(
            comparison.per_observation[0].percent_above_target,
            dec!(50.40)
        );
    }

    #[test]
    fn zero_target_is_rejected() {
        let engine = AnalyticsEngine::new();
        let result = engine.compute_target_comparison(&quarterly_2024(), Decimal::ZERO);
        assert_eq!(result, Err(AnalyticsError::InvalidTarget(Decimal::ZERO)));
    }

    #[test]
    fn negative_target_is_rejected() {
        let engine = AnalyticsEngine::new();
        let result = engine.compute_target_comparison(&quarterly_2024(), dec!(-150.00));
        assert!(matches!(result, Err(AnalyticsError::InvalidTarget(_))));
    }

    #[test]
    fn target_comparison_of_empty_series_is_rejected() {
        let engine = AnalyticsEngine::new();
        let empty = ObservationSeries::new(vec![]).unwrap();
        assert_eq!(
            engine.compute_target_comparison(&empty, dec!(150.00)),
            Err(AnalyticsError::EmptySeries)
        );
    }
}
