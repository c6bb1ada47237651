use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single reading of customer acquisition cost for one reporting period.
///
/// Observations are immutable once constructed. The period label identifies
/// the fiscal period (e.g. "Q1 2024") and the value is the monetary amount
/// observed for that period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub period: String,
    pub value: Decimal,
}

impl Observation {
    /// Constructs a validated observation.
    ///
    /// The period label must be non-empty and the value must be a
    /// non-negative monetary amount.
    pub fn new(period: impl Into<String>, value: Decimal) -> Result<Self, CoreError> {
        let period = period.into();
        if period.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "period".to_string(),
                "period label must not be empty".to_string(),
            ));
        }
        if value.is_sign_negative() {
            return Err(CoreError::InvalidInput(
                "value".to_string(),
                format!("monetary amount must be non-negative, got {}", value),
            ));
        }
        Ok(Self { period, value })
    }
}

/// An ordered sequence of observations for one reporting horizon.
///
/// Insertion order is chronological order; period labels are unique within
/// the series. Both invariants are enforced at construction, so every
/// downstream consumer can rely on them without re-validating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSeries {
    observations: Vec<Observation>,
}

impl ObservationSeries {
    /// Constructs a series from chronologically ordered observations.
    ///
    /// Fails with `CoreError::InvalidInput` if two observations share a
    /// period label.
    pub fn new(observations: Vec<Observation>) -> Result<Self, CoreError> {
        for (i, obs) in observations.iter().enumerate() {
            if observations[..i].iter().any(|o| o.period == obs.period) {
                return Err(CoreError::InvalidInput(
                    "observations".to_string(),
                    format!("duplicate period label '{}'", obs.period),
                ));
            }
        }
        Ok(Self { observations })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The observations in chronological order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// The raw values in chronological order.
    pub fn values(&self) -> Vec<Decimal> {
        self.observations.iter().map(|o| o.value).collect()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn observation_rejects_negative_value() {
        let result = Observation::new("Q1 2024", dec!(-1.00));
        assert!(matches!(result, Err(CoreError::InvalidInput(field, _)) if field == "value"));
    }

    #[test]
    fn observation_rejects_blank_period() {
        let result = Observation::new("  ", dec!(100.00));
        assert!(matches!(result, Err(CoreError::InvalidInput(field, _)) if field == "period"));
    }

    #[test]
    fn series_rejects_duplicate_period_labels() {
        let observations = vec![
            Observation::new("Q1 2024", dec!(100.00)).unwrap(),
            Observation::new("Q1 2024", dec!(110.00)).unwrap(),
        ];
        let result = ObservationSeries::new(observations);
        assert!(matches!(result, Err(CoreError::InvalidInput(_, _))));
    }

    #[test]
    fn series_preserves_insertion_order() {
        let observations = vec![
            Observation::new("Q1 2024", dec!(225.60)).unwrap(),
            Observation::new("Q2 2024", dec!(228.97)).unwrap(),
            Observation::new("Q3 2024", dec!(234.24)).unwrap(),
        ];
        let series = ObservationSeries::new(observations).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.first().unwrap().period, "Q1 2024");
        assert_eq!(series.last().unwrap().period, "Q3 2024");
        assert_eq!(
            series.values(),
            vec![dec!(225.60), dec!(228.97), dec!(234.24)]
        );
    }

    #[test]
    fn zero_value_is_a_valid_observation() {
        assert!(Observation::new("Q1 2024", Decimal::ZERO).is_ok());
    }
}
