use crate::error::ConfigError;
use core_types::{CoreError, Observation, ObservationSeries};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub server: ServerSettings,
    pub output: OutputSettings,
}

/// The dataset and benchmark that every analysis run operates on.
///
/// There is no process-wide dataset singleton: these settings build an
/// explicit `ObservationSeries` that is passed into every engine call.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    /// The industry benchmark the observed costs are compared against.
    pub target_cac: Decimal,
    /// Quarterly cost observations, listed in chronological order.
    pub quarters: Vec<QuarterEntry>,
}

/// A single configured quarterly reading.
#[derive(Debug, Clone, Deserialize)]
pub struct QuarterEntry {
    /// The reporting period label (e.g. "Q1 2024").
    pub period: String,
    /// The observed customer acquisition cost for that period.
    pub cac: Decimal,
}

impl AnalysisSettings {
    /// Builds the validated, chronologically ordered series that the engine
    /// operates on.
    pub fn to_series(&self) -> Result<ObservationSeries, CoreError> {
        let observations = self
            .quarters
            .iter()
            .map(|q| Observation::new(q.period.clone(), q.cac))
            .collect::<Result<Vec<_>, _>>()?;
        ObservationSeries::new(observations)
    }
}

/// Parameters for the interactive dashboard server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// Resolves the configured host and port into a bindable address.
    pub fn address(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self.host.parse().map_err(|_| {
            ConfigError::ValidationError(format!("invalid server host '{}'", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Parameters for the presentation artifacts written to disk.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// Directory that receives the report and chart documents.
    pub directory: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn settings() -> AnalysisSettings {
        AnalysisSettings {
            target_cac: dec!(150.00),
            quarters: vec![
                QuarterEntry {
                    period: "Q1 2024".to_string(),
                    cac: dec!(225.60),
                },
                QuarterEntry {
                    period: "Q2 2024".to_string(),
                    cac: dec!(228.97),
                },
            ],
        }
    }

    #[test]
    fn configured_quarters_become_an_ordered_series() {
        let series = settings().to_series().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.first().unwrap().period, "Q1 2024");
        assert_eq!(series.last().unwrap().value, dec!(228.97));
    }

    #[test]
    fn duplicate_configured_quarters_are_rejected() {
        let mut bad = settings();
        bad.quarters[1].period = "Q1 2024".to_string();
        assert!(bad.to_series().is_err());
    }

    #[test]
    fn server_address_parses_host_and_port() {
        let server = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(server.address().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn invalid_host_is_a_validation_error() {
        let server = ServerSettings {
            host: "not-an-ip".to_string(),
            port: 3000,
        };
        assert!(matches!(
            server.address(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
