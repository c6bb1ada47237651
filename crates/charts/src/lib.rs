//! # Vantage Chart Renderer
//!
//! Produces the visualization artifacts: a trend chart, a gap-analysis
//! chart, and a multi-panel performance dashboard, each as one
//! self-contained HTML document with inline SVG and no external assets.
//!
//! Rendering is pure templating over the engine's derived records; the only
//! I/O in this crate is the final write of each artifact.

pub mod error;

mod dashboard;
mod document;
mod gap;
mod svg;
mod trend;

pub use error::ChartError;

use analytics::{SummaryStatistics, TargetComparison, TrendRecord};
use core_types::ObservationSeries;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

/// File name of the trend-analysis artifact.
pub const TREND_FILENAME: &str = "cac_trend_analysis.html";
/// File name of the gap-analysis artifact.
pub const GAP_FILENAME: &str = "cac_gap_analysis.html";
/// File name of the dashboard artifact.
pub const DASHBOARD_FILENAME: &str = "cac_performance_dashboard.html";

/// A stateless renderer producing the visualization artifacts.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the trend-analysis document: actual CAC per quarter against
    /// the industry target and the yearly average.
    pub fn trend_chart(
        &self,
        series: &ObservationSeries,
        summary: &SummaryStatistics,
        target: Decimal,
    ) -> Result<String, ChartError> {
        trend::trend_document(series, summary, target)
    }

    /// Renders the gap-analysis document: per-quarter distance from the
    /// industry target.
    pub fn gap_chart(&self, comparison: &TargetComparison) -> Result<String, ChartError> {
        gap::gap_document(comparison)
    }

    /// Renders the multi-panel performance dashboard.
    pub fn dashboard(
        &self,
        series: &ObservationSeries,
        summary: &SummaryStatistics,
        trend_record: &TrendRecord,
        comparison: &TargetComparison,
    ) -> Result<String, ChartError> {
        dashboard::dashboard_document(series, summary, trend_record, comparison)
    }

    /// Renders and persists all three artifacts into the output directory,
    /// returning the written paths in rendering order.
    pub fn write_all(
        &self,
        directory: &Path,
        series: &ObservationSeries,
        summary: &SummaryStatistics,
        trend_record: &TrendRecord,
        comparison: &TargetComparison,
    ) -> Result<Vec<PathBuf>, ChartError> {
        std::fs::create_dir_all(directory)?;
        let artifacts = [
            (
                TREND_FILENAME,
                self.trend_chart(series, summary, comparison.target)?,
            ),
            (GAP_FILENAME, self.gap_chart(comparison)?),
            (
                DASHBOARD_FILENAME,
                self.dashboard(series, summary, trend_record, comparison)?,
            ),
        ];

        let mut written = Vec::with_capacity(artifacts.len());
        for (name, document) in artifacts {
            let path = directory.join(name);
            std::fs::write(&path, document)?;
            tracing::info!(path = %path.display(), "chart artifact written");
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use core_types::Observation;
    use rust_decimal_macros::dec;

    fn quarterly_2024() -> ObservationSeries {
        ObservationSeries::new(vec![
            Observation::new("Q1 2024", dec!(225.60)).unwrap(),
            Observation::new("Q2 2024", dec!(228.97)).unwrap(),
            Observation::new("Q3 2024", dec!(234.24)).unwrap(),
            Observation::new("Q4 2024", dec!(234.71)).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn trend_chart_is_a_self_contained_document() {
        let engine = AnalyticsEngine::new();
        let series = quarterly_2024();
        let summary = engine.compute_summary(&series).unwrap();

        let document = ChartRenderer::new()
            .trend_chart(&series, &summary, dec!(150.00))
            .unwrap();

        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<svg"));
        assert!(document.contains("Industry Target ($150.00)"));
        assert!(document.contains("Average ($230.88)"));
        assert!(document.contains("Q4 2024"));
        assert!(!document.contains("<script src="));
    }

    #[test]
    fn gap_chart_annotates_each_quarter_gap() {
        let engine = AnalyticsEngine::new();
        let series = quarterly_2024();
        let comparison = engine
            .compute_target_comparison(&series, dec!(150.00))
            .unwrap();

        let document = ChartRenderer::new().gap_chart(&comparison).unwrap();
        assert!(document.contains("$75.60"));
        assert!(document.contains("$84.71"));
        assert!(document.contains("Q1 2024"));
    }

    #[test]
    fn dashboard_shows_all_panels_and_key_metrics() {
        let engine = AnalyticsEngine::new();
        let series = quarterly_2024();
        let summary = engine.compute_summary(&series).unwrap();
        let trend = engine.compute_trend(&series).unwrap();
        let comparison = engine
            .compute_target_comparison(&series, dec!(150.00))
            .unwrap();

        let document = ChartRenderer::new()
            .dashboard(&series, &summary, &trend, &comparison)
            .unwrap();

        assert!(document.contains("Quarterly CAC Trend"));
        assert!(document.contains("Gap to Target"));
        assert!(document.contains("Percentage Above Target"));
        assert!(document.contains("Key Metrics"));
        assert!(document.contains("$230.88"));
        assert!(document.contains("increasing"));
    }

    #[test]
    fn empty_series_cannot_be_plotted() {
        let summary = SummaryStatistics {
            mean: dec!(1),
            median: dec!(1),
            standard_deviation: dec!(0),
            coefficient_of_variation_pct: dec!(0),
            min: dec!(1),
            max: dec!(1),
            range: dec!(0),
        };
        let empty = ObservationSeries::new(vec![]).unwrap();
        let result = ChartRenderer::new().trend_chart(&empty, &summary, dec!(150.00));
        assert!(matches!(result, Err(ChartError::Render(_))));
    }
}
