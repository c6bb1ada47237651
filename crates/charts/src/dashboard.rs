use crate::document::html_document;
use crate::error::ChartError;
use crate::gap::{self, GAP_COLOR, PERCENT_COLOR};
use crate::svg;
use crate::trend;
use analytics::{SummaryStatistics, TargetComparison, TrendRecord};
use core_types::ObservationSeries;

const PANEL_WIDTH: f64 = 480.0;
const PANEL_HEIGHT: f64 = 300.0;

/// The multi-panel performance dashboard: trend, gap bars, percent bars,
/// and the key-metrics table, on one page.
pub(crate) fn dashboard_document(
    series: &ObservationSeries,
    summary: &SummaryStatistics,
    trend_record: &TrendRecord,
    comparison: &TargetComparison,
) -> Result<String, ChartError> {
    let trend_panel = trend::trend_svg(
        series,
        summary,
        comparison.target,
        PANEL_WIDTH,
        PANEL_HEIGHT,
    )?;
    let gap_panel = gap::bars_svg(&gap::gap_bars(comparison)?, GAP_COLOR, PANEL_WIDTH, PANEL_HEIGHT);
    let percent_panel = gap::bars_svg(
        &gap::percent_bars(comparison)?,
        PERCENT_COLOR,
        PANEL_WIDTH,
        PANEL_HEIGHT,
    );
    let metrics_panel = metrics_table(series, summary, trend_record, comparison)?;

    let body = format!(
        r#"<div class="grid">
<div class="panel"><h2>Quarterly CAC Trend</h2>{trend_panel}</div>
<div class="panel"><h2>Gap to Target</h2>{gap_panel}</div>
<div class="panel"><h2>Percentage Above Target</h2>{percent_panel}</div>
<div class="panel"><h2>Key Metrics</h2>{metrics_panel}</div>
</div>"#
    );
    Ok(html_document("CAC Performance Dashboard", &body))
}

fn metrics_table(
    series: &ObservationSeries,
    summary: &SummaryStatistics,
    trend_record: &TrendRecord,
    comparison: &TargetComparison,
) -> Result<String, ChartError> {
    let latest = series
        .last()
        .ok_or_else(|| ChartError::Render("cannot summarize an empty series".to_string()))?;
    let mean = svg::to_f64(summary.mean, "mean")?;
    let target = svg::to_f64(comparison.target, "target")?;
    let gap = svg::to_f64(comparison.mean_gap, "mean gap")?;
    let percent = svg::to_f64(comparison.mean_percent_above_target, "percent above target")?;
    let latest_value = svg::to_f64(latest.value, "latest observation")?;

    Ok(format!(
        r#"<table class="metrics">
<tr><th>Metric</th><th>Value</th></tr>
<tr><td>Average CAC</td><td>${mean:.2}</td></tr>
<tr><td>Target CAC</td><td>${target:.2}</td></tr>
<tr><td>Gap</td><td>${gap:.2}</td></tr>
<tr><td>% Above Target</td><td>{percent:.1}%</td></tr>
<tr><td>{latest_period} CAC</td><td>${latest_value:.2}</td></tr>
<tr><td>Overall Direction</td><td>{direction}</td></tr>
</table>"#,
        latest_period = latest.period,
        direction = trend_record.overall_direction.as_str(),
    ))
}
