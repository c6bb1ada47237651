use crate::document::html_document;
use crate::error::ChartError;
use crate::svg::{self, LinearScale};
use analytics::SummaryStatistics;
use core_types::ObservationSeries;
use rust_decimal::Decimal;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 45.0;

const SERIES_COLOR: &str = "#c62828";
const TARGET_COLOR: &str = "#2e7d32";
const AVERAGE_COLOR: &str = "#1565c0";

/// The trend-analysis artifact: actual costs per quarter against the
/// industry target and the yearly average.
pub(crate) fn trend_document(
    series: &ObservationSeries,
    summary: &SummaryStatistics,
    target: Decimal,
) -> Result<String, ChartError> {
    let chart = trend_svg(series, summary, target, 640.0, 420.0)?;
    Ok(html_document(
        "Customer Acquisition Cost (CAC) Trend Analysis",
        &chart,
    ))
}

/// The inline SVG for the trend panel, reused by the dashboard at a
/// smaller size.
pub(crate) fn trend_svg(
    series: &ObservationSeries,
    summary: &SummaryStatistics,
    target: Decimal,
    width: f64,
    height: f64,
) -> Result<String, ChartError> {
    let values = series
        .observations()
        .iter()
        .map(|o| svg::to_f64(o.value, "observation series"))
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(ChartError::Render(
            "cannot plot an empty series".to_string(),
        ));
    }
    let target_value = svg::to_f64(target, "target")?;
    let mean_value = svg::to_f64(summary.mean, "mean")?;

    let mut lo = values
        .iter()
        .fold(f64::INFINITY, |acc, v| acc.min(*v))
        .min(target_value)
        .min(mean_value);
    let mut hi = values
        .iter()
        .fold(f64::NEG_INFINITY, |acc, v| acc.max(*v))
        .max(target_value)
        .max(mean_value);
    let pad = ((hi - lo) * 0.08).max(1.0);
    lo -= pad;
    hi += pad;

    let left = MARGIN_LEFT;
    let right = width - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = height - MARGIN_BOTTOM;
    let y = LinearScale::new(lo, hi, bottom, top);
    let xs = svg::category_centers(values.len(), left, right);

    let mut out = format!("<svg width=\"{width:.0}\" height=\"{height:.0}\" role=\"img\">\n");
    out.push_str(&svg::axes(left, right, top, bottom));

    for tick in [lo, (lo + hi) / 2.0, hi] {
        out.push_str(&svg::value_label(
            left - 8.0,
            y.apply(tick),
            &format!("${tick:.2}"),
        ));
    }
    for (x, obs) in xs.iter().zip(series.observations()) {
        out.push_str(&svg::category_label(*x, bottom + 22.0, &obs.period));
    }

    out.push_str(&svg::reference_line(
        left,
        right,
        y.apply(target_value),
        TARGET_COLOR,
        "8 4",
        &format!("Industry Target (${target_value:.2})"),
    ));
    out.push_str(&svg::reference_line(
        left,
        right,
        y.apply(mean_value),
        AVERAGE_COLOR,
        "2 4",
        &format!("Average (${mean_value:.2})"),
    ));

    let points: Vec<(f64, f64)> = xs
        .iter()
        .zip(&values)
        .map(|(x, v)| (*x, y.apply(*v)))
        .collect();
    out.push_str(&svg::polyline(&points, SERIES_COLOR, 3.0, ""));
    for (x, v) in &points {
        out.push_str(&svg::marker(*x, *v, SERIES_COLOR));
    }
    out.push_str(&format!(
        "<text x=\"{left:.1}\" y=\"{:.1}\" class=\"legend\" fill=\"{SERIES_COLOR}\">Actual CAC</text>\n",
        top - 10.0
    ));

    out.push_str("</svg>\n");
    Ok(out)
}
