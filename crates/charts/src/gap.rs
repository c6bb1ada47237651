use crate::document::html_document;
use crate::error::ChartError;
use crate::svg::{self, LinearScale};
use analytics::TargetComparison;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 45.0;

pub(crate) const GAP_COLOR: &str = "#c62828";
pub(crate) const PERCENT_COLOR: &str = "#ef6c00";

/// One bar of a per-quarter bar chart: its category label, plottable value,
/// and the annotation printed next to the bar.
pub(crate) struct BarDatum {
    pub label: String,
    pub value: f64,
    pub text: String,
}

/// The gap-analysis artifact: per-quarter distance from the industry target.
pub(crate) fn gap_document(comparison: &TargetComparison) -> Result<String, ChartError> {
    let bars = gap_bars(comparison)?;
    let chart = bars_svg(&bars, GAP_COLOR, 640.0, 380.0);
    let target = svg::to_f64(comparison.target, "target")?;
    Ok(html_document(
        &format!("CAC Gap Analysis: Difference from Industry Target (${target:.2})"),
        &chart,
    ))
}

/// Per-quarter gap bars, annotated in dollars.
pub(crate) fn gap_bars(comparison: &TargetComparison) -> Result<Vec<BarDatum>, ChartError> {
    comparison
        .per_observation
        .iter()
        .map(|gap| {
            let value = svg::to_f64(gap.gap, "gap")?;
            Ok(BarDatum {
                label: gap.period.clone(),
                value,
                text: format!("${value:.2}"),
            })
        })
        .collect()
}

/// Per-quarter percent-above-target bars, annotated in percent.
pub(crate) fn percent_bars(comparison: &TargetComparison) -> Result<Vec<BarDatum>, ChartError> {
    comparison
        .per_observation
        .iter()
        .map(|gap| {
            let value = svg::to_f64(gap.percent_above_target, "percent above target")?;
            Ok(BarDatum {
                label: gap.period.clone(),
                value,
                text: format!("{value:.2}%"),
            })
        })
        .collect()
}

/// The inline SVG for a zero-baselined bar chart.
pub(crate) fn bars_svg(bars: &[BarDatum], color: &str, width: f64, height: f64) -> String {
    let lo = bars.iter().fold(0.0_f64, |acc, b| acc.min(b.value));
    let hi = bars.iter().fold(0.0_f64, |acc, b| acc.max(b.value));
    let pad = ((hi - lo) * 0.12).max(1.0);

    let left = MARGIN_LEFT;
    let right = width - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = height - MARGIN_BOTTOM;
    let y = LinearScale::new(lo, hi + pad, bottom, top);
    let xs = svg::category_centers(bars.len(), left, right);
    let bar_width = ((right - left) / bars.len().max(1) as f64) * 0.55;
    let baseline = y.apply(0.0);

    let mut out = format!("<svg width=\"{width:.0}\" height=\"{height:.0}\" role=\"img\">\n");
    out.push_str(&svg::axes(left, right, top, bottom));
    for tick in [lo, (lo + hi) / 2.0, hi] {
        out.push_str(&svg::value_label(left - 8.0, y.apply(tick), &format!("{tick:.2}")));
    }
    for (x, datum) in xs.iter().zip(bars) {
        out.push_str(&svg::bar(
            *x,
            y.apply(datum.value),
            baseline,
            bar_width,
            color,
            &datum.text,
        ));
        out.push_str(&svg::category_label(*x, bottom + 22.0, &datum.label));
    }
    out.push_str("</svg>\n");
    out
}
