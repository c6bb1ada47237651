//! Shared SVG building blocks for the chart artifacts.
//!
//! Everything here works in pixel space on `f64`; the conversion from the
//! engine's `Decimal` metrics happens once, at the chart boundary.

use crate::error::ChartError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Converts a Decimal metric into a plottable coordinate.
pub(crate) fn to_f64(value: Decimal, context: &str) -> Result<f64, ChartError> {
    value.to_f64().ok_or_else(|| {
        ChartError::Render(format!("value {value} in {context} is not plottable"))
    })
}

/// Maps a value domain onto a pixel range.
///
/// The pixel range may be inverted (SVG y grows downward); a degenerate
/// domain maps everything onto the middle of the range.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    pub(crate) fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    pub(crate) fn apply(&self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span == 0.0 {
            return (self.range_min + self.range_max) / 2.0;
        }
        self.range_min + (value - self.domain_min) / span * (self.range_max - self.range_min)
    }
}

/// Evenly spaced x positions for categorical (per-quarter) marks.
pub(crate) fn category_centers(count: usize, left: f64, right: f64) -> Vec<f64> {
    let step = (right - left) / count as f64;
    (0..count).map(|i| left + step * (i as f64 + 0.5)).collect()
}

/// A `<polyline>` through the given points.
pub(crate) fn polyline(points: &[(f64, f64)], color: &str, width: f64, dash: &str) -> String {
    let coords: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect();
    let dash_attr = if dash.is_empty() {
        String::new()
    } else {
        format!(" stroke-dasharray=\"{dash}\"")
    };
    format!(
        "<polyline fill=\"none\" stroke=\"{color}\" stroke-width=\"{width}\"{dash_attr} points=\"{}\"/>\n",
        coords.join(" ")
    )
}

/// A horizontal reference line across the plotting area.
pub(crate) fn reference_line(
    x1: f64,
    x2: f64,
    y: f64,
    color: &str,
    dash: &str,
    label: &str,
) -> String {
    format!(
        "<line x1=\"{x1:.1}\" y1=\"{y:.1}\" x2=\"{x2:.1}\" y2=\"{y:.1}\" stroke=\"{color}\" stroke-width=\"2\" stroke-dasharray=\"{dash}\"/>\n<text x=\"{x2:.1}\" y=\"{:.1}\" text-anchor=\"end\" class=\"annotation\" fill=\"{color}\">{label}</text>\n",
        y - 6.0
    )
}

/// A circle marker for one observation.
pub(crate) fn marker(x: f64, y: f64, color: &str) -> String {
    format!("<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"5\" fill=\"{color}\"/>\n")
}

/// A vertical bar anchored at the zero baseline, with its value printed
/// above (or below, for negative values).
pub(crate) fn bar(
    center_x: f64,
    value_y: f64,
    baseline_y: f64,
    width: f64,
    color: &str,
    label: &str,
) -> String {
    let (top, height) = if value_y <= baseline_y {
        (value_y, baseline_y - value_y)
    } else {
        (baseline_y, value_y - baseline_y)
    };
    let label_y = if value_y <= baseline_y {
        value_y - 6.0
    } else {
        value_y + 14.0
    };
    format!(
        "<rect x=\"{:.1}\" y=\"{top:.1}\" width=\"{width:.1}\" height=\"{height:.1}\" fill=\"{color}\"/>\n<text x=\"{center_x:.1}\" y=\"{label_y:.1}\" text-anchor=\"middle\" class=\"annotation\">{label}</text>\n",
        center_x - width / 2.0
    )
}

/// An x-axis tick label for one category.
pub(crate) fn category_label(x: f64, y: f64, text: &str) -> String {
    format!("<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" class=\"axis-label\">{text}</text>\n")
}

/// A y-axis tick label.
pub(crate) fn value_label(x: f64, y: f64, text: &str) -> String {
    format!(
        "<text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"end\" class=\"axis-label\">{text}</text>\n",
        y + 4.0
    )
}

/// The two axis lines framing a plotting area.
pub(crate) fn axes(left: f64, right: f64, top: f64, bottom: f64) -> String {
    format!(
        "<line x1=\"{left:.1}\" y1=\"{top:.1}\" x2=\"{left:.1}\" y2=\"{bottom:.1}\" stroke=\"#333\"/>\n<line x1=\"{left:.1}\" y1=\"{bottom:.1}\" x2=\"{right:.1}\" y2=\"{bottom:.1}\" stroke=\"#333\"/>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_domain_endpoints_to_range_endpoints() {
        let scale = LinearScale::new(0.0, 100.0, 380.0, 20.0);
        assert_eq!(scale.apply(0.0), 380.0);
        assert_eq!(scale.apply(100.0), 20.0);
        assert_eq!(scale.apply(50.0), 200.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new(42.0, 42.0, 0.0, 100.0);
        assert_eq!(scale.apply(42.0), 50.0);
    }

    #[test]
    fn category_centers_are_evenly_spaced() {
        let centers = category_centers(4, 0.0, 400.0);
        assert_eq!(centers, vec![50.0, 150.0, 250.0, 350.0]);
    }
}
