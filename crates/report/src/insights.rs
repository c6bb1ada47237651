use analytics::{SummaryStatistics, TargetComparison, TrendRecord};
use core_types::{Direction, ObservationSeries};

/// The standing recommendations attached to every report.
///
/// This text is authored, not derived; the engine only supplies the numbers
/// that motivate it.
pub const STRATEGIC_RECOMMENDATIONS: [&str; 8] = [
    "Implement data-driven attribution modeling to identify highest-ROI marketing channels",
    "Optimize digital marketing spend allocation based on channel-specific CAC performance",
    "Deploy marketing automation and personalization to improve conversion rates",
    "Conduct comprehensive audit of underperforming marketing channels",
    "Establish real-time CAC monitoring dashboard with automated alerts",
    "Develop customer segmentation strategy for high-value, low-cost acquisition",
    "Launch A/B testing framework for continuous campaign optimization",
    "Negotiate better rates with marketing partners based on volume commitments",
];

/// Builds the key-findings bullet list from the derived records.
pub fn key_findings(
    series: &ObservationSeries,
    summary: &SummaryStatistics,
    trend: &TrendRecord,
    comparison: &TargetComparison,
) -> Vec<String> {
    let mut findings = vec![format!(
        "Average CAC of ${} is ${} above the industry target of ${}",
        summary.mean.round_dp(2),
        comparison.mean_gap.round_dp(2),
        comparison.target.round_dp(2),
    )];

    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        let movement = match trend.overall_direction {
            Direction::Increasing => "Consistent upward trend",
            Direction::Decreasing => "Downward trend",
            Direction::Flat => "Flat cost profile",
        };
        findings.push(format!(
            "{} from {} (${}) to {} (${})",
            movement, first.period, first.value, last.period, last.value,
        ));
    }

    findings.push(format!(
        "Company is paying a {}% premium over the industry benchmark",
        comparison.mean_percent_above_target.round_dp(1),
    ));

    if trend.overall_direction == Direction::Increasing {
        findings.push(
            "Rising acquisition costs indicate urgent need for channel optimization".to_string(),
        );
    }

    findings
}
