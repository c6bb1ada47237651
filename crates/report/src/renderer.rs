use crate::error::ReportError;
use crate::insights;
use analytics::{SummaryStatistics, TargetComparison, TrendRecord};
use chrono::Utc;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use core_types::ObservationSeries;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

/// File name of the written report artifact.
pub const REPORT_FILENAME: &str = "cac_analysis_report.txt";

const BANNER_WIDTH: usize = 60;

/// A stateless renderer producing the written analysis document.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {}

impl ReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the full report as plain text.
    ///
    /// Pure templating over the derived records; no metric is computed here.
    pub fn render(
        &self,
        series: &ObservationSeries,
        summary: &SummaryStatistics,
        trend: &TrendRecord,
        comparison: &TargetComparison,
    ) -> String {
        let mut doc = String::new();

        doc.push_str(&banner("CUSTOMER ACQUISITION COST ANALYSIS"));
        doc.push_str(&format!(
            "Generated: {}\n\n",
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        ));

        doc.push_str("Quarterly Performance:\n");
        doc.push_str(&quarterly_table(comparison).to_string());
        doc.push_str("\n\n");

        doc.push_str("Statistical Analysis:\n");
        doc.push_str(&statistics_table(summary, comparison).to_string());
        doc.push_str("\n\n");

        doc.push_str(&banner("TREND ANALYSIS"));
        for growth in &trend.growth {
            doc.push_str(&format!(
                "{} to {}: {}\n",
                growth.from_period,
                growth.to_period,
                pct(growth.growth_pct)
            ));
        }
        doc.push_str(&format!(
            "Overall direction: {}\n",
            trend.overall_direction.as_str()
        ));
        if let Some(transitions) = &trend.acceleration {
            for transition in transitions {
                doc.push_str(&format!(
                    "Growth {} through {}\n",
                    transition.shift.as_str(),
                    transition.period
                ));
            }
        }
        doc.push('\n');

        doc.push_str(&banner("BUSINESS INSIGHTS & RECOMMENDATIONS"));
        doc.push_str("KEY FINDINGS:\n");
        for (i, finding) in insights::key_findings(series, summary, trend, comparison)
            .iter()
            .enumerate()
        {
            doc.push_str(&format!("{}. {}\n", i + 1, finding));
        }

        doc.push_str("\nSTRATEGIC RECOMMENDATIONS:\n");
        for (i, recommendation) in insights::STRATEGIC_RECOMMENDATIONS.iter().enumerate() {
            doc.push_str(&format!("{}. {}\n", i + 1, recommendation));
        }

        doc.push_str("\nSOLUTION FOCUS: OPTIMIZE DIGITAL MARKETING CHANNELS\n");
        doc.push_str("- Priority: Reallocate budget to highest-performing channels\n");
        doc.push_str(&format!(
            "- Target: Reduce CAC to the {} industry benchmark\n",
            money(comparison.target)
        ));
        doc.push_str(&format!(
            "- Potential Savings: {} per customer acquisition\n",
            money(comparison.mean_gap)
        ));

        doc
    }

    /// Persists a rendered document into the output directory.
    pub fn write(&self, document: &str, directory: &Path) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(directory)?;
        let path = directory.join(REPORT_FILENAME);
        std::fs::write(&path, document)?;
        tracing::info!(path = %path.display(), "analysis report written");
        Ok(path)
    }
}

fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

fn quarterly_table(comparison: &TargetComparison) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Quarter", "CAC", "Gap to Target", "% Above Target"]);
    for gap in &comparison.per_observation {
        table.add_row(vec![
            gap.period.clone(),
            money(gap.value),
            money(gap.gap),
            pct(gap.percent_above_target),
        ]);
    }
    table
}

fn statistics_table(summary: &SummaryStatistics, comparison: &TargetComparison) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Mean CAC".to_string(), money(summary.mean)]);
    table.add_row(vec!["Median CAC".to_string(), money(summary.median)]);
    table.add_row(vec![
        "Standard Deviation".to_string(),
        money(summary.standard_deviation),
    ]);
    table.add_row(vec!["Min CAC".to_string(), money(summary.min)]);
    table.add_row(vec!["Max CAC".to_string(), money(summary.max)]);
    table.add_row(vec!["Range".to_string(), money(summary.range)]);
    table.add_row(vec![
        "Coefficient of Variation".to_string(),
        pct(summary.coefficient_of_variation_pct),
    ]);
    table.add_row(vec![
        "Total Gap from Target".to_string(),
        money(comparison.mean_gap),
    ]);
    table.add_row(vec![
        "Percentage Above Target".to_string(),
        pct(comparison.mean_percent_above_target),
    ]);
    table
}

fn money(value: Decimal) -> String {
    format!("${}", value.round_dp(2))
}

fn pct(value: Decimal) -> String {
    format!("{}%", value.round_dp(2))
}
