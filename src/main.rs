use analytics::{AnalyticsEngine, SummaryStatistics, TargetComparison, TrendRecord};
use anyhow::Context;
use charts::ChartRenderer;
use clap::{Parser, Subcommand};
use configuration::Config;
use core_types::ObservationSeries;
use report::ReportRenderer;

/// The main entry point for the Vantage analytics application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = configuration::load_config().context("failed to load config.toml")?;

    match cli.command.unwrap_or(Commands::Analyze) {
        Commands::Analyze => {
            let analysis = run_engine(&config)?;
            handle_report(&config, &analysis)?;
            handle_charts(&config, &analysis)?;
        }
        Commands::Report => {
            let analysis = run_engine(&config)?;
            handle_report(&config, &analysis)?;
        }
        Commands::Charts => {
            let analysis = run_engine(&config)?;
            handle_charts(&config, &analysis)?;
        }
        Commands::Serve { port } => {
            let mut addr = config.server.address()?;
            if let Some(port) = port {
                addr.set_port(port);
            }
            web_server::run_server(addr, config.analysis).await?;
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Quarterly customer-acquisition-cost analytics and executive reporting.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis: written report, chart artifacts, and summary tables.
    Analyze,
    /// Render only the written report.
    Report,
    /// Render only the chart artifacts.
    Charts,
    /// Serve the interactive performance dashboard.
    Serve {
        /// Override the configured server port.
        #[arg(long)]
        port: Option<u16>,
    },
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Everything one run of the engine derives from the configured series.
struct Analysis {
    series: ObservationSeries,
    summary: SummaryStatistics,
    trend: TrendRecord,
    comparison: TargetComparison,
}

/// Builds the series from configuration and runs all three engine
/// operations over it. Any failure here aborts the run with a non-zero
/// exit status; no metric is ever replaced by a default.
fn run_engine(config: &Config) -> anyhow::Result<Analysis> {
    let series = config
        .analysis
        .to_series()
        .context("configured quarters are not a valid series")?;

    let engine = AnalyticsEngine::new();
    let summary = engine
        .compute_summary(&series)
        .context("computing summary statistics")?;
    let trend = engine
        .compute_trend(&series)
        .context("computing trend record")?;
    let comparison = engine
        .compute_target_comparison(&series, config.analysis.target_cac)
        .context("computing target comparison")?;

    Ok(Analysis {
        series,
        summary,
        trend,
        comparison,
    })
}

/// Renders the written report, prints it, and persists it.
fn handle_report(config: &Config, analysis: &Analysis) -> anyhow::Result<()> {
    let renderer = ReportRenderer::new();
    let document = renderer.render(
        &analysis.series,
        &analysis.summary,
        &analysis.trend,
        &analysis.comparison,
    );
    println!("{document}");

    let path = renderer.write(&document, &config.output.directory)?;
    println!("Report saved as '{}'", path.display());
    Ok(())
}

/// Renders and persists the three chart artifacts.
fn handle_charts(config: &Config, analysis: &Analysis) -> anyhow::Result<()> {
    let paths = ChartRenderer::new().write_all(
        &config.output.directory,
        &analysis.series,
        &analysis.summary,
        &analysis.trend,
        &analysis.comparison,
    )?;
    for path in paths {
        println!("Chart saved as '{}'", path.display());
    }
    Ok(())
}
