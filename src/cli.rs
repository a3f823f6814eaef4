use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};
use tokio::runtime::Runtime;

use crate::app::{CashFlowGraphController, Change};
use crate::config::CHART;
use crate::data::{DemoProvider, FetchError};
use crate::domain::{CashFlowRecord, CashFlowType, ReportPeriod};
use crate::models::{Presentation, TapOutcome};
use crate::ui::BandScale;
use crate::utils::format_currency;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Headless cash in & out chart demo", long_about = None)]
pub struct Cli {
    /// Simulated network latency before the series arrives
    #[arg(long, default_value_t = CHART.simulated_latency.as_millis() as u64)]
    pub latency_ms: u64,

    /// Which period to display
    #[arg(long, value_enum, default_value_t = ReportPeriod::Week)]
    pub period: ReportPeriod,

    /// Tap at this x offset (chart coordinates). Repeatable.
    #[arg(long = "tap", allow_negative_numbers = true)]
    pub taps: Vec<f64>,

    /// Width of the plot area the taps are resolved against
    #[arg(long, default_value_t = CHART.default_plot_width)]
    pub plot_width: f64,

    /// Load the series from a JSON file instead of generating it
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Make the fetch fail with a network error
    #[arg(long, default_value_t = false)]
    pub fail: bool,

    /// Print the loaded series as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Money In")]
    cash_in: String,
    #[tabled(rename = "Money Out")]
    cash_out: String,
    #[tabled(rename = "Net")]
    net: String,
}

impl From<&CashFlowRecord> for RecordRow {
    fn from(r: &CashFlowRecord) -> Self {
        Self {
            day: r.label().to_string(),
            cash_in: format_currency(r.cash_in(), CHART.currency_code),
            cash_out: format_currency(r.cash_out(), CHART.currency_code),
            net: format_currency(r.net(), CHART.currency_code),
        }
    }
}

fn records_table(records: &[CashFlowRecord]) -> String {
    Table::new(records.iter().map(RecordRow::from))
        .with(Style::rounded())
        .to_string()
}

fn build_provider(args: &Cli) -> Result<DemoProvider> {
    let mut provider = DemoProvider::new(Duration::from_millis(args.latency_ms));
    if let Some(path) = &args.fixture {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading fixture {}", path.display()))?;
        provider = provider
            .with_fixture_json(&json)
            .with_context(|| format!("parsing fixture {}", path.display()))?;
    }
    if args.fail {
        provider = provider.with_failure(FetchError::Network("simulated outage".into()));
    }
    Ok(provider)
}

/// Drives one appear -> load cycle, then replays the requested taps.
pub fn run(args: Cli) -> Result<()> {
    if !args.plot_width.is_finite() || args.plot_width <= 0.0 {
        bail!("--plot-width must be a positive number, got {}", args.plot_width);
    }

    let provider = build_provider(&args)?;
    let rt = Runtime::new().context("Failed to create runtime")?;
    let mut controller = CashFlowGraphController::new(Arc::new(provider), rt.handle().clone());
    controller.set_period(args.period);

    controller.subscribe(|change, state| {
        if let Change::State { from, to } = change {
            log::debug!("{} -> {} ({})", from, to, state.name());
        }
    });

    println!("{}", CHART.title);
    controller.appear()?;
    println!(
        "Loading {} (placeholder: {} categories)...",
        args.period,
        controller.records().len()
    );

    rt.block_on(controller.settle());

    match controller.presentation() {
        Presentation::Content(series) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(series)?);
            } else {
                println!("{}", records_table(series.records(args.period)));
                println!(
                    "Legend: {} / {}",
                    CashFlowType::MoneyIn,
                    CashFlowType::MoneyOut
                );
            }
        }
        Presentation::Failed { reason, .. } => {
            bail!("Could not load cash flow: {}", reason);
        }
        Presentation::Empty | Presentation::Redacted(_) => {
            bail!("Fetch ended without a result");
        }
    }

    let labels: Vec<String> = controller
        .records()
        .iter()
        .map(|r| r.label().to_string())
        .collect();
    let surface = BandScale::new(labels, 0.0, args.plot_width);

    for x in args.taps {
        match controller.tap(x, 0.0, &surface) {
            TapOutcome::Missed => println!("tap x={:.1}: no category", x),
            outcome => {
                println!("tap x={:.1}: {:?}", x, outcome);
                if let Some(popover) = controller.popover(&surface) {
                    println!(
                        "  [{}] {} (rule at {:.1}, box at {:.1})",
                        popover.title,
                        popover.lines.join(", "),
                        popover.indicator_x,
                        popover.box_x
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_taps_and_period() {
        let args = Cli::try_parse_from([
            "cash-flow-graph",
            "--period",
            "month",
            "--tap",
            "120.5",
            "--tap",
            "-3",
            "--latency-ms",
            "0",
        ])
        .unwrap();
        assert_eq!(args.period, ReportPeriod::Month);
        assert_eq!(args.taps, vec![120.5, -3.0]);
        assert_eq!(args.latency_ms, 0);
        assert!(!args.fail);
    }

    #[test]
    fn defaults_come_from_config() {
        let args = Cli::try_parse_from(["cash-flow-graph"]).unwrap();
        assert_eq!(args.latency_ms, 2000);
        assert_eq!(args.plot_width, CHART.default_plot_width);
        assert_eq!(args.period, ReportPeriod::Week);
    }

    #[test]
    fn table_has_one_row_per_record() {
        let records = vec![
            CashFlowRecord::new("Monday", 1.0, 2.0),
            CashFlowRecord::new("Tuesday", 3.0, 0.5),
        ];
        let table = records_table(&records);
        assert!(table.contains("Money In"));
        assert!(table.contains("NZD -1.00"));
        assert!(table.contains("Tuesday"));
    }

    #[test]
    fn failing_run_reports_error() {
        let args = Cli::try_parse_from(["cash-flow-graph", "--latency-ms", "0", "--fail"]).unwrap();
        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("simulated outage"));
    }

    #[test]
    fn bad_plot_width_is_rejected() {
        let args = Cli::try_parse_from(["cash-flow-graph", "--plot-width", "0"]).unwrap();
        assert!(run(args).is_err());
    }
}
