#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

mod cli;

// Re-export commonly used types outside of crate
pub use app::{CashFlowGraphController, Change, SubscriptionId};
pub use cli::{Cli, run};
pub use data::{CashFlowProvider, DemoProvider, FetchError};
pub use domain::{CashFlowRecord, CashFlowSeries, ReportPeriod};
pub use models::{LoadingState, Presentation, Selection, TapOutcome};
pub use ui::{BandScale, ChartSurface};
