// Domain types and value objects
mod cash_flow;
mod period;
mod weekday;

// Re-export commonly used types to the world
pub use cash_flow::{CashFlowRecord, CashFlowSeries, SeriesError};
pub use period::{CashFlowType, ReportPeriod};
pub use weekday::Weekday;
