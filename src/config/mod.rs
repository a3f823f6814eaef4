//! Configuration module for the cash flow graph.

// Can all be private now because we have a public re-export.
mod chart;
mod debug;

// Public
pub mod constants;

// Re-export commonly used items
pub use chart::{CHART, ChartConfig};
pub use debug::{DF, LogFlags};
