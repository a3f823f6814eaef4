use std::time::Duration;

// Top Level Constants
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(2); // Stands in for a real network round trip
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// Time budgets for synchronous work, checked by `trace_time!`
pub mod budget {
    use std::time::Duration;

    pub const PLACEHOLDER: Duration = Duration::from_micros(500);
    pub const VALIDATION: Duration = Duration::from_millis(1);
}

pub mod placeholder {
    // Amounts are drawn uniformly from this closed range
    pub const MIN_AMOUNT: f64 = 0.0;
    pub const MAX_AMOUNT: f64 = 150.0;
}

pub mod popover {
    pub const BOX_WIDTH: f64 = 200.0;
    pub const CURRENCY_CODE: &str = "NZD";
}
