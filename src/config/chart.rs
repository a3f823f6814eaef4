use std::time::Duration;

use crate::config::constants::{self, placeholder, popover};

pub struct ChartConfig {
    /// How long the demo provider sleeps before answering.
    pub simulated_latency: Duration,
    /// Upper bound on a single fetch. Exceeding it fails the fetch with a timeout.
    pub fetch_timeout: Duration,

    pub placeholder_min: f64,
    pub placeholder_max: f64,

    // Popover
    pub popover_box_width: f64,
    pub currency_code: &'static str,

    pub title: &'static str,
    pub default_plot_width: f64,
}

pub const CHART: ChartConfig = ChartConfig {
    simulated_latency: constants::SIMULATED_LATENCY,
    fetch_timeout: constants::FETCH_TIMEOUT,

    placeholder_min: placeholder::MIN_AMOUNT,
    placeholder_max: placeholder::MAX_AMOUNT,

    popover_box_width: popover::BOX_WIDTH,
    currency_code: popover::CURRENCY_CODE,

    title: "Cash In & Out",
    default_plot_width: 350.0,
};
