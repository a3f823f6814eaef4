use strum::IntoEnumIterator;

use crate::config::{CHART, DF, constants::budget};
use crate::domain::{CashFlowRecord, CashFlowSeries, Weekday};

/// Uniform draw from the closed range `[min, max]`.
pub fn random_amount(min: f64, max: f64) -> Result<f64, getrandom::Error> {
    // 53 bits is the full f64 mantissa; dividing by 2^53 - 1 makes `max` reachable.
    const MANTISSA_MAX: u64 = (1 << 53) - 1;
    let bits = getrandom::u64()? >> 11;
    let unit = bits as f64 / MANTISSA_MAX as f64;
    Ok(min + unit * (max - min))
}

fn random_records() -> Result<Vec<CashFlowRecord>, getrandom::Error> {
    Weekday::iter()
        .map(|day| {
            let cash_in = random_amount(CHART.placeholder_min, CHART.placeholder_max)?;
            let cash_out = random_amount(CHART.placeholder_min, CHART.placeholder_max)?;
            Ok(CashFlowRecord::new(day.label(), cash_in, cash_out))
        })
        .collect()
}

pub(crate) fn random_series() -> Result<CashFlowSeries, getrandom::Error> {
    Ok(CashFlowSeries::new(random_records()?, random_records()?))
}

/// Immediate, structurally valid stand-in for the real series.
/// Falls back to the fixed fixture if the OS random source is unavailable.
pub fn fetch_placeholder() -> CashFlowSeries {
    crate::trace_time!("Placeholder generation", budget::PLACEHOLDER, {
        match random_series() {
            Ok(series) => {
                if DF.log_placeholder {
                    log::info!(
                        "Placeholder ready: {} week / {} month records",
                        series.week_to_date.len(),
                        series.month_to_date.len()
                    );
                }
                series
            }
            Err(e) => {
                log::warn!("Random source unavailable ({}), using fixed placeholder", e);
                CashFlowSeries::fixture()
            }
        }
    })
}
