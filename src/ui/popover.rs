use serde::Serialize;

use crate::domain::CashFlowRecord;
use crate::ui::{ChartSurface, indicator_x};
use crate::utils::format_currency;

/// Detail box for the selected category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popover {
    pub title: String,
    pub lines: Vec<String>,
    /// Selection rule position, relative to the plot area.
    pub indicator_x: f64,
    /// Left edge of the box in chart coordinates, clamped inside the chart.
    pub box_x: f64,
    pub box_width: f64,
}

impl Popover {
    /// `None` when the record's category is not currently rendered.
    pub fn build(
        record: &CashFlowRecord,
        surface: &dyn ChartSurface,
        box_width: f64,
        currency_code: &str,
    ) -> Option<Self> {
        let rule_x = indicator_x(record.label(), surface)?;
        let start_x = rule_x + surface.plot_origin_x();

        Some(Self {
            title: record.label().to_string(),
            lines: vec![
                format!("Cash Out: {}", format_currency(record.cash_out(), currency_code)),
                format!("Cash In: {}", format_currency(record.cash_in(), currency_code)),
            ],
            indicator_x: rule_x,
            box_x: box_offset(start_x, box_width, surface.chart_width()),
            box_width,
        })
    }
}

/// Centres a box of `box_width` on `centre_x` without letting it leave `[0, chart_width]`.
pub fn box_offset(centre_x: f64, box_width: f64, chart_width: f64) -> f64 {
    (centre_x - box_width / 2.0).min(chart_width - box_width).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::BandScale;

    #[test]
    fn box_is_clamped_to_chart() {
        assert_eq!(box_offset(300.0, 200.0, 600.0), 200.0);
        assert_eq!(box_offset(20.0, 200.0, 600.0), 0.0);
        assert_eq!(box_offset(590.0, 200.0, 600.0), 400.0);
        // Narrower than the box: pinned to the left edge.
        assert_eq!(box_offset(50.0, 200.0, 100.0), 0.0);
    }

    #[test]
    fn build_uses_band_centre() {
        let scale = BandScale::new(["Monday", "Tuesday"], 40.0, 400.0);
        let record = CashFlowRecord::new("Tuesday", 12.5, 3.0);
        let popover = Popover::build(&record, &scale, 200.0, "NZD").unwrap();

        assert_eq!(popover.indicator_x, 300.0);
        assert_eq!(popover.box_x, 240.0);
        assert_eq!(popover.title, "Tuesday");
        assert_eq!(popover.lines, vec!["Cash Out: NZD 3.00", "Cash In: NZD 12.50"]);

        let missing = CashFlowRecord::new("Sunday", 1.0, 1.0);
        assert!(Popover::build(&missing, &scale, 200.0, "NZD").is_none());
    }
}
