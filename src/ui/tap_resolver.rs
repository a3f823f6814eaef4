use crate::domain::CashFlowRecord;
use crate::ui::ChartSurface;

/// Converts a tap in chart coordinates to an offset inside the plot area.
pub fn relative_x(tap_x: f64, plot_origin_x: f64) -> f64 {
    tap_x - plot_origin_x
}

/// Record whose category lies under `relative_x`, if any.
pub fn find_record<'a>(
    records: &'a [CashFlowRecord],
    relative_x: f64,
    surface: &dyn ChartSurface,
) -> Option<&'a CashFlowRecord> {
    let category = surface.category_at(relative_x)?;
    records.iter().find(|r| r.label() == category)
}

/// Centre of the selected category, for drawing the selection rule.
pub fn indicator_x(label: &str, surface: &dyn ChartSurface) -> Option<f64> {
    surface.position_for(label)
}
