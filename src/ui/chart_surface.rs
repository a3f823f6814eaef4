use crate::utils::remap;

/// Coordinate mapping owned by whatever draws the chart.
/// Offsets are relative to the left edge of the plot area.
pub trait ChartSurface {
    /// Category occupying `x`, if any.
    fn category_at(&self, x: f64) -> Option<String>;

    /// Centre offset of `category`, or `None` if it is not rendered.
    fn position_for(&self, category: &str) -> Option<f64>;

    /// Left edge of the plot area in chart coordinates.
    fn plot_origin_x(&self) -> f64 {
        0.0
    }

    /// Full width of the chart (plot area plus axis gutters).
    fn chart_width(&self) -> f64;
}

/// Categorical x-axis: each category gets an equal-width band of the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: Vec<String>,
    plot_origin_x: f64,
    plot_width: f64,
}

impl BandScale {
    pub fn new<I, S>(categories: I, plot_origin_x: f64, plot_width: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            plot_origin_x,
            plot_width: plot_width.max(0.0),
        }
    }

    pub fn band_width(&self) -> f64 {
        if self.categories.is_empty() {
            0.0
        } else {
            self.plot_width / self.categories.len() as f64
        }
    }
}

impl ChartSurface for BandScale {
    fn category_at(&self, x: f64) -> Option<String> {
        if self.categories.is_empty() || !(0.0..self.plot_width).contains(&x) {
            return None;
        }
        let n = self.categories.len();
        let idx = remap(x, 0.0, self.plot_width, 0.0, n as f64).floor() as usize;
        self.categories.get(idx.min(n - 1)).cloned()
    }

    fn position_for(&self, category: &str) -> Option<f64> {
        let idx = self.categories.iter().position(|c| c == category)?;
        Some((idx as f64 + 0.5) * self.band_width())
    }

    fn plot_origin_x(&self) -> f64 {
        self.plot_origin_x
    }

    fn chart_width(&self) -> f64 {
        self.plot_origin_x + self.plot_width
    }
}
