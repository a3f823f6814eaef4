mod chart_surface;
mod popover;
mod tap_resolver;

pub use chart_surface::{BandScale, ChartSurface};
pub use popover::{Popover, box_offset};
pub use tap_resolver::{find_record, indicator_x, relative_x};
