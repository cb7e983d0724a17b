mod palette;
mod scale;
mod types;

pub use palette::{
    AXIS_COLOR, DEFAULT_BACKGROUND, DEFAULT_PALETTE, GRID_COLOR, TEXT_COLOR, series_color,
};
pub use scale::{BandScale, LinearScale, Ticks};
pub use types::{ChartData, ChartPoint, Dimensions, Insets, ScatterPoint};
