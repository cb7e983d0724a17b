//! Chart components. Each is a thin orchestration of `core` scales and
//! `render` primitives: construction validates data shape, `render_into`
//! projects the dataset into an [`SvgDocument`](crate::render::SvgDocument)
//! owned by a [`Container`], and `destroy` detaches it again.

mod area;
mod bar;
mod container;
mod frame;
mod line;
mod pie;
mod scatter;

pub use area::{AreaChart, AreaChartConfig};
pub use bar::{BarChart, BarChartConfig};
pub use container::{ChartHandle, Container};
pub use line::{LineChart, LineChartConfig};
pub use pie::{PieChart, PieChartConfig};
pub use scatter::{ScatterChart, ScatterChartConfig};
