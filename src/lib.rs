//! chartex: SVG chart rendering and export.
//!
//! Chart components project typed datasets into an owned SVG document
//! inside a [`Container`]; an [`ExportManager`] bound to the same
//! container serializes the rendered output to PNG, SVG or PDF, and the
//! pure data exports produce CSV and JSON. Scatter plots carry embedded
//! statistics: OLS trend lines and fixed-budget k-means cluster hulls.

pub mod analytics;
pub mod charts;
pub mod core;
pub mod error;
pub mod export;
pub mod render;
pub mod telemetry;

pub use charts::{
    AreaChart, AreaChartConfig, BarChart, BarChartConfig, Container, LineChart, LineChartConfig,
    PieChart, PieChartConfig, ScatterChart, ScatterChartConfig,
};
pub use crate::core::{ChartData, ChartPoint, Dimensions, ScatterPoint};
pub use error::{ChartError, ChartResult, ExportError, ExportResult};
pub use export::{
    ExportManager, PdfExportConfig, PngExportConfig, SvgExportConfig, export_csv, export_json,
};
