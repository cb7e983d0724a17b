use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::charts::frame::{PlotFrame, title_node};
use crate::charts::line::polyline_path;
use crate::charts::{ChartHandle, Container};
use crate::core::{ChartData, Dimensions, Insets, LinearScale, ScatterPoint, series_color};
use crate::error::ChartResult;
use crate::render::{PathPrimitive, SvgDocument, SvgNode, class};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaChartConfig {
    pub dimensions: Dimensions,
    pub insets: Insets,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    pub stroke_width: f64,
    pub fill_opacity: f64,
    pub show_grid: bool,
    pub background: String,
}

impl Default for AreaChartConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            insets: Insets::default(),
            title: None,
            stroke_width: 2.0,
            fill_opacity: 0.25,
            show_grid: true,
            background: crate::core::DEFAULT_BACKGROUND.to_owned(),
        }
    }
}

impl AreaChartConfig {
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }
}

/// Filled variant of the line chart: the polyline plus a closed region
/// down to the zero baseline.
#[derive(Debug)]
pub struct AreaChart {
    data: Vec<ScatterPoint>,
    config: AreaChartConfig,
    handle: ChartHandle,
}

impl AreaChart {
    pub fn new(data: ChartData, config: AreaChartConfig) -> ChartResult<Self> {
        config.dimensions.validate()?;
        Ok(Self {
            data: data.into_xy("area chart")?,
            config,
            handle: ChartHandle::next(),
        })
    }

    pub fn render_into(&self, container: &mut Container) -> ChartResult<()> {
        if self.data.len() < 2 {
            warn!(
                points = self.data.len(),
                "area chart: need at least two points, rendering nothing"
            );
            return Ok(());
        }

        let frame = PlotFrame::new(self.config.dimensions, self.config.insets);
        let x_scale =
            LinearScale::from_values(self.data.iter().map(|p| p.x), frame.left, frame.right)?;
        // The filled region closes onto the zero baseline, so keep it in domain.
        let y_scale = LinearScale::from_values(
            self.data.iter().map(|p| p.y).chain([0.0]),
            frame.bottom,
            frame.top,
        )?;

        let color = series_color(self.data[0].color.as_deref(), 0).to_owned();
        let line_d = polyline_path(&self.data, x_scale, y_scale);
        let area_d = close_to_baseline(&line_d, &self.data, x_scale, y_scale);

        let mut doc =
            SvgDocument::new(self.config.dimensions).with_background(self.config.background.clone());
        if self.config.show_grid {
            doc.push(frame.y_grid(y_scale));
        }
        doc.push(frame.axis_lines());
        doc.push(SvgNode::Path(
            PathPrimitive::filled(area_d, color.clone(), class::AREA_PATH)
                .with_fill_opacity(self.config.fill_opacity),
        ));
        doc.push(SvgNode::Path(PathPrimitive::stroked(
            line_d,
            color,
            self.config.stroke_width,
            class::LINE_PATH,
        )));
        doc.push(frame.x_labels(x_scale));
        if let Some(title) = &self.config.title {
            doc.push(title_node(self.config.dimensions, title));
        }

        debug!(points = self.data.len(), "area chart rendered");
        container.attach(self.handle, doc);
        Ok(())
    }

    pub fn destroy(&self, container: &mut Container) {
        container.detach(self.handle);
    }
}

fn close_to_baseline(
    line_d: &str,
    points: &[ScatterPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> String {
    let baseline = y_scale.position(0.0);
    let first_x = x_scale.position(points[0].x);
    let last_x = x_scale.position(points[points.len() - 1].x);
    format!("{line_d} L{last_x:.2},{baseline:.2} L{first_x:.2},{baseline:.2} Z")
}
