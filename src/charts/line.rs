use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::charts::frame::{PlotFrame, title_node};
use crate::charts::{ChartHandle, Container};
use crate::core::{ChartData, Dimensions, Insets, LinearScale, ScatterPoint, series_color};
use crate::error::ChartResult;
use crate::render::{PathPrimitive, SvgDocument, SvgNode, class};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub dimensions: Dimensions,
    pub insets: Insets,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    pub stroke_width: f64,
    pub show_grid: bool,
    pub background: String,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            insets: Insets::default(),
            title: None,
            stroke_width: 2.0,
            show_grid: true,
            background: crate::core::DEFAULT_BACKGROUND.to_owned(),
        }
    }
}

impl LineChartConfig {
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
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// Polyline chart over positioned data, drawn in dataset order.
#[derive(Debug)]
pub struct LineChart {
    data: Vec<ScatterPoint>,
    config: LineChartConfig,
    handle: ChartHandle,
}

impl LineChart {
    pub fn new(data: ChartData, config: LineChartConfig) -> ChartResult<Self> {
        config.dimensions.validate()?;
        Ok(Self {
            data: data.into_xy("line chart")?,
            config,
            handle: ChartHandle::next(),
        })
    }

    pub fn render_into(&self, container: &mut Container) -> ChartResult<()> {
        if self.data.len() < 2 {
            warn!(
                points = self.data.len(),
                "line chart: need at least two points, rendering nothing"
            );
            return Ok(());
        }

        let frame = PlotFrame::new(self.config.dimensions, self.config.insets);
        let x_scale =
            LinearScale::from_values(self.data.iter().map(|p| p.x), frame.left, frame.right)?;
        let y_scale =
            LinearScale::from_values(self.data.iter().map(|p| p.y), frame.bottom, frame.top)?;

        let mut doc =
            SvgDocument::new(self.config.dimensions).with_background(self.config.background.clone());
        if self.config.show_grid {
            doc.push(frame.y_grid(y_scale));
        }
        doc.push(frame.axis_lines());
        doc.push(SvgNode::Path(PathPrimitive::stroked(
            polyline_path(&self.data, x_scale, y_scale),
            series_color(self.data[0].color.as_deref(), 0),
            self.config.stroke_width,
            class::LINE_PATH,
        )));
        doc.push(frame.x_labels(x_scale));
        if let Some(title) = &self.config.title {
            doc.push(title_node(self.config.dimensions, title));
        }

        debug!(points = self.data.len(), "line chart rendered");
        container.attach(self.handle, doc);
        Ok(())
    }

    pub fn destroy(&self, container: &mut Container) {
        container.detach(self.handle);
    }
}

/// `M x0,y0 L x1,y1 …` over the projected points.
pub(crate) fn polyline_path(
    points: &[ScatterPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> String {
    use std::fmt::Write as _;

    let mut d = String::with_capacity(points.len() * 16);
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        let _ = write!(
            d,
            "{}{:.2},{:.2}",
            command,
            x_scale.position(point.x),
            y_scale.position(point.y)
        );
        if index + 1 < points.len() {
            d.push(' ');
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::{LineChart, LineChartConfig};
    use crate::charts::Container;
    use crate::core::{ChartData, ScatterPoint};

    #[test]
    fn renders_a_single_stroked_path() {
        let data = ChartData::xy(vec![
            ScatterPoint::new(0.0, 1.0),
            ScatterPoint::new(1.0, 3.0),
            ScatterPoint::new(2.0, 2.0),
        ])
        .expect("valid data");
        let chart = LineChart::new(data, LineChartConfig::default()).expect("chart");
        let mut container = Container::new();
        chart.render_into(&mut container).expect("render");

        let svg = container.vector_root().expect("root").to_svg_string();
        assert_eq!(svg.matches("class=\"line-path\"").count(), 1);
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn single_point_renders_nothing() {
        let data = ChartData::xy(vec![ScatterPoint::new(1.0, 1.0)]).expect("valid data");
        let chart = LineChart::new(data, LineChartConfig::default()).expect("chart");
        let mut container = Container::new();
        chart.render_into(&mut container).expect("render");
        assert!(container.is_empty());
    }
}
