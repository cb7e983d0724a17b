use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::charts::frame::title_node;
use crate::charts::{ChartHandle, Container};
use crate::core::{ChartData, ChartPoint, Dimensions, series_color};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, PathPrimitive, SvgDocument, SvgNode, TextAnchor, TextPrimitive, class,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub dimensions: Dimensions,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    /// Fraction of the shorter document edge used as the pie radius.
    pub radius_ratio: f64,
    pub show_labels: bool,
    pub background: String,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            title: None,
            radius_ratio: 0.38,
            show_labels: true,
            background: crate::core::DEFAULT_BACKGROUND.to_owned(),
        }
    }
}

impl PieChartConfig {
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
}

/// Pie chart over labeled data. Slices start at twelve o'clock and sweep
/// clockwise in dataset order.
#[derive(Debug)]
pub struct PieChart {
    data: Vec<ChartPoint>,
    config: PieChartConfig,
    handle: ChartHandle,
}

impl PieChart {
    pub fn new(data: ChartData, config: PieChartConfig) -> ChartResult<Self> {
        config.dimensions.validate()?;
        Ok(Self {
            data: data.into_labeled("pie chart")?,
            config,
            handle: ChartHandle::next(),
        })
    }

    /// Renders into `container`. A total of zero or less is a soft abort
    /// with a diagnostic, same as an empty dataset.
    pub fn render_into(&self, container: &mut Container) -> ChartResult<()> {
        if self.data.is_empty() {
            warn!("pie chart: empty dataset, rendering nothing");
            return Ok(());
        }
        let total: f64 = self.data.iter().map(|p| p.value).sum();
        if total <= 0.0 {
            warn!(total, "pie chart: non-positive total, rendering nothing");
            return Ok(());
        }

        let size = self.config.dimensions;
        let cx = f64::from(size.width) / 2.0;
        let cy = f64::from(size.height) / 2.0;
        let radius = f64::from(size.width.min(size.height)) * self.config.radius_ratio;

        let mut slices = Vec::new();
        let mut labels = Vec::new();
        let mut angle = -FRAC_PI_2;
        for (index, point) in self.data.iter().enumerate() {
            if point.value <= 0.0 {
                // Non-positive slices carry no angle; skip them.
                continue;
            }
            let fraction = point.value / total;
            let sweep = fraction * TAU;
            let color = series_color(point.color.as_deref(), index);

            if fraction >= 1.0 - 1e-9 {
                slices.push(SvgNode::Circle(CirclePrimitive::new(
                    cx,
                    cy,
                    radius,
                    color,
                    class::PIE_SLICE,
                )));
            } else {
                slices.push(SvgNode::Path(
                    PathPrimitive::filled(
                        slice_path(cx, cy, radius, angle, angle + sweep),
                        color,
                        class::PIE_SLICE,
                    )
                    .with_stroke(self.config.background.clone()),
                ));
            }

            if self.config.show_labels {
                let mid = angle + sweep / 2.0;
                labels.push(SvgNode::Text(TextPrimitive::new(
                    format!("{} ({:.0}%)", point.label, fraction * 100.0),
                    cx + mid.cos() * radius * 1.18,
                    cy + mid.sin() * radius * 1.18,
                    11.0,
                    crate::core::TEXT_COLOR,
                    TextAnchor::Middle,
                    class::CHART_TEXT,
                )));
            }
            angle += sweep;
        }

        let mut doc = SvgDocument::new(size).with_background(self.config.background.clone());
        doc.push(SvgNode::Group {
            class: class::PIE_SLICE,
            children: slices,
        });
        doc.push(SvgNode::Group {
            class: class::CHART_TEXT,
            children: labels,
        });
        if let Some(title) = &self.config.title {
            doc.push(title_node(size, title));
        }

        debug!(slices = self.data.len(), total, "pie chart rendered");
        container.attach(self.handle, doc);
        Ok(())
    }

    pub fn destroy(&self, container: &mut Container) {
        container.detach(self.handle);
    }
}

/// Wedge from `start` to `end` (radians, clockwise, y-down).
fn slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x0, y0) = (cx + start.cos() * r, cy + start.sin() * r);
    let (x1, y1) = (cx + end.cos() * r, cy + end.sin() * r);
    let large_arc = i32::from(end - start > std::f64::consts::PI);
    format!("M{cx:.2},{cy:.2} L{x0:.2},{y0:.2} A{r:.2},{r:.2} 0 {large_arc},1 {x1:.2},{y1:.2} Z")
}

#[cfg(test)]
mod tests {
    use super::{PieChart, PieChartConfig};
    use crate::charts::Container;
    use crate::core::{ChartData, ChartPoint};

    fn labeled(values: &[(&str, f64)]) -> ChartData {
        ChartData::labeled(
            values
                .iter()
                .map(|&(label, value)| ChartPoint::new(label, value))
                .collect(),
        )
        .expect("valid data")
    }

    #[test]
    fn renders_one_slice_per_positive_datum() {
        let chart = PieChart::new(
            labeled(&[("A", 1.0), ("B", 2.0), ("C", 1.0)]),
            PieChartConfig::default(),
        )
        .expect("chart");
        let mut container = Container::new();
        chart.render_into(&mut container).expect("render");

        let svg = container.vector_root().expect("root").to_svg_string();
        assert_eq!(svg.matches("class=\"pie-slice\" d=").count(), 3);
        assert!(svg.contains("B (50%)"));
    }

    #[test]
    fn non_positive_total_aborts_without_rendering() {
        let chart = PieChart::new(
            labeled(&[("A", 0.0), ("B", -3.0)]),
            PieChartConfig::default(),
        )
        .expect("chart");
        let mut container = Container::new();
        chart.render_into(&mut container).expect("render");
        assert!(container.is_empty());
    }

    #[test]
    fn single_slice_degenerates_to_a_circle() {
        let chart = PieChart::new(labeled(&[("All", 5.0)]), PieChartConfig::default())
            .expect("chart");
        let mut container = Container::new();
        chart.render_into(&mut container).expect("render");

        let svg = container.vector_root().expect("root").to_svg_string();
        assert_eq!(svg.matches("<circle class=\"pie-slice\"").count(), 1);
    }
}
