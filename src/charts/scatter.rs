use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analytics::{convex_hull, cluster, fit_line};
use crate::charts::frame::{PlotFrame, title_node};
use crate::charts::{ChartHandle, Container};
use crate::core::{ChartData, Dimensions, Insets, LinearScale, ScatterPoint, series_color};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, SvgDocument, SvgNode, class,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    pub dimensions: Dimensions,
    pub insets: Insets,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    pub point_radius: f64,
    /// Fit and draw an OLS trend line over the full point set.
    pub show_trend_line: bool,
    /// Upper bound on k-means clusters; unset disables clustering.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_clusters: Option<usize>,
    /// Seed for centroid initialization; unset draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cluster_seed: Option<u64>,
    pub show_grid: bool,
    pub background: String,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            insets: Insets::default(),
            title: None,
            point_radius: 4.0,
            show_trend_line: false,
            max_clusters: None,
            cluster_seed: None,
            show_grid: true,
            background: crate::core::DEFAULT_BACKGROUND.to_owned(),
        }
    }
}

impl ScatterChartConfig {
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
    pub fn with_trend_line(mut self) -> Self {
        self.show_trend_line = true;
        self
    }

    #[must_use]
    pub fn with_max_clusters(mut self, max_clusters: usize) -> Self {
        self.max_clusters = Some(max_clusters);
        self
    }

    #[must_use]
    pub fn with_cluster_seed(mut self, cluster_seed: u64) -> Self {
        self.cluster_seed = Some(cluster_seed);
        self
    }
}

/// Scatter plot over positioned data, with optional trend-line and
/// cluster-boundary overlays.
#[derive(Debug)]
pub struct ScatterChart {
    data: Vec<ScatterPoint>,
    config: ScatterChartConfig,
    handle: ChartHandle,
}

impl ScatterChart {
    pub fn new(data: ChartData, config: ScatterChartConfig) -> ChartResult<Self> {
        config.dimensions.validate()?;
        Ok(Self {
            data: data.into_xy("scatter chart")?,
            config,
            handle: ChartHandle::next(),
        })
    }

    #[must_use]
    pub fn data(&self) -> &[ScatterPoint] {
        &self.data
    }

    pub fn render_into(&self, container: &mut Container) -> ChartResult<()> {
        if self.data.is_empty() {
            warn!("scatter chart: empty dataset, rendering nothing");
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

        if let Some(k) = self.config.max_clusters {
            doc.push(self.cluster_overlay(k, x_scale, y_scale));
        }

        let points = self
            .data
            .iter()
            .enumerate()
            .map(|(index, point)| {
                SvgNode::Circle(CirclePrimitive::new(
                    x_scale.position(point.x),
                    y_scale.position(point.y),
                    self.config.point_radius,
                    series_color(point.color.as_deref(), index),
                    class::SCATTER_POINT,
                ))
            })
            .collect();
        doc.push(SvgNode::Group {
            class: class::SCATTER_POINT,
            children: points,
        });

        if self.config.show_trend_line {
            match fit_line(&self.data) {
                Ok(Some(trend)) => {
                    let (x_min, x_max) = x_scale.domain();
                    let ((x0, y0), (x1, y1)) = trend.endpoints(x_min, x_max);
                    doc.push(SvgNode::Line(
                        LinePrimitive::new(
                            x_scale.position(x0),
                            y_scale.position(y0),
                            x_scale.position(x1),
                            y_scale.position(y1),
                            crate::core::AXIS_COLOR,
                            class::TREND_LINE,
                        )
                        .with_stroke_width(1.5)
                        .with_dash("6 4"),
                    ));
                }
                Ok(None) => {}
                // Degenerate x spread is a soft condition at render time;
                // callers hitting `analytics::fit_line` directly still get
                // the explicit error.
                Err(ChartError::DegenerateInput(reason)) => {
                    warn!(reason = %reason, "scatter chart: skipping trend line");
                }
                Err(other) => return Err(other),
            }
        }

        if let Some(title) = &self.config.title {
            doc.push(title_node(self.config.dimensions, title));
        }

        debug!(points = self.data.len(), "scatter chart rendered");
        container.attach(self.handle, doc);
        Ok(())
    }

    pub fn destroy(&self, container: &mut Container) {
        container.detach(self.handle);
    }

    /// Convex hull outlines around each k-means cluster. Clusters with two
    /// or fewer members have no area and are skipped.
    fn cluster_overlay(&self, k: usize, x_scale: LinearScale, y_scale: LinearScale) -> SvgNode {
        let mut rng: StdRng = match self.config.cluster_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let clusters = cluster(&self.data, k, &mut rng);

        let mut children = Vec::new();
        for (index, cluster) in clusters.iter().enumerate() {
            if cluster.members.len() <= 2 {
                continue;
            }
            let hull = convex_hull(&cluster.member_points(&self.data));
            if hull.len() < 3 {
                continue;
            }

            use std::fmt::Write as _;

            let mut d = String::new();
            for (i, corner) in hull.iter().enumerate() {
                let command = if i == 0 { 'M' } else { 'L' };
                let _ = write!(
                    d,
                    "{}{:.2},{:.2} ",
                    command,
                    x_scale.position(corner[0]),
                    y_scale.position(corner[1])
                );
            }
            d.push('Z');

            let color = series_color(None, index).to_owned();
            children.push(SvgNode::Path(
                PathPrimitive::filled(d, color.clone(), class::CLUSTER_HULL)
                    .with_fill_opacity(0.15)
                    .with_stroke(color),
            ));
        }
        SvgNode::Group {
            class: class::CLUSTER_HULL,
            children,
        }
    }
}
