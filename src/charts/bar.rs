use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::charts::frame::{PlotFrame, title_node};
use crate::charts::{ChartHandle, Container};
use crate::core::{BandScale, ChartData, ChartPoint, Dimensions, Insets, LinearScale, series_color};
use crate::error::ChartResult;
use crate::render::{RectPrimitive, SvgDocument, SvgNode, class};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub dimensions: Dimensions,
    pub insets: Insets,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    pub band_padding: f64,
    pub show_grid: bool,
    pub background: String,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            insets: Insets::default(),
            title: None,
            band_padding: 0.2,
            show_grid: true,
            background: crate::core::DEFAULT_BACKGROUND.to_owned(),
        }
    }
}

impl BarChartConfig {
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
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }
}

/// Vertical bar chart over labeled data.
#[derive(Debug)]
pub struct BarChart {
    data: Vec<ChartPoint>,
    config: BarChartConfig,
    handle: ChartHandle,
}

impl BarChart {
    pub fn new(data: ChartData, config: BarChartConfig) -> ChartResult<Self> {
        config.dimensions.validate()?;
        Ok(Self {
            data: data.into_labeled("bar chart")?,
            config,
            handle: ChartHandle::next(),
        })
    }

    #[must_use]
    pub fn data(&self) -> &[ChartPoint] {
        &self.data
    }

    /// Renders into `container`, replacing this chart's previous output.
    /// An empty dataset is a soft condition: warn and render nothing.
    pub fn render_into(&self, container: &mut Container) -> ChartResult<()> {
        if self.data.is_empty() {
            warn!("bar chart: empty dataset, rendering nothing");
            return Ok(());
        }

        let frame = PlotFrame::new(self.config.dimensions, self.config.insets);
        let values = self.data.iter().map(|p| p.value);
        // Bars grow from a zero baseline, so the domain always spans it.
        let y_scale = LinearScale::from_values(
            values.chain([0.0]),
            frame.bottom,
            frame.top,
        )?;
        let band_scale = BandScale::new(
            self.data.len(),
            frame.left,
            frame.right,
            self.config.band_padding,
        )?;

        let mut doc =
            SvgDocument::new(self.config.dimensions).with_background(self.config.background.clone());
        if self.config.show_grid {
            doc.push(frame.y_grid(y_scale));
        }
        doc.push(frame.axis_lines());
        doc.push(SvgNode::Group {
            class: class::BAR,
            children: layout_bars(&self.data, &band_scale, y_scale),
        });
        doc.push(frame.band_labels(&band_scale, self.data.iter().map(|p| p.label.as_str())));
        if let Some(title) = &self.config.title {
            doc.push(title_node(self.config.dimensions, title));
        }

        debug!(bars = self.data.len(), "bar chart rendered");
        container.attach(self.handle, doc);
        Ok(())
    }

    /// Detaches this chart's rendered output from `container`.
    pub fn destroy(&self, container: &mut Container) {
        container.detach(self.handle);
    }
}

/// Projects each datum into a bar rect between the zero baseline and its
/// value. Negative values hang below the baseline.
fn layout_bars(points: &[ChartPoint], bands: &BandScale, y_scale: LinearScale) -> Vec<SvgNode> {
    let baseline = y_scale.position(0.0);
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let y_value = y_scale.position(point.value);
            let top = y_value.min(baseline);
            let height = (y_value - baseline).abs();
            SvgNode::Rect(RectPrimitive::new(
                bands.band_start(index),
                top,
                bands.bandwidth(),
                height,
                series_color(point.color.as_deref(), index),
                class::BAR,
            ))
        })
        .collect()
}
