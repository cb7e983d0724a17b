use crate::core::{
    AXIS_COLOR, BandScale, Dimensions, GRID_COLOR, Insets, LinearScale, TEXT_COLOR,
};
use crate::render::{LinePrimitive, SvgNode, TextAnchor, TextPrimitive, class};

const AXIS_FONT_SIZE: f64 = 11.0;
const TITLE_FONT_SIZE: f64 = 16.0;
const Y_TICK_TARGET: usize = 6;

/// Plot area of a cartesian chart, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlotFrame {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotFrame {
    pub(crate) fn new(size: Dimensions, insets: Insets) -> Self {
        Self {
            left: insets.left,
            right: f64::from(size.width) - insets.right,
            top: insets.top,
            bottom: f64::from(size.height) - insets.bottom,
        }
    }

    /// Horizontal grid lines and y tick labels for `scale`.
    pub(crate) fn y_grid(&self, scale: LinearScale) -> SvgNode {
        let mut children = Vec::new();
        for tick in scale.ticks(Y_TICK_TARGET) {
            let y = scale.position(tick);
            children.push(SvgNode::Line(LinePrimitive::new(
                self.left,
                y,
                self.right,
                y,
                GRID_COLOR,
                class::GRID_LINE,
            )));
            children.push(SvgNode::Text(TextPrimitive::new(
                format_tick(tick),
                self.left - 8.0,
                y + AXIS_FONT_SIZE / 3.0,
                AXIS_FONT_SIZE,
                TEXT_COLOR,
                TextAnchor::End,
                class::AXIS_LABEL,
            )));
        }
        SvgNode::Group {
            class: class::GRID_LINE,
            children,
        }
    }

    /// The two axis lines along the plot's left and bottom edges.
    pub(crate) fn axis_lines(&self) -> SvgNode {
        SvgNode::Group {
            class: class::AXIS_LINE,
            children: vec![
                SvgNode::Line(
                    LinePrimitive::new(
                        self.left,
                        self.bottom,
                        self.right,
                        self.bottom,
                        AXIS_COLOR,
                        class::AXIS_LINE,
                    )
                    .with_stroke_width(1.5),
                ),
                SvgNode::Line(
                    LinePrimitive::new(
                        self.left,
                        self.top,
                        self.left,
                        self.bottom,
                        AXIS_COLOR,
                        class::AXIS_LINE,
                    )
                    .with_stroke_width(1.5),
                ),
            ],
        }
    }

    /// Category labels centered under their bands.
    pub(crate) fn band_labels<'a, I>(&self, scale: &BandScale, labels: I) -> SvgNode
    where
        I: IntoIterator<Item = &'a str>,
    {
        let children = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                SvgNode::Text(TextPrimitive::new(
                    label,
                    scale.band_center(index),
                    self.bottom + AXIS_FONT_SIZE + 6.0,
                    AXIS_FONT_SIZE,
                    TEXT_COLOR,
                    TextAnchor::Middle,
                    class::AXIS_LABEL,
                ))
            })
            .collect();
        SvgNode::Group {
            class: class::AXIS_LABEL,
            children,
        }
    }

    /// Tick labels under a continuous x axis.
    pub(crate) fn x_labels(&self, scale: LinearScale) -> SvgNode {
        let children = scale
            .ticks(Y_TICK_TARGET)
            .into_iter()
            .map(|tick| {
                SvgNode::Text(TextPrimitive::new(
                    format_tick(tick),
                    scale.position(tick),
                    self.bottom + AXIS_FONT_SIZE + 6.0,
                    AXIS_FONT_SIZE,
                    TEXT_COLOR,
                    TextAnchor::Middle,
                    class::AXIS_LABEL,
                ))
            })
            .collect();
        SvgNode::Group {
            class: class::AXIS_LABEL,
            children,
        }
    }
}

/// Centered title along the document's top edge.
pub(crate) fn title_node(size: Dimensions, title: &str) -> SvgNode {
    SvgNode::Text(TextPrimitive::new(
        title,
        f64::from(size.width) / 2.0,
        TITLE_FONT_SIZE + 4.0,
        TITLE_FONT_SIZE,
        TEXT_COLOR,
        TextAnchor::Middle,
        class::CHART_TITLE,
    ))
}

/// Trims trailing float noise off tick labels.
pub(crate) fn format_tick(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e12 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
