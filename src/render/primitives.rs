use crate::error::{ChartError, ChartResult};

/// Stable class names attached to rendered elements. The export stylesheet
/// (`export::svg`) styles exactly this set, so renaming one is a breaking
/// change for exported artifacts.
pub mod class {
    pub const GRID_LINE: &str = "grid-line";
    pub const AXIS_LINE: &str = "axis-line";
    pub const AXIS_LABEL: &str = "axis-label";
    pub const CHART_TEXT: &str = "chart-text";
    pub const CHART_TITLE: &str = "chart-title";
    pub const BAR: &str = "bar";
    pub const LINE_PATH: &str = "line-path";
    pub const AREA_PATH: &str = "area-path";
    pub const PIE_SLICE: &str = "pie-slice";
    pub const SCATTER_POINT: &str = "scatter-point";
    pub const TREND_LINE: &str = "trend-line";
    pub const CLUSTER_HULL: &str = "cluster-hull";
}

/// Horizontal anchor of a text run relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub dash: Option<String>,
    pub class: &'static str,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: impl Into<String>, class: &'static str) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke: stroke.into(),
            stroke_width: 1.0,
            dash: None,
            class,
        }
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: impl Into<String>) -> Self {
        self.dash = Some(dash.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if ![self.x1, self.y1, self.x2, self.y2].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub class: &'static str,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>, class: &'static str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: fill.into(),
            class,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if ![self.x, self.y, self.width, self.height].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect extent must be non-negative".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    pub class: &'static str,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(cx: f64, cy: f64, r: f64, fill: impl Into<String>, class: &'static str) -> Self {
        Self {
            cx,
            cy,
            r,
            fill: fill.into(),
            class,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() || !self.r.is_finite() || self.r <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle geometry must be finite with r > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Free-form path in SVG `d` syntax, used by pie slices, line/area paths
/// and cluster hulls.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub d: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub fill_opacity: Option<f64>,
    pub class: &'static str,
}

impl PathPrimitive {
    #[must_use]
    pub fn filled(d: impl Into<String>, fill: impl Into<String>, class: &'static str) -> Self {
        Self {
            d: d.into(),
            fill: Some(fill.into()),
            stroke: None,
            stroke_width: 1.0,
            fill_opacity: None,
            class,
        }
    }

    #[must_use]
    pub fn stroked(d: impl Into<String>, stroke: impl Into<String>, stroke_width: f64, class: &'static str) -> Self {
        Self {
            d: d.into(),
            fill: None,
            stroke: Some(stroke.into()),
            stroke_width,
            fill_opacity: None,
            class,
        }
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.d.is_empty() {
            return Err(ChartError::InvalidData("path data must not be empty".to_owned()));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(opacity) = self.fill_opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ChartError::InvalidData(
                    "fill opacity must be in [0, 1]".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub fill: String,
    pub anchor: TextAnchor,
    pub class: &'static str,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size: f64,
        fill: impl Into<String>,
        anchor: TextAnchor,
        class: &'static str,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            fill: fill.into(),
            anchor,
            class,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData("text must not be empty".to_owned()));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
