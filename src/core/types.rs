use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Target size of a rendered document in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Space reserved between the document edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            top: 24.0,
            right: 24.0,
            bottom: 40.0,
            left: 56.0,
        }
    }
}

/// One labeled datum for bar/pie style charts.
///
/// `label` uniquely identifies the datum within one render; dataset
/// canonicalization keeps the last point per label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
}

impl ChartPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value for label `{}` must be finite",
                self.label
            )));
        }
        Ok(())
    }
}

/// One positioned datum for scatter/line style charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            label: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "scatter coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Tagged dataset accepted by chart constructors and the data exports.
///
/// The discrimination between labeled and positioned records happens once,
/// here, instead of per-call shape sniffing. The untagged serde
/// representation keeps the wire format identical to the plain record
/// arrays host applications already exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartData {
    Xy(Vec<ScatterPoint>),
    Labeled(Vec<ChartPoint>),
}

impl ChartData {
    /// Validates and canonicalizes a labeled dataset: every value must be
    /// finite, and later points replace earlier points with the same label.
    pub fn labeled(points: Vec<ChartPoint>) -> ChartResult<Self> {
        for point in &points {
            point.validate()?;
        }
        Ok(Self::Labeled(canonicalize_labeled(points)))
    }

    /// Validates a positioned dataset: every coordinate must be finite.
    pub fn xy(points: Vec<ScatterPoint>) -> ChartResult<Self> {
        for point in &points {
            point.validate()?;
        }
        Ok(Self::Xy(points))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Labeled(points) => points.len(),
            Self::Xy(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_labeled(self, chart: &'static str) -> ChartResult<Vec<ChartPoint>> {
        match self {
            Self::Labeled(points) => Ok(points),
            Self::Xy(_) => Err(ChartError::DataShape {
                chart,
                expected: "labeled records ({label, value})",
            }),
        }
    }

    pub fn into_xy(self, chart: &'static str) -> ChartResult<Vec<ScatterPoint>> {
        match self {
            Self::Xy(points) => Ok(points),
            Self::Labeled(_) => Err(ChartError::DataShape {
                chart,
                expected: "positioned records ({x, y})",
            }),
        }
    }
}

/// Keyed-update semantics: the label is the identity of a datum, so a
/// dataset may carry at most one point per label. Last write wins, order
/// of first appearance is preserved.
fn canonicalize_labeled(points: Vec<ChartPoint>) -> Vec<ChartPoint> {
    let mut by_label: IndexMap<String, ChartPoint> = IndexMap::with_capacity(points.len());
    for point in points {
        by_label.insert(point.label.clone(), point);
    }
    by_label.into_values().collect()
}
