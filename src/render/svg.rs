use std::fmt::Write as _;

use crate::core::Dimensions;
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// One element of a rendered document.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    /// `<g class="..">` wrapper so exported markup stays inspectable.
    Group {
        class: &'static str,
        children: Vec<SvgNode>,
    },
    /// Literal CSS injected as a `<style>` block (export-side only).
    Style(String),
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Circle(CirclePrimitive),
    Path(PathPrimitive),
    Text(TextPrimitive),
}

impl SvgNode {
    fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Group { children, .. } => children.iter().try_for_each(SvgNode::validate),
            Self::Style(_) => Ok(()),
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Path(path) => path.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// The vector-graphic root a chart renders and the export pipeline reads.
///
/// Owns its node tree outright; cloning yields a fully independent document,
/// which is what keeps exports from ever mutating the live render.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    size: Dimensions,
    background: Option<String>,
    nodes: Vec<SvgNode>,
}

impl SvgDocument {
    #[must_use]
    pub fn new(size: Dimensions) -> Self {
        Self {
            size,
            background: None,
            nodes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn push(&mut self, node: SvgNode) {
        self.nodes.push(node);
    }

    /// Prepends a node, used by the export path to inject a stylesheet
    /// ahead of the rendered content.
    pub fn push_front(&mut self, node: SvgNode) {
        self.nodes.insert(0, node);
    }

    #[must_use]
    pub fn size(&self) -> Dimensions {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.size.width)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.size.height)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn nodes(&self) -> &[SvgNode] {
        &self.nodes
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.size.validate()?;
        self.nodes.iter().try_for_each(SvgNode::validate)
    }

    /// Serializes the document to standalone SVG markup.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        let mut out = String::with_capacity(1024);
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.size.width,
            h = self.size.height,
        );
        if let Some(background) = &self.background {
            let _ = writeln!(
                out,
                "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                self.size.width, self.size.height, background
            );
        }
        for node in &self.nodes {
            write_node(&mut out, node, 1);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_node(out: &mut String, node: &SvgNode, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        SvgNode::Group { class, children } => {
            let _ = writeln!(out, "{pad}<g class=\"{class}\">");
            for child in children {
                write_node(out, child, depth + 1);
            }
            let _ = writeln!(out, "{pad}</g>");
        }
        SvgNode::Style(css) => {
            let _ = writeln!(out, "{pad}<style>{css}</style>");
        }
        SvgNode::Line(line) => {
            let _ = write!(
                out,
                "{pad}<line class=\"{}\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"",
                line.class, line.x1, line.y1, line.x2, line.y2, line.stroke, line.stroke_width
            );
            if let Some(dash) = &line.dash {
                let _ = write!(out, " stroke-dasharray=\"{dash}\"");
            }
            out.push_str("/>\n");
        }
        SvgNode::Rect(rect) => {
            let _ = writeln!(
                out,
                "{pad}<rect class=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
                rect.class, rect.x, rect.y, rect.width, rect.height, rect.fill
            );
        }
        SvgNode::Circle(circle) => {
            let _ = writeln!(
                out,
                "{pad}<circle class=\"{}\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
                circle.class, circle.cx, circle.cy, circle.r, circle.fill
            );
        }
        SvgNode::Path(path) => {
            let _ = write!(out, "{pad}<path class=\"{}\" d=\"{}\"", path.class, path.d);
            match &path.fill {
                Some(fill) => {
                    let _ = write!(out, " fill=\"{fill}\"");
                }
                None => out.push_str(" fill=\"none\""),
            }
            if let Some(opacity) = path.fill_opacity {
                let _ = write!(out, " fill-opacity=\"{opacity}\"");
            }
            if let Some(stroke) = &path.stroke {
                let _ = write!(out, " stroke=\"{stroke}\" stroke-width=\"{}\"", path.stroke_width);
            }
            out.push_str("/>\n");
        }
        SvgNode::Text(text) => {
            let _ = writeln!(
                out,
                "{pad}<text class=\"{}\" x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\">{}</text>",
                text.class,
                text.x,
                text.y,
                text.font_size,
                text.fill,
                text.anchor.as_svg(),
                escape_xml(&text.text)
            );
        }
    }
}

/// Escapes text content for XML embedding.
#[must_use]
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{SvgDocument, SvgNode, escape_xml};
    use crate::core::Dimensions;
    use crate::render::{TextAnchor, TextPrimitive, class};

    #[test]
    fn serializes_a_well_formed_root() {
        let mut doc = SvgDocument::new(Dimensions::new(400, 300)).with_background("#FFFFFF");
        doc.push(SvgNode::Text(TextPrimitive::new(
            "A < B & C",
            10.0,
            20.0,
            12.0,
            "#374151",
            TextAnchor::Start,
            class::CHART_TEXT,
        )));

        let svg = doc.to_svg_string();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"0 0 400 300\""));
        assert!(svg.contains("A &lt; B &amp; C"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn escape_covers_the_five_xml_entities() {
        assert_eq!(escape_xml("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let mut doc = SvgDocument::new(Dimensions::new(100, 100));
        let mut copy = doc.clone();
        copy.push_front(SvgNode::Style(".x{}".to_owned()));
        assert!(doc.is_empty());
        assert!(!copy.is_empty());
        doc.push(SvgNode::Style(String::new()));
        assert_eq!(copy.nodes().len(), 1);
    }
}
