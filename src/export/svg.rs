use crate::charts::Container;
use crate::error::{ExportError, ExportResult};
use crate::export::SvgExportConfig;
use crate::render::SvgNode;

/// Static styling for the class names every renderer emits. Injected on
/// request so exported markup survives without the host page's CSS.
pub const CHART_STYLESHEET: &str = "\
text { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; }\n\
.grid-line line, line.grid-line { stroke: #E5E7EB; stroke-width: 1; }\n\
.axis-line line, line.axis-line { stroke: #6B7280; stroke-width: 1.5; }\n\
.axis-label { font-size: 11px; fill: #374151; }\n\
.chart-text { font-size: 11px; fill: #374151; }\n\
.chart-title { font-size: 16px; font-weight: 600; fill: #374151; }\n\
.trend-line { stroke-dasharray: 6 4; }\n\
.cluster-hull { stroke-width: 1; }\n";

/// Serializes a clone of the container's vector root, optionally with the
/// stylesheet injected ahead of the rendered content.
pub(crate) fn serialize_root(
    container: &Container,
    config: &SvgExportConfig,
) -> ExportResult<String> {
    let root = container.vector_root().ok_or(ExportError::NotFound)?;
    let mut clone = root.clone();
    if config.include_styles {
        clone.push_front(SvgNode::Style(CHART_STYLESHEET.to_owned()));
    }
    Ok(clone.to_svg_string())
}
