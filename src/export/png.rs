use resvg::{tiny_skia, usvg};
use tracing::debug;

use crate::error::{ExportError, ExportResult};
use crate::export::{FitTransform, PngExportConfig};
use crate::render::Color;

/// Rasterizes serialized SVG markup onto an off-screen surface of the
/// requested size: background fill, aspect-preserving scale, centered
/// placement, PNG encode.
pub(crate) fn rasterize(
    svg_markup: &str,
    source_w: f64,
    source_h: f64,
    config: &PngExportConfig,
) -> ExportResult<Vec<u8>> {
    let fit = FitTransform::compute(
        source_w,
        source_h,
        f64::from(config.width),
        f64::from(config.height),
    )?;

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg_markup, &options)
        .map_err(|err| ExportError::Load(err.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(config.width, config.height).ok_or_else(|| {
        ExportError::Render(format!(
            "cannot allocate {}x{} raster surface",
            config.width, config.height
        ))
    })?;
    let background = Color::parse(&config.background_color)
        .map_err(|err| ExportError::Render(err.to_string()))?;
    pixmap.fill(tiny_skia::Color::from_rgba8(
        background.red,
        background.green,
        background.blue,
        background.alpha,
    ));

    let transform = tiny_skia::Transform::from_scale(fit.scale as f32, fit.scale as f32)
        .post_translate(fit.offset_x as f32, fit.offset_y as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let bytes = pixmap
        .encode_png()
        .map_err(|err| ExportError::Encode(err.to_string()))?;
    debug!(
        width = config.width,
        height = config.height,
        scale = fit.scale,
        bytes = bytes.len(),
        "svg rasterized to png"
    );
    Ok(bytes)
}
