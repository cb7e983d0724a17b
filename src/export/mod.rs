//! The export pipeline: serializes the vector graphic currently rendered
//! in a [`Container`] into portable artifacts, plus the pure CSV/JSON data
//! exports. Every container read works on a clone, so exports never mutate
//! the live render and concurrent calls do independent work.

mod config;
mod csv;
mod fit;
mod json;
#[cfg(feature = "pdf-export")]
mod pdf;
#[cfg(feature = "png-export")]
mod png;
mod svg;

pub use config::{
    ExportFormat, PRODUCT_NAME, PdfExportConfig, PngExportConfig, SvgExportConfig,
};
pub use csv::export_csv;
pub use fit::FitTransform;
pub use json::export_json;
pub use svg::CHART_STYLESHEET;

use std::path::Path;

use tracing::debug;

use crate::charts::Container;
use crate::error::ExportResult;

/// Converts the currently-rendered vector graphic in one container into
/// downloadable artifacts. Holds only a borrow of that container; every
/// call targets its contents at call time.
pub struct ExportManager<'a> {
    container: &'a Container,
}

impl<'a> ExportManager<'a> {
    #[must_use]
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Serializes a clone of the rendered vector root. Fails with
    /// [`ExportError::NotFound`](crate::error::ExportError::NotFound) when
    /// nothing is rendered.
    pub fn export_svg(&self, config: &SvgExportConfig) -> ExportResult<String> {
        let markup = svg::serialize_root(self.container, config)?;
        if let Some(path) = &config.filename {
            write_text(path, &markup, ExportFormat::Svg)?;
        }
        Ok(markup)
    }

    /// Rasterizes the rendered vector root onto an off-screen surface of
    /// the requested size and encodes it as PNG.
    #[cfg(feature = "png-export")]
    pub fn export_png(&self, config: &PngExportConfig) -> ExportResult<Vec<u8>> {
        let root = self
            .container
            .vector_root()
            .ok_or(crate::error::ExportError::NotFound)?;
        let markup = root.to_svg_string();
        let bytes = png::rasterize(&markup, root.width(), root.height(), config)?;
        if let Some(path) = &config.filename {
            write_bytes(path, &bytes, ExportFormat::Png)?;
        }
        Ok(bytes)
    }

    #[cfg(not(feature = "png-export"))]
    pub fn export_png(&self, _config: &PngExportConfig) -> ExportResult<Vec<u8>> {
        Err(crate::error::ExportError::DependencyMissing(
            "png rasterizer (compile with the `png-export` feature)",
        ))
    }

    /// Reuses the PNG rasterization and places the result centered on a
    /// landscape page, with request metadata embedded.
    #[cfg(feature = "pdf-export")]
    pub fn export_pdf(&self, config: &PdfExportConfig) -> ExportResult<Vec<u8>> {
        let raster = self.export_png(&config.raster_config())?;
        let bytes = pdf::compose_page(&raster, config)?;
        if let Some(path) = &config.filename {
            write_bytes(path, &bytes, ExportFormat::Pdf)?;
        }
        Ok(bytes)
    }

    #[cfg(not(feature = "pdf-export"))]
    pub fn export_pdf(&self, _config: &PdfExportConfig) -> ExportResult<Vec<u8>> {
        Err(crate::error::ExportError::DependencyMissing(
            "pdf composer (compile with the `pdf-export` feature)",
        ))
    }
}

fn write_text(path: &Path, text: &str, format: ExportFormat) -> ExportResult<()> {
    std::fs::write(path, text)?;
    debug!(path = %path.display(), content_type = format.content_type(), "artifact written");
    Ok(())
}

#[cfg(feature = "png-export")]
fn write_bytes(path: &Path, bytes: &[u8], format: ExportFormat) -> ExportResult<()> {
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), content_type = format.content_type(), "artifact written");
    Ok(())
}
