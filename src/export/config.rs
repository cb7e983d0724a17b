use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Name stamped into artifact metadata when the caller supplies none.
pub const PRODUCT_NAME: &str = "chartex";

/// Artifact formats the container-bound exports can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Svg,
    Pdf,
}

impl ExportFormat {
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
            Self::Pdf => "application/pdf",
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgExportConfig {
    /// Write the artifact here as a side effect; the markup is returned
    /// either way.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub filename: Option<PathBuf>,
    /// Inject the static renderer stylesheet so the artifact is visually
    /// self-contained without external CSS.
    pub include_styles: bool,
}

impl SvgExportConfig {
    #[must_use]
    pub fn with_styles(mut self) -> Self {
        self.include_styles = true;
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PngExportConfig {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub filename: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    /// Carried for config compatibility; PNG encoding is lossless and
    /// ignores it, exactly as the original canvas runtime did.
    pub quality: f64,
}

impl Default for PngExportConfig {
    fn default() -> Self {
        Self {
            filename: None,
            width: 800,
            height: 600,
            background_color: crate::core::DEFAULT_BACKGROUND.to_owned(),
            quality: 0.9,
        }
    }
}

impl PngExportConfig {
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background_color: impl Into<String>) -> Self {
        self.background_color = background_color.into();
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfExportConfig {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub filename: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub quality: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subject: Option<String>,
}

impl Default for PdfExportConfig {
    fn default() -> Self {
        Self {
            filename: None,
            width: 800,
            height: 600,
            background_color: crate::core::DEFAULT_BACKGROUND.to_owned(),
            quality: 0.9,
            title: None,
            author: None,
            subject: None,
        }
    }
}

impl PdfExportConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// The raster pass feeding the page composition. Never writes a file
    /// of its own.
    #[cfg(feature = "pdf-export")]
    #[must_use]
    pub(crate) fn raster_config(&self) -> PngExportConfig {
        PngExportConfig {
            filename: None,
            width: self.width,
            height: self.height,
            background_color: self.background_color.clone(),
            quality: self.quality,
        }
    }
}
