use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;
pub type ExportResult<T> = Result<T, ExportError>;

/// Construction, validation and analytics failures.
///
/// These are programmer errors or degenerate inputs surfaced at the API
/// boundary; renderers treat bad runtime data as a soft condition instead
/// (warn and render nothing).
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("wrong data shape for {chart}: expected {expected}")]
    DataShape {
        chart: &'static str,
        expected: &'static str,
    },

    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Export pipeline failures. All are recoverable by the caller; there is no
/// retry policy anywhere in the crate.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no rendered vector root in container")]
    NotFound,

    #[error("raster surface unavailable: {0}")]
    Render(String),

    #[error("encoding produced no data: {0}")]
    Encode(String),

    #[error("optional dependency missing: {0}")]
    DependencyMissing(&'static str),

    #[error("vector source failed to load: {0}")]
    Load(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
