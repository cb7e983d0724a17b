use std::path::Path;

use tracing::debug;

use crate::core::ChartData;
use crate::error::{ExportError, ExportResult};

/// Pretty-prints the dataset as a plain record array, so parsing the
/// output yields exactly the records that went in. Written to `path` only
/// when one is given.
pub fn export_json(data: &ChartData, path: Option<&Path>) -> ExportResult<String> {
    let text = match data {
        ChartData::Labeled(points) => serde_json::to_string_pretty(points),
        ChartData::Xy(points) => serde_json::to_string_pretty(points),
    }
    .map_err(|err| ExportError::Encode(err.to_string()))?;

    if let Some(path) = path {
        std::fs::write(path, &text)?;
        debug!(path = %path.display(), content_type = "application/json", "json artifact written");
    }
    Ok(text)
}
