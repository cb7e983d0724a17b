use std::path::Path;

use tracing::debug;

use crate::core::ChartData;
use crate::error::{ExportError, ExportResult};

/// Serializes a dataset to CSV. Pure and synchronous: the text is returned
/// regardless, and written to `path` only when one is given.
///
/// The headers are a compatibility surface consumed by downstream tooling:
/// labeled data emits exactly `Label,Value,Color`, positioned data exactly
/// `X,Y,Label,Color`. Missing optionals serialize as empty fields.
pub fn export_csv(data: &ChartData, path: Option<&Path>) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match data {
        ChartData::Labeled(points) => {
            writer.write_record(["Label", "Value", "Color"]).map_err(encode)?;
            for point in points {
                let value = format_number(point.value);
                writer
                    .write_record([
                        point.label.as_str(),
                        value.as_str(),
                        point.color.as_deref().unwrap_or(""),
                    ])
                    .map_err(encode)?;
            }
        }
        ChartData::Xy(points) => {
            writer.write_record(["X", "Y", "Label", "Color"]).map_err(encode)?;
            for point in points {
                let x = format_number(point.x);
                let y = format_number(point.y);
                writer
                    .write_record([
                        x.as_str(),
                        y.as_str(),
                        point.label.as_deref().unwrap_or(""),
                        point.color.as_deref().unwrap_or(""),
                    ])
                    .map_err(encode)?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Encode(err.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|err| ExportError::Encode(err.to_string()))?;

    if let Some(path) = path {
        std::fs::write(path, &text)?;
        debug!(path = %path.display(), content_type = "text/csv", "csv artifact written");
    }
    Ok(text)
}

fn encode(err: csv::Error) -> ExportError {
    ExportError::Encode(err.to_string())
}

/// Numbers print the way the data reads: integral values without a
/// trailing `.0`, everything else with its shortest float form.
fn format_number(value: f64) -> String {
    format!("{value}")
}
