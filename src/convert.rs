use crate::error::{ConversionStage, FileProcessingError};
use crate::table::{parse_table, Table};

use std::path::Path;
use tracing::{debug, info};

/// Converts the delimited table at `source` into a pretty-printed JSON array
/// written to `destination`.
///
/// The destination is written once, and only after the whole table has been
/// read, parsed and serialized. Pointing `source` and `destination` at the
/// same file, or running two conversions into one destination at the same
/// time, is undefined.
pub async fn convert_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    delimiter: char,
) -> Result<(), FileProcessingError> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    let content = read_source(source)
        .await
        .map_err(|e| FileProcessingError::new(ConversionStage::Read, source, e))?;

    let lines = normalize_lines(&content);
    debug!(
        source = %source.display(),
        lines = lines.len(),
        "normalized source lines"
    );

    let table = parse_table(&lines, delimiter)
        .map_err(|e| FileProcessingError::new(ConversionStage::Parse, source, e))?;

    let json = render_table(&table)
        .map_err(|e| FileProcessingError::new(ConversionStage::Serialize, source, e))?;

    write_destination(destination, &json)
        .await
        .map_err(|e| FileProcessingError::new(ConversionStage::Write, destination, e))?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        records = table.len(),
        "converted table"
    );

    Ok(())
}

async fn read_source(path: &Path) -> std::io::Result<String> {
    debug!("Reading {}", path.display());
    tokio::fs::read_to_string(path).await
}

/// Splits on line breaks and drops lines that are blank after trimming.
pub fn normalize_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Serializes a table as a JSON array of objects with 2-space indentation.
pub fn render_table(table: &Table) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}

async fn write_destination(path: &Path, json: &str) -> std::io::Result<()> {
    debug!("Writing {} bytes to {}", json.len(), path.display());
    tokio::fs::write(path, json).await
}
