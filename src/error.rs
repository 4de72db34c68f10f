use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Empty input: no lines to parse")]
    EmptyInput,

    #[error("Empty header: no usable field name")]
    EmptyHeader,

    #[error("Row {row} has {actual} fields, expected {expected}")]
    RowCountMismatch {
        row: usize,
        actual: usize,
        expected: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStage {
    Read,
    Parse,
    /// Only reachable if JSON rendering rejects a cell; tables built by
    /// `parse_table` always render.
    Serialize,
    Write,
}

impl fmt::Display for ConversionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversionStage::Read => "read",
            ConversionStage::Parse => "parse",
            ConversionStage::Serialize => "serialize",
            ConversionStage::Write => "write",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum FileProcessingCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] TableError),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// The only error surfaced by [`crate::convert_file`].
#[derive(Debug, Error)]
#[error("Failed to process file {} ({stage} stage)", .path.display())]
pub struct FileProcessingError {
    pub stage: ConversionStage,
    pub path: PathBuf,
    #[source]
    pub source: FileProcessingCause,
}

impl FileProcessingError {
    pub fn new(
        stage: ConversionStage,
        path: impl Into<PathBuf>,
        source: impl Into<FileProcessingCause>,
    ) -> Self {
        Self {
            stage,
            path: path.into(),
            source: source.into(),
        }
    }

    /// The parse failure behind this error, if the parse stage failed.
    pub fn table_error(&self) -> Option<&TableError> {
        match &self.source {
            FileProcessingCause::Parse(e) => Some(e),
            _ => None,
        }
    }
}
