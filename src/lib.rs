pub mod convert;
pub mod error;
pub mod table;

pub use convert::{convert_file, normalize_lines, render_table};
pub use error::{ConversionStage, FileProcessingCause, FileProcessingError, TableError};
pub use table::{parse_table, FieldValue, Record, Table};
