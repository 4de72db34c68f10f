use crate::error::TableError;
use crate::table::record::Record;
use crate::table::value::FieldValue;

use serde::Serialize;

/// Parsed records in input row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parses a header line followed by data lines into a [`Table`].
///
/// The first line names the columns. Every following line must split into
/// exactly as many fields as the header; the first line that doesn't fails
/// the whole call.
pub fn parse_table<S: AsRef<str>>(lines: &[S], delimiter: char) -> Result<Table, TableError> {
    let (header_line, data_lines) = lines.split_first().ok_or(TableError::EmptyInput)?;

    let header = parse_header(header_line.as_ref(), delimiter)?;

    let records = data_lines
        .iter()
        .enumerate()
        .map(|(row, line)| parse_row(&header, line.as_ref(), delimiter, row))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Table { records })
}

fn parse_header(line: &str, delimiter: char) -> Result<Vec<&str>, TableError> {
    let header: Vec<&str> = line.split(delimiter).collect();

    if header.iter().all(|name| name.trim().is_empty()) {
        return Err(TableError::EmptyHeader);
    }

    Ok(header)
}

pub(crate) fn parse_row(
    header: &[&str],
    line: &str,
    delimiter: char,
    row: usize,
) -> Result<Record, TableError> {
    let values: Vec<&str> = line.split(delimiter).collect();

    if values.len() != header.len() {
        return Err(TableError::RowCountMismatch {
            row,
            actual: values.len(),
            expected: header.len(),
        });
    }

    let mut record = Record::with_capacity(header.len());
    for (name, raw) in header.iter().zip(values) {
        record.insert(name, FieldValue::coerce(raw));
    }

    Ok(record)
}
