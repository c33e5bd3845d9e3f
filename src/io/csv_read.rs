use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{Result, ToolError};
use crate::model::CsvTable;

/// Opens `path` for reading, mapping the common failure modes onto the
/// matching [`ToolError`] variants.
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => ToolError::MissingInput(path.to_path_buf()),
        ErrorKind::PermissionDenied => ToolError::PermissionDenied(path.to_path_buf()),
        _ => ToolError::Io(error),
    })
}

/// Builds a reader that yields every record, the header row included.
/// Records may have differing field counts.
pub fn raw_reader(path: &Path, delimiter: u8) -> Result<Reader<BufReader<File>>> {
    let file = open_input(path)?;
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(BufReader::new(file)))
}

/// Builds a reader that treats the first record as the header row.
pub fn header_reader(path: &Path, delimiter: u8) -> Result<Reader<BufReader<File>>> {
    let file = open_input(path)?;
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(BufReader::new(file)))
}

/// Reads only the header row. An empty file has no columns.
pub fn read_headers(path: &Path, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = header_reader(path, delimiter)?;
    Ok(record_to_strings(reader.headers()?))
}

/// Loads the whole file into memory.
///
/// Records shorter than the header are padded with empty fields so every row
/// lines up with the header; records longer than the header are rejected.
pub fn read_table(path: &Path, delimiter: u8) -> Result<CsvTable> {
    let mut reader = header_reader(path, delimiter)?;
    let mut table = CsvTable::new(record_to_strings(reader.headers()?));
    let width = table.headers.len();

    for record in reader.records() {
        let record = record?;
        if record.len() > width {
            return Err(ToolError::MalformedRow {
                line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                expected: width,
                found: record.len(),
            });
        }
        let mut row = record_to_strings(&record);
        row.resize(width, String::new());
        table.rows.push(row);
    }

    Ok(table)
}

fn record_to_strings(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}
