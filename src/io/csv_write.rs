use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::{Result, ToolError};

/// Writes a header row followed by `rows` to `path`, replacing any existing
/// file. The header is written even when there are no rows.
pub fn write_rows<'a, I>(path: &Path, headers: &[String], rows: I, delimiter: u8) -> Result<usize>
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let file = File::create(path).map_err(|source| ToolError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(false)
        .from_writer(file);

    writer.write_record(headers)?;
    let mut written = 0;
    for row in rows {
        writer.write_record(row)?;
        written += 1;
    }
    writer.flush().map_err(|source| ToolError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(written)
}

/// Writes plain text lines joined by `\n`, without a trailing newline.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    std::fs::write(path, lines.join("\n")).map_err(|source| ToolError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn write_rows_quotes_embedded_newlines() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("out.csv");
        let headers = vec!["a".to_string(), "b".to_string()];
        let rows = vec![vec!["multi\nline".to_string(), "2".to_string()]];

        let written = write_rows(&path, &headers, &rows, b',').expect("rows written");

        assert_eq!(written, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "a,b\n\"multi\nline\",2\n"
        );
    }

    #[test]
    fn write_rows_emits_header_for_empty_partition() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("empty.csv");
        let headers = vec!["only".to_string()];

        let written = write_rows(&path, &headers, &Vec::<Vec<String>>::new(), b',')
            .expect("header written");

        assert_eq!(written, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "only\n");
    }

    #[test]
    fn write_lines_reports_unwritable_path() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("missing-dir").join("out.txt");

        let error = write_lines(&path, &["x".to_string()]).expect_err("write fails");
        assert!(matches!(error, ToolError::OutputWrite { .. }));
    }
}
