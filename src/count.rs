use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::csv_read;
use crate::model::RowCount;

/// Counts the logical records of a CSV file.
///
/// Quoted fields may span several physical lines; each record counts once no
/// matter how many newlines it contains. Blank lines count as empty rows. The
/// first row is counted like any other, so the total includes the header when
/// the file has one.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn count_rows(path: &Path, delimiter: u8) -> Result<RowCount> {
    let mut reader = csv_read::raw_reader(path, delimiter)?;
    let mut record = StringRecord::new();
    let mut records = 0u64;
    let mut embedded_newlines = 0u64;

    while reader.read_record(&mut record)? {
        records += 1;
        embedded_newlines += record
            .iter()
            .map(|field| field.matches('\n').count() as u64)
            .sum::<u64>();
    }

    // The reader skips blank lines, so they are whatever newlines are left
    // once record contents and record terminators are accounted for.
    let newlines = reader.position().line().saturating_sub(1);
    let bytes = reader.position().byte();
    let mut file = reader.into_inner().into_inner();
    let unterminated = records > 0 && !ends_with_newline(&mut file, bytes)?;
    let terminators = records - u64::from(unterminated);
    let blank_lines = newlines.saturating_sub(embedded_newlines + terminators);

    debug!(records, blank_lines, newlines, "reached end of input");
    let total = records + blank_lines;
    info!(total, "counted logical rows");
    Ok(RowCount { total })
}

fn ends_with_newline(file: &mut File, len: u64) -> Result<bool> {
    if len == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Lines printed by `rowcount` after a successful count.
pub fn render_summary(path: &Path, count: RowCount, exclude_header: bool) -> Vec<String> {
    let mut lines = vec![format!("CSV file: {}", path.display())];

    if exclude_header {
        let data_rows = count.excluding_header();
        lines.push(format!("Data rows: {data_rows}"));
        if data_rows == 0 {
            lines.push("The file contains no data rows after the header.".to_string());
        } else {
            lines.push("Note: The first row was treated as the header and not counted".to_string());
        }
    } else {
        lines.push(format!("Total rows: {}", count.including_header()));
        if count.total > 0 {
            lines.push(
                "Note: This count includes all rows (including header row if present)".to_string(),
            );
        } else {
            lines.push("The file appears to be empty or contains no valid CSV rows.".to_string());
        }
    }

    lines
}
