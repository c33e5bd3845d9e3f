use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info, instrument};

use crate::error::{Result, ToolError};
use crate::io::csv_read;
use crate::model::{DistinctValueSet, find_column};

/// Width of the dashed separator under the report header.
pub const SEPARATOR_WIDTH: usize = 50;

/// How values are read from the column.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub delimiter: u8,
    /// Fold values to lowercase before counting.
    pub ignore_case: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            delimiter: crate::io::DEFAULT_DELIMITER,
            ignore_case: false,
        }
    }
}

/// How the collected values are presented.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub with_counts: bool,
    pub sorted: bool,
}

/// Header names of `path`, trimmed, in file order.
pub fn list_columns(path: &Path, delimiter: u8) -> Result<Vec<String>> {
    let headers = csv_read::read_headers(path, delimiter)?;
    Ok(headers.iter().map(|name| name.trim().to_string()).collect())
}

/// Lines printed for `--list-columns`.
pub fn render_column_listing(columns: &[String]) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("Available columns ({} total):", columns.len()),
    ];
    lines.extend(
        columns
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{:2}. {name}", index + 1)),
    );
    lines
}

/// Scans every data row of `path` and collects the distinct trimmed,
/// non-empty values of `column`.
#[instrument(level = "info", skip_all, fields(path = %path.display(), column = column))]
pub fn extract_distinct_values(
    path: &Path,
    column: &str,
    options: ExtractOptions,
) -> Result<DistinctValueSet> {
    let mut reader = csv_read::header_reader(path, options.delimiter)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let index = find_column(&headers, column).ok_or_else(|| ToolError::ColumnNotFound {
        column: column.to_string(),
        available: headers.clone(),
    })?;
    debug!(index, "resolved column");

    let mut values = DistinctValueSet::new();
    let mut record = StringRecord::new();
    let mut scanned = 0u64;
    while reader.read_record(&mut record)? {
        scanned += 1;
        let Some(raw) = record.get(index) else {
            continue;
        };
        if options.ignore_case {
            values.observe(&raw.to_lowercase());
        } else {
            values.observe(raw);
        }
    }

    info!(scanned, distinct = values.len(), "column scanned");
    Ok(values)
}

/// Formats the extraction result: a title, the distinct total, a separator,
/// then one line per value.
pub fn render_report(
    column: &str,
    values: &DistinctValueSet,
    options: ReportOptions,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(values.len() + 3);

    if options.with_counts {
        lines.push(format!("Distinct values in column '{column}' (with counts):"));
    } else {
        lines.push(format!("Distinct values in column '{column}':"));
    }
    lines.push(format!("Total distinct values: {}", values.len()));
    lines.push("-".repeat(SEPARATOR_WIDTH));

    match (options.with_counts, options.sorted) {
        (true, true) => lines.extend(values.sorted().into_iter().map(count_line)),
        (true, false) => lines.extend(values.by_frequency().into_iter().map(count_line)),
        (false, true) => lines.extend(values.sorted().into_iter().map(|(value, _)| value)),
        (false, false) => {
            lines.extend(values.entries().iter().map(|(value, _)| value.clone()))
        }
    }

    lines
}

fn count_line((value, count): (String, u64)) -> String {
    format!("{count:5} | {value}")
}
