use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Number of column names shown when a requested column is missing.
pub const COLUMN_PREVIEW_LIMIT: usize = 10;

/// Error type covering the different failure cases that can occur when the
/// tools read, inspect, or write CSV data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the CSV reader or writer fails, including invalid UTF-8.
    #[error("error reading CSV file: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when a JSON configuration file cannot be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a discovery pattern is not a valid glob.
    #[error("invalid glob pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    /// Raised when a required argument is missing or inconsistent.
    #[error("{0}")]
    Usage(String),

    /// Raised when the user provides a path that does not exist.
    #[error("file '{}' does not exist", .0.display())]
    MissingInput(PathBuf),

    /// Raised when the process may not read the input file.
    #[error("permission denied to read '{}'", .0.display())]
    PermissionDenied(PathBuf),

    /// Raised when no discovery pattern matched any file.
    #[error("could not find a CSV file matching any of: {}", .patterns.join(", "))]
    NoInputDiscovered { patterns: Vec<String> },

    /// Raised when the requested column is absent from the header row.
    #[error(
        "column '{column}' not found; available columns (first {}): {}{}",
        COLUMN_PREVIEW_LIMIT,
        column_preview(.available),
        remaining_columns(.available)
    )]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// Raised when a record carries more fields than the header declares.
    #[error("line {line}: expected at most {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Raised when an output file cannot be written.
    #[error("error writing to file '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

fn column_preview(available: &[String]) -> String {
    available
        .iter()
        .take(COLUMN_PREVIEW_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn remaining_columns(available: &[String]) -> String {
    match available.len().saturating_sub(COLUMN_PREVIEW_LIMIT) {
        0 => String::new(),
        more => format!(" ... and {more} more columns"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_not_found_lists_first_ten_columns() {
        let available: Vec<String> = (1..=13).map(|i| format!("c{i}")).collect();
        let error = ToolError::ColumnNotFound {
            column: "missing".to_string(),
            available,
        };
        let message = error.to_string();

        assert!(message.contains("'missing'"));
        assert!(message.contains("c1, c2, c3, c4, c5, c6, c7, c8, c9, c10"));
        assert!(!message.contains("c11"));
        assert!(message.ends_with("... and 3 more columns"));
    }

    #[test]
    fn column_not_found_without_overflow_has_no_suffix() {
        let error = ToolError::ColumnNotFound {
            column: "x".to_string(),
            available: vec!["a".to_string(), "b".to_string()],
        };

        assert!(error.to_string().ends_with(": a, b"));
    }
}
