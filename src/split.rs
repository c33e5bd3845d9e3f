use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::error::{Result, ToolError};
use crate::io::{DEFAULT_DELIMITER, csv_read, csv_write};
use crate::language::{LanguageDetector, classify};
use crate::model::{CsvTable, LanguageLabel};

/// Settings for one splitter run. Built once at startup and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    /// CSV file to split.
    pub input: PathBuf,
    /// Receives rows written in `primary_language`.
    pub output_primary: PathBuf,
    /// Receives rows in any other language, or whose language is unknown.
    pub output_other: PathBuf,
    /// Receives rows whose column is blank.
    pub output_empty: PathBuf,
    /// Column whose text is classified.
    pub column: String,
    /// ISO 639-1 code routed to `output_primary`.
    pub primary_language: String,
    /// Field delimiter, a single ASCII character.
    pub delimiter: char,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.csv"),
            output_primary: PathBuf::from("italiano.csv"),
            output_other: PathBuf::from("non_italiano.csv"),
            output_empty: PathBuf::from("vuoti.csv"),
            column: "description".to_string(),
            primary_language: "it".to_string(),
            delimiter: DEFAULT_DELIMITER as char,
        }
    }
}

impl SplitConfig {
    /// Reads a JSON configuration file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|error| match error.kind() {
            std::io::ErrorKind::NotFound => ToolError::MissingInput(path.to_path_buf()),
            _ => ToolError::Io(error),
        })?;
        Ok(serde_json::from_str(&source)?)
    }

    fn delimiter_byte(&self) -> Result<u8> {
        crate::io::parse_delimiter(self.delimiter.encode_utf8(&mut [0; 4]))
    }
}

/// Rows routed to each output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub primary: Vec<Vec<String>>,
    pub other: Vec<Vec<String>>,
    pub empty: Vec<Vec<String>>,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.primary.len() + self.other.len() + self.empty.len()
    }
}

/// Row counts written by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitSummary {
    pub primary: usize,
    pub other: usize,
    pub empty: usize,
}

/// Classifies every row of `table` by the language of `column` and routes it
/// to exactly one side of the partition.
///
/// Fails before any detection work when the column is not in the header.
pub fn partition_table(
    table: &CsvTable,
    column: &str,
    primary_language: &str,
    detector: &dyn LanguageDetector,
) -> Result<Partition> {
    let index = table
        .column_index(column)
        .ok_or_else(|| ToolError::ColumnNotFound {
            column: column.to_string(),
            available: table.headers.clone(),
        })?;

    let mut partition = Partition::default();
    for row in &table.rows {
        let label = classify(row.get(index).map(String::as_str), detector);
        debug!(%label, "classified row");
        let target = match &label {
            LanguageLabel::Empty => &mut partition.empty,
            label if label.is_language(primary_language) => &mut partition.primary,
            _ => &mut partition.other,
        };
        target.push(row.clone());
    }

    Ok(partition)
}

/// Loads `config.input`, partitions it by language and writes the three
/// output files, each with the original header.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %config.input.display(), column = config.column.as_str())
)]
pub fn split_by_language(
    config: &SplitConfig,
    detector: &dyn LanguageDetector,
) -> Result<SplitSummary> {
    let delimiter = config.delimiter_byte()?;

    info!("loading CSV");
    let table = csv_read::read_table(&config.input, delimiter)?;
    info!(rows = table.len(), "detecting languages");
    let partition = partition_table(&table, &config.column, &config.primary_language, detector)?;

    info!("writing outputs");
    let summary = SplitSummary {
        primary: csv_write::write_rows(
            &config.output_primary,
            &table.headers,
            &partition.primary,
            delimiter,
        )?,
        other: csv_write::write_rows(
            &config.output_other,
            &table.headers,
            &partition.other,
            delimiter,
        )?,
        empty: csv_write::write_rows(
            &config.output_empty,
            &table.headers,
            &partition.empty,
            delimiter,
        )?,
    };
    info!(?summary, "split complete");
    Ok(summary)
}

/// Lines printed after a successful run.
pub fn render_summary(config: &SplitConfig, summary: SplitSummary) -> Vec<String> {
    vec![
        "Done! Saved:".to_string(),
        format!(
            "- {} ({} rows)",
            config.output_primary.display(),
            summary.primary
        ),
        format!("- {} ({} rows)", config.output_other.display(), summary.other),
        format!("- {} ({} rows)", config.output_empty.display(), summary.empty),
    ]
}
