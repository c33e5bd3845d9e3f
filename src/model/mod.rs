use std::collections::HashMap;
use std::fmt;

/// A fully loaded CSV file: the header row plus every data record.
///
/// Rows are kept as ordered field lists aligned with [`CsvTable::headers`];
/// lookups by column name resolve to the first header with that name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Creates an empty table with the provided header row.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Returns the position of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        find_column(&self.headers, name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolves a column name against a header row.
///
/// An exact match wins; otherwise the first header whose trimmed name equals
/// the trimmed request is used, so `" sku "` in the file still answers to
/// `sku`.
pub fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|header| header == name).or_else(|| {
        let wanted = name.trim();
        headers.iter().position(|header| header.trim() == wanted)
    })
}

/// Logical row count of a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount {
    /// Every logical record, header included.
    pub total: u64,
}

impl RowCount {
    /// Count including the first (header) row, if any.
    pub fn including_header(&self) -> u64 {
        self.total
    }

    /// Count of data rows, treating the first row as the header.
    pub fn excluding_header(&self) -> u64 {
        self.total.saturating_sub(1)
    }
}

/// Distinct trimmed values observed in one column with their occurrence
/// counts, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistinctValueSet {
    entries: Vec<(String, u64)>,
    positions: HashMap<String, usize>,
}

impl DistinctValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `raw`. The value is trimmed first; empty and
    /// whitespace-only values are ignored. Returns whether it was counted.
    pub fn observe(&mut self, raw: &str) -> bool {
        let value = raw.trim();
        if value.is_empty() {
            return false;
        }

        match self.positions.get(value) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.positions.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
        true
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, value: &str) -> Option<u64> {
        self.positions
            .get(value)
            .map(|&position| self.entries[position].1)
    }

    /// Values with their counts in first-seen order.
    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    /// Values with counts, most frequent first. Ties keep first-seen order.
    pub fn by_frequency(&self) -> Vec<(String, u64)> {
        let mut entries = self.entries.clone();
        entries.sort_by(|lhs, rhs| rhs.1.cmp(&lhs.1));
        entries
    }

    /// Values with counts, ordered alphabetically by value.
    pub fn sorted(&self) -> Vec<(String, u64)> {
        let mut entries = self.entries.clone();
        entries.sort_by(|lhs, rhs| lhs.0.cmp(&rhs.0));
        entries
    }
}

/// Outcome of classifying one cell by language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LanguageLabel {
    /// ISO 639-1 code reported by the detector.
    Language(String),
    /// The cell is absent, empty, or whitespace only.
    Empty,
    /// Detection could not decide.
    Unknown,
}

impl LanguageLabel {
    /// Returns true when the label names exactly the given language code.
    pub fn is_language(&self, code: &str) -> bool {
        matches!(self, LanguageLabel::Language(detected) if detected == code)
    }
}

impl fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageLabel::Language(code) => write!(f, "{code}"),
            LanguageLabel::Empty => write!(f, "empty"),
            LanguageLabel::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_set_skips_blank_values_and_trims() {
        let mut set = DistinctValueSet::new();
        assert!(set.observe(" Red "));
        assert!(set.observe("Red"));
        assert!(!set.observe(""));
        assert!(!set.observe("   \t"));

        assert_eq!(set.len(), 1);
        assert_eq!(set.count_of("Red"), Some(2));
        assert_eq!(set.count_of(" Red "), None);
    }

    #[test]
    fn frequency_order_breaks_ties_by_first_seen() {
        let mut set = DistinctValueSet::new();
        for value in ["b", "a", "c", "a", "c", "d"] {
            set.observe(value);
        }

        let ordered: Vec<_> = set
            .by_frequency()
            .into_iter()
            .map(|(value, _)| value)
            .collect();
        assert_eq!(ordered, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn sorted_order_is_alphabetical() {
        let mut set = DistinctValueSet::new();
        for value in ["pear", "Apple", "apple", "banana"] {
            set.observe(value);
        }

        let ordered: Vec<_> = set.sorted().into_iter().map(|(value, _)| value).collect();
        assert_eq!(ordered, vec!["Apple", "apple", "banana", "pear"]);
    }

    #[test]
    fn row_count_exposes_both_views() {
        let count = RowCount { total: 3 };
        assert_eq!(count.including_header(), 3);
        assert_eq!(count.excluding_header(), 2);
        assert_eq!(RowCount { total: 0 }.excluding_header(), 0);
    }

    #[test]
    fn column_lookup_falls_back_to_trimmed_header() {
        let headers = vec!["id".to_string(), " sku ".to_string()];
        assert_eq!(find_column(&headers, "sku"), Some(1));
        assert_eq!(find_column(&headers, "id"), Some(0));
        assert_eq!(find_column(&headers, "name"), None);
    }

    #[test]
    fn label_display_matches_partition_keys() {
        assert_eq!(LanguageLabel::Language("it".into()).to_string(), "it");
        assert_eq!(LanguageLabel::Empty.to_string(), "empty");
        assert_eq!(LanguageLabel::Unknown.to_string(), "unknown");
        assert!(LanguageLabel::Language("it".into()).is_language("it"));
        assert!(!LanguageLabel::Unknown.is_language("it"));
    }
}
