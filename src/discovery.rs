//! Locating the CSV file the extractor works on.
//!
//! Everything downstream only sees the [`PathBuf`] returned by an
//! [`InputResolver`], so the discovery heuristic can be swapped without
//! touching the extraction code.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use glob::{Pattern, glob};
use tracing::{debug, info, warn};

use crate::error::{Result, ToolError};

/// Patterns tried in order when no input file is given. The first pattern
/// with at least one match wins.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "export_catalog_product*.csv",
    "**/export/catalog_product*.csv",
    "**/var/export/catalog_product*.csv",
    "export_catalog_product.csv",
    "**/export_catalog_product.csv",
    "catalog_product*.csv",
    "**/catalog_product*.csv",
];

/// Path fragments that mark a match as a fixture rather than a real export.
const EXCLUDED_MARKERS: &[&str] = &["test", "sample"];

/// Produces the path of the input file.
pub trait InputResolver {
    fn resolve(&self) -> Result<PathBuf>;
}

/// A path supplied explicitly by the user.
#[derive(Debug, Clone)]
pub struct ExplicitPath(pub PathBuf);

impl InputResolver for ExplicitPath {
    fn resolve(&self) -> Result<PathBuf> {
        if self.0.exists() {
            Ok(self.0.clone())
        } else {
            Err(ToolError::MissingInput(self.0.clone()))
        }
    }
}

/// Searches `root` with an ordered list of glob patterns.
#[derive(Debug, Clone)]
pub struct GlobDiscovery {
    pub root: PathBuf,
    pub patterns: Vec<String>,
}

impl GlobDiscovery {
    /// Discovery over the catalog-product export patterns.
    pub fn catalog_exports(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn matches(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let root = Pattern::escape(&self.root.to_string_lossy());
        let full = Path::new(&root).join(pattern);
        let mut files = Vec::new();
        for entry in glob(&full.to_string_lossy())? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(error) => warn!(%error, "skipping unreadable path during discovery"),
            }
        }
        Ok(files)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let name = relative.to_string_lossy().to_lowercase();
        EXCLUDED_MARKERS.iter().any(|marker| name.contains(marker))
    }
}

impl InputResolver for GlobDiscovery {
    fn resolve(&self) -> Result<PathBuf> {
        for pattern in &self.patterns {
            let files = self.matches(pattern)?;
            if files.is_empty() {
                debug!(pattern = pattern.as_str(), "no match");
                continue;
            }

            let preferred: Vec<PathBuf> = files
                .iter()
                .filter(|path| !self.is_excluded(path))
                .cloned()
                .collect();
            let candidates = if preferred.is_empty() {
                debug!(
                    pattern = pattern.as_str(),
                    "only test or sample files matched, using them"
                );
                files
            } else {
                preferred
            };

            if let Some(path) = most_recent(candidates) {
                info!(
                    pattern = pattern.as_str(),
                    path = %path.display(),
                    "discovered input file"
                );
                return Ok(path);
            }
        }

        Err(ToolError::NoInputDiscovered {
            patterns: self.patterns.clone(),
        })
    }
}

/// Picks the newest file; ties keep the earliest candidate.
fn most_recent(candidates: Vec<PathBuf>) -> Option<PathBuf> {
    let mut best: Option<(SystemTime, PathBuf)> = None;
    for path in candidates {
        let stamp = created_at(&path);
        match &best {
            Some((current, _)) if stamp <= *current => {}
            _ => best = Some((stamp, path)),
        }
    }
    best.map(|(_, path)| path)
}

/// Creation time where the platform records it, modification time otherwise.
fn created_at(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|meta| meta.created().or_else(|_| meta.modified()))
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
