use lingua::{LanguageDetector as LinguaEngine, LanguageDetectorBuilder};
use thiserror::Error;

use crate::model::LanguageLabel;

/// Why a language could not be assigned to a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    /// The detector found no language clearly more likely than the others.
    #[error("language could not be determined")]
    Undetermined,
}

/// Detects the natural language of non-empty text.
///
/// Implementations must be deterministic: the same text always yields the
/// same result.
pub trait LanguageDetector {
    /// Returns the ISO 639-1 code of the detected language.
    fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

/// Detector backed by `lingua`'s statistical models for every language it
/// ships. Lingua does not sample, so repeated runs agree.
pub struct LinguaDetector {
    engine: LinguaEngine,
}

impl LinguaDetector {
    pub fn new() -> Self {
        Self {
            engine: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }
}

impl Default for LinguaDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for LinguaDetector {
    fn detect(&self, text: &str) -> Result<String, DetectionError> {
        self.engine
            .detect_language_of(text)
            .map(|language| language.iso_code_639_1().to_string())
            .ok_or(DetectionError::Undetermined)
    }
}

/// Labels one cell. Absent and blank cells are [`LanguageLabel::Empty`];
/// detection failures become [`LanguageLabel::Unknown`].
pub fn classify(value: Option<&str>, detector: &dyn LanguageDetector) -> LanguageLabel {
    let Some(text) = value.filter(|text| !text.trim().is_empty()) else {
        return LanguageLabel::Empty;
    };

    match detector.detect(text) {
        Ok(code) => LanguageLabel::Language(code),
        Err(_) => LanguageLabel::Unknown,
    }
}
