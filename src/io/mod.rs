pub mod csv_read;
pub mod csv_write;

use crate::error::{Result, ToolError};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Parses a user-supplied delimiter. Only single-byte (ASCII) delimiters are
/// supported by the CSV reader; `\t` is accepted as an escape for tab.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    if raw == "\\t" {
        return Ok(b'\t');
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        _ => Err(ToolError::Usage(format!(
            "delimiter must be a single ASCII character, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_delimiter_accepts_single_ascii_characters() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\t").unwrap(), b'\t');
    }

    #[test]
    fn parse_delimiter_rejects_everything_else() {
        assert!(matches!(parse_delimiter(""), Err(ToolError::Usage(_))));
        assert!(matches!(parse_delimiter(";;"), Err(ToolError::Usage(_))));
        assert!(matches!(parse_delimiter("§"), Err(ToolError::Usage(_))));
    }
}
