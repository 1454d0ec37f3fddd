//! JSON output for the result set.
//!
//! Writes a UTF-8 JSON object with 4-space indentation and non-ASCII
//! characters left unescaped (serde_json's default). The file is written to
//! a temporary sibling first and renamed into place, so a failed run never
//! leaves a truncated output file.

use crate::error::{PdfOcrError, Result};
use crate::page::ResultSet;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::Path;

/// Options for JSON output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    /// Indentation string (default: 4 spaces)
    pub indent: String,
}

impl Default for JsonOptions {
    #[inline]
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

/// JSON writer for [`ResultSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonWriter {
    options: JsonOptions,
}

impl JsonWriter {
    /// Create a writer with default options (4-space indent)
    #[inline]
    #[must_use = "creates writer with default options"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options
    #[inline]
    #[must_use = "creates writer with custom options"]
    pub const fn with_options(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Serialize a result set to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[must_use = "this function returns serialized JSON that should be used"]
    pub fn to_string(&self, results: &ResultSet) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.options.indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        results.serialize(&mut serializer)?;
        // serde_json output is always valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Serialize a result set and write it to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns [`PdfOcrError::Write`] if the destination cannot be written
    /// (missing directory, permissions) and [`PdfOcrError::Json`] if
    /// serialization fails.
    pub fn write_file(&self, results: &ResultSet, path: &Path) -> Result<()> {
        let json = self.to_string(results)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let write_err = |source: std::io::Error| PdfOcrError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(json.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageText;

    fn sample() -> ResultSet {
        let mut set = ResultSet::new();
        set.push(PageText::Recognized("CAT".to_string()));
        set.push(PageText::Failed("engine message".to_string()));
        set
    }

    #[test]
    fn test_four_space_indent() {
        let json = JsonWriter::new().to_string(&sample()).unwrap();
        assert!(json.contains("\n    \"page_1\": \"CAT\""));
        assert!(json.contains("\"page_2\": \"[ERROR] engine message\""));
    }

    #[test]
    fn test_non_ascii_unescaped() {
        let mut set = ResultSet::new();
        set.push(PageText::Recognized("Привет мир".to_string()));
        let json = JsonWriter::new().to_string(&set).unwrap();
        assert!(json.contains("Привет мир"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_serialization_idempotent() {
        let writer = JsonWriter::new();
        let set = sample();
        assert_eq!(
            writer.to_string(&set).unwrap(),
            writer.to_string(&set).unwrap()
        );
    }

    #[test]
    fn test_write_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let writer = JsonWriter::new();
        writer.write_file(&sample(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, writer.to_string(&sample()).unwrap());

        // Two writes to different paths produce byte-identical content
        let path2 = dir.path().join("out2.json");
        writer.write_file(&sample(), &path2).unwrap();
        assert_eq!(content, std::fs::read_to_string(&path2).unwrap());
    }

    #[test]
    fn test_write_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.json");
        let err = JsonWriter::new().write_file(&sample(), &path).unwrap_err();
        assert!(matches!(err, PdfOcrError::Write { .. }));
    }

    #[test]
    fn test_empty_result_set() {
        let json = JsonWriter::new().to_string(&ResultSet::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
