//! Tesseract OCR engine, wrapping the `tesseract` command-line tool.
//!
//! The binary path is carried explicitly by [`TesseractEngine`] rather than
//! read from ambient configuration, so non-PATH installs work and tests can
//! point at a stub.

use image::{DynamicImage, ImageFormat};
use pdfocr_core::{OcrEngine, PdfOcrError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// OCR engine invoking the `tesseract` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesseractEngine {
    binary: PathBuf,
}

impl Default for TesseractEngine {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TesseractEngine {
    /// Create an engine that resolves `tesseract` from `PATH`
    #[inline]
    #[must_use = "engine is created but not used"]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
        }
    }

    /// Create an engine with an explicit binary path
    #[inline]
    #[must_use = "engine is created but not used"]
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Path to the tesseract binary this engine invokes
    #[inline]
    #[must_use = "binary path is returned but not used"]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Classify a process spawn failure: a missing binary is its own error
    /// kind, everything else is a recognition failure.
    fn spawn_error(&self, source: &std::io::Error) -> PdfOcrError {
        if source.kind() == ErrorKind::NotFound {
            PdfOcrError::EngineMissing(format!(
                "cannot run '{}': {source}",
                self.binary.display()
            ))
        } else {
            PdfOcrError::Recognition(format!(
                "cannot run '{}': {source}",
                self.binary.display()
            ))
        }
    }
}

/// Parse the output of `tesseract --list-langs`.
///
/// The listing starts with a `List of available languages (N):` header
/// followed by one language code per line. Older tesseract versions print
/// the listing to stderr, newer ones to stdout; callers pass the combined
/// text.
#[must_use = "parsed language list is returned but not used"]
pub fn parse_language_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with(':'))
        .map(ToString::to_string)
        .collect()
}

impl OcrEngine for TesseractEngine {
    fn installed_languages(&self) -> Result<Vec<String>> {
        let output = Command::new(&self.binary)
            .arg("--list-langs")
            .output()
            .map_err(|e| self.spawn_error(&e))?;

        if !output.status.success() {
            return Err(PdfOcrError::Recognition(format!(
                "'{} --list-langs' failed: {}",
                self.binary.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push('\n');
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(parse_language_listing(&text))
    }

    fn recognize(&self, image: &DynamicImage, lang: &str) -> Result<String> {
        // Hand the page to tesseract as a PNG temp file; "stdout" as the
        // output base makes it print the text instead of writing a file.
        let input = tempfile::Builder::new()
            .prefix("pdfocr-page-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| PdfOcrError::Recognition(format!("cannot create temp image: {e}")))?;

        image
            .save_with_format(input.path(), ImageFormat::Png)
            .map_err(|e| PdfOcrError::Recognition(format!("cannot encode page image: {e}")))?;

        log::debug!(
            "running {} on {} (lang {lang})",
            self.binary.display(),
            input.path().display()
        );
        let output = Command::new(&self.binary)
            .arg(input.path())
            .arg("stdout")
            .args(["-l", lang])
            .output()
            .map_err(|e| self.spawn_error(&e))?;

        if !output.status.success() {
            return Err(PdfOcrError::Recognition(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
