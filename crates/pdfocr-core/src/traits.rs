//! Capability traits for the two external backends.
//!
//! The pipeline never reaches for ambient engine state (binary paths,
//! library locations); each backend is a constructed object implementing one
//! of these traits, so tests can substitute fakes.

use crate::error::Result;
use crate::page::PageImage;
use image::DynamicImage;
use std::path::Path;

/// Converts a PDF document into an ordered sequence of page images.
pub trait PageRasterizer {
    /// Rasterize every page of the PDF at `path`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PdfOcrError::Conversion`] if the document cannot be
    /// parsed or rendered, and [`crate::PdfOcrError::EmptyDocument`] if it
    /// yields zero pages.
    fn rasterize(&self, path: &Path) -> Result<Vec<PageImage>>;
}

/// Recognizes text in page images.
pub trait OcrEngine {
    /// List the language packs installed in the backend.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PdfOcrError::EngineMissing`] if the backend itself
    /// cannot be located, or [`crate::PdfOcrError::Recognition`] if the
    /// query fails for any other reason.
    fn installed_languages(&self) -> Result<Vec<String>>;

    /// Recognize text in one page image, stripped of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PdfOcrError::Recognition`] if the engine fails on
    /// this image. Callers treat this as a per-page failure, not a fatal one.
    fn recognize(&self, image: &DynamicImage, lang: &str) -> Result<String>;
}
