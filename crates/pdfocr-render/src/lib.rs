//! # pdfocr-render
//!
//! PDF page rasterization using pdfium.
//!
//! [`PdfRasterizer`] renders every page of a document to an in-memory image
//! at a configurable DPI. The pdfium library is bound lazily at call time —
//! system library first, then a copy next to the executable — so merely
//! constructing a rasterizer never touches the library.

// Page dimensions in points are small positive values; the pixel targets
// derived from them fit comfortably in i32.
#![allow(clippy::cast_possible_truncation)]

use pdfium_render::prelude::*;
use pdfocr_core::{PageImage, PageRasterizer, PdfOcrError, Result};
use std::path::Path;

/// PDF points per inch, the standard PostScript/PDF unit.
const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Default rasterization density in dots per inch.
pub const DEFAULT_DPI: u32 = 200;

/// Rasterizes PDF pages via pdfium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfRasterizer {
    dpi: u32,
}

impl Default for PdfRasterizer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PdfRasterizer {
    /// Create a rasterizer at the default density ([`DEFAULT_DPI`])
    #[inline]
    #[must_use = "rasterizer is created but not used"]
    pub const fn new() -> Self {
        Self { dpi: DEFAULT_DPI }
    }

    /// Create a rasterizer with a custom density
    #[inline]
    #[must_use = "rasterizer is created but not used"]
    pub const fn with_dpi(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Configured rasterization density
    #[inline]
    #[must_use = "dpi value is returned but not used"]
    pub const fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Bind pdfium: system library first, then a copy in the working
    /// directory.
    fn bind() -> Result<Pdfium> {
        let bindings = Pdfium::bind_to_system_library()
            .or_else(|_| {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            })
            .map_err(|e| PdfOcrError::Conversion(format!("failed to bind pdfium: {e}")))?;
        Ok(Pdfium::new(bindings))
    }
}

impl PageRasterizer for PdfRasterizer {
    // Sign loss safe: page dimensions and dpi are always positive
    #[allow(clippy::cast_precision_loss)]
    fn rasterize(&self, path: &Path) -> Result<Vec<PageImage>> {
        let pdfium = Self::bind()?;

        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| PdfOcrError::Conversion(e.to_string()))?;

        let page_count = document.pages().len() as usize;
        log::info!("rasterizing {page_count} page(s) at {} dpi", self.dpi);

        let mut pages = Vec::with_capacity(page_count);
        for (i, page) in document.pages().iter().enumerate() {
            let number = (i + 1) as u32;

            let width_pts = page.width().value;
            let height_pts = page.height().value;
            let scale = self.dpi as f32 / PDF_POINTS_PER_INCH;
            let config = PdfRenderConfig::new()
                .set_target_width((width_pts * scale) as i32)
                .set_target_height((height_pts * scale) as i32);

            let bitmap = page.render_with_config(&config).map_err(|e| {
                PdfOcrError::Conversion(format!("failed to render page {number}: {e}"))
            })?;

            pages.push(PageImage::new(number, bitmap.as_image()));
        }

        if pages.is_empty() {
            return Err(PdfOcrError::EmptyDocument);
        }

        Ok(pages)
    }
}
