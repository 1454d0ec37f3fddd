//! # pdfocr-pipeline
//!
//! The orchestrator for PDF-to-JSON OCR: validate the input, check the
//! language pack, rasterize, recognize each page in order, write the
//! result mapping.
//!
//! The pipeline is generic over its two external capabilities
//! ([`PageRasterizer`] and [`OcrEngine`]) so tests can run it against
//! fakes; [`OcrPipeline::with_default_backends`] wires the real pdfium
//! rasterizer and Tesseract engine.
//!
//! A recognition failure on a single page never aborts the run: the page's
//! entry becomes an `[ERROR]` marker and processing continues. Every other
//! failure aborts before any output file is written.

use image::DynamicImage;
use pdfocr_core::{
    JsonWriter, OcrEngine, PageImage, PageRasterizer, PageText, PdfOcrError, Result, ResultSet,
};
use pdfocr_ocr::{binarize, TesseractEngine};
use pdfocr_render::PdfRasterizer;
use std::path::Path;

/// Default OCR language pack
pub const DEFAULT_LANGUAGE: &str = "rus";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// OCR language code (default: `"rus"`)
    pub language: String,
    /// Recognize the binarized page image instead of the original.
    ///
    /// The reference behavior binarizes each page and then runs recognition
    /// on the untouched original; that stays the default here. Setting this
    /// routes the Otsu-binarized image to the engine instead.
    pub recognize_binarized: bool,
}

impl Default for PipelineConfig {
    #[inline]
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            recognize_binarized: false,
        }
    }
}

impl PipelineConfig {
    /// Configuration for a specific language, other options at defaults
    #[inline]
    #[must_use = "configuration is created but not used"]
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }
}

/// Sequential PDF OCR pipeline.
///
/// Runs once per document: no retries, no concurrency, pages processed in
/// document order.
pub struct OcrPipeline<R, E> {
    rasterizer: R,
    engine: E,
    config: PipelineConfig,
}

impl OcrPipeline<PdfRasterizer, TesseractEngine> {
    /// Build a pipeline on the real backends: pdfium rasterization at the
    /// given DPI and the `tesseract` binary from `PATH`.
    #[must_use = "pipeline is created but not used"]
    pub fn with_default_backends(config: PipelineConfig, dpi: u32) -> Self {
        Self::new(PdfRasterizer::with_dpi(dpi), TesseractEngine::new(), config)
    }
}

impl<R: PageRasterizer, E: OcrEngine> OcrPipeline<R, E> {
    /// Create a pipeline from explicit capabilities
    #[inline]
    pub const fn new(rasterizer: R, engine: E, config: PipelineConfig) -> Self {
        Self {
            rasterizer,
            engine,
            config,
        }
    }

    /// The active configuration
    #[inline]
    #[must_use = "configuration reference is returned but not used"]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The rasterizer capability this pipeline runs on
    #[inline]
    #[must_use = "rasterizer reference is returned but not used"]
    pub const fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// The OCR engine capability this pipeline runs on
    #[inline]
    #[must_use = "engine reference is returned but not used"]
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Whether the configured language pack is installed in the engine.
    ///
    /// An engine failure (including a missing engine binary) is reported
    /// here and treated as "not installed"; the caller decides whether to
    /// abort.
    fn language_installed(&self) -> bool {
        match self.engine.installed_languages() {
            Ok(langs) => langs.iter().any(|l| l == &self.config.language),
            Err(e) => {
                log::error!("failed to query installed languages: {e}");
                false
            }
        }
    }

    /// Recognize one page, converting an engine failure into an inline
    /// [`PageText::Failed`] record.
    fn recognize_page(&self, page: &PageImage) -> PageText {
        let outcome = if self.config.recognize_binarized {
            let binary = DynamicImage::ImageLuma8(binarize(&page.image));
            self.engine.recognize(&binary, &self.config.language)
        } else {
            self.engine.recognize(&page.image, &self.config.language)
        };

        match outcome {
            Ok(text) => PageText::Recognized(text),
            Err(e) => {
                log::warn!("page {}: {e}", page.number);
                PageText::Failed(e.to_string())
            }
        }
    }

    /// Run the pipeline: OCR the PDF at `input` and write the page-indexed
    /// JSON mapping to `output`.
    ///
    /// # Errors
    ///
    /// - [`PdfOcrError::FileNotFound`] if `input` does not exist (checked
    ///   before any other work).
    /// - [`PdfOcrError::UnsupportedLanguage`] if the configured language
    ///   pack is not installed (or the engine cannot be queried).
    /// - [`PdfOcrError::Conversion`] / [`PdfOcrError::EmptyDocument`] from
    ///   rasterization.
    /// - [`PdfOcrError::Write`] if the output cannot be persisted.
    ///
    /// None of these leave a partial output file behind.
    pub fn run(&self, input: &Path, output: &Path) -> Result<()> {
        if !input.exists() {
            return Err(PdfOcrError::FileNotFound(input.to_path_buf()));
        }

        if !self.language_installed() {
            return Err(PdfOcrError::UnsupportedLanguage(
                self.config.language.clone(),
            ));
        }

        log::info!("converting {} to images", input.display());
        let pages = self.rasterizer.rasterize(input)?;

        let mut results = ResultSet::new();
        for page in &pages {
            log::info!("processing page {}", page.number);
            results.push(self.recognize_page(page));
        }

        log::info!("saving results to {}", output.display());
        JsonWriter::new().write_file(&results, output)?;
        Ok(())
    }
}
