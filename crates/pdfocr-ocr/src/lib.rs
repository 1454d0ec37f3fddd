//! # pdfocr-ocr
//!
//! Text recognition for the pdfocr pipeline.
//!
//! [`TesseractEngine`] invokes the `tesseract` binary per page, the same
//! backend process the tool's installed-language check queries with
//! `--list-langs`. [`preprocess::binarize`] provides the optional
//! grayscale-plus-Otsu preprocessing step.

pub mod preprocess;
pub mod tesseract;

pub use preprocess::binarize;
pub use tesseract::TesseractEngine;
