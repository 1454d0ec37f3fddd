//! # pdfocr-core
//!
//! Shared types for the pdfocr pipeline: the error taxonomy, per-page data
//! model, the ordered result mapping with its JSON writer, and the
//! capability traits the orchestrator is generic over.
//!
//! ## Data flow
//!
//! ```text
//! PageRasterizer -> Vec<PageImage> -> OcrEngine -> PageText -> ResultSet -> JsonWriter
//! ```
//!
//! ## Example
//!
//! ```
//! use pdfocr_core::{JsonWriter, PageText, ResultSet};
//!
//! let mut results = ResultSet::new();
//! results.push(PageText::Recognized("CAT".to_string()));
//! results.push(PageText::Failed("engine message".to_string()));
//!
//! let json = JsonWriter::new().to_string(&results)?;
//! assert!(json.contains("\"page_2\": \"[ERROR] engine message\""));
//! # Ok::<(), pdfocr_core::PdfOcrError>(())
//! ```

pub mod error;
pub mod page;
pub mod serializer;
pub mod traits;

pub use error::{PdfOcrError, Result};
pub use page::{PageImage, PageText, ResultSet, ERROR_MARKER};
pub use serializer::{JsonOptions, JsonWriter};
pub use traits::{OcrEngine, PageRasterizer};
