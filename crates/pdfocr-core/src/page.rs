//! Per-page data types and the ordered result mapping.

use image::DynamicImage;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single rasterized PDF page.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// 1-based page number
    pub number: u32,
    /// Rendered page image
    pub image: DynamicImage,
}

impl PageImage {
    /// Create a new page image
    #[inline]
    #[must_use = "page image is created but not used"]
    pub const fn new(number: u32, image: DynamicImage) -> Self {
        Self { number, image }
    }

    /// Image dimensions (width, height) in pixels
    #[inline]
    #[must_use = "dimensions are computed but not used"]
    pub fn dimensions(&self) -> (u32, u32) {
        use image::GenericImageView;
        self.image.dimensions()
    }
}

/// Outcome of recognizing one page: text, or an error description.
///
/// A failed page never aborts the run; the assembler renders the failure as
/// an inline `[ERROR]` marker string instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageText {
    /// Recognized text, leading/trailing whitespace stripped
    Recognized(String),
    /// Recognition failed; carries the error description
    Failed(String),
}

/// Literal prefix marking a failed page in the output.
pub const ERROR_MARKER: &str = "[ERROR]";

impl PageText {
    /// Render the outcome as the output string for this page.
    #[must_use = "rendered text is returned but not used"]
    pub fn render(&self) -> String {
        match self {
            Self::Recognized(text) => text.clone(),
            Self::Failed(description) => format!("{ERROR_MARKER} {description}"),
        }
    }

    /// Whether this page failed recognition
    #[inline]
    #[must_use = "failure check result is returned but not used"]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Ordered mapping from page number to recognized text.
///
/// Pages are appended in document order; page N lives at position N-1, so
/// keys are unique and ascending by construction. Serializes as a JSON
/// object with `page_1`, `page_2`, … keys in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pages: Vec<PageText>,
}

impl ResultSet {
    /// Create an empty result set
    #[inline]
    #[must_use = "result set is created but not used"]
    pub const fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Append the outcome for the next page in document order
    #[inline]
    pub fn push(&mut self, page: PageText) {
        self.pages.push(page);
    }

    /// Number of pages recorded
    #[inline]
    #[must_use = "page count is returned but not used"]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages have been recorded
    #[inline]
    #[must_use = "emptiness check result is returned but not used"]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get the outcome for a 1-based page number
    #[inline]
    #[must_use = "page lookup result is returned but not used"]
    pub fn get(&self, page_number: u32) -> Option<&PageText> {
        self.pages.get(page_number.checked_sub(1)? as usize)
    }

    /// Iterate `(key, rendered text)` pairs in page order
    pub fn entries(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.pages
            .iter()
            .enumerate()
            .map(|(i, page)| (format!("page_{}", i + 1), page.render()))
    }
}

impl Serialize for ResultSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.pages.len()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(&key, &value)?;
        }
        map.end()
    }
}
