#![forbid(unsafe_code)]

pub mod pdf;

use ei_core::report::ReportContent;
use thiserror::Error;

pub use pdf::PdfRenderer;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Errors emitted while producing a report document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    #[error("chart image is not a PNG")]
    NotPng,
    #[error("chart image could not be embedded: {0}")]
    Image(String),
    #[error(transparent)]
    Pdf(#[from] lopdf::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Pre-rendered chart bitmap supplied by the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct ChartImage {
    png: Vec<u8>,
}

impl ChartImage {
    /// Wraps PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::NotPng` if the bytes lack the PNG signature.
    pub fn from_png(png: Vec<u8>) -> Result<Self, RenderError> {
        if !png.starts_with(&PNG_SIGNATURE) {
            return Err(RenderError::NotPng);
        }
        Ok(Self { png })
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.png
    }
}

impl std::fmt::Debug for ChartImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChartImage({} bytes)", self.png.len())
    }
}

/// Turns report content into a complete binary document.
///
/// Implementations are synchronous; callers run them on a blocking worker.
pub trait ReportRenderer: Send + Sync {
    /// Render the whole document or fail; never a partial file.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if any page or the chart image cannot be produced.
    fn render(&self, content: &ReportContent, chart: Option<&ChartImage>)
    -> Result<Vec<u8>, RenderError>;
}
