use crate::ImageError;
use thiserror::Error;

/// Errors raised while assembling or serialising a PDF document
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// An image could not be prepared for embedding
    Image(#[from] ImageError),

    #[error("page is missing from the document")]
    /// A page referenced by the page order no longer exists
    PageMissing,
}

/// Errors raised while turning a book description into a document
#[derive(Error, Debug)]
pub enum BookError {
    #[error("invalid book description: {0}")]
    /// The book state could not be parsed, e.g. a negative page count
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    /// The document could not be serialised
    Pdf(#[from] PDFError),
}
