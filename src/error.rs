//! Error types for RTF generation.

use thiserror::Error;

/// Result type for RTF generation operations.
pub type RtfResult<T> = std::result::Result<T, RtfError>;

/// Errors reported by the RTF writer.
///
/// One flat namespace, one variant per write phase. Write-phase variants
/// carry the underlying I/O error as their source.
#[derive(Error, Debug)]
pub enum RtfError {
    /// Could not create the RTF file
    #[error("could not create RTF file: {0}")]
    Open(#[source] std::io::Error),

    /// Could not finalize the RTF file
    #[error("could not close RTF file: {0}")]
    Close(#[source] std::io::Error),

    /// Could not write the document header
    #[error("could not write RTF header: {0}")]
    Header(#[source] std::io::Error),

    /// Could not write document formatting properties
    #[error("could not write document formatting properties: {0}")]
    DocumentFormat(#[source] std::io::Error),

    /// Could not write section formatting properties
    #[error("could not write section formatting properties: {0}")]
    SectionFormat(#[source] std::io::Error),

    /// Could not write paragraph formatting properties
    #[error("could not write paragraph formatting properties: {0}")]
    ParagraphFormat(#[source] std::io::Error),

    /// Could not load, convert, or write an embedded image
    #[error("image error: {0}")]
    Image(String),

    /// Could not write table row or cell data
    #[error("could not write table data: {0}")]
    Table(#[source] std::io::Error),
}
