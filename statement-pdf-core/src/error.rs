use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Compression error: {0}")]
    CompressionError(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors raised while producing a statement.
#[derive(Error, Debug)]
pub enum StatementError {
    /// The drawing backend lacks something the statement needs. Checked once
    /// before any drawing starts.
    #[error("missing dependency: {dependency}")]
    DependencyMissing { dependency: String, remedy: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(PdfError),

    #[error("Invalid date '{0}', expected DD.MM.YYYY")]
    InvalidDate(String),
}

impl From<PdfError> for StatementError {
    fn from(error: PdfError) -> Self {
        match error {
            PdfError::Io(io) => StatementError::Io(io),
            other => StatementError::Pdf(other),
        }
    }
}
