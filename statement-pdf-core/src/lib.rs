//! # statement-pdf
//!
//! Deterministic layout and PDF rendering of a synthetic Swiss bank account
//! statement, built on a small pure Rust PDF writer.
//!
//! ## Features
//!
//! - **Statement layout**: header, paginated transaction table and balance
//!   footer, computed as plain data before anything is drawn
//! - **Exact money**: amounts are `rust_decimal::Decimal`; rounding only
//!   happens when a value is printed
//! - **Swiss formatting**: `DD.MM.YYYY` dates and `1'850.00` amounts
//! - **PDF Generation**: standard Type1 fonts with WinAnsi text, vector
//!   rules, Flate-compressed content streams (`compression` feature)
//! - **Reproducible output**: identical input and generation date give
//!   identical bytes
//!
//! ## Quick Start
//!
//! ### Writing the sample statement
//!
//! ```rust,no_run
//! use statement_pdf::statement::{sample_transactions, StatementRenderer, DEFAULT_OUTPUT_FILE};
//!
//! # fn main() -> Result<(), statement_pdf::StatementError> {
//! let renderer = StatementRenderer::new()?;
//! let totals = renderer.render(&sample_transactions()?, DEFAULT_OUTPUT_FILE)?;
//!
//! println!("{}", totals.summary(renderer.profile()));
//! # Ok(())
//! # }
//! ```
//!
//! ### Drawing pages directly
//!
//! ```rust
//! use statement_pdf::{Document, Font, Page, Result, TextAlign};
//!
//! # fn main() -> Result<()> {
//! let mut doc = Document::new();
//! doc.set_title("Kontoauszug");
//!
//! let mut page = Page::a4();
//! page.text()
//!     .set_font(Font::HelveticaBold, 18.0)
//!     .at(40.0, 782.0)
//!     .write("Zürcher Kantonalbank")?;
//! page.text()
//!     .set_font(Font::Helvetica, 9.0)
//!     .write_aligned("1'850.00", 555.0, 597.0, TextAlign::Right)?;
//! page.graphics().line(40.0, 617.0, 555.0, 617.0);
//!
//! doc.add_page(page);
//! let mut bytes = Vec::new();
//! doc.write(&mut bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`statement`] - Records, formatting, pagination and rendering of statements
//! - [`document`] - PDF document creation and metadata
//! - [`page`] - Page size and drawing contexts
//! - [`graphics`] - Stroked lines and colors
//! - [`text`] - Fonts, metrics and WinAnsi text output
//! - [`objects`] - PDF object model
//! - [`writer`] - Low-level PDF writing

pub mod document;
pub mod error;
pub mod graphics;
pub mod objects;
pub mod page;
pub mod statement;
pub mod text;
pub mod writer;

pub use document::{Document, DocumentMetadata};
pub use error::{PdfError, Result, StatementError};
pub use graphics::{Color, GraphicsContext};
pub use page::Page;
pub use text::{Font, TextAlign, TextContext};

/// Current version of statement-pdf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_document() {
        let doc = Document::new();
        assert_eq!(doc.pages.len(), 0);
    }

    #[test]
    fn test_create_page() {
        let page = Page::new(595.0, 842.0);
        assert_eq!(page.width(), 595.0);
        assert_eq!(page.height(), 842.0);
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }
}
