use crate::error::Result;
use crate::page::Page;
use crate::text::Font;
use crate::writer::{PdfWriter, WriterConfig};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// A PDF document that can contain multiple pages and metadata.
///
/// # Example
///
/// ```rust
/// use statement_pdf::{Document, Page};
///
/// let mut doc = Document::new();
/// doc.set_title("Kontoauszug");
/// doc.add_page(Page::a4());
///
/// let mut buffer = Vec::new();
/// doc.write(&mut buffer).unwrap();
/// assert!(buffer.starts_with(b"%PDF-1.7"));
/// ```
pub struct Document {
    pub(crate) pages: Vec<Page>,
    pub(crate) metadata: DocumentMetadata,
    pub(crate) config: WriterConfig,
}

/// Metadata for a PDF document.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Software that created the original document
    pub creator: Option<String>,
    /// Software that produced the PDF
    pub producer: Option<String>,
    /// Date and time the document was created
    pub creation_date: Option<DateTime<Utc>>,
    /// Date and time the document was last modified
    pub modification_date: Option<DateTime<Utc>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: None,
            author: None,
            subject: None,
            creator: Some("statement_pdf".to_string()),
            producer: Some(format!("statement_pdf v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(now),
            modification_date: Some(now),
        }
    }
}

impl Document {
    /// Creates a new empty PDF document.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            metadata: DocumentMetadata::default(),
            config: WriterConfig::default(),
        }
    }

    /// Adds a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.metadata.subject = Some(subject.into());
    }

    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.metadata.creator = Some(creator.into());
    }

    pub fn set_producer(&mut self, producer: impl Into<String>) {
        self.metadata.producer = Some(producer.into());
    }

    /// Sets both creation and modification date.
    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
        self.metadata.modification_date = Some(date);
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Enables or disables Flate compression of page content streams.
    ///
    /// Without the `compression` feature streams are always written raw.
    pub fn set_compress(&mut self, compress: bool) {
        self.config.compress_streams = compress;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Fonts used anywhere in the document, in stable order.
    pub(crate) fn used_fonts(&self) -> Vec<Font> {
        let fonts: BTreeSet<&Font> = self.pages.iter().flat_map(Page::used_fonts).collect();
        fonts.into_iter().cloned().collect()
    }

    /// Saves the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let mut writer = PdfWriter::new(path, self.config)?;
        writer.write_document(self)?;
        Ok(())
    }

    /// Writes the document to a buffer.
    pub fn write(&self, buffer: &mut Vec<u8>) -> Result<()> {
        let mut writer = PdfWriter::new_with_writer(buffer, self.config);
        writer.write_document(self)?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
