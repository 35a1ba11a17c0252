use crate::graphics::GraphicsContext;
use crate::text::{Font, TextContext};

/// A single page in a PDF document.
///
/// Pages have a size (width and height in points) and collect graphics
/// and text operations.
///
/// # Example
///
/// ```rust
/// use statement_pdf::{Font, Page};
///
/// let mut page = Page::a4();
///
/// page.text()
///     .set_font(Font::Helvetica, 12.0)
///     .at(40.0, 782.0)
///     .write("Kontoauszug")?;
///
/// page.graphics().line(40.0, 770.0, 555.0, 770.0);
/// # Ok::<(), statement_pdf::PdfError>(())
/// ```
#[derive(Clone)]
pub struct Page {
    width: f64,
    height: f64,
    graphics_context: GraphicsContext,
    text_context: TextContext,
}

impl Page {
    /// Creates a new page with the specified width and height in points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            graphics_context: GraphicsContext::new(),
            text_context: TextContext::new(),
        }
    }

    /// Creates a new A4 page (595 x 842 points).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    pub fn graphics(&mut self) -> &mut GraphicsContext {
        &mut self.graphics_context
    }

    pub fn text(&mut self) -> &mut TextContext {
        &mut self.text_context
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn used_fonts(&self) -> impl Iterator<Item = &Font> {
        self.text_context.used_fonts()
    }

    pub(crate) fn generate_content(&self) -> Vec<u8> {
        let mut content = self.graphics_context.generate_operations();
        content.extend_from_slice(&self.text_context.generate_operations());
        content
    }
}
