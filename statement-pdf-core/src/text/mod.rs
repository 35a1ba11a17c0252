mod encoding;
mod font;
pub mod metrics;

pub use encoding::TextEncoding;
pub use font::Font;
pub use metrics::{has_metrics, measure_text};

use crate::error::{PdfError, Result};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Horizontal anchoring of a string relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at x
    #[default]
    Left,
    /// Text ends at x
    Right,
}

#[derive(Clone)]
pub struct TextContext {
    operations: String,
    current_font: Font,
    font_size: f64,
    position: (f64, f64),
    used_fonts: BTreeSet<Font>,
}

impl Default for TextContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TextContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            current_font: Font::Helvetica,
            font_size: 12.0,
            position: (0.0, 0.0),
            used_fonts: BTreeSet::new(),
        }
    }

    pub fn set_font(&mut self, font: Font, size: f64) -> &mut Self {
        self.current_font = font;
        self.font_size = size;
        self
    }

    pub fn current_font(&self) -> &Font {
        &self.current_font
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn at(&mut self, x: f64, y: f64) -> &mut Self {
        self.position = (x, y);
        self
    }

    /// Shows `text` with its left edge at the current position.
    pub fn write(&mut self, text: &str) -> Result<&mut Self> {
        let (x, y) = self.position;
        self.show_text(text, x, y)?;
        Ok(self)
    }

    /// Shows `text` anchored at `x` according to `align`.
    ///
    /// Right alignment measures the string with the current font's metrics
    /// and fails with [`PdfError::FontError`] for fonts without metrics.
    pub fn write_aligned(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        align: TextAlign,
    ) -> Result<&mut Self> {
        let start_x = match align {
            TextAlign::Left => x,
            TextAlign::Right => {
                let width =
                    measure_text(text, &self.current_font, self.font_size).ok_or_else(|| {
                        PdfError::FontError(format!(
                            "no metrics for font {}",
                            self.current_font.pdf_name()
                        ))
                    })?;
                x - width
            }
        };
        self.position = (x, y);
        self.show_text(text, start_x, y)?;
        Ok(self)
    }

    fn show_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        self.used_fonts.insert(self.current_font.clone());

        self.operations.push_str("BT\n");
        writeln!(
            &mut self.operations,
            "/{} {} Tf",
            self.current_font.pdf_name(),
            self.font_size
        )
        .map_err(|e| PdfError::InvalidStructure(e.to_string()))?;
        writeln!(&mut self.operations, "{x:.2} {y:.2} Td")
            .map_err(|e| PdfError::InvalidStructure(e.to_string()))?;

        let encoded_bytes = TextEncoding::WinAnsiEncoding.encode(text);

        self.operations.push('(');
        for &byte in &encoded_bytes {
            match byte {
                b'(' => self.operations.push_str("\\("),
                b')' => self.operations.push_str("\\)"),
                b'\\' => self.operations.push_str("\\\\"),
                b'\n' => self.operations.push_str("\\n"),
                b'\r' => self.operations.push_str("\\r"),
                b'\t' => self.operations.push_str("\\t"),
                0x20..=0x7E => self.operations.push(byte as char),
                _ => write!(&mut self.operations, "\\{byte:03o}")
                    .map_err(|e| PdfError::InvalidStructure(e.to_string()))?,
            }
        }
        self.operations.push_str(") Tj\n");
        self.operations.push_str("ET\n");

        Ok(())
    }

    /// Fonts referenced by the operations so far, in stable order.
    pub fn used_fonts(&self) -> impl Iterator<Item = &Font> {
        self.used_fonts.iter()
    }

    pub(crate) fn generate_operations(&self) -> Vec<u8> {
        self.operations.as_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(ctx: &TextContext) -> String {
        String::from_utf8(ctx.generate_operations()).unwrap()
    }

    #[test]
    fn test_write_left() {
        let mut ctx = TextContext::new();
        ctx.set_font(Font::Helvetica, 9.0)
            .at(40.0, 597.0)
            .write("31.01.2026")
            .unwrap();

        let out = ops(&ctx);
        assert!(out.contains("/Helvetica 9 Tf"));
        assert!(out.contains("40.00 597.00 Td"));
        assert!(out.contains("(31.01.2026) Tj"));
    }

    #[test]
    fn test_write_right_aligned_ends_at_anchor() {
        let mut ctx = TextContext::new();
        ctx.set_font(Font::Helvetica, 9.0);
        ctx.write_aligned("89.45", 555.0, 500.0, TextAlign::Right).unwrap();

        let width = measure_text("89.45", &Font::Helvetica, 9.0).unwrap();
        let expected = format!("{:.2} 500.00 Td", 555.0 - width);
        assert!(ops(&ctx).contains(&expected));
    }

    #[test]
    fn test_right_align_without_metrics_fails() {
        let mut ctx = TextContext::new();
        ctx.set_font(Font::custom("Frutiger"), 9.0);
        let result = ctx.write_aligned("1'850.00", 555.0, 500.0, TextAlign::Right);
        assert!(matches!(result, Err(PdfError::FontError(_))));
    }

    #[test]
    fn test_escapes_and_encodes() {
        let mut ctx = TextContext::new();
        ctx.at(0.0, 0.0).write("Zürich (HB)").unwrap();
        assert!(ops(&ctx).contains("(Z\\374rich \\(HB\\)) Tj"));
    }

    #[test]
    fn test_used_fonts_are_tracked() {
        let mut ctx = TextContext::new();
        ctx.set_font(Font::HelveticaBold, 18.0).write("A").unwrap();
        ctx.set_font(Font::Helvetica, 10.0).write("B").unwrap();
        ctx.set_font(Font::HelveticaBold, 9.0).write("C").unwrap();

        let fonts: Vec<_> = ctx.used_fonts().cloned().collect();
        assert_eq!(fonts, vec![Font::Helvetica, Font::HelveticaBold]);
    }
}
