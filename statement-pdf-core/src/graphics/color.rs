/// Represents a color in PDF documents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB color (red, green, blue) with values from 0.0 to 1.0
    Rgb(f64, f64, f64),
    /// Grayscale color with value from 0.0 (black) to 1.0 (white)
    Gray(f64),
}

impl Color {
    pub fn black() -> Self {
        Color::Gray(0.0)
    }
}
