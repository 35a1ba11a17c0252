/// Fonts a page can reference.
///
/// Standard fonts are available in every PDF reader and are not embedded.
/// Custom fonts are referenced by name only; they can be drawn but not
/// measured, since no metrics ship for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Font {
    /// Helvetica (sans-serif)
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Font known only by its base name
    Custom(String),
}

impl Font {
    /// Get the PDF base font name
    pub fn pdf_name(&self) -> String {
        match self {
            Font::Helvetica => "Helvetica".to_string(),
            Font::HelveticaBold => "Helvetica-Bold".to_string(),
            Font::Custom(name) => name.clone(),
        }
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Font::Custom(name.into())
    }
}
