use crate::document::Document;
use crate::error::StatementError;
use crate::page::Page;
use crate::statement::layout::{LayoutConfig, LayoutItem, StatementLayout};
use crate::statement::record::TransactionRecord;
use crate::statement::sample::StatementProfile;
use crate::statement::totals::StatementTotals;
use crate::text::{has_metrics, Font};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use std::path::Path;
use tracing::{debug, info};

const CREATOR: &str = "sample-statement";
const SUBJECT: &str = "Sample account statement";

/// Fails with [`StatementError::DependencyMissing`] for the first font
/// that has no width tables.
pub fn check_dependencies(fonts: &[Font]) -> Result<(), StatementError> {
    for font in fonts {
        if !has_metrics(font) {
            return Err(StatementError::DependencyMissing {
                dependency: format!("font metrics for {}", font.pdf_name()),
                remedy: "Use Helvetica or Helvetica-Bold for the statement layout.".to_string(),
            });
        }
    }
    Ok(())
}

/// Turns transaction records into a statement PDF.
///
/// ```no_run
/// use statement_pdf::statement::{sample_transactions, StatementRenderer};
///
/// let renderer = StatementRenderer::new()?;
/// let totals = renderer.render(&sample_transactions()?, "statement.pdf")?;
/// assert_eq!(totals.transaction_count, 32);
/// # Ok::<(), statement_pdf::StatementError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StatementRenderer {
    profile: StatementProfile,
    config: LayoutConfig,
    generated_on: NaiveDate,
    generated_at: DateTime<Utc>,
    compress: bool,
}

impl StatementRenderer {
    /// ZKB profile and default layout, dated today.
    pub fn new() -> Result<Self, StatementError> {
        Self::with_profile(StatementProfile::zkb_january_2026(), LayoutConfig::default())
    }

    pub fn with_profile(
        profile: StatementProfile,
        config: LayoutConfig,
    ) -> Result<Self, StatementError> {
        check_dependencies(&config.required_fonts())?;

        let now = Local::now();
        Ok(Self {
            profile,
            config,
            generated_on: now.date_naive(),
            generated_at: now.with_timezone(&Utc),
            compress: cfg!(feature = "compression"),
        })
    }

    /// Pins the generation date; the document timestamp becomes midnight UTC
    /// of that day, which makes the output byte-reproducible.
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self.generated_at = date.and_time(NaiveTime::MIN).and_utc();
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn profile(&self) -> &StatementProfile {
        &self.profile
    }

    pub fn layout(&self, records: &[TransactionRecord]) -> StatementLayout {
        StatementLayout::build(records, &self.profile, &self.config, self.generated_on)
    }

    /// Replays the layout onto backend pages.
    pub fn build_document(&self, layout: &StatementLayout) -> Result<Document, StatementError> {
        let mut document = Document::new();
        document.set_title(self.profile.document_title.as_str());
        document.set_author(self.profile.bank_name.as_str());
        document.set_subject(SUBJECT);
        document.set_creator(CREATOR);
        document.set_producer(format!("statement-pdf v{}", crate::VERSION));
        document.set_creation_date(self.generated_at);
        document.set_compress(self.compress);

        for layout_page in layout.pages() {
            let mut page = Page::new(self.config.page_width, self.config.page_height);
            page.graphics()
                .set_stroke_color(self.config.rule_color)
                .set_line_width(self.config.rule_width);
            for item in layout_page.items() {
                match item {
                    LayoutItem::Line(line) => {
                        page.graphics().line(line.x1, line.y1, line.x2, line.y2);
                    }
                    LayoutItem::Text(text) => {
                        page.text()
                            .set_font(text.font.clone(), text.size)
                            .write_aligned(&text.text, text.x, text.y, text.align)?;
                    }
                }
            }
            document.add_page(page);
        }

        debug!("Built document with {} page(s)", document.page_count());
        Ok(document)
    }

    /// Writes the statement for `records` to `output_path`.
    pub fn render(
        &self,
        records: &[TransactionRecord],
        output_path: impl AsRef<Path>,
    ) -> Result<StatementTotals, StatementError> {
        let output_path = output_path.as_ref();
        let layout = self.layout(records);
        let document = self.build_document(&layout)?;
        document.save(output_path)?;

        info!(
            "Saved statement with {} transactions on {} page(s) to {}",
            records.len(),
            document.page_count(),
            output_path.display()
        );
        Ok(*layout.totals())
    }

    /// Same as [`render`](Self::render) but returns the PDF bytes.
    pub fn render_to_bytes(
        &self,
        records: &[TransactionRecord],
    ) -> Result<Vec<u8>, StatementError> {
        let layout = self.layout(records);
        let document = self.build_document(&layout)?;
        let mut buffer = Vec::new();
        document.write(&mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::sample::sample_transactions;

    fn pinned() -> StatementRenderer {
        StatementRenderer::new()
            .unwrap()
            .with_generated_on(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
            .with_compression(false)
    }

    #[test]
    fn test_standard_fonts_pass_check() {
        assert!(check_dependencies(&[Font::Helvetica, Font::HelveticaBold]).is_ok());
    }

    #[test]
    fn test_custom_font_is_missing_dependency() {
        let config = LayoutConfig {
            bold_font: Font::custom("Frutiger-Bold"),
            ..LayoutConfig::default()
        };
        let result = StatementRenderer::with_profile(StatementProfile::default(), config);

        match result {
            Err(StatementError::DependencyMissing { dependency, remedy }) => {
                assert_eq!(dependency, "font metrics for Frutiger-Bold");
                assert!(remedy.contains("Helvetica"));
            }
            other => panic!("Expected DependencyMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_document_matches_layout() {
        let renderer = pinned();
        let layout = renderer.layout(&sample_transactions().unwrap());
        let document = renderer.build_document(&layout).unwrap();

        assert_eq!(document.page_count(), layout.page_count());
        let meta = document.metadata();
        assert_eq!(meta.title.as_deref(), Some("Kontoauszug Januar 2026"));
        assert_eq!(meta.author.as_deref(), Some("Zürcher Kantonalbank"));
        assert_eq!(meta.creator.as_deref(), Some("sample-statement"));
        assert_eq!(
            meta.creation_date.map(|d| d.date_naive()),
            NaiveDate::from_ymd_opt(2026, 2, 1)
        );
    }

    #[test]
    fn test_render_to_bytes_is_deterministic() {
        let records = sample_transactions().unwrap();
        let first = pinned().render_to_bytes(&records).unwrap();
        let second = pinned().render_to_bytes(&records).unwrap();

        assert!(first.starts_with(b"%PDF-1.7"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_reports_totals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.pdf");

        let totals = pinned()
            .render(&sample_transactions().unwrap(), &path)
            .unwrap();

        assert!(path.exists());
        assert_eq!(totals.transaction_count, 32);
        assert_eq!(totals.final_balance.to_string(), "2696.40");
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("statement.pdf");

        let result = pinned().render(&sample_transactions().unwrap(), &path);
        assert!(matches!(result, Err(StatementError::Io(_))));
    }
}
