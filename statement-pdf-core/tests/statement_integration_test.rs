//! End-to-end tests: sample records to a PDF file on disk

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use statement_pdf::statement::{
    sample_transactions, LayoutConfig, StatementProfile, StatementRenderer, TransactionRecord,
    DEFAULT_OUTPUT_FILE,
};
use statement_pdf::{Font, StatementError};
use std::fs;
use tempfile::TempDir;

fn pinned_renderer() -> StatementRenderer {
    StatementRenderer::new()
        .unwrap()
        .with_generated_on(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
        .with_compression(false)
}

fn render_sample(dir: &TempDir) -> String {
    let path = dir.path().join(DEFAULT_OUTPUT_FILE);
    pinned_renderer()
        .render(&sample_transactions().unwrap(), &path)
        .unwrap();
    String::from_utf8_lossy(&fs::read(&path).unwrap()).into_owned()
}

#[test]
fn test_sample_statement_written_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT_FILE);

    let totals = pinned_renderer()
        .render(&sample_transactions().unwrap(), &path)
        .unwrap();

    assert_eq!(totals.transaction_count, 32);
    assert_eq!(totals.total_income, dec!(7500.00));
    assert_eq!(totals.total_expenses, dec!(4803.60));
    assert_eq!(totals.final_balance, dec!(2696.40));

    let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_sample_statement_structure() {
    let dir = TempDir::new().unwrap();
    let pdf = render_sample(&dir);

    assert!(pdf.starts_with("%PDF-1.7"));
    assert_eq!(pdf.matches("/Type /Page\n").count(), 1);
    assert!(pdf.contains("/BaseFont /Helvetica"));
    assert!(pdf.contains("/BaseFont /Helvetica-Bold"));
    assert!(pdf.contains("/Encoding /WinAnsiEncoding"));
}

#[test]
fn test_sample_rows_and_single_balance() {
    let dir = TempDir::new().unwrap();
    let pdf = render_sample(&dir);

    // Row dates are the only strings shaped like "(DD.MM.YYYY)"
    let rows = pdf
        .lines()
        .filter(|line| {
            let bytes = line.as_bytes();
            line.len() == 15 && line.ends_with(") Tj") && bytes[3] == b'.' && bytes[6] == b'.'
        })
        .count();
    assert_eq!(rows, 32);

    assert_eq!(pdf.matches("(CHF 2'696.40) Tj").count(), 1);
    let last_row = pdf.find("(Jahresgeb\\374hr Konto) Tj").unwrap();
    let balance = pdf.find("(CHF 2'696.40) Tj").unwrap();
    assert!(balance > last_row);
}

#[test]
fn test_umlauts_and_accents_are_winansi() {
    let dir = TempDir::new().unwrap();
    let pdf = render_sample(&dir);

    assert!(pdf.contains("(Z\\374rcher Kantonalbank) Tj"));
    assert!(pdf.contains("(Amazon EU S.\\340 r.l.) Tj"));
    assert!(pdf.contains("(McDonald's Z\\374rich) Tj"));
}

#[test]
fn test_pinned_output_is_byte_identical() {
    let records = sample_transactions().unwrap();
    let first = pinned_renderer().render_to_bytes(&records).unwrap();
    let second = pinned_renderer().render_to_bytes(&records).unwrap();
    assert_eq!(first, second);
}

#[cfg(feature = "compression")]
#[test]
fn test_compressed_output_is_smaller() {
    let records = sample_transactions().unwrap();
    let raw = pinned_renderer().render_to_bytes(&records).unwrap();
    let compressed = pinned_renderer()
        .with_compression(true)
        .render_to_bytes(&records)
        .unwrap();

    assert!(compressed.len() < raw.len());
    assert!(String::from_utf8_lossy(&compressed).contains("/FlateDecode"));
}

#[test]
fn test_forty_records_make_two_pages() {
    let records: Vec<_> = (0..40)
        .map(|i| {
            TransactionRecord::parse("15.01.2026", format!("Buchung {i}"), dec!(12.50)).unwrap()
        })
        .collect();

    let renderer = pinned_renderer();
    let layout = renderer.layout(&records);
    assert_eq!(layout.page_count(), 2);

    let document = renderer.build_document(&layout).unwrap();
    assert_eq!(document.page_count(), 2);

    let bytes = renderer.render_to_bytes(&records).unwrap();
    let pdf = String::from_utf8_lossy(&bytes).into_owned();
    assert!(pdf.contains("/Count 2"));
}

#[test]
fn test_missing_font_metrics_stop_before_drawing() {
    let dir = TempDir::new().unwrap();
    let config = LayoutConfig {
        regular_font: Font::custom("Frutiger"),
        ..LayoutConfig::default()
    };

    let result = StatementRenderer::with_profile(StatementProfile::default(), config);
    assert!(matches!(result, Err(StatementError::DependencyMissing { .. })));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}
