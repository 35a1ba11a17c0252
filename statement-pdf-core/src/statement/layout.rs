//! Page layout of a statement, independent of the PDF backend.
//!
//! [`StatementLayout::build`] walks the records once and places every
//! string and rule on an A4 page in PDF coordinates (origin bottom-left).
//! The result is plain data: the renderer replays it onto [`crate::Page`]s,
//! and tests inspect it directly.

use crate::graphics::Color;
use crate::statement::format::format_currency;
use crate::statement::record::{TransactionRecord, DATE_FORMAT};
use crate::statement::sample::StatementProfile;
use crate::statement::totals::StatementTotals;
use crate::text::{Font, TextAlign};
use chrono::NaiveDate;
use tracing::debug;

/// Geometry and fonts of the statement page.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub page_width: f64,
    pub page_height: f64,
    /// Left edge of all text and rules
    pub margin_left: f64,
    /// Distance of the right-aligned amount column from the right page edge
    pub margin_right: f64,
    /// Distance of the first line from the top edge, on every page
    pub top_offset: f64,
    /// Rows are never drawn below this y
    pub bottom_threshold: f64,
    pub row_height: f64,
    pub description_x: f64,
    /// Offset of the amount column header from the right page edge
    pub amount_header_offset: f64,
    /// Offset of the customer address block from the right page edge
    pub customer_offset: f64,
    pub regular_font: Font,
    pub bold_font: Font,
    /// Stroke width of the table rules
    pub rule_width: f64,
    pub rule_color: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin_left: 40.0,
            margin_right: 40.0,
            top_offset: 60.0,
            bottom_threshold: 100.0,
            row_height: 15.0,
            description_x: 100.0,
            amount_header_offset: 120.0,
            customer_offset: 200.0,
            regular_font: Font::Helvetica,
            bold_font: Font::HelveticaBold,
            rule_width: 1.0,
            rule_color: Color::black(),
        }
    }
}

impl LayoutConfig {
    /// y of the first line on a page
    pub fn page_top(&self) -> f64 {
        self.page_height - self.top_offset
    }

    /// x at which amounts end
    pub fn amount_right(&self) -> f64 {
        self.page_width - self.margin_right
    }

    /// y of the first transaction row on the first page
    pub fn first_row_y(&self) -> f64 {
        self.table_header_y() - 25.0
    }

    fn cursor(&self) -> PageCursor {
        PageCursor::new(self.first_row_y(), self.page_top(), self.bottom_threshold)
    }

    fn table_header_y(&self) -> f64 {
        self.page_height - 220.0
    }

    /// Fonts every statement draws with.
    pub fn required_fonts(&self) -> [Font; 2] {
        [self.regular_font.clone(), self.bold_font.clone()]
    }

    /// Number of rows that fit between the table header and the bottom threshold.
    pub fn rows_on_first_page(&self) -> usize {
        let mut cursor = self.cursor();
        let mut rows = 0;
        while !cursor.needs_break() {
            cursor.advance(self.row_height);
            rows += 1;
        }
        rows
    }
}

/// Vertical write position on the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    y: f64,
    page_top: f64,
    threshold: f64,
}

impl PageCursor {
    pub fn new(y: f64, page_top: f64, threshold: f64) -> Self {
        Self {
            y,
            page_top,
            threshold,
        }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// True once the cursor has dropped below the threshold.
    pub fn needs_break(&self) -> bool {
        self.y < self.threshold
    }

    pub fn advance(&mut self, dy: f64) {
        self.y -= dy;
    }

    /// Moves to the top of a fresh page.
    pub fn new_page(&mut self) {
        self.y = self.page_top;
    }
}

/// What a placed string represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Header,
    Customer,
    TableHeader,
    /// Date of the n-th record
    Date(usize),
    /// Truncated description of the n-th record
    Description(usize),
    /// Amount of the n-th record
    Amount(usize),
    BalanceLabel,
    Balance,
    Disclaimer,
}

impl Role {
    pub fn is_row(&self) -> bool {
        matches!(self, Role::Date(_) | Role::Description(_) | Role::Amount(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub role: Role,
    pub text: String,
    pub font: Font,
    pub size: f64,
    /// Left edge, or right edge for [`TextAlign::Right`]
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutItem {
    Text(TextItem),
    Line(LineItem),
}

/// Everything drawn on one page, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    items: Vec<LayoutItem>,
}

impl LayoutPage {
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Text(text) => Some(text),
            LayoutItem::Line(_) => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Line(line) => Some(line),
            LayoutItem::Text(_) => None,
        })
    }

    /// Number of transaction rows on this page.
    pub fn row_count(&self) -> usize {
        self.texts()
            .filter(|text| matches!(text.role, Role::Date(_)))
            .count()
    }

    fn text(
        &mut self,
        role: Role,
        text: impl Into<String>,
        font: &Font,
        size: f64,
        x: f64,
        y: f64,
    ) {
        self.push_text(role, text.into(), font, size, (x, y), TextAlign::Left);
    }

    fn text_right(
        &mut self,
        role: Role,
        text: impl Into<String>,
        font: &Font,
        size: f64,
        x: f64,
        y: f64,
    ) {
        self.push_text(role, text.into(), font, size, (x, y), TextAlign::Right);
    }

    fn push_text(
        &mut self,
        role: Role,
        text: String,
        font: &Font,
        size: f64,
        (x, y): (f64, f64),
        align: TextAlign,
    ) {
        self.items.push(LayoutItem::Text(TextItem {
            role,
            text,
            font: font.clone(),
            size,
            x,
            y,
            align,
        }));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.items.push(LayoutItem::Line(LineItem { x1, y1, x2, y2 }));
    }
}

/// A fully paginated statement.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLayout {
    pages: Vec<LayoutPage>,
    totals: StatementTotals,
}

impl StatementLayout {
    /// Lays out `records` in input order.
    pub fn build(
        records: &[TransactionRecord],
        profile: &StatementProfile,
        config: &LayoutConfig,
        generated_on: NaiveDate,
    ) -> Self {
        let totals = StatementTotals::from_records(records);
        let mut pages = vec![LayoutPage::default()];

        let w = config.page_width;
        let h = config.page_height;
        let left = config.margin_left;
        let regular = &config.regular_font;
        let bold = &config.bold_font;

        {
            let page = &mut pages[0];
            page.text(Role::Header, &profile.bank_name, bold, 18.0, left, h - 60.0);
            for (line, y) in profile.bank_address.iter().zip([h - 80.0, h - 95.0]) {
                page.text(Role::Header, line, regular, 10.0, left, y);
            }
            page.text(Role::Header, &profile.title, bold, 12.0, left, h - 130.0);

            let created = format!(
                "{} {}",
                profile.created_prefix,
                generated_on.format(DATE_FORMAT)
            );
            let info_lines = [
                profile.account_line.as_str(),
                profile.period_line.as_str(),
                created.as_str(),
            ];
            for (line, y) in info_lines.into_iter().zip([h - 150.0, h - 165.0, h - 180.0]) {
                page.text(Role::Header, line, regular, 10.0, left, y);
            }
            for (line, y) in profile
                .customer_lines
                .iter()
                .zip([h - 150.0, h - 165.0, h - 180.0])
            {
                page.text(Role::Customer, line, regular, 10.0, w - config.customer_offset, y);
            }

            let header_y = config.table_header_y();
            page.text(Role::TableHeader, &profile.date_column, bold, 9.0, left, header_y);
            page.text(
                Role::TableHeader,
                &profile.description_column,
                bold,
                9.0,
                config.description_x,
                header_y,
            );
            page.text(
                Role::TableHeader,
                &profile.amount_column,
                bold,
                9.0,
                w - config.amount_header_offset,
                header_y,
            );
            page.line(left, header_y - 5.0, w - config.margin_right, header_y - 5.0);
        }

        let mut cursor = config.cursor();
        for (index, record) in records.iter().enumerate() {
            if cursor.needs_break() {
                debug!(
                    "Page break before row {} at y={:.0}, starting page {}",
                    index,
                    cursor.y(),
                    pages.len() + 1
                );
                pages.push(LayoutPage::default());
                cursor.new_page();
            }

            let y = cursor.y();
            let page = last_page(&mut pages);
            page.text(Role::Date(index), record.date_label(), regular, 9.0, left, y);
            page.text(
                Role::Description(index),
                record.display_description(),
                regular,
                9.0,
                config.description_x,
                y,
            );
            page.text_right(
                Role::Amount(index),
                record.display_amount(),
                regular,
                9.0,
                config.amount_right(),
                y,
            );
            cursor.advance(config.row_height);
        }

        // The footer follows the last row on its page, never on a page of its own.
        let page = last_page(&mut pages);
        let y = cursor.y();
        page.line(left, y - 10.0, w - config.margin_right, y - 10.0);
        cursor.advance(25.0);

        let y = cursor.y();
        page.text(Role::BalanceLabel, &profile.balance_label, bold, 10.0, left, y);
        page.text_right(
            Role::Balance,
            format_currency(&profile.currency, totals.final_balance),
            bold,
            10.0,
            config.amount_right(),
            y,
        );
        cursor.advance(40.0);

        let y = cursor.y();
        for (offset, line) in profile.disclaimer.iter().enumerate() {
            page.text(Role::Disclaimer, line, regular, 7.0, left, y - 10.0 * offset as f64);
        }

        for (number, page) in pages.iter().enumerate() {
            debug!(
                "Page {}: {} rows, {} primitives",
                number + 1,
                page.row_count(),
                page.items().len()
            );
        }

        Self { pages, totals }
    }

    pub fn pages(&self) -> &[LayoutPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn totals(&self) -> &StatementTotals {
        &self.totals
    }

    /// Every placed string across all pages, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.pages.iter().flat_map(LayoutPage::texts)
    }
}

fn last_page(pages: &mut Vec<LayoutPage>) -> &mut LayoutPage {
    if pages.is_empty() {
        pages.push(LayoutPage::default());
    }
    let last = pages.len() - 1;
    &mut pages[last]
}
