use crate::error::StatementError;
use crate::statement::format::{format_amount, truncate_description};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Date format printed on the statement (and accepted by [`TransactionRecord::parse`]).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Which aggregate a transaction contributes to.
///
/// The sample data books income as a negative amount and expenses as a
/// positive one; both print without a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Negative amount (credit)
    Income,
    /// Positive amount (debit)
    Expense,
    /// Zero; counted in neither total
    Neutral,
}

/// One booked line of the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    date: NaiveDate,
    description: String,
    amount: Decimal,
}

impl TransactionRecord {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    /// Builds a record from a `DD.MM.YYYY` date string.
    pub fn parse(
        date: &str,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, StatementError> {
        let date = parse_date(date)?;
        Ok(Self::new(date, description, amount))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> EntryKind {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            EntryKind::Income
        } else if self.amount.is_zero() {
            EntryKind::Neutral
        } else {
            EntryKind::Expense
        }
    }

    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn display_description(&self) -> &str {
        truncate_description(&self.description)
    }

    pub fn display_amount(&self) -> String {
        format_amount(self.amount)
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, StatementError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| StatementError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_swiss_date() {
        let record = TransactionRecord::parse("28.01.2026", "COOP Zürich", dec!(89.45)).unwrap();
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2026, 1, 28).unwrap());
        assert_eq!(record.date_label(), "28.01.2026");
    }

    #[test]
    fn test_parse_rejects_iso_date() {
        let result = TransactionRecord::parse("2026-01-28", "COOP", dec!(1));
        assert!(matches!(result, Err(StatementError::InvalidDate(ref s)) if s == "2026-01-28"));
    }

    #[test]
    fn test_kind_follows_sign() {
        let income = TransactionRecord::parse("31.01.2026", "Lohn", dec!(-7500.00)).unwrap();
        let expense = TransactionRecord::parse("30.01.2026", "Miete", dec!(1850.00)).unwrap();
        let neutral = TransactionRecord::parse("29.01.2026", "Storno", dec!(0.00)).unwrap();

        assert_eq!(income.kind(), EntryKind::Income);
        assert_eq!(expense.kind(), EntryKind::Expense);
        assert_eq!(neutral.kind(), EntryKind::Neutral);
    }

    #[test]
    fn test_display_amount_has_no_sign() {
        let income = TransactionRecord::parse("31.01.2026", "Lohn", dec!(-7500.00)).unwrap();
        assert_eq!(income.display_amount(), "7'500.00");
    }

    #[test]
    fn test_display_description_is_truncated() {
        let long = "Migros Genossenschafts-Bund Zürich Limmatplatz Filiale 42";
        let record = TransactionRecord::parse("18.01.2026", long, dec!(143.75)).unwrap();

        assert_eq!(record.description(), long);
        assert_eq!(record.display_description().chars().count(), 45);
        assert!(long.starts_with(record.display_description()));
    }
}
