use crate::statement::format::format_currency;
use crate::statement::record::{EntryKind, TransactionRecord};
use crate::statement::sample::StatementProfile;
use rust_decimal::Decimal;
use std::fmt;

/// Aggregates printed under the table and in the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementTotals {
    pub transaction_count: usize,
    /// Sum of |amount| over income (negative) records
    pub total_income: Decimal,
    /// Sum of amount over expense (positive) records
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`
    pub final_balance: Decimal,
}

impl StatementTotals {
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;

        for record in records {
            match record.kind() {
                EntryKind::Income => total_income += record.amount().abs(),
                EntryKind::Expense => total_expenses += record.amount(),
                EntryKind::Neutral => {}
            }
        }

        Self {
            transaction_count: records.len(),
            total_income,
            total_expenses,
            final_balance: total_income - total_expenses,
        }
    }

    /// Human-readable run summary for `profile`'s period and currency.
    pub fn summary<'a>(&'a self, profile: &'a StatementProfile) -> StatementSummary<'a> {
        StatementSummary {
            totals: self,
            profile,
        }
    }
}

pub struct StatementSummary<'a> {
    totals: &'a StatementTotals,
    profile: &'a StatementProfile,
}

impl fmt::Display for StatementSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let currency = &self.profile.currency;
        writeln!(f, "Statement Summary:")?;
        writeln!(f, "  Period: {}", self.profile.period_label)?;
        writeln!(f, "  Transactions: {}", self.totals.transaction_count)?;
        writeln!(
            f,
            "  Total Income: {}",
            format_currency(currency, self.totals.total_income)
        )?;
        writeln!(
            f,
            "  Total Expenses: {}",
            format_currency(currency, self.totals.total_expenses)
        )?;
        write!(
            f,
            "  Final Balance: {}",
            format_currency(currency, self.totals.final_balance)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::sample::sample_transactions;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_totals() {
        let records = sample_transactions().unwrap();
        let totals = StatementTotals::from_records(&records);

        assert_eq!(totals.transaction_count, 32);
        assert_eq!(totals.total_income, dec!(7500.00));
        assert_eq!(totals.total_expenses, dec!(4803.60));
        assert_eq!(totals.final_balance, dec!(2696.40));
    }

    #[test]
    fn test_zero_amounts_count_but_do_not_sum() {
        let records = vec![
            TransactionRecord::parse("01.01.2026", "Storno", dec!(0)).unwrap(),
            TransactionRecord::parse("02.01.2026", "Gutschrift", dec!(-10.05)).unwrap(),
            TransactionRecord::parse("03.01.2026", "Kaffee", dec!(4.20)).unwrap(),
        ];
        let totals = StatementTotals::from_records(&records);

        assert_eq!(totals.transaction_count, 3);
        assert_eq!(totals.total_income, dec!(10.05));
        assert_eq!(totals.total_expenses, dec!(4.20));
        assert_eq!(totals.final_balance, dec!(5.85));
    }

    #[test]
    fn test_sums_are_exact() {
        let records: Vec<_> = (0..10)
            .map(|_| TransactionRecord::parse("05.01.2026", "Ticket", dec!(0.10)).unwrap())
            .collect();
        let totals = StatementTotals::from_records(&records);
        assert_eq!(totals.total_expenses, dec!(1.00));
        assert_eq!(totals.final_balance, dec!(-1.00));
    }

    #[test]
    fn test_empty_statement() {
        let totals = StatementTotals::from_records(&[]);
        assert_eq!(totals.transaction_count, 0);
        assert!(totals.final_balance.is_zero());
    }

    #[test]
    fn test_summary_text() {
        let records = sample_transactions().unwrap();
        let totals = StatementTotals::from_records(&records);
        let profile = StatementProfile::zkb_january_2026();

        let expected = "Statement Summary:\n\
                        \x20 Period: January 2026\n\
                        \x20 Transactions: 32\n\
                        \x20 Total Income: CHF 7'500.00\n\
                        \x20 Total Expenses: CHF 4'803.60\n\
                        \x20 Final Balance: CHF 2'696.40";
        assert_eq!(totals.summary(&profile).to_string(), expected);
    }
}
