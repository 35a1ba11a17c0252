//! The fixed data behind the ZKB January 2026 sample statement.

use crate::error::StatementError;
use crate::statement::record::TransactionRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// File name written when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "ZKB_Sample_Statement_January_2026.pdf";

/// Static texts printed around the transaction table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementProfile {
    pub bank_name: String,
    pub bank_address: Vec<String>,
    pub title: String,
    pub account_line: String,
    pub period_line: String,
    /// Short period name used in the printed summary
    pub period_label: String,
    /// Prefix of the generation date line
    pub created_prefix: String,
    pub customer_lines: Vec<String>,
    pub currency: String,
    pub date_column: String,
    pub description_column: String,
    pub amount_column: String,
    pub balance_label: String,
    pub disclaimer: Vec<String>,
    pub document_title: String,
}

impl StatementProfile {
    pub fn zkb_january_2026() -> Self {
        Self {
            bank_name: "Zürcher Kantonalbank".to_string(),
            bank_address: vec!["Bahnhofstrasse 9".to_string(), "8001 Zürich".to_string()],
            title: "Kontoauszug / Account Statement".to_string(),
            account_line: "Konto / Account: CH93 0070 0110 0012 3456 7".to_string(),
            period_line: "Periode / Period: 01.01.2026 - 31.01.2026".to_string(),
            period_label: "January 2026".to_string(),
            created_prefix: "Erstellt / Created:".to_string(),
            customer_lines: vec![
                "Max Mustermann".to_string(),
                "Musterstrasse 123".to_string(),
                "8000 Zürich".to_string(),
            ],
            currency: "CHF".to_string(),
            date_column: "Datum".to_string(),
            description_column: "Buchungstext".to_string(),
            amount_column: "Betrag CHF".to_string(),
            balance_label: "Saldo / Balance:".to_string(),
            disclaimer: vec![
                "Zürcher Kantonalbank - Alle Angaben ohne Gewähr".to_string(),
                "Bitte prüfen Sie die Angaben und melden Sie Unstimmigkeiten innert 30 Tagen."
                    .to_string(),
            ],
            document_title: "Kontoauszug Januar 2026".to_string(),
        }
    }
}

impl Default for StatementProfile {
    fn default() -> Self {
        Self::zkb_january_2026()
    }
}

// Negative = income (credit), positive = expense (debit).
const TRANSACTIONS: &[(&str, &str, Decimal)] = &[
    ("31.01.2026", "Lohnzahlung Januar 2026", dec!(-7500.00)),
    ("30.01.2026", "Miete Wohnung Zürich", dec!(1850.00)),
    ("29.01.2026", "CSS Krankenkasse Prämie", dec!(456.90)),
    ("28.01.2026", "COOP Zürich, Kaufvertrag", dec!(89.45)),
    ("28.01.2026", "Migros Oerlikon, Einkauf", dec!(67.80)),
    ("27.01.2026", "SBB Monatsabo Zone 110", dec!(89.00)),
    ("26.01.2026", "Swisscom AG Rechnung", dec!(79.00)),
    ("25.01.2026", "Restaurant Kronenhalle", dec!(125.50)),
    ("24.01.2026", "Denner Zürich HB", dec!(34.20)),
    ("23.01.2026", "VBZ Tram/Bus Ticket", dec!(12.40)),
    ("22.01.2026", "Manor Zürich, Kleidung", dec!(187.90)),
    ("21.01.2026", "Spotify Premium", dec!(12.95)),
    ("20.01.2026", "Netflix Abonnement", dec!(17.90)),
    ("19.01.2026", "COOP Zürich Bahnhofstrasse", dec!(56.30)),
    ("18.01.2026", "Migros Basel, Wocheneinkauf", dec!(143.75)),
    ("17.01.2026", "Starbucks Zürich HB", dec!(8.50)),
    ("16.01.2026", "McDonald's Zürich", dec!(15.40)),
    ("15.01.2026", "Helsana Krankenkasse Zusatz", dec!(123.50)),
    ("14.01.2026", "EWZ Stromrechnung", dec!(145.00)),
    ("13.01.2026", "Digitec Galaxus AG", dec!(234.90)),
    ("12.01.2026", "Amazon EU S.à r.l.", dec!(67.45)),
    ("11.01.2026", "COOP Zürich Seefeld", dec!(45.20)),
    ("10.01.2026", "Migros Zürich City", dec!(78.90)),
    ("09.01.2026", "SBB Billett Zürich-Bern", dec!(52.00)),
    ("08.01.2026", "Mobility Carsharing", dec!(89.00)),
    ("07.01.2026", "Parkhaus Zürich HB", dec!(24.00)),
    ("06.01.2026", "Zalando SE", dec!(145.80)),
    ("05.01.2026", "IKEA Zürich", dec!(267.50)),
    ("04.01.2026", "Coop Bau+Hobby", dec!(89.90)),
    ("03.01.2026", "Apotheke am Central", dec!(34.50)),
    ("02.01.2026", "Fitness First Zürich", dec!(99.00)),
    ("01.01.2026", "Jahresgebühr Konto", dec!(60.00)),
];

/// The 32 January 2026 bookings, newest first, exactly as printed.
pub fn sample_transactions() -> Result<Vec<TransactionRecord>, StatementError> {
    TRANSACTIONS
        .iter()
        .map(|&(date, description, amount)| TransactionRecord::parse(date, description, amount))
        .collect()
}
