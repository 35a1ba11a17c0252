//! Swiss number formatting for statement amounts.
//!
//! Amounts print with two decimals and an apostrophe between thousands
//! (`1'850.00`). Rounding happens here and nowhere else; sums stay exact.

use rust_decimal::{Decimal, RoundingStrategy};

/// Descriptions longer than this are cut without an ellipsis.
pub const DESCRIPTION_MAX_CHARS: usize = 45;

/// Thousands separator (Swiss usage).
pub const GROUPING_SEPARATOR: char = '\'';

/// First [`DESCRIPTION_MAX_CHARS`] characters of `description`.
pub fn truncate_description(description: &str) -> &str {
    match description.char_indices().nth(DESCRIPTION_MAX_CHARS) {
        Some((byte_index, _)) => &description[..byte_index],
        None => description,
    }
}

/// Absolute value with two decimals and grouping; never signed.
///
/// ```
/// use rust_decimal_macros::dec;
/// use statement_pdf::statement::format_amount;
///
/// assert_eq!(format_amount(dec!(1850.00)), "1'850.00");
/// assert_eq!(format_amount(dec!(-7500)), "7'500.00");
/// assert_eq!(format_amount(dec!(89.45)), "89.45");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    group_two_decimals(round_for_display(amount.abs()))
}

/// Like [`format_amount`] but keeps a leading `-` for negative values.
pub fn format_signed(amount: Decimal) -> String {
    let rounded = round_for_display(amount);
    let body = group_two_decimals(rounded.abs());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{body}")
    } else {
        body
    }
}

/// `"<code> <signed amount>"`, e.g. `CHF 2'696.40`.
pub fn format_currency(code: &str, amount: Decimal) -> String {
    format!("{code} {}", format_signed(amount))
}

fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

fn group_two_decimals(value: Decimal) -> String {
    let plain = format!("{value:.2}");
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(*digit);
    }

    format!("{grouped}.{fraction}")
}
