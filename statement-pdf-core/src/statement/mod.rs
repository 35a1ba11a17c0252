//! Account statement generation.
//!
//! A statement is built in two passes: [`StatementLayout`] paginates the
//! records into positioned text and rules, then [`StatementRenderer`]
//! replays that layout onto PDF pages and saves the file.

pub mod format;
pub mod layout;
mod record;
mod render;
mod sample;
mod totals;

pub use format::{format_amount, format_currency, format_signed, truncate_description};
pub use layout::{LayoutConfig, PageCursor, Role, StatementLayout};
pub use record::{parse_date, EntryKind, TransactionRecord, DATE_FORMAT};
pub use render::{check_dependencies, StatementRenderer};
pub use sample::{sample_transactions, StatementProfile, DEFAULT_OUTPUT_FILE};
pub use totals::{StatementSummary, StatementTotals};
