//! Ledger Core
//!
//! Platform-independent product ledger logic:
//! - row: product row entity and editable fields
//! - number: lenient numeric parsing and amount formatting
//! - table: ordered row collection with derived sums
//! - export: delimiter-separated export payload

mod error;
mod number;
mod row;
mod table;
pub mod export;

pub use error::LedgerError;
pub use export::{ExportConfig, ExportPayload};
pub use number::{format_amount, parse_number, try_parse_number};
pub use row::{Row, RowField, RowId};
pub use table::ProductTable;
