//! UI Components
//!
//! Leptos components for the product ledger page.

mod toolbar;
mod ledger_table;
mod product_row;
mod notice_stack;

pub use toolbar::Toolbar;
pub use ledger_table::LedgerTable;
pub use product_row::ProductRow;
pub use notice_stack::NoticeStack;
