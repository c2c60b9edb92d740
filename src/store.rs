//! Ledger State Store
//!
//! Uses Leptos reactive_stores so every table mutation re-renders the views
//! reading it.

use leptos::prelude::*;
use reactive_stores::Store;

use ledger_core::{LedgerError, ProductTable, Row, RowField, RowId};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct LedgerState {
    /// Product rows, never empty
    pub table: ProductTable,
}

/// Type alias for the store
pub type LedgerStore = Store<LedgerState>;

/// Get the ledger store from context
pub fn use_ledger_store() -> LedgerStore {
    expect_context::<LedgerStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a blank row
pub fn store_add_row(store: &LedgerStore) -> RowId {
    store.table().write().add_row()
}

/// Remove a row by ID; fails when it is the last one
pub fn store_remove_row(store: &LedgerStore, row_id: RowId) -> Result<Option<Row>, LedgerError> {
    // Check first so a rejected removal does not notify subscribers
    if store.table().read_untracked().len() == 1 {
        return Err(LedgerError::LastRow);
    }
    store.table().write().remove_row(row_id)
}

/// Set a row field, recomputing its sum
pub fn store_update_field(store: &LedgerStore, row_id: RowId, field: RowField, value: String) {
    store.table().write().update_field(row_id, field, value);
}

/// Snapshot of all rows in display order
pub fn store_rows(store: &LedgerStore) -> Vec<Row> {
    store.table().read().rows().to_vec()
}

/// Current text of one row field without subscribing, empty if the row is gone
pub fn store_field_untracked(store: &LedgerStore, row_id: RowId, field: RowField) -> String {
    store.table().read_untracked()
        .row(row_id)
        .map(|row| row.field(field).to_string())
        .unwrap_or_default()
}

/// Derived sum of one row
pub fn store_row_sum(store: &LedgerStore, row_id: RowId) -> f64 {
    store.table().read()
        .row(row_id)
        .map(|row| row.sum)
        .unwrap_or_default()
}

/// Grand total
pub fn store_total(store: &LedgerStore) -> f64 {
    store.table().read().total()
}

/// Clone of the whole table, without tracking
pub fn store_table_untracked(store: &LedgerStore) -> ProductTable {
    store.table().read_untracked().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_read_does_not_subscribe() {
        let store = Store::new(LedgerState::default());
        let id = store_rows(&store)[0].id;
        store_update_field(&store, id, RowField::Quantity, "5".to_string());

        let seeded = Memo::new(move |_| store_field_untracked(&store, id, RowField::Quantity));
        assert_eq!(seeded.get_untracked(), "5");

        // A later edit (the browser reports "" for partial input like ".") must not re-run it
        store_update_field(&store, id, RowField::Quantity, String::new());
        assert_eq!(seeded.get_untracked(), "5");
        assert_eq!(store_field_untracked(&store, id, RowField::Quantity), "");
    }

    #[test]
    fn test_store_rejects_removing_last_row() {
        let store = Store::new(LedgerState::default());
        let only = store_rows(&store)[0].id;
        assert!(matches!(store_remove_row(&store, only), Err(LedgerError::LastRow)));
        assert_eq!(store_rows(&store).len(), 1);
    }

    #[test]
    fn test_store_edits_update_sums() {
        let store = Store::new(LedgerState::default());
        let first = store_rows(&store)[0].id;
        let second = store_add_row(&store);
        store_update_field(&store, first, RowField::Quantity, "2".to_string());
        store_update_field(&store, first, RowField::Price, "3.5".to_string());
        store_update_field(&store, second, RowField::Quantity, "0".to_string());
        store_update_field(&store, second, RowField::Price, "10".to_string());

        assert_eq!(store_row_sum(&store, first), 7.0);
        assert_eq!(store_row_sum(&store, second), 0.0);
        assert_eq!(store_total(&store), 7.0);
        assert_eq!(store_field_untracked(&store, first, RowField::Price), "3.5");

        assert!(store_remove_row(&store, second).unwrap().is_some());
        assert_eq!(store_table_untracked(&store).len(), 1);
        assert_eq!(store_field_untracked(&store, second, RowField::Price), "");
    }
}
