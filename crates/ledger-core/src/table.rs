//! Product Table
//!
//! Ordered collection of product rows. Never empty: it starts with one blank
//! row and refuses to drop its last one.

use crate::error::LedgerError;
use crate::number::normalize_amount;
use crate::row::{Row, RowField, RowId};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductTable {
    rows: Vec<Row>,
    /// Next id to hand out; ids of removed rows are never reused
    next_id: u32,
}

impl Default for ProductTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductTable {
    /// Create a table holding a single blank row with id 1
    pub fn new() -> Self {
        Self {
            rows: vec![Row::blank(RowId(1))],
            next_id: 2,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a blank row and return its id
    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row::blank(id));
        log::debug!("Added row {} ({} rows)", id, self.rows.len());
        id
    }

    /// Remove a row by id.
    ///
    /// Fails with [`LedgerError::LastRow`] when only one row is left, whatever
    /// the id. An unknown id is not an error and yields `Ok(None)`.
    pub fn remove_row(&mut self, id: RowId) -> Result<Option<Row>, LedgerError> {
        if self.rows.len() == 1 {
            return Err(LedgerError::LastRow);
        }
        let Some(index) = self.rows.iter().position(|row| row.id == id) else {
            return Ok(None);
        };
        let removed = self.rows.remove(index);
        log::debug!("Removed row {} ({} rows)", id, self.rows.len());
        Ok(Some(removed))
    }

    /// Set a field on a row. Returns `false` if no row has this id.
    pub fn update_field(&mut self, id: RowId, field: RowField, value: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.set(field, value.into());
                true
            }
            None => false,
        }
    }

    /// Grand total over all row sums
    pub fn total(&self) -> f64 {
        normalize_amount(self.rows.iter().map(|row| row.sum).sum())
    }
}
