//! Product Row Entity

use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;
use crate::number::{normalize_amount, parse_number};

/// Identifier of a row, unique within its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One product entry
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    /// Product name, may be empty
    pub name: String,
    /// Quantity as typed
    pub quantity: String,
    /// Unit price as typed
    pub price: String,
    /// quantity * price, kept in step with the text fields
    pub sum: f64,
}

impl Row {
    pub fn blank(id: RowId) -> Self {
        Self {
            id,
            name: String::new(),
            quantity: String::new(),
            price: String::new(),
            sum: 0.0,
        }
    }

    /// Current text of a field
    pub fn field(&self, field: RowField) -> &str {
        match field {
            RowField::Name => &self.name,
            RowField::Quantity => &self.quantity,
            RowField::Price => &self.price,
        }
    }

    /// Set a field; numeric fields recompute `sum`.
    pub fn set(&mut self, field: RowField, value: String) {
        match field {
            RowField::Name => self.name = value,
            RowField::Quantity => {
                self.quantity = value;
                self.recompute_sum();
            }
            RowField::Price => {
                self.price = value;
                self.recompute_sum();
            }
        }
    }

    fn recompute_sum(&mut self) {
        self.sum = normalize_amount(parse_number(&self.quantity) * parse_number(&self.price));
    }
}

/// Editable row fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Name,
    Quantity,
    Price,
}

impl RowField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowField::Name => "name",
            RowField::Quantity => "quantity",
            RowField::Price => "price",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, RowField::Name)
    }
}

impl FromStr for RowField {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(RowField::Name),
            "quantity" => Ok(RowField::Quantity),
            "price" => Ok(RowField::Price),
            other => Err(LedgerError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_row() {
        let row = Row::blank(RowId(1));
        assert_eq!(row.id, RowId(1));
        assert!(row.name.is_empty());
        assert!(row.quantity.is_empty());
        assert!(row.price.is_empty());
        assert_eq!(row.sum, 0.0);
    }

    #[test]
    fn test_set_uses_other_numeric_field() {
        let mut row = Row::blank(RowId(1));
        row.set(RowField::Quantity, "2".to_string());
        assert_eq!(row.sum, 0.0);
        row.set(RowField::Price, "3.5".to_string());
        assert_eq!(row.sum, 7.0);
        row.set(RowField::Quantity, "4".to_string());
        assert_eq!(row.sum, 14.0);
    }

    #[test]
    fn test_set_name_keeps_sum() {
        let mut row = Row::blank(RowId(1));
        row.set(RowField::Quantity, "2".to_string());
        row.set(RowField::Price, "5".to_string());
        row.set(RowField::Name, "Bolts".to_string());
        assert_eq!(row.field(RowField::Name), "Bolts");
        assert_eq!(row.field(RowField::Price), "5");
        assert_eq!(row.sum, 10.0);
    }

    #[test]
    fn test_overflowing_sum_is_zero() {
        let mut row = Row::blank(RowId(1));
        row.set(RowField::Quantity, "1e308".to_string());
        row.set(RowField::Price, "10".to_string());
        assert_eq!(row.sum, 0.0);
        row.set(RowField::Price, "1".to_string());
        assert_eq!(row.sum, 1e308);
    }

    #[test]
    fn test_row_field_from_str() {
        assert_eq!("price".parse::<RowField>().unwrap(), RowField::Price);
        assert_eq!(RowField::Quantity.as_str(), "quantity");
        assert!(!RowField::Name.is_numeric());
        assert!(matches!(
            "sum".parse::<RowField>(),
            Err(LedgerError::UnknownField(field)) if field == "sum"
        ));
    }
}
