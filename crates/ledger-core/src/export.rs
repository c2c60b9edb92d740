//! Export Serializer
//!
//! Renders a [`ProductTable`] as a delimiter-separated file for accounting
//! import: a header row, one row per product, and a footer carrying the
//! grand total.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::number::format_amount;
use crate::table::ProductTable;

/// Byte-order mark prepended so spreadsheet importers detect UTF-8
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Export layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Cell delimiter, must be ASCII
    pub delimiter: char,
    /// Column labels: name, quantity, price, sum
    pub headers: [String; 4],
    /// Label in the third footer cell
    pub total_label: String,
    /// Written for an empty name
    pub empty_name: String,
    /// Written for an empty quantity or price
    pub empty_number: String,
    pub file_prefix: String,
    /// chrono format for the date in the file name
    pub date_format: String,
    pub byte_order_mark: bool,
    pub mime_type: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            headers: [
                "Name".to_string(),
                "Quantity".to_string(),
                "Price".to_string(),
                "Sum".to_string(),
            ],
            total_label: "TOTAL:".to_string(),
            empty_name: "-".to_string(),
            empty_number: "0".to_string(),
            file_prefix: "products".to_string(),
            date_format: "%d.%m.%Y".to_string(),
            byte_order_mark: true,
            mime_type: "text/csv;charset=utf-8;".to_string(),
        }
    }
}

/// A ready-to-save export file
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

impl ExportPayload {
    /// Serialize `table` into a file dated `date`
    pub fn build(
        table: &ProductTable,
        config: &ExportConfig,
        date: NaiveDate,
    ) -> Result<Self, LedgerError> {
        let body = to_csv(table, config)?;
        let content = if config.byte_order_mark {
            let mut content = String::with_capacity(body.len() + BYTE_ORDER_MARK.len_utf8());
            content.push(BYTE_ORDER_MARK);
            content.push_str(&body);
            content
        } else {
            body
        };

        Ok(Self {
            file_name: file_name(config, date)?,
            mime_type: config.mime_type.clone(),
            content,
        })
    }
}

/// Render the table body: rows joined by `\n`, no trailing newline, no BOM.
pub fn to_csv(table: &ProductTable, config: &ExportConfig) -> Result<String, LedgerError> {
    let delimiter = u8::try_from(config.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(LedgerError::InvalidDelimiter(config.delimiter))?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&config.headers)?;

    for row in table.rows() {
        let sum = format_amount(row.sum);
        writer.write_record([
            or_placeholder(&row.name, &config.empty_name),
            or_placeholder(&row.quantity, &config.empty_number),
            or_placeholder(&row.price, &config.empty_number),
            sum.as_str(),
        ])?;
    }

    let total = format_amount(table.total());
    writer.write_record(["", "", config.total_label.as_str(), total.as_str()])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| LedgerError::Export(e.error().to_string()))?;
    let mut body = String::from_utf8(bytes)?;
    if body.ends_with('\n') {
        body.pop();
    }
    Ok(body)
}

/// File name `<prefix>_<date>.csv`
pub fn file_name(config: &ExportConfig, date: NaiveDate) -> Result<String, LedgerError> {
    let mut name = String::new();
    write!(name, "{}_{}.csv", config.file_prefix, date.format(&config.date_format))
        .map_err(|_| LedgerError::InvalidDateFormat(config.date_format.clone()))?;
    Ok(name)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
