//! Export module for shared-expenses
//!
//! Writes a purchase list in one of three formats:
//! - CSV: spreadsheet-compatible text
//! - XLSX: a native spreadsheet workbook
//! - JSON: purchases plus their spending summary

pub mod csv;
pub mod json;
pub mod xlsx;

pub use self::csv::export_purchases_csv;
pub use json::{export_purchases_json, PurchaseExport, EXPORT_SCHEMA_VERSION};
pub use xlsx::export_purchases_xlsx;

/// Column headers shared by the CSV and XLSX exports
pub const COLUMN_HEADERS: [&str; 7] = [
    "ID",
    "Data",
    "Responsável",
    "Cartão",
    "Categoria",
    "Descrição",
    "Valor",
];
