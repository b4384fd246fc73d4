//! Spreadsheet export
//!
//! A single worksheet with the same columns as the CSV export. Ids and
//! amounts are written as numbers so the sheet can sum them.

use std::io::Write;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::PurchaseRecord;

use super::COLUMN_HEADERS;

/// Worksheet name
pub const SHEET_NAME: &str = "Compras";

/// Export purchases to an XLSX workbook
pub fn export_purchases_xlsx<W: Write>(
    records: &[PurchaseRecord],
    writer: &mut W,
) -> ExpenseResult<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let amount_format = Format::new().set_num_format("0.00");

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_number(row, 0, record.id.get() as f64)?;
        sheet.write_string(row, 1, &record.date)?;
        sheet.write_string(row, 2, &record.responsible)?;
        sheet.write_string(row, 3, &record.card)?;
        sheet.write_string(row, 4, &record.category)?;
        sheet.write_string(row, 5, &record.description)?;
        sheet.write_number_with_format(row, 6, record.amount.as_f64(), &amount_format)?;
    }

    let buffer = workbook.save_to_buffer()?;
    writer
        .write_all(&buffer)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
