//! CSV Export functionality
//!
//! Writes purchases in the order given, one row each, under the Portuguese
//! column headers the spreadsheet users expect.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::PurchaseRecord;

use super::COLUMN_HEADERS;

/// Export purchases to CSV
pub fn export_purchases_csv<W: Write>(
    records: &[PurchaseRecord],
    writer: &mut W,
) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(COLUMN_HEADERS)?;

    for record in records {
        csv_writer.write_record([
            record.id.to_string(),
            record.date.clone(),
            record.responsible.clone(),
            record.card.clone(),
            record.category.clone(),
            record.description.clone(),
            record.amount.to_decimal_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PurchaseId};

    fn record(id: i64, description: &str, cents: i64) -> PurchaseRecord {
        PurchaseRecord {
            id: PurchaseId::new(id),
            date: "2024-01-02".into(),
            responsible: "Spouse".into(),
            card: "Itaú".into(),
            category: "Rent".into(),
            description: description.into(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        let mut output = Vec::new();
        export_purchases_csv(&[], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "ID,Data,Responsável,Cartão,Categoria,Descrição,Valor\n");
    }

    #[test]
    fn test_rows_keep_order_and_two_decimals() {
        let records = vec![record(2, "Apartment", 90_000), record(1, "Water", 5)];
        let mut output = Vec::new();
        export_purchases_csv(&records, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2,2024-01-02,Spouse,Itaú,Rent,Apartment,900.00");
        assert_eq!(lines[2], "1,2024-01-02,Spouse,Itaú,Rent,Water,0.05");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let records = vec![record(1, "Rent, January", 100)];
        let mut output = Vec::new();
        export_purchases_csv(&records, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"Rent, January\""));
    }
}
