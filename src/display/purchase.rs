//! Purchase display formatting
//!
//! Table and detail views of stored purchases for the terminal.

use std::fmt::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::PurchaseRecord;

use super::truncate;

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct PurchaseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Responsible")]
    responsible: String,
    #[tabled(rename = "Card")]
    card: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl PurchaseRow {
    fn new(record: &PurchaseRecord, settings: &Settings) -> Self {
        Self {
            id: record.id.to_string(),
            date: format_date(record, &settings.date_format),
            responsible: record.responsible.clone(),
            card: record.card.clone(),
            category: record.category.clone(),
            description: truncate(&record.description, DESCRIPTION_WIDTH),
            amount: record.amount.format_with_symbol(&settings.currency_symbol),
        }
    }
}

/// The purchase date in `date_format`
///
/// Stored text that is not a `YYYY-MM-DD` date, or a format chrono rejects,
/// falls back to the stored text unchanged.
pub fn format_date(record: &PurchaseRecord, date_format: &str) -> String {
    let Some(date) = record.parsed_date() else {
        return record.date.clone();
    };

    let mut output = String::new();
    match write!(output, "{}", date.format(date_format)) {
        Ok(()) => output,
        Err(_) => record.date.clone(),
    }
}

/// Format a list of purchases as a table, in the order given
pub fn format_purchase_table(records: &[PurchaseRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No purchases found.\n".to_string();
    }

    let rows: Vec<PurchaseRow> = records
        .iter()
        .map(|record| PurchaseRow::new(record, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n", table)
}

/// Format purchase details for display
pub fn format_purchase_details(record: &PurchaseRecord, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Purchase:    #{}\n", record.id));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(record, &settings.date_format)
    ));
    output.push_str(&format!("Responsible: {}\n", record.responsible));
    output.push_str(&format!("Card:        {}\n", record.card));
    output.push_str(&format!("Category:    {}\n", record.category));
    output.push_str(&format!("Description: {}\n", record.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.amount.format_with_symbol(&settings.currency_symbol)
    ));

    output
}
