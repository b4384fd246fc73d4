//! CLI commands for data export
//!
//! Exports the (optionally filtered) purchase list to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_purchases_csv, export_purchases_json, export_purchases_xlsx};
use crate::services::PurchaseService;
use crate::storage::Storage;

use super::filter::FilterArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Excel workbook
    Xlsx,
    /// Purchases plus summary, machine-readable
    Json,
}

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path
    pub output: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let filter = args.filter.to_filter();
    let records = PurchaseService::new(storage).list(&filter)?;

    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_purchases_csv(&records, &mut writer)?,
        ExportFormat::Xlsx => export_purchases_xlsx(&records, &mut writer)?,
        ExportFormat::Json => export_purchases_json(&records, &filter, &mut writer, args.pretty)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    info!(format = ?args.format, count = records.len(), "export written");
    println!(
        "Exported {} purchase(s) to: {}",
        records.len(),
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, Money, Responsible};
    use crate::services::CreatePurchaseInput;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn seeded_storage() -> Storage {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);
        for (responsible, cents) in [(Responsible::You, 10_000), (Responsible::Spouse, 90_000)] {
            service
                .create(CreatePurchaseInput {
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    responsible,
                    card: Card::Nubank,
                    category: "Food".into(),
                    description: "Market".into(),
                    amount: Money::from_cents(cents),
                })
                .unwrap();
        }
        storage
    }

    #[test]
    fn test_csv_export_respects_filter() {
        let storage = seeded_storage();
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.csv");

        let args = ExportArgs {
            format: ExportFormat::Csv,
            output: output.clone(),
            filter: FilterArgs {
                responsible: Some(Responsible::Spouse),
                ..Default::default()
            },
            pretty: false,
        };
        handle_export_command(&storage, args).unwrap();

        let text = std::fs::read_to_string(output).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Spouse"));
        assert!(text.contains("900.00"));
    }

    #[test]
    fn test_xlsx_and_json_exports_write_files() {
        let storage = seeded_storage();
        let temp_dir = TempDir::new().unwrap();

        for (format, name) in [(ExportFormat::Xlsx, "out.xlsx"), (ExportFormat::Json, "out.json")] {
            let output = temp_dir.path().join(name);
            let args = ExportArgs {
                format,
                output: output.clone(),
                filter: FilterArgs::default(),
                pretty: true,
            };
            handle_export_command(&storage, args).unwrap();
            assert!(std::fs::metadata(output).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_missing_directory_is_export_error() {
        let storage = seeded_storage();
        let temp_dir = TempDir::new().unwrap();

        let args = ExportArgs {
            format: ExportFormat::Csv,
            output: temp_dir.path().join("missing").join("out.csv"),
            filter: FilterArgs::default(),
            pretty: false,
        };
        let err = handle_export_command(&storage, args).unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
