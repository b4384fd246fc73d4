//! Purchase CLI commands
//!
//! Implements CLI commands for purchase management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_purchase_details, format_purchase_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Card, Money, PurchaseId, Responsible, STORED_DATE_FORMAT};
use crate::reports::SpendingSummary;
use crate::services::{CreatePurchaseInput, EditMode, PurchaseChanges, PurchaseService};
use crate::storage::Storage;

use super::filter::FilterArgs;

/// Purchase subcommands
#[derive(Subcommand, Debug)]
pub enum PurchaseCommands {
    /// Record a new purchase
    Add {
        /// Amount (e.g., "100.00", "R$ 1.234,56")
        amount: String,
        /// Who made the purchase
        #[arg(short, long, value_enum)]
        responsible: Responsible,
        /// Card used
        #[arg(short = 'k', long, value_enum)]
        card: Card,
        /// Category
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long)]
        description: String,
        /// Purchase date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List purchases, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Also print totals against the spending limits
        #[arg(short, long)]
        summary: bool,
    },
    /// Show purchase details
    Show {
        /// Purchase ID
        id: String,
    },
    /// Edit a purchase
    Edit {
        /// Purchase ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New responsible party
        #[arg(short, long, value_enum)]
        responsible: Option<Responsible>,
        /// New card
        #[arg(short = 'k', long, value_enum)]
        card: Option<Card>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Store the edit as a new purchase with a new ID
        #[arg(long)]
        reissue_id: bool,
    },
    /// Delete a purchase
    Delete {
        /// Purchase ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show totals against the spending limits
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Handle a purchase command
pub fn handle_purchase_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PurchaseCommands,
) -> ExpenseResult<()> {
    let service = PurchaseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        PurchaseCommands::Add {
            amount,
            responsible,
            card,
            category,
            description,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => chrono::Local::now().date_naive(),
            };

            let record = service.create(CreatePurchaseInput {
                date,
                responsible,
                card,
                category,
                description,
                amount,
            })?;

            println!("Created purchase:");
            print!("{}", format_purchase_details(&record, settings));
        }

        PurchaseCommands::List { filter, summary } => {
            let records = service.list(&filter.to_filter())?;

            print!("{}", format_purchase_table(&records, settings));

            if summary {
                println!();
                print!(
                    "{}",
                    format_summary(&SpendingSummary::from_records(&records), symbol)
                );
            } else {
                println!("\nShowing {} purchase(s)", records.len());
            }
        }

        PurchaseCommands::Show { id } => {
            let record = service
                .find(&id)?
                .ok_or_else(|| ExpenseError::purchase_not_found(&id))?;

            print!("{}", format_purchase_details(&record, settings));
        }

        PurchaseCommands::Edit {
            id,
            amount,
            responsible,
            card,
            category,
            description,
            date,
            reissue_id,
        } => {
            let id = parse_id(&id)?;

            let changes = PurchaseChanges {
                date: date.as_deref().map(parse_date).transpose()?,
                responsible,
                card,
                category,
                description,
                amount: amount.as_deref().map(parse_amount).transpose()?,
            };

            if changes.is_empty() && !reissue_id {
                println!("Nothing to change for purchase #{}", id);
                return Ok(());
            }

            let mode = if reissue_id {
                EditMode::Reissue
            } else {
                EditMode::InPlace
            };
            let updated = service.edit(id, changes, mode)?;

            if updated.id != id {
                println!("Purchase #{} replaced by #{}:", id, updated.id);
            } else {
                println!("Updated purchase:");
            }
            print!("{}", format_purchase_details(&updated, settings));
        }

        PurchaseCommands::Delete { id, force } => {
            let id = parse_id(&id)?;

            if !force {
                match service.get(id)? {
                    Some(record) => {
                        println!("About to delete purchase:");
                        print!("{}", format_purchase_details(&record, settings));
                        println!();
                        println!("Use --force to confirm deletion");
                    }
                    None => println!("No purchase #{}; nothing to delete", id),
                }
                return Ok(());
            }

            if service.delete(id)? {
                println!("Deleted purchase #{}", id);
            } else {
                println!("No purchase #{}; nothing deleted", id);
            }
        }

        PurchaseCommands::Summary { filter } => {
            let records = service.list(&filter.to_filter())?;
            print!(
                "{}",
                format_summary(&SpendingSummary::from_records(&records), symbol)
            );
        }
    }

    Ok(())
}

fn parse_id(id: &str) -> ExpenseResult<PurchaseId> {
    id.parse().map_err(|_| {
        ExpenseError::Validation(format!("Invalid purchase ID: '{}'. Use a number", id))
    })
}

fn parse_amount(amount: &str) -> ExpenseResult<Money> {
    Money::parse(amount).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '100.00'. Error: {}",
            amount, e
        ))
    })
}

fn parse_date(date: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(date, STORED_DATE_FORMAT).map_err(|_| {
        ExpenseError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", date))
    })
}
