//! Filter options shared by the listing, summary and export commands

use clap::Args;

use crate::models::{Card, Responsible};
use crate::reports::PurchaseFilter;

/// Purchase filter flags
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only purchases by this responsible party
    #[arg(short, long, value_enum)]
    pub responsible: Option<Responsible>,

    /// Only purchases on this card
    #[arg(short = 'k', long, value_enum)]
    pub card: Option<Card>,

    /// Category contains this text (case-insensitive)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Description contains this text (case-insensitive)
    #[arg(short, long)]
    pub description: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> PurchaseFilter {
        PurchaseFilter {
            responsible: self.responsible.map(|r| r.as_str().to_string()),
            card: self.card.map(|c| c.as_str().to_string()),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }
}
