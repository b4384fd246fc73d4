//! Purchase model
//!
//! A purchase is one row of the `purchases` table. Responsible party and card
//! are free text in storage; the enumerations below are what the input layer
//! offers.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PurchaseId;
use super::money::Money;

/// Monthly spending limit for [`Responsible::You`]
pub const LIMIT_YOU: Money = Money::from_cents(200_000);

/// Monthly spending limit for [`Responsible::Spouse`]
pub const LIMIT_SPOUSE: Money = Money::from_cents(150_000);

/// Date format written to the `date` column
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Which of the two tracked users incurred the expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Responsible {
    You,
    Spouse,
}

impl Responsible {
    pub const ALL: [Responsible; 2] = [Responsible::You, Responsible::Spouse];

    /// Label stored in the `responsible` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::You => "You",
            Self::Spouse => "Spouse",
        }
    }

    /// Fixed monthly spending limit
    pub fn limit(&self) -> Money {
        match self {
            Self::You => LIMIT_YOU,
            Self::Spouse => LIMIT_SPOUSE,
        }
    }
}

impl fmt::Display for Responsible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment card used for the purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Card {
    Inter,
    Itau,
    Nubank,
}

impl Card {
    /// Label stored in the `card` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::Itau => "Itaú",
            Self::Nubank => "Nubank",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields of a purchase, without its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPurchase {
    pub date: String,
    pub responsible: String,
    pub card: String,
    pub category: String,
    pub description: String,
    pub amount: Money,
}

impl NewPurchase {
    /// Build the fields from typed input
    pub fn new(
        date: NaiveDate,
        responsible: Responsible,
        card: Card,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date: date.format(STORED_DATE_FORMAT).to_string(),
            responsible: responsible.as_str().to_string(),
            card: card.as_str().to_string(),
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// Check the create-time rules: non-empty text fields, positive amount
    pub fn validate(&self) -> Result<(), PurchaseValidationError> {
        if self.date.trim().is_empty() {
            return Err(PurchaseValidationError::MissingField("date"));
        }
        if self.category.trim().is_empty() {
            return Err(PurchaseValidationError::MissingField("category"));
        }
        if self.description.trim().is_empty() {
            return Err(PurchaseValidationError::MissingField("description"));
        }
        if !self.amount.is_positive() {
            return Err(PurchaseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// A stored purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: PurchaseId,
    pub date: String,
    pub responsible: String,
    pub card: String,
    pub category: String,
    pub description: String,
    pub amount: Money,
}

impl PurchaseRecord {
    pub fn from_parts(id: PurchaseId, fields: NewPurchase) -> Self {
        Self {
            id,
            date: fields.date,
            responsible: fields.responsible,
            card: fields.card,
            category: fields.category,
            description: fields.description,
            amount: fields.amount,
        }
    }

    /// Copy of the record's fields without the id
    pub fn fields(&self) -> NewPurchase {
        NewPurchase {
            date: self.date.clone(),
            responsible: self.responsible.clone(),
            card: self.card.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            amount: self.amount,
        }
    }

    /// The stored date, if it is in `YYYY-MM-DD` form
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, STORED_DATE_FORMAT).ok()
    }
}

impl fmt::Display for PurchaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.date, self.description, self.amount)
    }
}

/// Validation errors for purchase fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseValidationError {
    MissingField(&'static str),
    NonPositiveAmount(Money),
}

impl fmt::Display for PurchaseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} must not be empty", field),
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for PurchaseValidationError {}
