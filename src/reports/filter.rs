//! Purchase filtering
//!
//! Narrows a list of purchases by responsible party, card, category and
//! description. Unset or empty criteria are ignored; the remaining ones are
//! combined with AND.

use serde::{Deserialize, Serialize};

use crate::models::PurchaseRecord;

/// Options for filtering purchases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseFilter {
    /// Exact match on the responsible party
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<String>,
    /// Exact match on the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    /// Case-insensitive substring of the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive substring of the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PurchaseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = Some(responsible.into());
        self
    }

    pub fn card(mut self, card: impl Into<String>) -> Self {
        self.card = Some(card.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when no criterion would be applied
    pub fn is_empty(&self) -> bool {
        active(&self.responsible).is_none()
            && active(&self.card).is_none()
            && active(&self.category).is_none()
            && active(&self.description).is_none()
    }

    /// Check a single purchase against every active criterion
    pub fn matches(&self, record: &PurchaseRecord) -> bool {
        if let Some(responsible) = active(&self.responsible) {
            if record.responsible != responsible {
                return false;
            }
        }
        if let Some(card) = active(&self.card) {
            if record.card != card {
                return false;
            }
        }
        if let Some(category) = active(&self.category) {
            if !contains_ignore_case(&record.category, category) {
                return false;
            }
        }
        if let Some(description) = active(&self.description) {
            if !contains_ignore_case(&record.description, description) {
                return false;
            }
        }
        true
    }
}

/// The subset of `records` matching `criteria`, in input order
pub fn filter(records: &[PurchaseRecord], criteria: &PurchaseFilter) -> Vec<PurchaseRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

fn active(option: &Option<String>) -> Option<&str> {
    option.as_deref().filter(|value| !value.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
