//! Spending summary
//!
//! Totals per responsible party compared against the fixed monthly limits.

use serde::{Deserialize, Serialize};

use crate::models::{Money, PurchaseRecord, Responsible};

/// Sum of `amount` over the purchases whose responsible party is `who`
pub fn sum_by_responsible(records: &[PurchaseRecord], who: &str) -> Money {
    records
        .iter()
        .filter(|record| record.responsible == who)
        .map(|record| record.amount)
        .sum()
}

/// `limit - total`; negative when the limit was exceeded
pub fn remaining_limit(total: Money, limit: Money) -> Money {
    limit - total
}

/// One responsible party's spending against its limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySummary {
    pub responsible: Responsible,
    pub total: Money,
    pub limit: Money,
    pub remaining: Money,
}

impl PartySummary {
    pub fn is_over_limit(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Spending summary over a list of purchases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingSummary {
    /// One entry per responsible party, in `Responsible::ALL` order
    pub parties: Vec<PartySummary>,
    /// Sum of every purchase in the list, known parties or not
    pub total: Money,
    pub record_count: usize,
}

impl SpendingSummary {
    /// Summarize the given purchases (typically an already filtered list)
    pub fn from_records(records: &[PurchaseRecord]) -> Self {
        let parties = Responsible::ALL
            .into_iter()
            .map(|responsible| {
                let total = sum_by_responsible(records, responsible.as_str());
                let limit = responsible.limit();
                PartySummary {
                    responsible,
                    total,
                    limit,
                    remaining: remaining_limit(total, limit),
                }
            })
            .collect();

        Self {
            parties,
            total: records.iter().map(|record| record.amount).sum(),
            record_count: records.len(),
        }
    }

    /// Look up one party's line
    pub fn party(&self, responsible: Responsible) -> Option<&PartySummary> {
        self.parties.iter().find(|p| p.responsible == responsible)
    }
}
