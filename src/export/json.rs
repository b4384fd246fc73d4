//! JSON Export functionality
//!
//! Exports a purchase list together with its spending summary, with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::PurchaseRecord;
use crate::reports::{PurchaseFilter, SpendingSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Purchase export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Criteria the purchases were selected with
    #[serde(default)]
    pub filter: PurchaseFilter,

    /// Exported purchases, in listing order
    pub purchases: Vec<PurchaseRecord>,

    /// Totals over `purchases`
    pub summary: SpendingSummary,
}

impl PurchaseExport {
    /// Build an export document from an already filtered list
    pub fn new(records: &[PurchaseRecord], filter: &PurchaseFilter) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filter: filter.clone(),
            purchases: records.to_vec(),
            summary: SpendingSummary::from_records(records),
        }
    }
}

/// Export purchases to JSON
pub fn export_purchases_json<W: Write>(
    records: &[PurchaseRecord],
    filter: &PurchaseFilter,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = PurchaseExport::new(records, filter);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
