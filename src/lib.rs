//! shared-expenses - household expense tracker for two people
//!
//! Records purchases in a local SQLite database, filters them, and compares
//! each person's spending against a fixed monthly limit. Purchase lists can
//! be exported to CSV, XLSX or JSON.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Purchases, ids and money
//! - `storage`: SQLite record store
//! - `reports`: Filtering and spending summaries over purchase lists
//! - `services`: Business logic layer
//! - `export`: CSV, XLSX and JSON writers
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use shared_expenses::reports::{filter, sum_by_responsible, PurchaseFilter};
//! use shared_expenses::storage::Storage;
//!
//! let storage = Storage::open("expenses.db")?;
//! let records = storage.purchases().list()?;
//! let mine = filter(&records, &PurchaseFilter::new().responsible("You"));
//! let total = sum_by_responsible(&mine, "You");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
