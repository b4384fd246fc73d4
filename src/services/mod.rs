//! Service layer for shared-expenses
//!
//! Sits between the CLI and storage. Validation happens here, before the
//! store is touched.

pub mod purchase;

pub use purchase::{CreatePurchaseInput, EditMode, PurchaseChanges, PurchaseService};
