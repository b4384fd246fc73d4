//! Core data models for shared-expenses
//!
//! Purchases, their identifiers, and the money type used for amounts.

pub mod ids;
pub mod money;
pub mod purchase;

pub use ids::PurchaseId;
pub use money::Money;
pub use purchase::{
    Card, NewPurchase, PurchaseRecord, PurchaseValidationError, Responsible, LIMIT_SPOUSE,
    LIMIT_YOU, STORED_DATE_FORMAT,
};
