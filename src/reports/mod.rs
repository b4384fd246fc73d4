//! Reports over purchase lists
//!
//! Pure functions only: everything here takes the records it works on and
//! never reads the store, so results always reflect whatever the caller just
//! listed.

pub mod filter;
pub mod summary;

pub use filter::{filter, PurchaseFilter};
pub use summary::{remaining_limit, sum_by_responsible, PartySummary, SpendingSummary};
