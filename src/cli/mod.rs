//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod filter;
pub mod purchase;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use filter::FilterArgs;
pub use purchase::{handle_purchase_command, PurchaseCommands};
