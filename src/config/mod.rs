//! Configuration module for shared-expenses
//!
//! - Path resolution for the settings file and database
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
