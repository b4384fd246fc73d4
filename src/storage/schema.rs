//! Table definition for the purchases store
//!
//! There is exactly one table and no migrations beyond its creation.

use rusqlite::Connection;

use crate::error::ExpenseResult;

const CREATE_PURCHASES: &str = "
    CREATE TABLE IF NOT EXISTS purchases (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT,
        responsible TEXT,
        card TEXT,
        category TEXT,
        description TEXT,
        amount REAL
    )";

/// Create the purchases table if absent; idempotent
pub fn initialize(conn: &Connection) -> ExpenseResult<()> {
    conn.execute_batch(CREATE_PURCHASES)?;
    Ok(())
}
