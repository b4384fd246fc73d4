//! Purchase repository for SQLite storage
//!
//! Every mutation is a single statement on an autocommit connection, so it is
//! durable as soon as the call returns.

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::error::ExpenseResult;
use crate::models::{Money, NewPurchase, PurchaseId, PurchaseRecord};

const SELECT_COLUMNS: &str =
    "SELECT id, date, responsible, card, category, description, amount FROM purchases";


/// Repository for purchase persistence
pub struct PurchaseRepository<'a> {
    conn: &'a Connection,
}

impl<'a> PurchaseRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All purchases, newest date first
    ///
    /// Dates compare as text, not as calendar dates. Rows sharing a date come
    /// back newest id first.
    pub fn list(&self) -> ExpenseResult<Vec<PurchaseRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY date DESC, id DESC", SELECT_COLUMNS))?;

        let records = stmt
            .query_map([], map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = records.len(), "listed purchases");
        Ok(records)
    }

    /// Get a purchase by id
    pub fn get(&self, id: PurchaseId) -> ExpenseResult<Option<PurchaseRecord>> {
        let record = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                map_row,
            )
            .optional()?;

        Ok(record)
    }

    /// Insert a purchase and return the id the database assigned
    ///
    /// Fields are stored as given; validation is the caller's job.
    pub fn insert(&self, purchase: &NewPurchase) -> ExpenseResult<PurchaseId> {
        insert_row(self.conn, purchase)?;

        let id = PurchaseId::new(self.conn.last_insert_rowid());
        info!(purchase_id = %id, "purchase inserted");
        Ok(id)
    }

    /// Replace a purchase with a new row carrying `purchase`, in one transaction
    ///
    /// Returns the new id, or `None` when no purchase has `id`. If the insert
    /// fails the delete is rolled back and the original row is kept.
    pub fn reissue(
        &self,
        id: PurchaseId,
        purchase: &NewPurchase,
    ) -> ExpenseResult<Option<PurchaseId>> {
        let tx = self.conn.unchecked_transaction()?;

        let removed = tx.execute("DELETE FROM purchases WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Ok(None);
        }

        insert_row(&tx, purchase)?;
        let new_id = PurchaseId::new(tx.last_insert_rowid());
        tx.commit()?;

        info!(old_id = %id, new_id = %new_id, "purchase reissued");
        Ok(Some(new_id))
    }

    /// Overwrite every field of an existing purchase, keeping its id
    ///
    /// Returns `false` when no purchase has that id.
    pub fn update(&self, id: PurchaseId, purchase: &NewPurchase) -> ExpenseResult<bool> {
        let changed = self.conn.execute(
            "UPDATE purchases
             SET date = ?1, responsible = ?2, card = ?3, category = ?4,
                 description = ?5, amount = ?6
             WHERE id = ?7",
            params![
                purchase.date,
                purchase.responsible,
                purchase.card,
                purchase.category,
                purchase.description,
                purchase.amount.as_f64(),
                id,
            ],
        )?;

        if changed > 0 {
            info!(purchase_id = %id, "purchase updated");
        }
        Ok(changed > 0)
    }

    /// Delete a purchase; unknown ids are a no-op
    ///
    /// Returns whether a row was removed.
    pub fn delete(&self, id: PurchaseId) -> ExpenseResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM purchases WHERE id = ?1", params![id])?;

        if removed > 0 {
            info!(purchase_id = %id, "purchase deleted");
        } else {
            debug!(purchase_id = %id, "delete matched no purchase");
        }
        Ok(removed > 0)
    }

    /// Count purchases
    pub fn count(&self) -> ExpenseResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM purchases", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn insert_row(conn: &Connection, purchase: &NewPurchase) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO purchases (date, responsible, card, category, description, amount)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            purchase.date,
            purchase.responsible,
            purchase.card,
            purchase.category,
            purchase.description,
            purchase.amount.as_f64(),
        ],
    )
}

/// Columns may be NULL in databases written by other tools
fn map_row(row: &Row<'_>) -> rusqlite::Result<PurchaseRecord> {
    Ok(PurchaseRecord {
        id: row.get(0)?,
        date: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        responsible: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        card: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        amount: Money::from_f64(row.get::<_, Option<f64>>(6)?.unwrap_or(0.0)),
    })
}
