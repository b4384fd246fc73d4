//! Strongly-typed purchase identifier
//!
//! Ids are assigned by SQLite (`INTEGER PRIMARY KEY AUTOINCREMENT`), so the
//! wrapper only exists to keep them from being mixed up with amounts or
//! row counts.

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(i64);

impl PurchaseId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the underlying row id
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PurchaseId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for PurchaseId {
    type Err = ParseIntError;

    /// Accepts "42" as well as the "#42" form used in terminal output
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

impl ToSql for PurchaseId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for PurchaseId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(PurchaseId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("7".parse::<PurchaseId>().unwrap(), PurchaseId::new(7));
        assert_eq!("#7".parse::<PurchaseId>().unwrap(), PurchaseId::new(7));
        assert_eq!(" 12 ".parse::<PurchaseId>().unwrap(), PurchaseId::new(12));
        assert!("abc".parse::<PurchaseId>().is_err());
    }

    #[test]
    fn test_id_ordering() {
        assert!(PurchaseId::new(1) < PurchaseId::new(2));
    }

    #[test]
    fn test_id_serialization() {
        let id = PurchaseId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
        let deserialized: PurchaseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
