//! Purchase service
//!
//! Business logic on top of the purchase repository: validation before
//! writes, a fresh read after every write, and the two edit modes.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{
    Card, Money, NewPurchase, PurchaseId, PurchaseRecord, Responsible, STORED_DATE_FORMAT,
};
use crate::reports::{self, PurchaseFilter};
use crate::storage::Storage;

/// Service for purchase management
pub struct PurchaseService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new purchase
#[derive(Debug, Clone)]
pub struct CreatePurchaseInput {
    pub date: NaiveDate,
    pub responsible: Responsible,
    pub card: Card,
    pub category: String,
    pub description: String,
    pub amount: Money,
}

/// Field changes for an edit; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct PurchaseChanges {
    pub date: Option<NaiveDate>,
    pub responsible: Option<Responsible>,
    pub card: Option<Card>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Money>,
}

impl PurchaseChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.responsible.is_none()
            && self.card.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.amount.is_none()
    }

    fn apply(self, mut fields: NewPurchase) -> NewPurchase {
        if let Some(date) = self.date {
            fields.date = date.format(STORED_DATE_FORMAT).to_string();
        }
        if let Some(responsible) = self.responsible {
            fields.responsible = responsible.as_str().to_string();
        }
        if let Some(card) = self.card {
            fields.card = card.as_str().to_string();
        }
        if let Some(category) = self.category {
            fields.category = category.trim().to_string();
        }
        if let Some(description) = self.description {
            fields.description = description.trim().to_string();
        }
        if let Some(amount) = self.amount {
            fields.amount = amount;
        }
        fields
    }
}

/// How an edit is written back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Update the row, keeping its id
    #[default]
    InPlace,
    /// Delete the row and insert the merged fields, which assigns a new id
    Reissue,
}

impl<'a> PurchaseService<'a> {
    /// Create a new purchase service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new purchase, returning it as stored
    pub fn create(&self, input: CreatePurchaseInput) -> ExpenseResult<PurchaseRecord> {
        let fields = NewPurchase::new(
            input.date,
            input.responsible,
            input.card,
            input.category.trim(),
            input.description.trim(),
            input.amount,
        );

        fields
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let id = self.storage.purchases().insert(&fields)?;
        self.reload(id)
    }

    /// Get a purchase by id
    pub fn get(&self, id: PurchaseId) -> ExpenseResult<Option<PurchaseRecord>> {
        self.storage.purchases().get(id)
    }

    /// Find a purchase by a user-supplied id string
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<PurchaseRecord>> {
        match identifier.parse::<PurchaseId>() {
            Ok(id) => self.get(id),
            Err(_) => Ok(None),
        }
    }

    /// List purchases, newest first, narrowed by `filter`
    pub fn list(&self, filter: &PurchaseFilter) -> ExpenseResult<Vec<PurchaseRecord>> {
        let records = self.storage.purchases().list()?;
        if filter.is_empty() {
            return Ok(records);
        }

        let filtered = reports::filter(&records, filter);
        debug!(total = records.len(), matched = filtered.len(), "filtered purchases");
        Ok(filtered)
    }

    /// Apply `changes` to an existing purchase
    ///
    /// The merged fields are validated like a new purchase. With
    /// [`EditMode::Reissue`] the returned record carries a new id.
    pub fn edit(
        &self,
        id: PurchaseId,
        changes: PurchaseChanges,
        mode: EditMode,
    ) -> ExpenseResult<PurchaseRecord> {
        let current = self
            .get(id)?
            .ok_or_else(|| ExpenseError::purchase_not_found(id.to_string()))?;

        let merged = changes.apply(current.fields());
        merged
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let repo = self.storage.purchases();
        let new_id = match mode {
            EditMode::InPlace => {
                if !repo.update(id, &merged)? {
                    return Err(ExpenseError::purchase_not_found(id.to_string()));
                }
                id
            }
            EditMode::Reissue => repo
                .reissue(id, &merged)?
                .ok_or_else(|| ExpenseError::purchase_not_found(id.to_string()))?,
        };

        self.reload(new_id)
    }

    /// Delete a purchase; returns `false` when nothing had that id
    pub fn delete(&self, id: PurchaseId) -> ExpenseResult<bool> {
        self.storage.purchases().delete(id)
    }

    fn reload(&self, id: PurchaseId) -> ExpenseResult<PurchaseRecord> {
        self.get(id)?
            .ok_or_else(|| ExpenseError::Storage(format!("purchase {} vanished after write", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(responsible: Responsible, cents: i64) -> CreatePurchaseInput {
        CreatePurchaseInput {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            responsible,
            card: Card::Inter,
            category: "Food".into(),
            description: "Groceries".into(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_create_returns_stored_record() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);

        let mut new = input(Responsible::You, 10_000);
        new.category = "  Food ".into();
        let record = service.create(new).unwrap();

        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.responsible, "You");
        assert_eq!(record.category, "Food");
        assert_eq!(service.get(record.id).unwrap(), Some(record));
    }

    #[test]
    fn test_create_rejects_blank_text() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);

        let mut new = input(Responsible::You, 10_000);
        new.description = "   ".into();
        let err = service.create(new).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(storage.purchases().count().unwrap(), 0);
    }

    #[test]
    fn test_create_rejects_non_positive_amount() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);

        assert!(service.create(input(Responsible::You, 0)).unwrap_err().is_validation());
        assert!(service.create(input(Responsible::You, -5)).unwrap_err().is_validation());
        assert_eq!(storage.purchases().count().unwrap(), 0);
    }

    #[test]
    fn test_find_parses_identifier() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);
        let record = service.create(input(Responsible::You, 100)).unwrap();

        let by_text = service.find(&format!("#{}", record.id)).unwrap();
        assert_eq!(by_text, Some(record));
        assert!(service.find("abc").unwrap().is_none());
        assert!(service.find("999").unwrap().is_none());
    }

    #[test]
    fn test_list_applies_filter() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);
        service.create(input(Responsible::You, 100)).unwrap();
        service.create(input(Responsible::Spouse, 200)).unwrap();

        assert_eq!(service.list(&PurchaseFilter::new()).unwrap().len(), 2);

        let spouse = service
            .list(&PurchaseFilter::new().responsible("Spouse"))
            .unwrap();
        assert_eq!(spouse.len(), 1);
        assert_eq!(spouse[0].amount, Money::from_cents(200));
    }

    #[test]
    fn test_edit_in_place_keeps_id() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);
        let original = service.create(input(Responsible::You, 100)).unwrap();

        let changes = PurchaseChanges {
            card: Some(Card::Nubank),
            amount: Some(Money::from_cents(250)),
            ..Default::default()
        };
        let edited = service.edit(original.id, changes, EditMode::InPlace).unwrap();

        assert_eq!(edited.id, original.id);
        assert_eq!(edited.card, "Nubank");
        assert_eq!(edited.amount, Money::from_cents(250));
        assert_eq!(edited.description, original.description);
    }

    #[test]
    fn test_edit_reissue_assigns_new_id() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);
        let original = service.create(input(Responsible::You, 100)).unwrap();

        let changes = PurchaseChanges {
            description: Some("Market".into()),
            ..Default::default()
        };
        let edited = service.edit(original.id, changes, EditMode::Reissue).unwrap();

        assert!(edited.id > original.id);
        assert_eq!(edited.description, "Market");
        assert!(service.get(original.id).unwrap().is_none());
        assert_eq!(storage.purchases().count().unwrap(), 1);
    }

    #[test]
    fn test_failed_reissue_leaves_original_in_place() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);
        let original = service.create(input(Responsible::You, 100)).unwrap();

        storage
            .connection()
            .execute_batch(
                "CREATE TRIGGER reject_inserts BEFORE INSERT ON purchases
                 BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
            )
            .unwrap();

        let changes = PurchaseChanges {
            description: Some("Market".into()),
            ..Default::default()
        };
        let err = service
            .edit(original.id, changes, EditMode::Reissue)
            .unwrap_err();

        assert!(err.is_storage());
        assert_eq!(service.list(&PurchaseFilter::new()).unwrap(), vec![original]);
    }

    #[test]
    fn test_edit_validates_merged_fields() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);
        let original = service.create(input(Responsible::You, 100)).unwrap();

        let changes = PurchaseChanges {
            category: Some(" ".into()),
            ..Default::default()
        };
        let err = service
            .edit(original.id, changes, EditMode::Reissue)
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.get(original.id).unwrap(), Some(original));
    }

    #[test]
    fn test_edit_missing_is_not_found() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);

        let err = service
            .edit(PurchaseId::new(3), PurchaseChanges::default(), EditMode::InPlace)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let storage = Storage::open_in_memory().unwrap();
        let service = PurchaseService::new(&storage);
        let record = service.create(input(Responsible::You, 100)).unwrap();

        assert!(!service.delete(PurchaseId::new(record.id.get() + 1)).unwrap());
        assert!(service.delete(record.id).unwrap());
        assert!(service.list(&PurchaseFilter::new()).unwrap().is_empty());
    }
}
