//! Ordered, code-unique collection of inventory records.

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::record::InventoryRecord;

/// In-memory inventory for one session.
///
/// Insertion order is preserved and drives the 1-based numbering produced by
/// `list_all`. No two records share a code. Lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    records: Vec<InventoryRecord>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records in order, rejecting repeated codes.
    pub fn from_records(records: impl IntoIterator<Item = InventoryRecord>) -> DomainResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Append a record unless its code is already taken.
    ///
    /// On failure the store is left untouched.
    pub fn add(&mut self, record: InventoryRecord) -> DomainResult<()> {
        if self.contains_code(record.id()) {
            tracing::debug!(code = record.code(), "rejected duplicate code");
            return Err(DomainError::duplicate_code(record.code()));
        }
        tracing::debug!(code = record.code(), "record added");
        self.records.push(record);
        Ok(())
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    pub fn find_by_code(&self, code: &str) -> DomainResult<&InventoryRecord> {
        self.records
            .iter()
            .find(|r| r.id() == code)
            .ok_or_else(|| DomainError::not_found(code))
    }

    /// Remove the record carrying `code` and hand it back.
    pub fn remove_by_code(&mut self, code: &str) -> DomainResult<InventoryRecord> {
        let idx = self.position(code).ok_or_else(|| DomainError::not_found(code))?;
        tracing::debug!(code, "record removed");
        Ok(self.records.remove(idx))
    }

    /// Overwrite a record's quantity in place; position is unchanged.
    pub fn update_quantity(&mut self, code: &str, new_quantity: u32) -> DomainResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == code)
            .ok_or_else(|| DomainError::not_found(code))?;
        tracing::debug!(code, from = record.quantity(), to = new_quantity, "quantity updated");
        record.set_quantity(new_quantity);
        Ok(())
    }

    /// Lazily enumerate `(1-based index, record)` in insertion order.
    ///
    /// The borrow keeps the store frozen while the iterator lives; call
    /// again to restart.
    pub fn list_all(&self) -> impl Iterator<Item = (usize, &InventoryRecord)> + '_ {
        self.records.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == code)
    }
}
