//! Item store
//!
//! The growable catalogue of items.
//!
//! ## Semantics
//! - Insertion order is stable and is the iteration order of every view
//! - Lookup is a linear scan over all slots; the store is bounded by
//!   interactive use, so O(n) is acceptable
//! - Delete is a soft delete: the slot and its ledger stay allocated
//!   until the whole store is dropped
//! - Capacity growth is an internal concern and never surfaces as an
//!   error

use tracing::debug;

use crate::error::{DepotError, Result};
use super::item::validate_name;
use super::{Borrower, Category, Item, ItemUpdate};

/// The whole catalogue: an index-addressable sequence of items
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty store with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Rebuild a store from decoded slots, preserving their order
    pub(crate) fn restore(items: Vec<Item>) -> Self {
        Self { items }
    }

    // =========================================================================
    // Slot access
    // =========================================================================

    /// Number of slots, tombstones included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated slot capacity; always at least `len`
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// All slots in insertion order, tombstones included.
    ///
    /// The codec serializes exactly this view so tombstones persist
    /// across restarts.
    pub fn slots(&self) -> &[Item] {
        &self.items
    }

    // =========================================================================
    // Item lifecycle
    // =========================================================================

    /// Append a new active item with an empty ledger.
    ///
    /// Fails with [`DepotError::DuplicateId`] only when an *active* item
    /// already carries the id; a tombstone with the same id does not
    /// block insertion.
    pub fn add(&mut self, id: u16, name: &str, category: Category, available: u32) -> Result<()> {
        validate_name(name)?;

        if self.find_by_id(id, false).is_some() {
            return Err(DepotError::DuplicateId(id));
        }

        self.items.push(Item::new(id, name.to_string(), category, available));
        debug!(id, name, %category, available, "item added");

        Ok(())
    }

    /// Find an item by id with a linear scan over all slots.
    ///
    /// `include_inactive = false` skips tombstones.
    pub fn find_by_id(&self, id: u16, include_inactive: bool) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id && (include_inactive || item.active))
    }

    fn find_index(&self, id: u16, include_inactive: bool) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.id == id && (include_inactive || item.active))
    }

    /// Apply an [`ItemUpdate`] to an active item in place.
    ///
    /// Omitted fields keep their values; the ledger is never touched.
    pub fn edit(&mut self, id: u16, update: ItemUpdate) -> Result<()> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }

        let idx = self
            .find_index(id, false)
            .ok_or(DepotError::ItemNotFound(id))?;
        let item = &mut self.items[idx];

        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(available) = update.available {
            item.available = available;
        }

        debug!(id, "item edited");
        Ok(())
    }

    /// Soft-delete an item: set its tombstone flag.
    ///
    /// Idempotent; counts and ledger are untouched and the slot stays
    /// allocated until the store is dropped. The active slot is resolved
    /// first: when a tombstone and a live item share an id, the live one
    /// is the delete target, and only a tombstone-only match keeps the
    /// repeat call an idempotent success.
    pub fn delete(&mut self, id: u16) -> Result<()> {
        let idx = self
            .find_index(id, false)
            .or_else(|| self.find_index(id, true))
            .ok_or(DepotError::ItemNotFound(id))?;

        self.items[idx].active = false;
        debug!(id, "item tombstoned");

        Ok(())
    }

    // =========================================================================
    // Ledger operations
    // =========================================================================

    /// Loan `units` of an item to `borrower`.
    ///
    /// Creates the borrower record at the ledger head if the name is
    /// new, then moves `units` from `available` to `assigned`. The
    /// caller's UI is expected to pre-check availability; the store
    /// checks again so a violation cannot corrupt the counts.
    pub fn assign(&mut self, id: u16, borrower: &str, units: u32) -> Result<()> {
        if units == 0 {
            return Err(DepotError::ZeroUnits);
        }
        validate_name(borrower)?;

        let idx = self
            .find_index(id, false)
            .ok_or(DepotError::ItemNotFound(id))?;
        let item = &mut self.items[idx];

        if item.available < units {
            return Err(DepotError::InsufficientUnits {
                requested: units,
                available: item.available,
            });
        }

        // The count update is resolved before the ledger is touched; a
        // failure on either side must leave both in their prior state.
        let assigned = item
            .assigned
            .checked_add(units)
            .ok_or(DepotError::UnitsOutOfRange)?;
        item.ledger.credit(borrower, units)?;
        item.assigned = assigned;
        item.available -= units;

        debug!(id, borrower, units, "units assigned");
        Ok(())
    }

    /// Return `units` of an item from `borrower`.
    ///
    /// Fails if the borrower is absent or holds fewer than `units`; on
    /// success moves `units` from `assigned` back to `available`,
    /// removing the borrower record when its count reaches 0.
    pub fn retrieve(&mut self, id: u16, borrower: &str, units: u32) -> Result<()> {
        if units == 0 {
            return Err(DepotError::ZeroUnits);
        }

        let idx = self
            .find_index(id, false)
            .ok_or(DepotError::ItemNotFound(id))?;
        let item = &mut self.items[idx];

        // The available update is resolved before the ledger is touched;
        // an edit can push `available` high enough that the return would
        // overflow it, and that must not leave a half-applied retrieve.
        let available = item
            .available
            .checked_add(units)
            .ok_or(DepotError::UnitsOutOfRange)?;
        item.ledger.debit(id, borrower, units)?;

        // A successful debit means the ledger covered `units`, and the
        // decoder only admits slots whose assigned count matches the
        // ledger total, so this subtraction cannot fail in a loaded
        // store. Checked anyway so a broken file could never panic here.
        item.assigned = item
            .assigned
            .checked_sub(units)
            .ok_or(DepotError::UnitsOutOfRange)?;
        item.available = available;

        debug!(id, borrower, units, "units retrieved");
        Ok(())
    }

    /// Head-to-tail view of an active item's borrowers
    pub fn borrowers(&self, id: u16) -> Result<impl Iterator<Item = &Borrower>> {
        let item = self
            .find_by_id(id, false)
            .ok_or(DepotError::ItemNotFound(id))?;
        Ok(item.ledger.iter())
    }

    // =========================================================================
    // Queryable views
    // =========================================================================

    /// Active items in insertion order; restartable
    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.active)
    }

    /// Active items whose name matches exactly, in insertion order
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Item> {
        self.active_items().filter(move |item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_widget() -> ItemStore {
        let mut store = ItemStore::new();
        store.add(1, "Widget", Category::Machinery, 10).unwrap();
        store
    }

    #[test]
    fn add_rejects_active_duplicate() {
        let mut store = store_with_widget();
        let err = store.add(1, "Other", Category::Accessory, 5).unwrap_err();
        assert!(matches!(err, DepotError::DuplicateId(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn tombstone_does_not_block_id_reuse() {
        let mut store = store_with_widget();
        store.delete(1).unwrap();
        store.add(1, "Widget II", Category::Machinery, 3).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(1, false).unwrap().name(), "Widget II");
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = store_with_widget();
        store.delete(1).unwrap();
        store.delete(1).unwrap();
        assert!(store.find_by_id(1, false).is_none());
        assert!(store.find_by_id(1, true).is_some());
    }

    #[test]
    fn edit_applies_only_given_fields() {
        let mut store = store_with_widget();
        store
            .edit(
                1,
                ItemUpdate {
                    available: Some(7),
                    ..ItemUpdate::default()
                },
            )
            .unwrap();

        let item = store.find_by_id(1, false).unwrap();
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.category, Category::Machinery);
        assert_eq!(item.available, 7);
    }

    #[test]
    fn assign_enforces_availability() {
        let mut store = store_with_widget();
        let err = store.assign(1, "Alice", 11).unwrap_err();
        assert!(matches!(
            err,
            DepotError::InsufficientUnits { requested: 11, available: 10 }
        ));

        let item = store.find_by_id(1, false).unwrap();
        assert_eq!(item.available, 10);
        assert_eq!(item.assigned, 0);
        assert!(item.ledger().is_empty());
    }

    #[test]
    fn zero_units_rejected() {
        let mut store = store_with_widget();
        assert!(matches!(store.assign(1, "Alice", 0), Err(DepotError::ZeroUnits)));
        assert!(matches!(store.retrieve(1, "Alice", 0), Err(DepotError::ZeroUnits)));
    }
}
