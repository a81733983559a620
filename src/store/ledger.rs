//! Assignment ledger
//!
//! An item-local, ordered sequence of borrower records with the newest
//! distinct borrower at the head. The list is an owned `Vec` with index
//! 0 as the head, giving head-insertion and head-to-tail iteration
//! without any pointer management.

use crate::error::{DepotError, Result};

/// One distinct borrower currently holding units of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borrower {
    /// Ledger key; matched exactly, case-sensitive
    pub name: String,

    /// Units held; at least 1 while the record exists
    pub borrow_count: i32,
}

/// Per-item collection of borrower records
///
/// Index 0 is the head: the most recently first-assigned distinct name.
/// Repeat assignments to an existing borrower do not reorder the ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Borrower>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Rebuild a ledger from records already in head-to-tail order.
    ///
    /// Used by the codec: the first record read becomes the head.
    pub(crate) fn restore(entries: Vec<Borrower>) -> Self {
        Self { entries }
    }

    /// Number of distinct borrowers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a borrower by exact name
    pub fn find(&self, name: &str) -> Option<&Borrower> {
        self.entries.iter().find(|b| b.name == name)
    }

    /// Iterate head to tail
    pub fn iter(&self) -> std::slice::Iter<'_, Borrower> {
        self.entries.iter()
    }

    /// Credit `units` to `name`, creating the record at the head if the
    /// borrower is new.
    ///
    /// Fails without touching the ledger when `units` or the resulting
    /// count would leave the `i32` range of `borrow_count`.
    pub(crate) fn credit(&mut self, name: &str, units: u32) -> Result<()> {
        let units = i32::try_from(units).map_err(|_| DepotError::UnitsOutOfRange)?;

        match self.entries.iter_mut().find(|b| b.name == name) {
            Some(entry) => {
                entry.borrow_count = entry
                    .borrow_count
                    .checked_add(units)
                    .ok_or(DepotError::UnitsOutOfRange)?;
            }
            None => self.entries.insert(
                0,
                Borrower {
                    name: name.to_string(),
                    borrow_count: units,
                },
            ),
        }

        Ok(())
    }

    /// Debit `units` from `name`; unlinks the record when its count
    /// reaches 0.
    ///
    /// Fails without touching the ledger if the borrower is absent or
    /// holds fewer than `units`. `item` is only used for error context.
    pub(crate) fn debit(&mut self, item: u16, name: &str, units: u32) -> Result<()> {
        let requested = i32::try_from(units).map_err(|_| DepotError::UnitsOutOfRange)?;

        let pos = self
            .entries
            .iter()
            .position(|b| b.name == name)
            .ok_or_else(|| DepotError::BorrowerNotFound {
                item,
                name: name.to_string(),
            })?;

        let held = self.entries[pos].borrow_count;
        if requested > held {
            return Err(DepotError::OverRetrieve {
                requested: units,
                held,
            });
        }

        self.entries[pos].borrow_count -= requested;
        if self.entries[pos].borrow_count == 0 {
            self.entries.remove(pos);
        }

        Ok(())
    }

    /// Sum of all live borrow counts
    pub fn total_borrowed(&self) -> i64 {
        self.entries.iter().map(|b| i64::from(b.borrow_count)).sum()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Borrower;
    type IntoIter = std::slice::Iter<'a, Borrower>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_borrower_inserted_at_head() {
        let mut ledger = Ledger::new();
        ledger.credit("Alice", 1).unwrap();
        ledger.credit("Bob", 1).unwrap();
        ledger.credit("Alice", 1).unwrap(); // repeat does not reorder

        let order: Vec<&str> = ledger.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(order, ["Bob", "Alice"]);
        assert_eq!(ledger.find("Alice").unwrap().borrow_count, 2);
    }

    #[test]
    fn debit_unlinks_at_zero() {
        let mut ledger = Ledger::new();
        ledger.credit("Alice", 2).unwrap();
        ledger.debit(1, "Alice", 1).unwrap();
        assert_eq!(ledger.find("Alice").unwrap().borrow_count, 1);

        ledger.debit(1, "Alice", 1).unwrap();
        assert!(ledger.find("Alice").is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn debit_unlinks_middle_record() {
        let mut ledger = Ledger::new();
        ledger.credit("Alice", 1).unwrap();
        ledger.credit("Bob", 1).unwrap();
        ledger.credit("Carol", 1).unwrap();

        // Bob sits between Carol (head) and Alice (tail)
        ledger.debit(1, "Bob", 1).unwrap();
        let order: Vec<&str> = ledger.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(order, ["Carol", "Alice"]);
    }

    #[test]
    fn credit_rejects_counts_outside_i32_range() {
        let mut ledger = Ledger::new();

        assert!(matches!(
            ledger.credit("Alice", 3_000_000_000),
            Err(DepotError::UnitsOutOfRange)
        ));
        assert!(ledger.is_empty());

        ledger.credit("Alice", i32::MAX as u32).unwrap();
        assert!(matches!(
            ledger.credit("Alice", 1),
            Err(DepotError::UnitsOutOfRange)
        ));
        assert_eq!(ledger.find("Alice").unwrap().borrow_count, i32::MAX);
    }

    #[test]
    fn over_debit_leaves_ledger_intact() {
        let mut ledger = Ledger::new();
        ledger.credit("Alice", 1).unwrap();

        assert!(matches!(
            ledger.debit(1, "Alice", 2),
            Err(DepotError::OverRetrieve { requested: 2, held: 1 })
        ));
        assert_eq!(ledger.find("Alice").unwrap().borrow_count, 1);

        assert!(matches!(
            ledger.debit(1, "Bob", 1),
            Err(DepotError::BorrowerNotFound { .. })
        ));
    }
}
