//! Item definitions
//!
//! One catalogue entry: identity, metadata, unit counts, and the owned
//! borrower ledger.

use crate::error::{DepotError, Result};
use super::Ledger;

/// Maximum length of item and borrower names, in bytes.
///
/// Enforced at the API boundary and again by the codec on decode, so a
/// file can never smuggle an oversized name into the store.
pub const MAX_NAME_LEN: usize = 24;

/// Item category tags
///
/// The discriminant doubles as the on-disk tag, so variants must never be
/// renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Category {
    Stationary = 0,
    Machinery = 1,
    Accessory = 2,
}

impl Category {
    /// On-disk tag for this category
    pub fn tag(self) -> u32 {
        self as u32
    }

    /// Decode an on-disk tag; `None` for unknown tags
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Category::Stationary),
            1 => Some(Category::Machinery),
            2 => Some(Category::Accessory),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Stationary => "stationary",
            Category::Machinery => "machinery",
            Category::Accessory => "accessory",
        };
        f.write_str(label)
    }
}

/// One catalogue entry
///
/// Tombstoned items (`active == false`) keep their slot and ledger until
/// the whole store is dropped; only `active` changes on delete.
#[derive(Debug, Clone)]
pub struct Item {
    /// Unique among *active* items; a tombstone may share an id with a
    /// live item
    pub id: u16,

    pub(crate) name: String,

    pub category: Category,

    /// Units not currently loaned out
    pub available: u32,

    /// Units currently loaned out; always equals the sum of the ledger's
    /// borrow counts
    pub assigned: u32,

    /// Tombstone flag; false means logically deleted
    pub active: bool,

    pub(crate) ledger: Ledger,
}

impl Item {
    /// Create a fresh active item with an empty ledger
    pub(crate) fn new(id: u16, name: String, category: Category, available: u32) -> Self {
        Self {
            id,
            name,
            category,
            available,
            assigned: 0,
            active: true,
            ledger: Ledger::new(),
        }
    }

    /// The item's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's borrower ledger, head to tail
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

/// Optional per-field update applied by [`super::ItemStore::edit`]
///
/// Omitted fields are left unchanged; the ledger is never touched.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub available: Option<u32>,
}

/// Reject names that are empty or exceed [`MAX_NAME_LEN`] bytes
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(DepotError::InvalidName { max: MAX_NAME_LEN });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_round_trip() {
        for cat in [Category::Stationary, Category::Machinery, Category::Accessory] {
            assert_eq!(Category::from_tag(cat.tag()), Some(cat));
        }
        assert_eq!(Category::from_tag(3), None);
    }

    #[test]
    fn name_bounds() {
        assert!(validate_name("Widget").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }
}
