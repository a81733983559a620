//! In-memory record store
//!
//! The growable item collection and the per-item borrower ledgers.
//!
//! ## Responsibilities
//! - Append-only item slots with soft deletion (tombstones)
//! - Duplicate-id rejection scoped to *active* items
//! - Ledger bookkeeping: `assigned == Σ borrow_count` at all times
//!   outside an operation
//!
//! The store never performs I/O; persistence lives in [`crate::codec`].

mod item;
mod ledger;
mod inventory;

pub use item::{Category, Item, ItemUpdate, MAX_NAME_LEN};
pub use ledger::{Borrower, Ledger};
pub use inventory::ItemStore;
