//! Persistence codec
//!
//! Explicit field-by-field binary encoding of the whole store. All
//! integers are little-endian; there is no padding and no compression,
//! so the layout never depends on in-memory struct layout and stays
//! portable across implementations.
//!
//! ## File Layout
//!
//! ```text
//! ┌──────────────┬───────────┬──────────────────┬──────────────────┐
//! │ Magic (16)   │ Count (4) │  Item records    │  Ledger blocks   │
//! └──────────────┴───────────┴──────────────────┴──────────────────┘
//! ```
//!
//! ### Item Record
//! ```text
//! ┌────────┬───────────────────┬─────────┬──────────┬──────────┬──────────┐
//! │ id (2) │ name (4 + bytes)  │ cat (4) │ avail(4) │ assig(4) │ active(1)│
//! └────────┴───────────────────┴─────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! ### Ledger Block (one per item, same order as the item records)
//! ```text
//! ┌───────────────┬─────────────────────────────────────────────┐
//! │ members (4)   │ members × [ name (4 + bytes) · count (4) ]  │
//! └───────────────┴─────────────────────────────────────────────┘
//! ```
//!
//! Blocks are written head to tail; on read the first record becomes the
//! ledger head, so borrower order survives a round trip. Tombstoned
//! items are written like any other slot.
//!
//! A write is a full rewrite every time; there is no incremental append
//! and no partial-write recovery. Any short read aborts the entire load,
//! and the caller falls back to an empty store.

mod reader;
mod writer;

pub use reader::{read_store, validate_signature};
pub use writer::write_store;

/// Fixed signature identifying the file format; compared byte-for-byte
/// before trusting anything that follows.
pub const MAGIC: [u8; 16] = *b"INVMGMTSYSTEMABC";

/// Size of the fixed header: signature + item count
pub const HEADER_SIZE: usize = MAGIC.len() + 4;

/// Sanity bound on the declared item count.
///
/// A corrupt count field must not drive a huge up-front allocation.
pub const MAX_ITEM_COUNT: u32 = 1 << 20;
