//! Store encoder
//!
//! Serializes the full store state: signature, item count, every item
//! record in slot order (tombstones included), then every ledger block
//! in the same order. The member count of each block is known up front,
//! so the file is written strictly front to back.

use std::io::Write;

use crate::error::Result;
use crate::store::{Item, ItemStore, Ledger};

use super::MAGIC;

/// Write the complete store to `writer`.
///
/// This is the whole file body; the caller owns positioning (rewind
/// before, truncate after) when writing over an existing file.
pub fn write_store<W: Write>(writer: &mut W, store: &ItemStore) -> Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_all(&(store.len() as u32).to_le_bytes())?;

    for item in store.slots() {
        write_item(writer, item)?;
    }

    for item in store.slots() {
        write_ledger(writer, item.ledger())?;
    }

    Ok(())
}

/// Encode one item record
fn write_item<W: Write>(writer: &mut W, item: &Item) -> Result<()> {
    writer.write_all(&item.id.to_le_bytes())?;
    write_name(writer, item.name())?;
    writer.write_all(&item.category.tag().to_le_bytes())?;
    writer.write_all(&item.available.to_le_bytes())?;
    writer.write_all(&item.assigned.to_le_bytes())?;
    writer.write_all(&[u8::from(item.active)])?;
    Ok(())
}

/// Encode one ledger block, head to tail
fn write_ledger<W: Write>(writer: &mut W, ledger: &Ledger) -> Result<()> {
    writer.write_all(&(ledger.len() as u32).to_le_bytes())?;

    for borrower in ledger {
        write_name(writer, &borrower.name)?;
        writer.write_all(&borrower.borrow_count.to_le_bytes())?;
    }

    Ok(())
}

/// Length-prefixed string encoding, shared by item and borrower names
fn write_name<W: Write>(writer: &mut W, name: &str) -> Result<()> {
    writer.write_all(&(name.len() as u32).to_le_bytes())?;
    writer.write_all(name.as_bytes())?;
    Ok(())
}
