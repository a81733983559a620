//! Store decoder
//!
//! Validate-then-trust: the 16-byte signature is checked byte-for-byte
//! before any record is read, every length and tag is bounds-checked,
//! each slot's assigned count is cross-checked against its ledger total,
//! and a short read anywhere aborts the whole load. The decoder builds a
//! fresh store and hands it over only on full success, so a failed load
//! can never expose partial data.

use std::io::Read;

use crate::error::{DepotError, Result};
use crate::store::{Borrower, Category, Item, ItemStore, Ledger, MAX_NAME_LEN};

use super::{MAGIC, MAX_ITEM_COUNT};

/// Read and validate a complete store from `reader`.
///
/// Trailing bytes after the last ledger block are ignored; a well-formed
/// file has none because writes truncate.
pub fn read_store<R: Read>(reader: &mut R) -> Result<ItemStore> {
    validate_signature(reader)?;

    let count = read_u32(reader)?;
    if count > MAX_ITEM_COUNT {
        return Err(DepotError::InvalidFormat(format!(
            "declared item count {} exceeds limit {}",
            count, MAX_ITEM_COUNT
        )));
    }

    // Pre-size to the next power of two >= count; any capacity >= count
    // would do, this just avoids regrowth while slots stream in.
    let mut items: Vec<Item> = Vec::with_capacity((count as usize).next_power_of_two());

    for _ in 0..count {
        items.push(read_item(reader)?);
    }

    for item in items.iter_mut() {
        let ledger = read_ledger(reader)?;

        // Every slot must satisfy assigned == sum of its borrow counts;
        // a file that breaks it would make later retrieves unsound.
        if i64::from(item.assigned) != ledger.total_borrowed() {
            return Err(DepotError::InvalidFormat(format!(
                "item {}: assigned count {} does not match ledger total {}",
                item.id,
                item.assigned,
                ledger.total_borrowed()
            )));
        }

        item.ledger = ledger;
    }

    Ok(ItemStore::restore(items))
}

/// Read the 16-byte signature and compare it against [`MAGIC`].
///
/// A short read or a mismatch both mean "not our file".
pub fn validate_signature<R: Read>(reader: &mut R) -> Result<()> {
    let mut signature = [0u8; MAGIC.len()];
    reader
        .read_exact(&mut signature)
        .map_err(|e| map_short_read(e, "signature"))?;

    if signature != MAGIC {
        return Err(DepotError::InvalidFormat(
            "signature mismatch".to_string(),
        ));
    }

    Ok(())
}

// =============================================================================
// Record decoding
// =============================================================================

fn read_item<R: Read>(reader: &mut R) -> Result<Item> {
    let id = read_u16(reader)?;
    let name = read_name(reader)?;

    let tag = read_u32(reader)?;
    let category = Category::from_tag(tag)
        .ok_or_else(|| DepotError::InvalidFormat(format!("unknown category tag {}", tag)))?;

    let available = read_u32(reader)?;
    let assigned = read_u32(reader)?;
    let active = read_bool(reader)?;

    let mut item = Item::new(id, name, category, available);
    item.assigned = assigned;
    item.active = active;

    Ok(item)
}

fn read_ledger<R: Read>(reader: &mut R) -> Result<Ledger> {
    let member_count = read_u32(reader)?;
    if member_count > MAX_ITEM_COUNT {
        return Err(DepotError::InvalidFormat(format!(
            "declared member count {} exceeds limit {}",
            member_count, MAX_ITEM_COUNT
        )));
    }

    let mut entries = Vec::with_capacity(member_count as usize);

    for _ in 0..member_count {
        let name = read_name(reader)?;
        let borrow_count = read_i32(reader)?;

        if borrow_count < 1 {
            return Err(DepotError::InvalidFormat(format!(
                "borrower \"{}\" has non-positive borrow count {}",
                name, borrow_count
            )));
        }

        entries.push(Borrower { name, borrow_count });
    }

    Ok(Ledger::restore(entries))
}

/// Length-prefixed string decoding, bounds-checked before allocation
fn read_name<R: Read>(reader: &mut R) -> Result<String> {
    let len = read_u32(reader)? as usize;
    if len > MAX_NAME_LEN {
        return Err(DepotError::InvalidFormat(format!(
            "name length {} exceeds limit {}",
            len, MAX_NAME_LEN
        )));
    }

    let mut bytes = vec![0u8; len];
    reader
        .read_exact(&mut bytes)
        .map_err(|e| map_short_read(e, "name"))?;

    String::from_utf8(bytes)
        .map_err(|_| DepotError::InvalidFormat("name is not valid UTF-8".to_string()))
}

// =============================================================================
// Fixed-width primitives
// =============================================================================

fn read_u16<R: Read>(reader: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    reader
        .read_exact(&mut buf)
        .map_err(|e| map_short_read(e, "u16 field"))?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader
        .read_exact(&mut buf)
        .map_err(|e| map_short_read(e, "u32 field"))?;
    Ok(u32::from_le_bytes(buf))
}

fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    let mut buf = [0u8; 4];
    reader
        .read_exact(&mut buf)
        .map_err(|e| map_short_read(e, "i32 field"))?;
    Ok(i32::from_le_bytes(buf))
}

fn read_bool<R: Read>(reader: &mut R) -> Result<bool> {
    let mut buf = [0u8; 1];
    reader
        .read_exact(&mut buf)
        .map_err(|e| map_short_read(e, "bool field"))?;

    match buf[0] {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(DepotError::InvalidFormat(format!(
            "invalid boolean byte 0x{:02x}",
            other
        ))),
    }
}

/// Truncation shows up as `UnexpectedEof`; that is a format problem, not
/// an I/O failure.
fn map_short_read(err: std::io::Error, what: &str) -> DepotError {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        DepotError::InvalidFormat(format!("unexpected end of file while reading {}", what))
    } else {
        DepotError::Io(err)
    }
}
