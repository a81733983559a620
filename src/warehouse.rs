//! Warehouse
//!
//! The file-backed facade the interactive collaborator talks to.
//!
//! ## Responsibilities
//! - Open or create the data file once at startup and hold it
//!   (read/write) until shutdown
//! - Validate and load the store; fall back to a fresh empty store on an
//!   invalid file instead of trusting partial data
//! - Full-rewrite flushes after mutations, truncated to the bytes
//!   written
//!
//! The warehouse never prints or reads interactive text; it only moves
//! state between memory and disk.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Seek, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::codec;
use crate::config::Config;
use crate::error::Result;
use crate::store::{Borrower, Category, Item, ItemStore, ItemUpdate};

/// File-backed inventory store
///
/// Owns the item store and the exclusively-held data file. Drop without
/// [`Warehouse::close`] loses writes made since the last flush.
pub struct Warehouse {
    config: Config,
    file: File,
    store: ItemStore,
}

impl Warehouse {
    /// Open or create the data file and load the catalogue.
    ///
    /// A freshly created (empty) file yields an empty store. A file that
    /// fails signature or record validation also yields an empty store,
    /// with a warning; this is the only recovery path that changes
    /// program state. Real I/O failures propagate.
    pub fn open(config: Config) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&config.data_path)?;

        let store = if file.metadata()?.len() == 0 {
            debug!(path = %config.data_path.display(), "no existing data, starting empty");
            ItemStore::with_capacity(config.initial_capacity)
        } else {
            match Self::load(&mut file) {
                Ok(store) => {
                    info!(
                        path = %config.data_path.display(),
                        items = store.len(),
                        "catalogue loaded"
                    );
                    store
                }
                Err(e) if e.is_invalid_format() => {
                    warn!(
                        path = %config.data_path.display(),
                        error = %e,
                        "invalid or corrupted data file, resetting to empty store"
                    );
                    ItemStore::with_capacity(config.initial_capacity)
                }
                Err(e) => return Err(e),
            }
        };

        Ok(Self { config, file, store })
    }

    /// Check only the signature of a file, without loading it.
    ///
    /// `Ok(false)` covers both a mismatched signature and a file too
    /// short to hold one; `Err` is reserved for real I/O failures.
    pub fn validate_file(path: &Path) -> Result<bool> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        match codec::validate_signature(&mut reader) {
            Ok(()) => Ok(true),
            Err(e) if e.is_invalid_format() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn load(file: &mut File) -> Result<ItemStore> {
        file.rewind()?;
        let mut reader = BufReader::new(file);
        codec::read_store(&mut reader)
    }

    /// Persist the full current state: rewind, rewrite, truncate.
    ///
    /// There is no incremental append; an interrupted write leaves the
    /// file corrupt and the next open falls back to an empty store.
    pub fn flush(&mut self) -> Result<()> {
        self.file.rewind()?;

        let mut writer = BufWriter::new(&mut self.file);
        codec::write_store(&mut writer, &self.store)?;
        writer.flush()?;
        drop(writer);

        let end = self.file.stream_position()?;
        self.file.set_len(end)?;
        self.file.sync_all()?;

        debug!(bytes = end, items = self.store.len(), "catalogue flushed");
        Ok(())
    }

    /// Flush one final time and release the file
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }

    // =========================================================================
    // Store delegation
    // =========================================================================

    /// The in-memory store, for read-only queries
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Append a new active item
    pub fn add_item(&mut self, id: u16, name: &str, category: Category, available: u32) -> Result<()> {
        self.store.add(id, name, category, available)
    }

    /// Find an item by id
    pub fn find_by_id(&self, id: u16, include_inactive: bool) -> Option<&Item> {
        self.store.find_by_id(id, include_inactive)
    }

    /// Active items whose name matches exactly
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Item> {
        self.store.find_by_name(name)
    }

    /// Edit an active item in place
    pub fn edit_item(&mut self, id: u16, update: ItemUpdate) -> Result<()> {
        self.store.edit(id, update)
    }

    /// Soft-delete an item
    pub fn delete_item(&mut self, id: u16) -> Result<()> {
        self.store.delete(id)
    }

    /// Loan units of an item to a borrower
    pub fn assign(&mut self, id: u16, borrower: &str, units: u32) -> Result<()> {
        self.store.assign(id, borrower, units)
    }

    /// Return units of an item from a borrower
    pub fn retrieve(&mut self, id: u16, borrower: &str, units: u32) -> Result<()> {
        self.store.retrieve(id, borrower, units)
    }

    /// Active items in insertion order
    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.store.active_items()
    }

    /// Head-to-tail borrowers of an active item
    pub fn borrowers(&self, id: u16) -> Result<impl Iterator<Item = &Borrower>> {
        self.store.borrowers(id)
    }

    /// The configuration this warehouse was opened with
    pub fn config(&self) -> &Config {
        &self.config
    }
}
