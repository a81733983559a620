//! Error types for Depot
//!
//! Provides a unified error type for all operations. Every fallible
//! operation returns a discriminated result; nothing in the core aborts
//! the process.

use thiserror::Error;

/// Result type alias using DepotError
pub type Result<T> = std::result::Result<T, DepotError>;

/// Unified error type for Depot operations
#[derive(Debug, Error)]
pub enum DepotError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("item with id {0} already exists")]
    DuplicateId(u16),

    #[error("item with id {0} not found")]
    ItemNotFound(u16),

    #[error("borrower \"{name}\" holds no units of item {item}")]
    BorrowerNotFound { item: u16, name: String },

    // -------------------------------------------------------------------------
    // Ledger Preconditions
    // -------------------------------------------------------------------------
    #[error("insufficient units: requested {requested}, only {available} available")]
    InsufficientUnits { requested: u32, available: u32 },

    #[error("cannot retrieve {requested} unit(s): only {held} on loan")]
    OverRetrieve { requested: u32, held: i32 },

    #[error("unit count must be at least 1")]
    ZeroUnits,

    #[error("unit count outside the supported range")]
    UnitsOutOfRange,

    #[error("name must be between 1 and {max} bytes")]
    InvalidName { max: usize },

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("invalid data file: {0}")]
    InvalidFormat(String),
}

impl DepotError {
    /// Whether this error came from the persistence codec rejecting a file.
    ///
    /// Callers use this to decide between the reset-to-empty recovery path
    /// and propagating a real I/O failure.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, DepotError::InvalidFormat(_))
    }
}
