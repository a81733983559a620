//! # Depot
//!
//! An embeddable inventory catalogue store with:
//! - Per-item borrower ledgers (head-insertion, most-recent-first order)
//! - Soft deletion via tombstones that persist across restarts
//! - A compact, explicit little-endian binary file format
//! - Full-rewrite persistence guarded by a 16-byte magic signature
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Interactive Frontend                          │
//! │          (external collaborator, not this crate)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Warehouse                                 │
//! │        (open-or-create, load-or-reset, flush, close)         │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌─────────────┐               ┌─────────────┐
//!     │  ItemStore  │               │    Codec    │
//!     │ (items +    │◄──────────────│ (binary     │
//!     │  ledgers)   │               │  file I/O)  │
//!     └─────────────┘               └─────────────┘
//! ```
//!
//! All operations are synchronous and single-threaded. The two codec
//! operations block for the duration of the file I/O; everything else is
//! in-memory.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod codec;
pub mod warehouse;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DepotError, Result};
pub use config::Config;
pub use store::{Borrower, Category, Item, ItemStore, ItemUpdate, Ledger};
pub use warehouse::Warehouse;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Depot
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
