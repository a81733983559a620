//! Configuration for Depot
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default on-disk location of the catalogue
pub const DEFAULT_DATA_PATH: &str = "./inventory_data.bin";

/// Default number of item slots reserved up front
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Main configuration for a Depot instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the single binary data file
    pub data_path: PathBuf,

    /// Item slots reserved when starting from an empty store.
    ///
    /// Capacity is an internal concern: the store grows as needed and
    /// growth never surfaces as a caller-visible error.
    pub initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_path = path.into();
        self
    }

    /// Set the initial item capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
