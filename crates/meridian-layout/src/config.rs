//! Layout subsystem configuration.
//!
//! This module provides the guard-rail limits applied when partitioning
//! tables. The defaults are generous; tightening them is an operational
//! choice, not a correctness one.

use meridian_common::constants::{
    DEFAULT_MAX_REGION_COUNT, DEFAULT_MAX_SPLIT_KEYS, MAX_ROW_KEY_SIZE,
};

/// Configuration for the layout subsystem.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Maximum number of regions a table may be created with.
    pub max_region_count: u32,

    /// Maximum number of explicit split keys per table.
    pub max_split_keys: usize,

    /// Maximum size of a single split key in bytes.
    pub max_split_key_size: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_region_count: DEFAULT_MAX_REGION_COUNT,
            max_split_keys: DEFAULT_MAX_SPLIT_KEYS,
            max_split_key_size: MAX_ROW_KEY_SIZE,
        }
    }
}

impl LayoutConfig {
    /// Creates a configuration with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum region count.
    #[must_use]
    pub fn with_max_region_count(mut self, count: u32) -> Self {
        self.max_region_count = count;
        self
    }

    /// Sets the maximum number of split keys.
    #[must_use]
    pub fn with_max_split_keys(mut self, count: usize) -> Self {
        self.max_split_keys = count;
        self
    }

    /// Sets the maximum split key size.
    #[must_use]
    pub fn with_max_split_key_size(mut self, size: usize) -> Self {
        self.max_split_key_size = size;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_region_count < 1 {
            return Err("Max region count must be at least 1".to_string());
        }

        if self.max_split_keys < 1 {
            return Err("Max split key count must be at least 1".to_string());
        }

        if self.max_split_key_size < 1 {
            return Err("Max split key size must be positive".to_string());
        }

        if self.max_split_key_size > MAX_ROW_KEY_SIZE {
            return Err(format!(
                "Max split key size must not exceed {MAX_ROW_KEY_SIZE} bytes"
            ));
        }

        Ok(())
    }
}
