//! Storage layer for Budget Buddy
//!
//! Provides per-month JSON file storage with atomic writes, plus an in-memory
//! store with the same contract.

pub mod file_io;
pub mod months;

pub use file_io::{read_json_value, remove_file_if_exists, write_json_atomic};
pub use months::{
    month_file_name, parse_month_file_name, FileMonthStore, MemoryMonthStore, MonthStore,
};

use crate::config::paths::BuddyPaths;
use crate::error::BuddyError;

/// Open the file store under the configured data directory, creating it if needed
pub fn open_file_store(paths: &BuddyPaths) -> Result<FileMonthStore, BuddyError> {
    paths.ensure_directories()?;
    Ok(FileMonthStore::new(paths.data_dir()))
}
