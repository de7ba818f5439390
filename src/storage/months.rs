//! Month record stores
//!
//! A [`MonthStore`] maps month keys to stored records. The file-backed store
//! keeps one pretty-printed JSON file per month, named `budget_YYYY-MM.json`;
//! the memory store keeps the same JSON in a map.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::error::{BuddyError, BuddyResult};
use crate::models::{MonthKey, MonthRecord, RawRecord};

use super::file_io::{read_json_value, remove_file_if_exists, write_json_atomic};

const FILE_PREFIX: &str = "budget_";
const FILE_SUFFIX: &str = ".json";

/// Key-value persistence of month records
///
/// Absence is never an error: `load` returns `Ok(None)` for a month that was
/// never saved (or was reset). Errors mean the storage itself failed or holds
/// something that isn't a record.
pub trait MonthStore {
    /// Fetch the stored form of a month, if any
    fn load(&self, key: &MonthKey) -> BuddyResult<Option<RawRecord>>;

    /// Replace whatever is stored for the month with `record`
    fn save(&self, key: &MonthKey, record: &MonthRecord) -> BuddyResult<()>;

    /// Delete the stored month; a no-op if nothing is stored
    fn remove(&self, key: &MonthKey) -> BuddyResult<()>;

    /// Every month with a stored record, in chronological order
    fn list_keys(&self) -> BuddyResult<BTreeSet<MonthKey>>;
}

/// File name used for a month
pub fn month_file_name(key: &MonthKey) -> String {
    format!("{}{}{}", FILE_PREFIX, key, FILE_SUFFIX)
}

/// Recover the month key from a file name, if it follows the naming pattern
pub fn parse_month_file_name(name: &str) -> Option<MonthKey> {
    let key = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    MonthKey::parse(key).ok()
}

/// Store keeping one JSON file per month in a directory
#[derive(Debug, Clone)]
pub struct FileMonthStore {
    data_dir: PathBuf,
}

impl FileMonthStore {
    /// Create a store over a directory; the directory is created on first save
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding a month
    pub fn month_path(&self, key: &MonthKey) -> PathBuf {
        self.data_dir.join(month_file_name(key))
    }
}

impl MonthStore for FileMonthStore {
    fn load(&self, key: &MonthKey) -> BuddyResult<Option<RawRecord>> {
        let path = self.month_path(key);
        match read_json_value(&path)? {
            None => {
                debug!(month = %key, "no stored record");
                Ok(None)
            }
            Some(value) => {
                debug!(month = %key, path = %path.display(), "loaded month");
                RawRecord::from_value(value)
                    .map(Some)
                    .ok_or_else(|| BuddyError::corrupt(&path, "expected a JSON object"))
            }
        }
    }

    fn save(&self, key: &MonthKey, record: &MonthRecord) -> BuddyResult<()> {
        let path = self.month_path(key);
        write_json_atomic(&path, record)?;
        debug!(month = %key, path = %path.display(), "saved month");
        Ok(())
    }

    fn remove(&self, key: &MonthKey) -> BuddyResult<()> {
        if remove_file_if_exists(self.month_path(key))? {
            debug!(month = %key, "removed stored month");
        }
        Ok(())
    }

    fn list_keys(&self) -> BuddyResult<BTreeSet<MonthKey>> {
        let entries = match std::fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => {
                return Err(BuddyError::Io(format!(
                    "Failed to read {}: {}",
                    self.data_dir.display(),
                    e
                )))
            }
        };

        let mut keys = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                BuddyError::Io(format!(
                    "Failed to read {}: {}",
                    self.data_dir.display(),
                    e
                ))
            })?;

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            match parse_month_file_name(&name) {
                Some(key) if entry.path().is_file() => {
                    keys.insert(key);
                }
                Some(_) => warn!(name = %name, "skipping non-file entry with a month name"),
                None => {}
            }
        }
        Ok(keys)
    }
}

/// In-memory store holding each month's serialized JSON
///
/// Records go through the same serialize → raw → normalize path as the file
/// store, so anything that round-trips here round-trips on disk.
#[derive(Debug, Default)]
pub struct MemoryMonthStore {
    months: RwLock<BTreeMap<MonthKey, RawRecord>>,
}

impl MemoryMonthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an arbitrary raw record in place, e.g. a legacy layout
    pub fn insert_raw(&self, key: MonthKey, raw: RawRecord) -> BuddyResult<()> {
        self.months
            .write()
            .map_err(|e| BuddyError::Storage(format!("Failed to acquire write lock: {}", e)))?
            .insert(key, raw);
        Ok(())
    }
}

impl MonthStore for MemoryMonthStore {
    fn load(&self, key: &MonthKey) -> BuddyResult<Option<RawRecord>> {
        let months = self
            .months
            .read()
            .map_err(|e| BuddyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(months.get(key).cloned())
    }

    fn save(&self, key: &MonthKey, record: &MonthRecord) -> BuddyResult<()> {
        let raw = RawRecord::from_record(record)?;
        self.insert_raw(*key, raw)
    }

    fn remove(&self, key: &MonthKey) -> BuddyResult<()> {
        self.months
            .write()
            .map_err(|e| BuddyError::Storage(format!("Failed to acquire write lock: {}", e)))?
            .remove(key);
        Ok(())
    }

    fn list_keys(&self) -> BuddyResult<BTreeSet<MonthKey>> {
        let months = self
            .months
            .read()
            .map_err(|e| BuddyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(months.keys().copied().collect())
    }
}
