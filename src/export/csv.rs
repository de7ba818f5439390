//! CSV Export functionality
//!
//! Writes one row per line item: `Category,Item,Amount`, categories in
//! the order Income, Bills, Expenses, Savings.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{BuddyError, BuddyResult};
use crate::models::{ItemCategory, MonthKey, MonthRecord};

/// File name used when no output path is given (`expenses_YYYY-MM.csv`)
pub fn default_export_file_name(key: &MonthKey) -> String {
    format!("expenses_{}.csv", key)
}

/// Export a month's line items to CSV
pub fn export_month_csv<W: Write>(record: &MonthRecord, writer: W) -> BuddyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Category", "Item", "Amount"])?;

    for category in ItemCategory::ALL {
        for item in record.items(category) {
            let amount = item.amount.format_plain();
            csv_writer.write_record([category.label(), item.name, amount.as_str()])?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| BuddyError::Export(format!("Failed to write CSV: {}", e)))?;
    Ok(())
}

/// Export a month to a file, creating parent directories as needed
///
/// Returns the number of item rows written.
pub fn write_month_csv_file(record: &MonthRecord, path: &Path) -> BuddyResult<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BuddyError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        BuddyError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    export_month_csv(record, file)?;

    let rows = ItemCategory::ALL
        .iter()
        .map(|c| record.item_count(*c))
        .sum();
    info!(path = %path.display(), rows, "exported month to CSV");
    Ok(rows)
}
