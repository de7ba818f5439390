//! Export CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::paths::BuddyPaths;
use crate::error::BuddyResult;
use crate::export::{default_export_file_name, write_month_csv_file};
use crate::services::{BudgetService, PeriodService};
use crate::storage::MonthStore;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export a month's items to CSV
    Export {
        /// Month (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        month: Option<String>,

        /// Output file (defaults to expenses_YYYY-MM.csv in the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command<S: MonthStore + ?Sized>(
    store: &S,
    paths: &BuddyPaths,
    cmd: ExportCommands,
) -> BuddyResult<()> {
    let period_service = PeriodService::new();
    let service = BudgetService::new(store);

    match cmd {
        ExportCommands::Export { month, output } => {
            let key = period_service.parse_or_current(month.as_deref())?;
            let record = service.load_month(&key)?;

            let path =
                output.unwrap_or_else(|| paths.export_dir().join(default_export_file_name(&key)));
            let rows = write_month_csv_file(&record, &path)?;

            println!("Exported {} items for {} to {}", rows, key, path.display());
        }
    }

    Ok(())
}
