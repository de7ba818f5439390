//! Year CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{BuddyError, BuddyResult};
use crate::services::{BudgetService, PeriodService};
use crate::storage::MonthStore;

/// Year subcommands
#[derive(Subcommand, Debug)]
pub enum YearCommands {
    /// Show the summary of every saved month in a year
    Year {
        /// Year (defaults to the current year)
        year: Option<i32>,

        /// Also export the rows to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List saved months
    Months,
}

/// Handle a year command
pub fn handle_year_command<S: MonthStore + ?Sized>(
    store: &S,
    settings: &Settings,
    cmd: YearCommands,
) -> BuddyResult<()> {
    let current = PeriodService::new().current_month();
    let service = BudgetService::new(store);

    match cmd {
        YearCommands::Year { year, output } => {
            let year = year.unwrap_or_else(|| current.year());
            let summary = service.year_summary(year)?;

            print!("{}", summary.format_terminal(&settings.currency_symbol));

            let years = service.available_years(current.year())?;
            let listed: Vec<String> = years.iter().map(i32::to_string).collect();
            println!("\nYears with data: {}", listed.join(", "));

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    BuddyError::Export(format!("Failed to create {}: {}", path.display(), e))
                })?;
                summary.export_csv(BufWriter::new(file))?;
                println!("Exported {} months to {}", summary.rows.len(), path.display());
            }
        }

        YearCommands::Months => {
            let months = service.saved_months()?;
            if months.is_empty() {
                println!("No saved months.");
            }
            for key in months {
                println!("{}  {}", key, key.long_label());
            }
        }
    }

    Ok(())
}
