//! Month CLI commands
//!
//! Show a month's overview, adjust its rollover and debt payment, and
//! reset it to the starter template.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{BuddyError, BuddyResult};
use crate::models::Money;
use crate::services::{BudgetService, PeriodService};
use crate::storage::MonthStore;

/// Month subcommands
#[derive(Subcommand, Debug)]
pub enum MonthCommands {
    /// Show the overview for a month
    Show {
        /// Month (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set a month's rollover and/or debt payment
    Adjust {
        /// Balance carried in from the previous month (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        rollover: Option<Money>,

        /// Debt payment for the month
        #[arg(long)]
        debt: Option<Money>,

        /// Month (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a month's saved data
    Reset {
        /// Month (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        month: Option<String>,

        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a month command
pub fn handle_month_command<S: MonthStore + ?Sized>(
    store: &S,
    settings: &Settings,
    cmd: MonthCommands,
) -> BuddyResult<()> {
    let period_service = PeriodService::new();
    let service = BudgetService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        MonthCommands::Show { month } => {
            let key = period_service.parse_or_current(month.as_deref())?;
            let report = service.month_report(&key)?;

            print!("{}", report.format_terminal(symbol));
            if !service.saved_months()?.contains(&key) {
                println!("\n(not saved yet: showing the starter template)");
            }
        }

        MonthCommands::Adjust {
            rollover,
            debt,
            month,
        } => {
            if rollover.is_none() && debt.is_none() {
                return Err(BuddyError::Validation(
                    "Nothing to adjust: pass --rollover and/or --debt".into(),
                ));
            }
            let key = period_service.parse_or_current(month.as_deref())?;

            let (record, ()) = service.update_month(&key, |record| {
                if let Some(debt) = debt {
                    record.set_debt_payment(debt)?;
                }
                if let Some(rollover) = rollover {
                    record.set_rollover(rollover);
                }
                Ok(())
            })?;

            println!("Updated {}", key.long_label());
            println!(
                "  Rollover: {}",
                record.rollover.format_with_symbol(symbol)
            );
            println!(
                "  Debt:     {}",
                record.debt_payment.format_with_symbol(symbol)
            );
        }

        MonthCommands::Reset { month, yes } => {
            let key = period_service.parse_or_current(month.as_deref())?;
            if !yes {
                return Err(BuddyError::Validation(format!(
                    "Resetting {} deletes its saved data; re-run with --yes to confirm",
                    key
                )));
            }

            service.reset_month(&key)?;
            println!("Reset {} to the starter template", key.long_label());
        }
    }

    Ok(())
}
