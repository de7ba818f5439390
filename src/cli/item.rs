//! Line item CLI commands
//!
//! Add, remove, re-price and list the items of a month, and tick bills off
//! as paid.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_item_table;
use crate::error::{BuddyError, BuddyResult};
use crate::models::{ItemCategory, ItemSelector, Money, MonthKey, MonthRecord};
use crate::reports::compute_totals;
use crate::services::{BudgetService, PeriodService};
use crate::storage::MonthStore;

/// Item subcommands
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List a month's items
    #[command(alias = "ls")]
    List {
        /// Only this category (income, bills, expenses, savings)
        category: Option<ItemCategory>,

        /// Month (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Add an item to a category
    Add {
        /// Category (income, bills, expenses, savings)
        category: ItemCategory,
        /// Item name
        name: String,
        /// Amount (e.g., "1200" or "1,200.50")
        amount: Money,

        /// Mark a new bill as already paid
        #[arg(long)]
        paid: bool,

        /// Month (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Remove an item
    #[command(alias = "rm")]
    Remove {
        /// Category (income, bills, expenses, savings)
        category: ItemCategory,
        /// Item position (as listed) or name
        item: ItemSelector,

        /// Month (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Change an item's amount
    Set {
        /// Category (income, bills, expenses, savings)
        category: ItemCategory,
        /// Item position (as listed) or name
        item: ItemSelector,
        /// New amount
        amount: Money,

        /// Month (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Bill subcommands
#[derive(Subcommand, Debug)]
pub enum BillCommands {
    /// Mark a bill as paid
    Paid {
        /// Bill position (as listed) or name
        item: ItemSelector,

        /// Mark as unpaid instead
        #[arg(long)]
        unpaid: bool,

        /// Month (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle an item command
pub fn handle_item_command<S: MonthStore + ?Sized>(
    store: &S,
    settings: &Settings,
    cmd: ItemCommands,
) -> BuddyResult<()> {
    let period_service = PeriodService::new();
    let service = BudgetService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ItemCommands::List { category, month } => {
            let key = period_service.parse_or_current(month.as_deref())?;
            let record = service.load_month(&key)?;

            println!("Items for {}", key.long_label());
            let categories = match category {
                Some(category) => vec![category],
                None => ItemCategory::ALL.to_vec(),
            };
            for category in categories {
                println!();
                print!("{}", format_item_table(&record, category, symbol));
            }
        }

        ItemCommands::Add {
            category,
            name,
            amount,
            paid,
            month,
        } => {
            if paid && category != ItemCategory::Bills {
                return Err(BuddyError::Validation(
                    "--paid only applies to bills".into(),
                ));
            }
            let key = period_service.parse_or_current(month.as_deref())?;

            let (record, ()) = service.update_month(&key, |record| {
                record.add_item(category, &name, amount)?;
                if paid {
                    let position = record.item_count(ItemCategory::Bills);
                    record.set_bill_paid(&ItemSelector::Position(position), true)?;
                }
                Ok(())
            })?;

            println!(
                "Added {} '{}' ({}) to {}",
                singular(category),
                name.trim(),
                amount.format_with_symbol(symbol),
                key
            );
            print_after_edit(&record, category, &key, symbol);
        }

        ItemCommands::Remove {
            category,
            item,
            month,
        } => {
            let key = period_service.parse_or_current(month.as_deref())?;
            let (record, removed) =
                service.update_month(&key, |record| record.remove_item(category, &item))?;

            println!("Removed {} '{}' from {}", singular(category), removed, key);
            print_after_edit(&record, category, &key, symbol);
        }

        ItemCommands::Set {
            category,
            item,
            amount,
            month,
        } => {
            let key = period_service.parse_or_current(month.as_deref())?;
            let (record, ()) = service.update_month(&key, |record| {
                record.set_item_amount(category, &item, amount)
            })?;

            println!(
                "Set {} {} to {} in {}",
                singular(category),
                item,
                amount.format_with_symbol(symbol),
                key
            );
            print_after_edit(&record, category, &key, symbol);
        }
    }

    Ok(())
}

/// Handle a bill command
pub fn handle_bill_command<S: MonthStore + ?Sized>(
    store: &S,
    settings: &Settings,
    cmd: BillCommands,
) -> BuddyResult<()> {
    let period_service = PeriodService::new();
    let service = BudgetService::new(store);

    match cmd {
        BillCommands::Paid {
            item,
            unpaid,
            month,
        } => {
            let key = period_service.parse_or_current(month.as_deref())?;
            let (record, ()) =
                service.update_month(&key, |record| record.set_bill_paid(&item, !unpaid))?;

            let state = if unpaid { "unpaid" } else { "paid" };
            println!("Marked bill {} as {} for {}", item, state, key);
            print_after_edit(
                &record,
                ItemCategory::Bills,
                &key,
                &settings.currency_symbol,
            );
        }
    }

    Ok(())
}

fn singular(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Income => "income item",
        ItemCategory::Bills => "bill",
        ItemCategory::Expenses => "expense",
        ItemCategory::Savings => "savings item",
    }
}

fn print_after_edit(record: &MonthRecord, category: ItemCategory, key: &MonthKey, symbol: &str) {
    println!();
    print!("{}", format_item_table(record, category, symbol));
    println!();
    println!(
        "Left for {}: {}",
        key.long_label(),
        compute_totals(record).left.format_with_symbol(symbol)
    );
}
