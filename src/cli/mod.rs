//! CLI command handlers
//!
//! Bridges clap argument parsing with the budget service. Every editing
//! command loads the month, applies one change and saves it explicitly.

pub mod export;
pub mod item;
pub mod month;
pub mod year;

pub use export::{handle_export_command, ExportCommands};
pub use item::{handle_bill_command, handle_item_command, BillCommands, ItemCommands};
pub use month::{handle_month_command, MonthCommands};
pub use year::{handle_year_command, YearCommands};
