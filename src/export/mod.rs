//! Export module for Budget Buddy
//!
//! CSV exports of a month's line items. The yearly table has its own CSV
//! writer on [`YearSummary`](crate::reports::YearSummary).

pub mod csv;

pub use csv::{default_export_file_name, export_month_csv, write_month_csv_file};
