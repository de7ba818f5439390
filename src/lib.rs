//! Budget Buddy - month-by-month personal budgeting
//!
//! Each month holds income, bills, expenses and savings line items plus a
//! rollover balance and a debt payment. Months are stored one JSON document
//! per month; whatever is stored is normalized into a canonical
//! [`MonthRecord`](models::MonthRecord) before any computation, so legacy
//! and hand-edited files never make the program fail.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, month keys, month records and normalization
//! - `storage`: Month stores (JSON files, in-memory)
//! - `services`: Load / edit / save of months, month reference parsing
//! - `reports`: Month totals and year summaries
//! - `display`: Terminal formatting helpers
//! - `export`: CSV export
//! - `cli`: Command handlers for the `budget-buddy` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_buddy::models::MonthKey;
//! use budget_buddy::services::BudgetService;
//! use budget_buddy::storage::MemoryMonthStore;
//!
//! let store = MemoryMonthStore::new();
//! let service = BudgetService::new(&store);
//! let totals = service.month_totals(&MonthKey::parse("2025-03")?)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BuddyError, BuddyResult};
