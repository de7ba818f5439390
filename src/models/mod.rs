//! Core data models for Budget Buddy
//!
//! This module contains the data structures that represent the budgeting
//! domain: money amounts, month keys, and month records with their line items.

pub mod money;
pub mod month;
pub mod record;

pub use money::Money;
pub use month::MonthKey;
pub use record::{
    normalize, BillItem, ExpenseItem, IncomeItem, ItemCategory, ItemSelector, ItemView,
    MonthRecord, RawRecord, SavingsItem,
};
