//! Service layer for Budget Buddy
//!
//! Business logic on top of a month store: explicit load / edit / save of
//! month records, and month reference parsing.

pub mod budget;
pub mod period;

pub use budget::BudgetService;
pub use period::PeriodService;
