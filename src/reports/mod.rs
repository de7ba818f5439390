//! Reports module for Budget Buddy
//!
//! - Month totals: the money-left formula and the month overview
//! - Year summary: per-month rows and yearly totals

pub mod month_totals;
pub mod year_summary;

pub use month_totals::{
    compute_totals, LeftGauge, MonthReport, SpendingBreakdown, SpendingSlice, Totals,
};
pub use year_summary::{aggregate_year, available_years, YearSummary, YearSummaryRow, YearTotals};
