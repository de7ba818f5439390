//! Year Summary Report
//!
//! Rolls every stored month of a year up into one row per month plus
//! column totals.
//!
//! The per-row and yearly `left` figures leave rollover out, unlike the
//! monthly [`Totals::left`](super::month_totals::Totals). Existing summaries
//! were produced that way, so the asymmetry is kept.

use std::collections::BTreeSet;
use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::display::report::{format_bar, separator};
use crate::error::{BuddyError, BuddyResult};
use crate::models::{normalize, ItemCategory, Money, MonthKey};
use crate::storage::MonthStore;

/// One stored month's sums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSummaryRow {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    pub bills: Money,
    pub saved: Money,
    pub debt: Money,
    /// `income - expenses - bills - saved - debt` (no rollover)
    pub left: Money,
}

/// Sum every stored month of `year`, ascending by month
///
/// A year without stored months yields an empty vector. Store failures
/// propagate unchanged.
pub fn aggregate_year<S: MonthStore + ?Sized>(
    year: i32,
    store: &S,
) -> BuddyResult<Vec<YearSummaryRow>> {
    let months: Vec<MonthKey> = store
        .list_keys()?
        .into_iter()
        .filter(|key| key.year() == year)
        .collect();
    debug!(year, months = months.len(), "aggregating year");

    let mut rows = Vec::with_capacity(months.len());
    for month in months {
        let record = normalize(store.load(&month)?.as_ref());

        let income = record.category_total(ItemCategory::Income);
        let expenses = record.category_total(ItemCategory::Expenses);
        let bills = record.category_total(ItemCategory::Bills);
        let saved = record.category_total(ItemCategory::Savings);
        let debt = record.debt_payment;

        rows.push(YearSummaryRow {
            month,
            income,
            expenses,
            bills,
            saved,
            debt,
            left: income - expenses - bills - saved - debt,
        });
    }
    Ok(rows)
}

/// Years that have at least one stored month, plus `current_year`
pub fn available_years<S: MonthStore + ?Sized>(
    store: &S,
    current_year: i32,
) -> BuddyResult<Vec<i32>> {
    let mut years: BTreeSet<i32> = store.list_keys()?.iter().map(MonthKey::year).collect();
    years.insert(current_year);
    Ok(years.into_iter().collect())
}

/// Column totals across a year's rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct YearTotals {
    pub income: Money,
    pub expenses: Money,
    pub bills: Money,
    pub saved: Money,
    pub debt: Money,
    pub left: Money,
}

impl YearTotals {
    /// Sum a set of rows
    pub fn from_rows(rows: &[YearSummaryRow]) -> Self {
        let mut totals = rows.iter().fold(Self::default(), |mut acc, row| {
            acc.income += row.income;
            acc.expenses += row.expenses;
            acc.bills += row.bills;
            acc.saved += row.saved;
            acc.debt += row.debt;
            acc
        });
        totals.left = totals.income - totals.expenses - totals.bills - totals.saved - totals.debt;
        totals
    }

    /// The yearly ledger in display order
    pub fn overview_lines(&self) -> [(&'static str, Money); 6] {
        [
            ("Income", self.income),
            ("Expenses", self.expenses),
            ("Bills", self.bills),
            ("Saved", self.saved),
            ("Debt", self.debt),
            ("LEFT", self.left),
        ]
    }
}

/// A year's rows and their totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSummary {
    pub year: i32,
    pub rows: Vec<YearSummaryRow>,
    pub totals: YearTotals,
}

impl YearSummary {
    /// Generate the summary for a year
    pub fn generate<S: MonthStore + ?Sized>(store: &S, year: i32) -> BuddyResult<Self> {
        let rows = aggregate_year(year, store)?;
        let totals = YearTotals::from_rows(&rows);
        Ok(Self { year, rows, totals })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str(&format!("Year Summary ({})\n", self.year));
        output.push_str(&separator(88));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No saved months for this year.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<6} {:>13} {:>13} {:>13} {:>13} {:>13} {:>13}\n",
            "Month", "Income", "Expenses", "Bills", "Saved", "Debt", "Left"
        ));
        for row in &self.rows {
            output.push_str(&format!(
                "{:<6} {:>13} {:>13} {:>13} {:>13} {:>13} {:>13}\n",
                row.month.short_label(),
                money(row.income),
                money(row.expenses),
                money(row.bills),
                money(row.saved),
                money(row.debt),
                money(row.left)
            ));
        }
        output.push_str(&separator(88));
        output.push('\n');
        for (label, amount) in self.totals.overview_lines() {
            output.push_str(&format!("{:<10} {:>14}\n", label, money(amount)));
        }

        let max_expenses = self
            .rows
            .iter()
            .map(|r| r.expenses.to_f64())
            .fold(0.0, f64::max);
        let max_saved = self
            .rows
            .iter()
            .map(|r| r.saved.to_f64())
            .fold(0.0, f64::max);

        output.push_str("\nMonthly Expenses\n");
        for row in &self.rows {
            output.push_str(&format!(
                "  {:<4} {} {}\n",
                row.month.short_label(),
                format_bar(row.expenses.to_f64(), max_expenses, 30),
                money(row.expenses)
            ));
        }

        output.push_str("\nMonthly Savings\n");
        for row in &self.rows {
            output.push_str(&format!(
                "  {:<4} {} {}\n",
                row.month.short_label(),
                format_bar(row.saved.to_f64(), max_saved, 30),
                money(row.saved)
            ));
        }

        output
    }

    /// Export the rows as CSV (`Month,Income,Expenses,Bills,Saved,Debt,Left`)
    pub fn export_csv<W: Write>(&self, writer: W) -> BuddyResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Month", "Income", "Expenses", "Bills", "Saved", "Debt", "Left"])?;
        for row in &self.rows {
            csv_writer.write_record([
                row.month.to_string(),
                row.income.format_plain(),
                row.expenses.format_plain(),
                row.bills.format_plain(),
                row.saved.format_plain(),
                row.debt.format_plain(),
                row.left.format_plain(),
            ])?;
        }
        csv_writer
            .flush()
            .map_err(|e| BuddyError::Export(e.to_string()))?;
        Ok(())
    }
}
