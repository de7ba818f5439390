//! Month Totals Report
//!
//! Derives the money-left figure and the spending views for one month.
//! [`compute_totals`] holds the one formula for "money remaining"; every
//! other view in this module is built from its output.

use crate::display::report::{double_separator, format_bar, format_percentage, separator};
use crate::models::{ItemCategory, Money, MonthKey, MonthRecord};

/// Per-category sums for one month plus the amount left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub bills: Money,
    pub expenses: Money,
    pub savings: Money,
    pub debt: Money,
    pub rollover: Money,
    /// `income + rollover - expenses - bills - savings - debt`
    pub left: Money,
}

/// Sum a month's line items and derive what is left
pub fn compute_totals(record: &MonthRecord) -> Totals {
    let income = record.category_total(ItemCategory::Income);
    let bills = record.category_total(ItemCategory::Bills);
    let expenses = record.category_total(ItemCategory::Expenses);
    let savings = record.category_total(ItemCategory::Savings);
    let debt = record.debt_payment;
    let rollover = record.rollover;

    Totals {
        income,
        bills,
        expenses,
        savings,
        debt,
        rollover,
        left: income + rollover - expenses - bills - savings - debt,
    }
}

impl Totals {
    /// Money available before any outflow
    pub fn available(&self) -> Money {
        self.income + self.rollover
    }

    /// Expenses, bills and savings together (debt excluded)
    pub fn spending(&self) -> Money {
        self.expenses + self.bills + self.savings
    }

    /// More went out than came in
    pub fn is_overspent(&self) -> bool {
        self.left.is_negative()
    }

    /// How far below zero the month ended (zero when not overspent)
    pub fn overspent_by(&self) -> Money {
        (-self.left).non_negative()
    }

    /// Amounts for a cash-flow bar chart, in display order
    pub fn cash_flow(&self) -> [(&'static str, Money); 5] {
        [
            ("Income", self.income),
            ("Expenses", self.expenses),
            ("Bills", self.bills),
            ("Savings", self.savings),
            ("Debt", self.debt),
        ]
    }

    /// The month ledger from rollover down to what is left
    pub fn overview_lines(&self) -> [(&'static str, Money); 7] {
        [
            ("+ Rollover", self.rollover),
            ("+ Income", self.income),
            ("- Expenses", self.expenses),
            ("- Bills", self.bills),
            ("- Savings", self.savings),
            ("- Debt", self.debt),
            ("LEFT", self.left),
        ]
    }

    /// Remaining vs spent split for an "amount left" gauge
    pub fn left_gauge(&self) -> LeftGauge {
        let base = self.available().non_negative();
        let remaining = self.left.non_negative();
        LeftGauge {
            base,
            remaining,
            spent: (base - remaining).non_negative(),
        }
    }

    /// Where the money went, if there is anything to show
    ///
    /// Returns `None` unless there is income and some spending. Slices with
    /// zero amounts are left out.
    pub fn spending_breakdown(&self) -> Option<SpendingBreakdown> {
        let total = self.spending();
        if !self.income.is_positive() || !total.is_positive() {
            return None;
        }

        let slices = [
            (ItemCategory::Expenses, self.expenses),
            (ItemCategory::Bills, self.bills),
            (ItemCategory::Savings, self.savings),
        ]
        .into_iter()
        .filter(|(_, amount)| amount.is_positive())
        .map(|(category, amount)| SpendingSlice {
            category,
            amount,
            percentage: amount.to_f64() / total.to_f64() * 100.0,
        })
        .collect();

        Some(SpendingBreakdown { total, slices })
    }
}

/// Remaining vs spent portions of the money available this month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftGauge {
    /// `max(income + rollover, 0)`
    pub base: Money,
    /// `max(left, 0)`
    pub remaining: Money,
    /// `max(base - remaining, 0)`
    pub spent: Money,
}

impl LeftGauge {
    /// Nothing to draw when no money was available
    pub fn has_data(&self) -> bool {
        self.base.is_positive()
    }
}

/// One slice of the spending breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendingSlice {
    pub category: ItemCategory,
    pub amount: Money,
    /// Share of the breakdown total, 0-100
    pub percentage: f64,
}

/// Expenses / bills / savings split
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingBreakdown {
    pub total: Money,
    pub slices: Vec<SpendingSlice>,
}

/// Everything shown for one month
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub month: MonthKey,
    pub record: MonthRecord,
    pub totals: Totals,
}

impl MonthReport {
    /// Build the report for an already-normalized record
    pub fn new(month: MonthKey, record: MonthRecord) -> Self {
        let totals = compute_totals(&record);
        Self {
            month,
            record,
            totals,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str(&format!("Budget - {}\n", self.month.long_label()));
        output.push_str(&double_separator(60));
        output.push('\n');

        for (label, amount) in self.totals.overview_lines() {
            if label == "LEFT" {
                output.push_str(&separator(60));
                output.push('\n');
            }
            output.push_str(&format!("{:<30} {:>14}\n", label, money(amount)));
        }

        if self.totals.is_overspent() {
            output.push_str(&format!(
                "\nWarning: you spent {} more than you had\n",
                money(self.totals.overspent_by())
            ));
        }

        for category in ItemCategory::ALL {
            output.push_str(&format!("\n{}\n", category.label().to_uppercase()));
            output.push_str(&separator(60));
            output.push('\n');

            let items = self.record.items(category);
            if items.is_empty() {
                output.push_str("  (none)\n");
            }
            for (index, item) in items.iter().enumerate() {
                let paid = match item.paid {
                    Some(true) => " [paid]",
                    Some(false) => " [ ]",
                    None => "",
                };
                output.push_str(&format!(
                    "  {:>2}. {:<30} {:>14}{}\n",
                    index + 1,
                    item.name,
                    money(item.amount),
                    paid
                ));
            }

            let total = self.record.category_total(category);
            output.push_str(&format!("      {:<30} {:>14}", "Total", money(total)));
            if category == ItemCategory::Bills {
                output.push_str(&format!(
                    "   Paid: {}/{}",
                    self.record.paid_bill_count(),
                    self.record.bill_items.len()
                ));
            }
            output.push('\n');
        }

        output.push_str("\nSpending Breakdown\n");
        output.push_str(&separator(60));
        output.push('\n');
        match self.totals.spending_breakdown() {
            Some(breakdown) => {
                for slice in &breakdown.slices {
                    output.push_str(&format!(
                        "  {:<10} {:>14} {:>6} {}\n",
                        slice.category.label(),
                        money(slice.amount),
                        format_percentage(slice.percentage),
                        format_bar(slice.percentage, 100.0, 20)
                    ));
                }
            }
            None => output.push_str("  Add transactions to see spending breakdown\n"),
        }

        let gauge = self.totals.left_gauge();
        if gauge.has_data() {
            output.push_str(&format!(
                "\nAmount Left: {} of {}  {}\n",
                money(self.totals.left),
                money(gauge.base),
                format_bar(gauge.remaining.to_f64(), gauge.base.to_f64(), 20)
            ));
        }

        output
    }
}
