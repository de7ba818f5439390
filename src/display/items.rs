//! Line item display formatting
//!
//! Formats one category of a month's items as a numbered table. The numbers
//! are the 1-based positions accepted by the item commands.

use crate::models::{ItemCategory, Money, MonthRecord};

use super::report::truncate;

const MAX_NAME_WIDTH: usize = 32;

/// Format a category's items as a table with a total row
pub fn format_item_table(record: &MonthRecord, category: ItemCategory, symbol: &str) -> String {
    let items = record.items(category);
    let mut output = format!("{}\n", category.label());

    if items.is_empty() {
        output.push_str("  (no items)\n");
        return output;
    }

    let name_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, MAX_NAME_WIDTH);

    for (index, item) in items.iter().enumerate() {
        let status = match item.paid {
            Some(true) => "[x]",
            Some(false) => "[ ]",
            None => "",
        };
        let line = format!(
            "  {:>2}. {:<name_width$}  {:>12}  {}",
            index + 1,
            truncate(item.name, MAX_NAME_WIDTH),
            item.amount.format_with_symbol(symbol),
            status,
            name_width = name_width,
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    let total: Money = items.iter().map(|i| i.amount).sum();
    output.push_str(&format!(
        "  {:>2}  {:<name_width$}  {:>12}\n",
        "",
        "Total",
        total.format_with_symbol(symbol),
        name_width = name_width,
    ));

    if category == ItemCategory::Bills {
        output.push_str(&format!(
            "  {} of {} paid\n",
            record.paid_bill_count(),
            items.len()
        ));
    }

    output
}
