//! Display formatting for terminal output
//!
//! Text helpers shared by the month and year reports and the item listings.

pub mod items;
pub mod report;

pub use items::format_item_table;
pub use report::{double_separator, format_bar, format_percentage, separator, truncate};
