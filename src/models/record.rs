//! Month record model
//!
//! A [`MonthRecord`] is the canonical, strictly-typed view of one month's
//! budget. What sits on disk is a [`RawRecord`]: whatever JSON object an older
//! version (or a hand edit) left behind. [`normalize`] turns one into the
//! other and never fails.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{BuddyError, BuddyResult};

/// The four kinds of line item a month holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Income,
    Bills,
    Expenses,
    Savings,
}

impl ItemCategory {
    /// All categories in display and export order
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::Income,
        ItemCategory::Bills,
        ItemCategory::Expenses,
        ItemCategory::Savings,
    ];

    /// Label used in CSV export and headings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Bills => "Bills",
            Self::Expenses => "Expenses",
            Self::Savings => "Savings",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ItemCategory {
    type Err = BuddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "bill" | "bills" => Ok(Self::Bills),
            "expense" | "expenses" => Ok(Self::Expenses),
            "saving" | "savings" => Ok(Self::Savings),
            other => Err(BuddyError::Validation(format!(
                "Unknown category '{}', expected income, bills, expenses or savings",
                other
            ))),
        }
    }
}

/// Picks a line item either by 1-based position or by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    Position(usize),
    Name(String),
}

impl FromStr for ItemSelector {
    type Err = BuddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BuddyError::Validation("Item name cannot be empty".into()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err(BuddyError::Validation(
                "Item positions start at 1".into(),
            )),
            Ok(n) => Ok(Self::Position(n)),
            Err(_) => Ok(Self::Name(s.to_string())),
        }
    }
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(n) => write!(f, "#{}", n),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// A source of income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeItem {
    pub name: String,
    pub amount: Money,
}

/// A bill, with whether it has been paid this month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillItem {
    pub name: String,
    pub amount: Money,
    pub paid: bool,
}

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub name: String,
    pub spent: Money,
}

/// Money put aside this month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsItem {
    pub name: String,
    pub saved: Money,
}

/// Uniform read-only view of a line item of any category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub name: &'a str,
    pub amount: Money,
    /// Only set for bills
    pub paid: Option<bool>,
}

/// The canonical record for one month
///
/// Serializes to the on-disk layout (`debt`, `income_items`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRecord {
    /// Balance carried forward from the previous period (may be negative)
    pub rollover: Money,
    /// Amount put toward debt this period (never negative)
    #[serde(rename = "debt")]
    pub debt_payment: Money,
    pub income_items: Vec<IncomeItem>,
    pub bill_items: Vec<BillItem>,
    pub expense_items: Vec<ExpenseItem>,
    pub savings_items: Vec<SavingsItem>,
}

impl Default for MonthRecord {
    /// The starter template shown for a month that has never been saved
    fn default() -> Self {
        let bill = |name: &str| BillItem {
            name: name.to_string(),
            amount: Money::zero(),
            paid: false,
        };
        let expense = |name: &str| ExpenseItem {
            name: name.to_string(),
            spent: Money::zero(),
        };
        let savings = |name: &str| SavingsItem {
            name: name.to_string(),
            saved: Money::zero(),
        };

        Self {
            rollover: Money::zero(),
            debt_payment: Money::zero(),
            income_items: vec![IncomeItem {
                name: "Paycheck".to_string(),
                amount: Money::zero(),
            }],
            bill_items: vec![bill("Rent/Mortgage"), bill("Utilities"), bill("Internet")],
            expense_items: vec![
                expense("Groceries"),
                expense("Dining Out"),
                expense("Transportation"),
            ],
            savings_items: vec![savings("Emergency Fund"), savings("Retirement")],
        }
    }
}

impl MonthRecord {
    /// A record with no line items at all
    pub fn empty() -> Self {
        Self {
            rollover: Money::zero(),
            debt_payment: Money::zero(),
            income_items: Vec::new(),
            bill_items: Vec::new(),
            expense_items: Vec::new(),
            savings_items: Vec::new(),
        }
    }

    /// Number of line items in a category
    pub fn item_count(&self, category: ItemCategory) -> usize {
        match category {
            ItemCategory::Income => self.income_items.len(),
            ItemCategory::Bills => self.bill_items.len(),
            ItemCategory::Expenses => self.expense_items.len(),
            ItemCategory::Savings => self.savings_items.len(),
        }
    }

    /// Check whether every collection is empty
    pub fn has_no_items(&self) -> bool {
        ItemCategory::ALL.iter().all(|c| self.item_count(*c) == 0)
    }

    /// Uniform view over one category's items, in insertion order
    pub fn items(&self, category: ItemCategory) -> Vec<ItemView<'_>> {
        match category {
            ItemCategory::Income => self
                .income_items
                .iter()
                .map(|i| ItemView {
                    name: &i.name,
                    amount: i.amount,
                    paid: None,
                })
                .collect(),
            ItemCategory::Bills => self
                .bill_items
                .iter()
                .map(|i| ItemView {
                    name: &i.name,
                    amount: i.amount,
                    paid: Some(i.paid),
                })
                .collect(),
            ItemCategory::Expenses => self
                .expense_items
                .iter()
                .map(|i| ItemView {
                    name: &i.name,
                    amount: i.spent,
                    paid: None,
                })
                .collect(),
            ItemCategory::Savings => self
                .savings_items
                .iter()
                .map(|i| ItemView {
                    name: &i.name,
                    amount: i.saved,
                    paid: None,
                })
                .collect(),
        }
    }

    /// Sum of one category's amounts
    pub fn category_total(&self, category: ItemCategory) -> Money {
        self.items(category).iter().map(|i| i.amount).sum()
    }

    /// Number of bills marked as paid
    pub fn paid_bill_count(&self) -> usize {
        self.bill_items.iter().filter(|b| b.paid).count()
    }

    /// Append a line item
    pub fn add_item(
        &mut self,
        category: ItemCategory,
        name: &str,
        amount: Money,
    ) -> BuddyResult<()> {
        let name = validate_name(name)?;
        let amount = validate_amount(amount, category.label())?;

        match category {
            ItemCategory::Income => self.income_items.push(IncomeItem { name, amount }),
            ItemCategory::Bills => self.bill_items.push(BillItem {
                name,
                amount,
                paid: false,
            }),
            ItemCategory::Expenses => self.expense_items.push(ExpenseItem {
                name,
                spent: amount,
            }),
            ItemCategory::Savings => self.savings_items.push(SavingsItem {
                name,
                saved: amount,
            }),
        }
        Ok(())
    }

    /// Remove a line item, returning its name
    pub fn remove_item(
        &mut self,
        category: ItemCategory,
        selector: &ItemSelector,
    ) -> BuddyResult<String> {
        let index = self.resolve(category, selector)?;
        let name = match category {
            ItemCategory::Income => self.income_items.remove(index).name,
            ItemCategory::Bills => self.bill_items.remove(index).name,
            ItemCategory::Expenses => self.expense_items.remove(index).name,
            ItemCategory::Savings => self.savings_items.remove(index).name,
        };
        Ok(name)
    }

    /// Change the amount of an existing line item
    pub fn set_item_amount(
        &mut self,
        category: ItemCategory,
        selector: &ItemSelector,
        amount: Money,
    ) -> BuddyResult<()> {
        let amount = validate_amount(amount, category.label())?;
        let index = self.resolve(category, selector)?;
        match category {
            ItemCategory::Income => self.income_items[index].amount = amount,
            ItemCategory::Bills => self.bill_items[index].amount = amount,
            ItemCategory::Expenses => self.expense_items[index].spent = amount,
            ItemCategory::Savings => self.savings_items[index].saved = amount,
        }
        Ok(())
    }

    /// Mark a bill as paid or unpaid
    pub fn set_bill_paid(&mut self, selector: &ItemSelector, paid: bool) -> BuddyResult<()> {
        let index = self.resolve(ItemCategory::Bills, selector)?;
        self.bill_items[index].paid = paid;
        Ok(())
    }

    /// Set the carried-forward balance (any sign)
    pub fn set_rollover(&mut self, amount: Money) {
        self.rollover = amount;
    }

    /// Set the debt payment for the month
    pub fn set_debt_payment(&mut self, amount: Money) -> BuddyResult<()> {
        self.debt_payment = validate_amount(amount, "Debt payment")?;
        Ok(())
    }

    /// Find the index an [`ItemSelector`] refers to
    fn resolve(&self, category: ItemCategory, selector: &ItemSelector) -> BuddyResult<usize> {
        let items = self.items(category);
        let found = match selector {
            ItemSelector::Position(n) if *n >= 1 && *n <= items.len() => Some(n - 1),
            ItemSelector::Position(_) => None,
            ItemSelector::Name(name) => items
                .iter()
                .position(|i| i.name.eq_ignore_ascii_case(name.trim())),
        };
        found.ok_or_else(|| BuddyError::item_not_found(category.label(), selector.to_string()))
    }
}

fn validate_name(name: &str) -> BuddyResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BuddyError::Validation("Item name cannot be empty".into()));
    }
    Ok(name.to_string())
}

fn validate_amount(amount: Money, what: &str) -> BuddyResult<Money> {
    if amount.is_negative() {
        return Err(BuddyError::Validation(format!(
            "{} amount cannot be negative: {}",
            what, amount
        )));
    }
    Ok(amount)
}

/// A month as stored, before normalization: an untyped JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Wrap a JSON value; only objects are records
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Build the stored form of a canonical record
    pub fn from_record(record: &MonthRecord) -> BuddyResult<Self> {
        let value = serde_json::to_value(record)?;
        Self::from_value(value)
            .ok_or_else(|| BuddyError::Json("Month record did not serialize to an object".into()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Coerce a stored record (or its absence) into a canonical [`MonthRecord`]
///
/// - Absent input yields the starter template ([`MonthRecord::default`]).
/// - Missing or non-array collections become empty; non-object elements are skipped.
/// - Numbers may be JSON numbers or numeric strings; anything else counts as 0,
///   as do magnitudes beyond [`Money::MAX_CENTS`].
/// - Line-item amounts and the debt payment are clamped at 0; rollover keeps its sign.
/// - A bill whose `amount` is missing, unusable or zero falls back to the legacy `actual` key.
/// - `paid` accepts booleans and numbers (non-zero is paid); anything else is unpaid.
/// - Unknown keys are dropped.
pub fn normalize(raw: Option<&RawRecord>) -> MonthRecord {
    let Some(raw) = raw else {
        return MonthRecord::default();
    };

    MonthRecord {
        rollover: money_or_zero(raw.get("rollover")),
        debt_payment: money_or_zero(raw.get("debt")).non_negative(),
        income_items: collect_items(raw, "income_items", |item| IncomeItem {
            name: coerce_name(item.get("name")),
            amount: money_or_zero(item.get("amount")).non_negative(),
        }),
        bill_items: collect_items(raw, "bill_items", |item| BillItem {
            name: coerce_name(item.get("name")),
            amount: coerce_money(item.get("amount"))
                .filter(|m| !m.is_zero())
                .or_else(|| coerce_money(item.get("actual")))
                .unwrap_or_default()
                .non_negative(),
            paid: coerce_flag(item.get("paid")),
        }),
        expense_items: collect_items(raw, "expense_items", |item| ExpenseItem {
            name: coerce_name(item.get("name")),
            spent: money_or_zero(item.get("spent")).non_negative(),
        }),
        savings_items: collect_items(raw, "savings_items", |item| SavingsItem {
            name: coerce_name(item.get("name")),
            saved: money_or_zero(item.get("saved")).non_negative(),
        }),
    }
}

fn collect_items<T>(
    raw: &RawRecord,
    key: &str,
    convert: impl Fn(&Map<String, Value>) -> T,
) -> Vec<T> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).map(convert).collect())
        .unwrap_or_default()
}

/// `None` when the value is absent, null, not a finite number, or beyond
/// [`Money::MAX_CENTS`]
fn coerce_money(value: Option<&Value>) -> Option<Money> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    Money::try_from_f64(number)
}

fn money_or_zero(value: Option<&Value>) -> Money {
    coerce_money(value).unwrap_or_default()
}

fn coerce_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::compute_totals;
    use proptest::prelude::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        RawRecord::from_value(value).expect("test input must be an object")
    }

    #[test]
    fn test_absent_normalizes_to_starter_template() {
        let record = normalize(None);
        assert_eq!(record, MonthRecord::default());

        assert_eq!(record.income_items.len(), 1);
        assert_eq!(record.income_items[0].name, "Paycheck");
        let bills: Vec<_> = record.bill_items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(bills, vec!["Rent/Mortgage", "Utilities", "Internet"]);
        let expenses: Vec<_> = record.expense_items.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(expenses, vec!["Groceries", "Dining Out", "Transportation"]);
        let savings: Vec<_> = record.savings_items.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(savings, vec!["Emergency Fund", "Retirement"]);

        assert!(record.bill_items.iter().all(|b| !b.paid));
        for category in ItemCategory::ALL {
            assert_eq!(record.category_total(category), Money::zero());
        }
        assert!(record.rollover.is_zero());
        assert!(record.debt_payment.is_zero());
    }

    #[test]
    fn test_empty_object_normalizes_to_empty_record() {
        let record = normalize(Some(&RawRecord::default()));
        assert_eq!(record, MonthRecord::empty());
        assert!(record.has_no_items());
    }

    #[test]
    fn test_well_formed_record() {
        let record = normalize(Some(&raw(json!({
            "rollover": 50,
            "debt": 100.25,
            "income_items": [{"name": "Paycheck", "amount": 3000}],
            "bill_items": [{"name": "Rent", "amount": 1200, "paid": true}],
            "expense_items": [{"name": "Groceries", "spent": 400.5}],
            "savings_items": [{"name": "Emergency", "saved": 200}]
        }))));

        assert_eq!(record.rollover, Money::from_dollars(50));
        assert_eq!(record.debt_payment, Money::from_cents(10025));
        assert_eq!(record.income_items[0].amount, Money::from_dollars(3000));
        assert!(record.bill_items[0].paid);
        assert_eq!(record.expense_items[0].spent, Money::from_cents(40050));
        assert_eq!(record.savings_items[0].saved, Money::from_dollars(200));
    }

    #[test]
    fn test_malformed_numbers_coerce_to_zero() {
        let record = normalize(Some(&raw(json!({
            "rollover": null,
            "debt": "lots",
            "income_items": [
                {"name": "Missing"},
                {"name": "Null", "amount": null},
                {"name": "Text", "amount": "abc"},
                {"name": "Bool", "amount": true},
                {"name": "List", "amount": [1, 2]},
                {"name": "Object", "amount": {"value": 5}}
            ],
            "expense_items": [{"name": "Nan", "spent": "NaN"}, {"name": "Inf", "spent": "inf"}],
            "savings_items": [{"saved": {}}]
        }))));

        assert!(record.rollover.is_zero());
        assert!(record.debt_payment.is_zero());
        assert_eq!(record.income_items.len(), 6);
        assert!(record.income_items.iter().all(|i| i.amount.is_zero()));
        assert!(record.expense_items.iter().all(|e| e.spent.is_zero()));
        assert_eq!(record.savings_items[0].name, "");
        assert!(record.savings_items[0].saved.is_zero());
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let record = normalize(Some(&raw(json!({
            "rollover": "-25.5",
            "income_items": [{"name": "Side gig", "amount": " 120.75 "}]
        }))));

        assert_eq!(record.rollover, Money::from_cents(-2550));
        assert_eq!(record.income_items[0].amount, Money::from_cents(12075));
    }

    #[test]
    fn test_legacy_bill_actual_fallback() {
        let record = normalize(Some(&raw(json!({
            "bill_items": [
                {"name": "Legacy", "actual": 85.5},
                {"name": "Null amount", "amount": null, "actual": 40},
                {"name": "Zero amount", "amount": 0, "actual": 12},
                {"name": "Both", "amount": 60, "actual": 999},
                {"name": "Neither"}
            ]
        }))));

        let amounts: Vec<_> = record.bill_items.iter().map(|b| b.amount.cents()).collect();
        assert_eq!(amounts, vec![8550, 4000, 1200, 6000, 0]);
    }

    #[test]
    fn test_paid_and_name_coercion() {
        let record = normalize(Some(&raw(json!({
            "bill_items": [
                {"name": "No flag", "amount": 1},
                {"name": 42, "amount": 1, "paid": 1},
                {"name": null, "amount": 1, "paid": "yes"},
                {"name": false, "amount": 1, "paid": 0}
            ]
        }))));

        let paid: Vec<_> = record.bill_items.iter().map(|b| b.paid).collect();
        assert_eq!(paid, vec![false, true, false, false]);
        let names: Vec<_> = record.bill_items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["No flag", "42", "", "false"]);
    }

    #[test]
    fn test_wrong_shapes_are_tolerated() {
        let record = normalize(Some(&raw(json!({
            "income_items": "not a list",
            "bill_items": {"name": "object instead of list"},
            "expense_items": [1, "two", null, {"name": "Real", "spent": 3}],
            "savings_items": null,
            "unexpected": {"nested": true}
        }))));

        assert!(record.income_items.is_empty());
        assert!(record.bill_items.is_empty());
        assert_eq!(record.expense_items.len(), 1);
        assert_eq!(record.expense_items[0].name, "Real");
        assert!(record.savings_items.is_empty());
    }

    #[test]
    fn test_negative_amounts_are_clamped_but_rollover_is_not() {
        let record = normalize(Some(&raw(json!({
            "rollover": -300,
            "debt": -10,
            "income_items": [{"name": "Refund", "amount": -20}],
            "bill_items": [{"name": "Credit", "amount": -5}]
        }))));

        assert_eq!(record.rollover, Money::from_dollars(-300));
        assert!(record.debt_payment.is_zero());
        assert!(record.income_items[0].amount.is_zero());
        assert!(record.bill_items[0].amount.is_zero());
    }

    #[test]
    fn test_unknown_item_fields_are_dropped() {
        let input = raw(json!({
            "income_items": [{"name": "Paycheck", "amount": 10, "note": "x", "_index": 3}]
        }));
        let record = normalize(Some(&input));
        let stored = RawRecord::from_record(&record).unwrap();

        assert_eq!(
            stored.get("income_items"),
            Some(&json!([{"name": "Paycheck", "amount": 10.0}]))
        );
    }

    #[test]
    fn test_serialized_layout() {
        let stored = RawRecord::from_record(&MonthRecord::default()).unwrap();
        let mut keys: Vec<_> = stored.as_map().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "bill_items",
                "debt",
                "expense_items",
                "income_items",
                "rollover",
                "savings_items"
            ]
        );
        assert_eq!(
            stored.get("bill_items").and_then(|b| b.get(0)),
            Some(&json!({"name": "Rent/Mortgage", "amount": 0.0, "paid": false}))
        );
    }

    #[test]
    fn test_add_and_remove_items() {
        let mut record = MonthRecord::empty();
        record
            .add_item(ItemCategory::Income, "Paycheck", Money::from_dollars(3000))
            .unwrap();
        record
            .add_item(ItemCategory::Bills, "  Rent  ", Money::from_dollars(1200))
            .unwrap();
        record
            .add_item(ItemCategory::Expenses, "Groceries", Money::from_dollars(400))
            .unwrap();
        record
            .add_item(ItemCategory::Savings, "Emergency", Money::from_dollars(200))
            .unwrap();

        assert_eq!(record.bill_items[0].name, "Rent");
        assert!(!record.bill_items[0].paid);
        assert_eq!(record.category_total(ItemCategory::Expenses), Money::from_dollars(400));

        let removed = record
            .remove_item(ItemCategory::Bills, &ItemSelector::Name("rent".into()))
            .unwrap();
        assert_eq!(removed, "Rent");
        assert!(record.bill_items.is_empty());

        let removed = record
            .remove_item(ItemCategory::Savings, &ItemSelector::Position(1))
            .unwrap();
        assert_eq!(removed, "Emergency");
    }

    #[test]
    fn test_edit_validation() {
        let mut record = MonthRecord::default();

        let err = record
            .add_item(ItemCategory::Income, "   ", Money::from_dollars(1))
            .unwrap_err();
        assert!(err.is_validation());

        let err = record
            .add_item(ItemCategory::Expenses, "Refund", Money::from_dollars(-1))
            .unwrap_err();
        assert!(err.is_validation());

        let err = record.set_debt_payment(Money::from_dollars(-5)).unwrap_err();
        assert!(err.is_validation());

        let err = record
            .remove_item(ItemCategory::Bills, &ItemSelector::Position(9))
            .unwrap_err();
        assert!(err.is_not_found());

        let err = record
            .set_item_amount(
                ItemCategory::Savings,
                &ItemSelector::Name("Yacht".into()),
                Money::zero(),
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_set_amount_paid_and_scalars() {
        let mut record = MonthRecord::default();
        record
            .set_item_amount(
                ItemCategory::Bills,
                &ItemSelector::Name("Utilities".into()),
                Money::from_dollars(90),
            )
            .unwrap();
        record
            .set_bill_paid(&ItemSelector::Position(2), true)
            .unwrap();
        record.set_rollover(Money::from_dollars(-40));
        record.set_debt_payment(Money::from_dollars(100)).unwrap();

        assert_eq!(record.bill_items[1].amount, Money::from_dollars(90));
        assert!(record.bill_items[1].paid);
        assert_eq!(record.paid_bill_count(), 1);
        assert_eq!(record.rollover, Money::from_dollars(-40));
        assert_eq!(record.debt_payment, Money::from_dollars(100));
    }

    #[test]
    fn test_category_and_selector_parsing() {
        assert_eq!("Bills".parse::<ItemCategory>().unwrap(), ItemCategory::Bills);
        assert_eq!("expense".parse::<ItemCategory>().unwrap(), ItemCategory::Expenses);
        assert!("debt".parse::<ItemCategory>().is_err());

        assert_eq!("2".parse::<ItemSelector>().unwrap(), ItemSelector::Position(2));
        assert_eq!(
            "Dining Out".parse::<ItemSelector>().unwrap(),
            ItemSelector::Name("Dining Out".into())
        );
        assert!("0".parse::<ItemSelector>().is_err());
        assert!("  ".parse::<ItemSelector>().is_err());
    }

    #[test]
    fn test_items_view() {
        let record = MonthRecord::default();
        let bills = record.items(ItemCategory::Bills);
        assert_eq!(bills.len(), 3);
        assert_eq!(bills[0].paid, Some(false));
        let income = record.items(ItemCategory::Income);
        assert_eq!(income[0].paid, None);
        assert_eq!(income[0].name, "Paycheck");
    }

    #[test]
    fn test_out_of_range_amounts_count_as_zero() {
        let record = normalize(Some(&raw(json!({
            "rollover": -1e18,
            "debt": "1e17",
            "income_items": [
                {"name": "Huge", "amount": 1e17},
                {"name": "Huge too", "amount": 1e17}
            ],
            "bill_items": [{"name": "Legacy", "amount": 1e30, "actual": 75}]
        }))));

        assert!(record.rollover.is_zero());
        assert!(record.debt_payment.is_zero());
        assert!(record.income_items.iter().all(|i| i.amount.is_zero()));
        assert_eq!(record.bill_items[0].amount, Money::from_dollars(75));
    }

    fn any_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            any::<f64>().prop_map(Value::from),
            (-1e20f64..1e20).prop_map(Value::from),
            "[-+0-9.e ]{0,24}".prop_map(Value::String),
            "[a-zA-Z ]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    fn any_item() -> impl Strategy<Value = Value> {
        let field = prop_oneof![
            Just("name"),
            Just("amount"),
            Just("actual"),
            Just("paid"),
            Just("spent"),
            Just("saved"),
            Just("note"),
        ]
        .prop_map(String::from);
        prop::collection::btree_map(field, any_json(), 0..6)
            .prop_map(|map| Value::Object(map.into_iter().collect()))
    }

    fn any_collection() -> impl Strategy<Value = Value> {
        prop_oneof![
            3 => prop::collection::vec(prop_oneof![3 => any_item(), 1 => any_json()], 0..6)
                .prop_map(Value::Array),
            1 => any_json(),
        ]
    }

    fn any_raw_record() -> impl Strategy<Value = RawRecord> {
        let key = prop_oneof![
            Just("rollover"),
            Just("debt"),
            Just("income_items"),
            Just("bill_items"),
            Just("expense_items"),
            Just("savings_items"),
            Just("extra"),
        ]
        .prop_map(String::from);
        let value = prop_oneof![any_json(), any_collection()];
        prop::collection::btree_map(key, value, 0..6)
            .prop_map(|map| raw(Value::Object(map.into_iter().collect())))
    }

    proptest! {
        #[test]
        fn prop_normalize_is_total_and_bounded(input in any_raw_record()) {
            let record = normalize(Some(&input));

            prop_assert!(!record.debt_payment.is_negative());
            prop_assert!(record.debt_payment.cents() <= Money::MAX_CENTS);
            prop_assert!(record.rollover.cents().abs() <= Money::MAX_CENTS);
            for category in ItemCategory::ALL {
                for item in record.items(category) {
                    prop_assert!(!item.amount.is_negative());
                    prop_assert!(item.amount.cents() <= Money::MAX_CENTS);
                }
            }

            let totals = compute_totals(&record);
            let sum = |category: ItemCategory| -> i128 {
                record
                    .items(category)
                    .iter()
                    .map(|i| i128::from(i.amount.cents()))
                    .sum()
            };
            let expected_left = sum(ItemCategory::Income)
                + i128::from(record.rollover.cents())
                - sum(ItemCategory::Expenses)
                - sum(ItemCategory::Bills)
                - sum(ItemCategory::Savings)
                - i128::from(record.debt_payment.cents());
            prop_assert_eq!(i128::from(totals.left.cents()), expected_left);
        }
    }
}
