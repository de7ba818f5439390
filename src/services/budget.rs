//! Budget service
//!
//! Loads, edits and saves month records through a [`MonthStore`], and
//! builds the month and year reports from what is stored.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::BuddyResult;
use crate::models::{normalize, MonthKey, MonthRecord};
use crate::reports::{available_years, compute_totals, MonthReport, Totals, YearSummary};
use crate::storage::MonthStore;

/// Service for month record management
pub struct BudgetService<'a, S: MonthStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: MonthStore + ?Sized> BudgetService<'a, S> {
    /// Create a new budget service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load a month as a canonical record
    ///
    /// A month that was never saved comes back as the starter template.
    /// Store failures (including corrupt data) are returned, never defaulted.
    pub fn load_month(&self, key: &MonthKey) -> BuddyResult<MonthRecord> {
        let raw = self.store.load(key)?;
        if raw.is_none() {
            debug!(month = %key, "month not saved yet, using starter template");
        }
        Ok(normalize(raw.as_ref()))
    }

    /// Persist a month, replacing whatever was stored
    pub fn save_month(&self, key: &MonthKey, record: &MonthRecord) -> BuddyResult<()> {
        self.store.save(key, record)?;
        info!(month = %key, "saved month");
        Ok(())
    }

    /// Delete the stored month and return what it now reads as
    pub fn reset_month(&self, key: &MonthKey) -> BuddyResult<MonthRecord> {
        self.store.remove(key)?;
        info!(month = %key, "reset month");
        Ok(MonthRecord::default())
    }

    /// Load a month, apply an edit, and save the result
    ///
    /// Nothing is written when loading fails or the edit returns an error.
    pub fn update_month<T, F>(&self, key: &MonthKey, edit: F) -> BuddyResult<(MonthRecord, T)>
    where
        F: FnOnce(&mut MonthRecord) -> BuddyResult<T>,
    {
        let mut record = self.load_month(key)?;
        let outcome = edit(&mut record)?;
        self.save_month(key, &record)?;
        Ok((record, outcome))
    }

    /// Totals for one month
    pub fn month_totals(&self, key: &MonthKey) -> BuddyResult<Totals> {
        Ok(compute_totals(&self.load_month(key)?))
    }

    /// Full report for one month
    pub fn month_report(&self, key: &MonthKey) -> BuddyResult<MonthReport> {
        Ok(MonthReport::new(*key, self.load_month(key)?))
    }

    /// Rows and totals for every stored month of a year
    pub fn year_summary(&self, year: i32) -> BuddyResult<YearSummary> {
        YearSummary::generate(self.store, year)
    }

    /// Every stored month, oldest first
    pub fn saved_months(&self) -> BuddyResult<BTreeSet<MonthKey>> {
        self.store.list_keys()
    }

    /// Years with stored data, plus `current_year`
    pub fn available_years(&self, current_year: i32) -> BuddyResult<Vec<i32>> {
        available_years(self.store, current_year)
    }
}
