//! Derived spending aggregates.
//!
//! All functions are pure and recompute from the full list on every call.
//! Sums use [`Decimal`] so the result does not depend on record order.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Category, Expense};

/// Category -> sum of costs. Categories without records have no entry.
pub type CategoryTotals = BTreeMap<Category, Decimal>;

/// Month -> sum of costs, in chronological order. Sparse like [`CategoryTotals`].
pub type MonthlyTotals = BTreeMap<MonthKey, Decimal>;

/// Calendar month an expense falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Short display label, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        const NAMES: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
        let name = NAMES.get(self.month.saturating_sub(1) as usize).copied().unwrap_or("???");
        format!("{} {}", name, self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

pub fn category_totals(expenses: &[Expense]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for expense in expenses {
        let entry = totals.entry(expense.category.clone()).or_insert(Decimal::ZERO);
        *entry = entry.saturating_add(expense.cost);
    }
    totals
}

pub fn monthly_totals(expenses: &[Expense]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::new();
    for expense in expenses {
        let entry = totals.entry(MonthKey::of(expense.date)).or_insert(Decimal::ZERO);
        *entry = entry.saturating_add(expense.cost);
    }
    totals
}

pub fn grand_total(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .fold(Decimal::ZERO, |sum, expense| sum.saturating_add(expense.cost))
}
