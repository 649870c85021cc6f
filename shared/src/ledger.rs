//! # Ledger store
//!
//! Owns the in-memory list of expenses for the lifetime of the view and
//! mirrors it to the persistence collaborator after every change. New
//! expenses are prepended, so the list reads newest first.

use rust_decimal::Decimal;
use tracing::debug;

use crate::aggregates::{self, CategoryTotals, MonthlyTotals};
use crate::ids::{Clock, IdGenerator, SystemClock};
use crate::models::{Expense, ExpenseDraft, ExpensePatch, RecordId};
use crate::storage::{KeyValueStore, PersistedList, StorageNotice};
use crate::validation::{parse_cost, require_text, ValidationError};

pub struct LedgerStore<S, C = SystemClock> {
    list: PersistedList<Expense, S>,
    ids: IdGenerator,
    clock: C,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Load the ledger stored under `key`, using the wall clock for new ids
    pub fn open(storage: S, key: &str) -> Self {
        Self::open_with_clock(storage, key, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> LedgerStore<S, C> {
    pub fn open_with_clock(storage: S, key: &str, clock: C) -> Self {
        let list: PersistedList<Expense, S> = PersistedList::load(storage, key);
        let ids = IdGenerator::seeded_from(list.items().iter().map(|e| e.id));
        Self { list, ids, clock }
    }

    /// Discard in-memory state and read the ledger from storage again
    pub fn load(&mut self) {
        self.list.reload();
        self.ids = IdGenerator::seeded_from(self.list.items().iter().map(|e| e.id));
    }

    pub fn expenses(&self) -> &[Expense] {
        self.list.items()
    }

    pub fn get(&self, id: RecordId) -> Option<&Expense> {
        self.expenses().iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.expenses().len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses().is_empty()
    }

    /// Validate form input, assign a fresh id and prepend the expense.
    ///
    /// The item must be non-blank and the cost a non-negative number;
    /// otherwise nothing changes and the reason is returned.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<RecordId, ValidationError> {
        let item = require_text(&draft.item, ValidationError::EmptyItem)?;
        let cost = parse_cost(&draft.cost)?;
        let id = self.ids.next_id(self.clock.now_millis());
        let expense = Expense {
            id,
            category: draft.category,
            item,
            cost,
            date: draft.date.unwrap_or_else(|| self.clock.today()),
        };

        debug!(%id, category = %expense.category, cost = %expense.cost, "adding expense");
        self.list.update(|items| {
            items.insert(0, expense);
            (true, ())
        });
        Ok(id)
    }

    /// Remove the expense with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let removed = self.list.update(|items| {
            let before = items.len();
            items.retain(|e| e.id != id);
            let removed = items.len() != before;
            (removed, removed)
        });
        debug!(%id, removed, "remove expense");
        removed
    }

    /// Shallow-merge `patch` into the expense with `id`.
    ///
    /// Returns `Ok(false)` when no expense has that id. Fields supplied in the
    /// patch are validated like form input before anything changes.
    pub fn edit(&mut self, id: RecordId, patch: ExpensePatch) -> Result<bool, ValidationError> {
        let item = patch
            .item
            .as_deref()
            .map(|item| require_text(item, ValidationError::EmptyItem))
            .transpose()?;
        let cost = patch.cost.as_deref().map(parse_cost).transpose()?;

        let found = self.list.update(|items| {
            let Some(expense) = items.iter_mut().find(|e| e.id == id) else {
                return (false, false);
            };
            let before = expense.clone();
            if let Some(category) = patch.category {
                expense.category = category;
            }
            if let Some(item) = item {
                expense.item = item;
            }
            if let Some(cost) = cost {
                expense.cost = cost;
            }
            if let Some(date) = patch.date {
                expense.date = date;
            }
            (*expense != before, true)
        });
        debug!(%id, found, "edit expense");
        Ok(found)
    }

    pub fn category_totals(&self) -> CategoryTotals {
        aggregates::category_totals(self.expenses())
    }

    pub fn monthly_totals(&self) -> MonthlyTotals {
        aggregates::monthly_totals(self.expenses())
    }

    pub fn grand_total(&self) -> Decimal {
        aggregates::grand_total(self.expenses())
    }

    /// Pending storage problem to show the user, cleared once taken
    pub fn take_storage_notice(&mut self) -> Option<StorageNotice> {
        self.list.take_notice()
    }
}
