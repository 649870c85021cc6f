use shared::{
    CategoryTotals, Decimal, Expense, ExpenseDraft, ExpensePatch, LedgerStore, MonthlyTotals, RecordId,
    StorageNotice, ValidationError,
};
use yew::prelude::*;

use crate::services::{BrowserStorage, Logger};

/// Everything the dashboard renders, recomputed from the store after each change
#[derive(Clone, PartialEq, Default)]
pub struct LedgerState {
    pub expenses: Vec<Expense>,
    pub totals: CategoryTotals,
    pub monthly: MonthlyTotals,
    pub grand_total: Decimal,
}

impl LedgerState {
    fn from_store(store: &LedgerStore<BrowserStorage>) -> Self {
        Self {
            expenses: store.expenses().to_vec(),
            totals: store.category_totals(),
            monthly: store.monthly_totals(),
            grand_total: store.grand_total(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct LedgerActions {
    pub add: Callback<ExpenseDraft, Result<RecordId, ValidationError>>,
    pub remove: Callback<RecordId>,
    pub edit: Callback<(RecordId, ExpensePatch), Result<bool, ValidationError>>,
    pub dismiss_notice: Callback<()>,
}

pub struct UseLedgerResult {
    pub state: LedgerState,
    pub notice: Option<StorageNotice>,
    pub actions: LedgerActions,
}

/// Expense ledger persisted under `key`
#[hook]
pub fn use_ledger(storage: &BrowserStorage, key: &str) -> UseLedgerResult {
    let store = {
        let storage = storage.clone();
        let key = key.to_string();
        use_mut_ref(move || LedgerStore::open(storage, &key))
    };
    let state = {
        let store = store.clone();
        use_state(move || LedgerState::from_store(&store.borrow()))
    };
    let notice = use_state(|| None::<StorageNotice>);

    // Surface a notice left by the initial load
    {
        let store = store.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            if let Some(found) = store.borrow_mut().take_storage_notice() {
                Logger::warn_with_component("ledger", &found.to_string());
                notice.set(Some(found));
            }
            || ()
        });
    }

    let refresh = {
        let store = store.clone();
        let state = state.clone();
        let notice = notice.clone();
        move || {
            let mut store = store.borrow_mut();
            if let Some(found) = store.take_storage_notice() {
                Logger::warn_with_component("ledger", &found.to_string());
                notice.set(Some(found));
            }
            state.set(LedgerState::from_store(&store));
        }
    };

    let add = {
        let store = store.clone();
        let refresh = refresh.clone();
        use_callback((), move |draft: ExpenseDraft, _| {
            let result = store.borrow_mut().add(draft);
            match &result {
                Ok(id) => {
                    Logger::debug_with_component("ledger", &format!("added expense {}", id));
                    refresh();
                }
                Err(e) => Logger::debug_with_component("ledger", &format!("declined expense: {}", e)),
            }
            result
        })
    };

    let remove = {
        let store = store.clone();
        let refresh = refresh.clone();
        use_callback((), move |id: RecordId, _| {
            if store.borrow_mut().remove(id) {
                Logger::debug_with_component("ledger", &format!("removed expense {}", id));
                refresh();
            }
        })
    };

    let edit = {
        let store = store.clone();
        let refresh = refresh.clone();
        use_callback((), move |(id, patch): (RecordId, ExpensePatch), _| {
            let result = store.borrow_mut().edit(id, patch);
            if let Ok(true) = result {
                Logger::debug_with_component("ledger", &format!("edited expense {}", id));
                refresh();
            }
            result
        })
    };

    let dismiss_notice = {
        let notice = notice.clone();
        use_callback((), move |_, _| notice.set(None))
    };

    UseLedgerResult {
        state: (*state).clone(),
        notice: (*notice).clone(),
        actions: LedgerActions { add, remove, edit, dismiss_notice },
    }
}
