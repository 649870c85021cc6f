use shared::{EssentialItem, EssentialsCounts, EssentialsFilter, EssentialsStore, RecordId, StorageNotice, ValidationError};
use yew::prelude::*;

use crate::services::{BrowserStorage, Logger};

#[derive(Clone, PartialEq, Default)]
pub struct EssentialsState {
    pub items: Vec<EssentialItem>,
    pub counts: EssentialsCounts,
}

impl EssentialsState {
    fn from_store(store: &EssentialsStore<BrowserStorage>) -> Self {
        Self { items: store.items().to_vec(), counts: store.counts() }
    }

    /// Items the current filter lets through, in stored order
    pub fn visible(&self, filter: EssentialsFilter) -> Vec<EssentialItem> {
        self.items.iter().filter(|item| filter.matches(item)).cloned().collect()
    }
}

#[derive(Clone, PartialEq)]
pub struct EssentialsActions {
    pub add: Callback<String, Result<RecordId, ValidationError>>,
    pub toggle: Callback<RecordId>,
    pub remove: Callback<RecordId>,
    pub set_filter: Callback<EssentialsFilter>,
    pub dismiss_notice: Callback<()>,
}

pub struct UseEssentialsResult {
    pub state: EssentialsState,
    pub filter: EssentialsFilter,
    pub notice: Option<StorageNotice>,
    pub actions: EssentialsActions,
}

#[hook]
pub fn use_essentials(storage: &BrowserStorage, key: &str) -> UseEssentialsResult {
    let store = {
        let storage = storage.clone();
        let key = key.to_string();
        use_mut_ref(move || EssentialsStore::open(storage, &key))
    };
    let state = {
        let store = store.clone();
        use_state(move || EssentialsState::from_store(&store.borrow()))
    };
    let filter = use_state(EssentialsFilter::default);
    let notice = use_state(|| None::<StorageNotice>);

    {
        let store = store.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            if let Some(found) = store.borrow_mut().take_storage_notice() {
                Logger::warn_with_component("essentials", &found.to_string());
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
                Logger::warn_with_component("essentials", &found.to_string());
                notice.set(Some(found));
            }
            state.set(EssentialsState::from_store(&store));
        }
    };

    let add = {
        let store = store.clone();
        let refresh = refresh.clone();
        use_callback((), move |label: String, _| {
            let result = store.borrow_mut().add(&label);
            if result.is_ok() {
                refresh();
            }
            result
        })
    };

    let toggle = {
        let store = store.clone();
        let refresh = refresh.clone();
        use_callback((), move |id: RecordId, _| {
            let toggled = store.borrow_mut().toggle(id);
            if let Some(done) = toggled {
                Logger::debug_with_component("essentials", &format!("item {} done={}", id, done));
                refresh();
            }
        })
    };

    let remove = {
        let store = store.clone();
        let refresh = refresh.clone();
        use_callback((), move |id: RecordId, _| {
            let removed = store.borrow_mut().remove(id);
            if removed {
                refresh();
            }
        })
    };

    let set_filter = {
        let filter = filter.clone();
        use_callback((), move |next: EssentialsFilter, _| filter.set(next))
    };

    let dismiss_notice = {
        let notice = notice.clone();
        use_callback((), move |_, _| notice.set(None))
    };

    UseEssentialsResult {
        state: (*state).clone(),
        filter: *filter,
        notice: (*notice).clone(),
        actions: EssentialsActions { add, toggle, remove, set_filter, dismiss_notice },
    }
}
