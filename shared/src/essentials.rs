//! # Essentials checklist store
//!
//! Independent from the ledger: its own key, its own list, same
//! persistence behaviour. New items go to the top of the list.

use tracing::debug;

use crate::ids::{Clock, IdGenerator, SystemClock};
use crate::models::{EssentialItem, EssentialsCounts, EssentialsFilter, RecordId};
use crate::storage::{KeyValueStore, PersistedList, StorageNotice};
use crate::validation::{require_text, ValidationError};

pub struct EssentialsStore<S, C = SystemClock> {
    list: PersistedList<EssentialItem, S>,
    ids: IdGenerator,
    clock: C,
}

impl<S: KeyValueStore> EssentialsStore<S> {
    pub fn open(storage: S, key: &str) -> Self {
        Self::open_with_clock(storage, key, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> EssentialsStore<S, C> {
    pub fn open_with_clock(storage: S, key: &str, clock: C) -> Self {
        let list: PersistedList<EssentialItem, S> = PersistedList::load(storage, key);
        let ids = IdGenerator::seeded_from(list.items().iter().map(|i| i.id));
        Self { list, ids, clock }
    }

    pub fn load(&mut self) {
        self.list.reload();
        self.ids = IdGenerator::seeded_from(self.list.items().iter().map(|i| i.id));
    }

    pub fn items(&self) -> &[EssentialItem] {
        self.list.items()
    }

    pub fn get(&self, id: RecordId) -> Option<&EssentialItem> {
        self.items().iter().find(|i| i.id == id)
    }

    /// Add a pending item. Blank labels are rejected; labels are stored trimmed.
    pub fn add(&mut self, label: &str) -> Result<RecordId, ValidationError> {
        let label = require_text(label, ValidationError::EmptyLabel)?;
        let id = self.ids.next_id(self.clock.now_millis());
        debug!(%id, %label, "adding essential");
        self.list.update(|items| {
            items.insert(0, EssentialItem { id, label, done: false });
            (true, ())
        });
        Ok(id)
    }

    /// Flip the done flag. Returns the new state, or `None` for an unknown id.
    pub fn toggle(&mut self, id: RecordId) -> Option<bool> {
        let done = self.list.update(|items| match items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.done = !item.done;
                (true, Some(item.done))
            }
            None => (false, None),
        });
        debug!(%id, ?done, "toggle essential");
        done
    }

    pub fn remove(&mut self, id: RecordId) -> bool {
        let removed = self.list.update(|items| {
            let before = items.len();
            items.retain(|i| i.id != id);
            let removed = items.len() != before;
            (removed, removed)
        });
        debug!(%id, removed, "remove essential");
        removed
    }

    pub fn filtered(&self, filter: EssentialsFilter) -> Vec<&EssentialItem> {
        self.items().iter().filter(|item| filter.matches(item)).collect()
    }

    pub fn counts(&self) -> EssentialsCounts {
        let done = self.items().iter().filter(|i| i.done).count();
        EssentialsCounts {
            total: self.items().len(),
            pending: self.items().len() - done,
            done,
        }
    }

    pub fn take_storage_notice(&mut self) -> Option<StorageNotice> {
        self.list.take_notice()
    }
}
