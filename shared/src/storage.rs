//! # Persistence
//!
//! The ledger and the essentials checklist each live under one key of a
//! string key-value store (browser `localStorage` in the app). Lists are
//! written whole on every change inside a versioned envelope:
//!
//! ```json
//! {"version": 2, "items": [ ... ]}
//! ```
//!
//! A bare JSON array is the unversioned layout written by earlier releases
//! and is read as version 1.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::error::PersistenceError;

/// Current envelope version written by [`encode_list`]
pub const ENVELOPE_VERSION: u32 = 2;

/// Key-value persistence collaborator
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, `None` if nothing was saved yet
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).write(key, value)
    }
}

/// In-memory store. Clones share the same entries, so a test can keep a
/// handle to inspect what a store wrote. Also used by the app when browser
/// storage is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Make every following write fail, like a full browser quota
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes.get() {
            return Err(PersistenceError::Backend("quota exceeded".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Serialize)]
struct EnvelopeOut<'a, T> {
    version: u32,
    items: &'a [T],
}

#[derive(Deserialize)]
struct EnvelopeIn {
    version: u32,
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

/// Result of decoding a stored list
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedList<T> {
    pub items: Vec<T>,
    /// Records that could not be read and were dropped
    pub skipped: usize,
    /// Envelope version found in storage
    pub version: u32,
}

pub fn encode_list<T: Serialize>(items: &[T]) -> Result<String, PersistenceError> {
    serde_json::to_string(&EnvelopeOut { version: ENVELOPE_VERSION, items })
        .map_err(|e| PersistenceError::Encode(e.to_string()))
}

/// Decode a stored list, migrating older layouts.
///
/// A payload that is not JSON, or not one of the known layouts, is an error.
/// Individual records that do not fit `T` are skipped and counted.
pub fn decode_list<T: DeserializeOwned>(raw: &str) -> Result<DecodedList<T>, PersistenceError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| PersistenceError::Malformed(e.to_string()))?;

    let (version, records) = match value {
        serde_json::Value::Array(records) => (1, records),
        serde_json::Value::Object(_) => {
            let envelope: EnvelopeIn =
                serde_json::from_value(value).map_err(|e| PersistenceError::Malformed(e.to_string()))?;
            if envelope.version > ENVELOPE_VERSION {
                return Err(PersistenceError::UnsupportedVersion {
                    found: envelope.version,
                    supported: ENVELOPE_VERSION,
                });
            }
            (envelope.version, envelope.items)
        }
        serde_json::Value::Null => (ENVELOPE_VERSION, Vec::new()),
        other => {
            return Err(PersistenceError::Malformed(format!("expected a list, found {}", json_kind(&other))));
        }
    };

    let total = records.len();
    let items: Vec<T> = records
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect();

    Ok(DecodedList { skipped: total - items.len(), items, version })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Non-fatal storage problem the UI should show to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageNotice {
    /// Saved data could not be read; the list started empty
    LoadFailed(PersistenceError),
    /// Some saved records could not be read and were left out
    RecordsSkipped(usize),
    /// The latest change is kept for this session but was not saved
    SaveFailed(PersistenceError),
}

impl fmt::Display for StorageNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageNotice::LoadFailed(e) => write!(f, "Saved data could not be read and was ignored ({})", e),
            StorageNotice::RecordsSkipped(1) => write!(f, "1 saved entry could not be read and was skipped"),
            StorageNotice::RecordsSkipped(n) => write!(f, "{} saved entries could not be read and were skipped", n),
            StorageNotice::SaveFailed(e) => write!(f, "Your change was not saved and will be lost on reload ({})", e),
        }
    }
}

/// A list mirrored to one key of a [`KeyValueStore`].
///
/// Loading never fails: unreadable data becomes an empty list plus a notice.
/// Every save writes the whole list and records a notice on failure.
///
/// A payload that could not be read in full is copied to a side key
/// (`<key>.unreadable`, then `<key>.unreadable.2`, ...) before the first save
/// replaces it.
pub struct PersistedList<T, S> {
    storage: S,
    key: String,
    items: Vec<T>,
    notice: Option<StorageNotice>,
    /// Raw payload still waiting to be backed up
    unreadable: Option<String>,
}

impl<T, S> PersistedList<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let mut list = Self { storage, key: key.into(), items: Vec::new(), notice: None, unreadable: None };
        list.reload();
        list
    }

    /// Replace the in-memory list with what storage currently holds
    pub fn reload(&mut self) {
        self.unreadable = None;
        let raw = match self.storage.read(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored list");
                self.items = Vec::new();
                self.notice = Some(StorageNotice::LoadFailed(e));
                return;
            }
        };

        let Some(raw) = raw else {
            debug!(key = %self.key, "no stored list, starting empty");
            self.items = Vec::new();
            return;
        };

        match decode_list::<T>(&raw) {
            Ok(decoded) => {
                debug!(key = %self.key, count = decoded.items.len(), version = decoded.version, "loaded stored list");
                if decoded.skipped > 0 {
                    warn!(key = %self.key, skipped = decoded.skipped, "dropped unreadable records");
                    self.notice = Some(StorageNotice::RecordsSkipped(decoded.skipped));
                    self.unreadable = Some(raw);
                }
                self.items = decoded.items;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored list is unreadable, starting empty");
                self.items = Vec::new();
                self.notice = Some(StorageNotice::LoadFailed(e));
                self.unreadable = Some(raw);
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Apply `change` to the list and save it if `change` reports a modification
    pub fn update<R>(&mut self, change: impl FnOnce(&mut Vec<T>) -> (bool, R)) -> R {
        let (changed, result) = change(&mut self.items);
        if changed {
            self.save();
        }
        result
    }

    pub fn save(&mut self) {
        if let Err(e) = self.back_up_unreadable() {
            warn!(key = %self.key, error = %e, "failed to back up unreadable list, not overwriting it");
            self.notice = Some(StorageNotice::SaveFailed(e));
            return;
        }

        let outcome = encode_list(&self.items).and_then(|raw| self.storage.write(&self.key, &raw));
        match outcome {
            Ok(()) => debug!(key = %self.key, count = self.items.len(), "saved list"),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to save list");
                self.notice = Some(StorageNotice::SaveFailed(e));
            }
        }
    }

    fn back_up_unreadable(&mut self) -> Result<(), PersistenceError> {
        let Some(raw) = self.unreadable.as_deref() else {
            return Ok(());
        };
        let backup_key = self.free_backup_key()?;
        self.storage.write(&backup_key, raw)?;
        info!(key = %self.key, backup = %backup_key, "kept unreadable list before overwriting it");
        self.unreadable = None;
        Ok(())
    }

    fn free_backup_key(&self) -> Result<String, PersistenceError> {
        let mut slot = 1;
        loop {
            let candidate = match slot {
                1 => format!("{}.unreadable", self.key),
                n => format!("{}.unreadable.{}", self.key, n),
            };
            if self.storage.read(&candidate)?.is_none() {
                return Ok(candidate);
            }
            slot += 1;
        }
    }

    pub fn notice(&self) -> Option<&StorageNotice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<StorageNotice> {
        self.notice.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EssentialItem, RecordId};

    fn rice() -> EssentialItem {
        EssentialItem { id: RecordId(1), label: "Rice".into(), done: false }
    }

    #[test]
    fn test_encode_writes_versioned_envelope() {
        let raw = encode_list(&[rice()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 2);
        assert_eq!(value["items"][0]["label"], "Rice");
    }

    #[test]
    fn test_decode_migrates_bare_array() {
        let decoded = decode_list::<EssentialItem>(r#"[{"id":1,"label":"Rice","done":false}]"#).unwrap();
        assert_eq!(decoded.version, 1);
        assert_eq!(decoded.items, vec![rice()]);
        assert_eq!(decoded.skipped, 0);
    }

    #[test]
    fn test_decode_skips_bad_records() {
        let raw = r#"{"version":2,"items":[{"id":1,"label":"Rice"},{"label":"no id"},42]}"#;
        let decoded = decode_list::<EssentialItem>(raw).unwrap();
        assert_eq!(decoded.items, vec![rice()]);
        assert_eq!(decoded.skipped, 2);
    }

    #[test]
    fn test_decode_rejects_garbage_and_newer_versions() {
        assert!(matches!(decode_list::<EssentialItem>("{not json"), Err(PersistenceError::Malformed(_))));
        assert!(matches!(decode_list::<EssentialItem>("\"text\""), Err(PersistenceError::Malformed(_))));
        assert_eq!(
            decode_list::<EssentialItem>(r#"{"version":9,"items":[]}"#),
            Err(PersistenceError::UnsupportedVersion { found: 9, supported: 2 })
        );
    }

    #[test]
    fn test_decode_null_is_empty() {
        let decoded = decode_list::<EssentialItem>("null").unwrap();
        assert!(decoded.items.is_empty());
    }

    #[test]
    fn test_persisted_list_malformed_storage_starts_empty() {
        let store = MemoryStore::new().with_entry("k", "][");
        let mut list: PersistedList<EssentialItem, _> = PersistedList::load(store, "k");
        assert!(list.items().is_empty());
        assert!(matches!(list.take_notice(), Some(StorageNotice::LoadFailed(_))));
        assert_eq!(list.take_notice(), None);
    }

    #[test]
    fn test_persisted_list_save_failure_keeps_change() {
        let store = MemoryStore::new();
        let mut list: PersistedList<EssentialItem, _> = PersistedList::load(store.clone(), "k");
        store.set_fail_writes(true);

        list.update(|items| {
            items.push(rice());
            (true, ())
        });

        assert_eq!(list.items().len(), 1);
        assert!(matches!(list.notice(), Some(StorageNotice::SaveFailed(_))));
        assert_eq!(store.get("k"), None);
    }

    fn push_rice(list: &mut PersistedList<EssentialItem, MemoryStore>) {
        list.update(|items| {
            items.push(rice());
            (true, ())
        });
    }

    #[test]
    fn test_unreadable_payload_is_kept_before_first_save() {
        let newer = r#"{"version":3,"items":[{"id":7,"label":"Flour","done":true}]}"#;
        let store = MemoryStore::new().with_entry("k", newer);
        let mut list: PersistedList<EssentialItem, _> = PersistedList::load(store.clone(), "k");
        assert!(list.items().is_empty());

        push_rice(&mut list);
        push_rice(&mut list);

        assert_eq!(store.get("k.unreadable").as_deref(), Some(newer));
        assert_eq!(store.get("k.unreadable.2"), None);
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn test_backup_uses_next_free_slot() {
        let store = MemoryStore::new()
            .with_entry("k", "{broken")
            .with_entry("k.unreadable", "older");
        let mut list: PersistedList<EssentialItem, _> = PersistedList::load(store.clone(), "k");

        push_rice(&mut list);

        assert_eq!(store.get("k.unreadable").as_deref(), Some("older"));
        assert_eq!(store.get("k.unreadable.2").as_deref(), Some("{broken"));
    }

    #[test]
    fn test_partially_readable_payload_is_kept() {
        let raw = r#"{"version":2,"items":[{"id":1,"label":"Rice"},{"label":"no id"}]}"#;
        let store = MemoryStore::new().with_entry("k", raw);
        let mut list: PersistedList<EssentialItem, _> = PersistedList::load(store.clone(), "k");
        assert_eq!(list.items().len(), 1);

        push_rice(&mut list);

        assert_eq!(store.get("k.unreadable").as_deref(), Some(raw));
    }

    #[test]
    fn test_clean_payload_is_not_backed_up() {
        let raw = encode_list(&[rice()]).unwrap();
        let store = MemoryStore::new().with_entry("k", &raw);
        let mut list: PersistedList<EssentialItem, _> = PersistedList::load(store.clone(), "k");

        push_rice(&mut list);

        assert_eq!(store.get("k.unreadable"), None);
    }

    #[test]
    fn test_failed_backup_leaves_payload_in_place() {
        let store = MemoryStore::new().with_entry("k", "{broken");
        let mut list: PersistedList<EssentialItem, _> = PersistedList::load(store.clone(), "k");
        list.take_notice();
        store.set_fail_writes(true);

        push_rice(&mut list);

        assert_eq!(store.get("k").as_deref(), Some("{broken"));
        assert!(matches!(list.notice(), Some(StorageNotice::SaveFailed(_))));

        store.set_fail_writes(false);
        push_rice(&mut list);
        assert_eq!(store.get("k.unreadable").as_deref(), Some("{broken"));
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn test_persisted_list_unchanged_update_does_not_write() {
        let store = MemoryStore::new();
        let mut list: PersistedList<EssentialItem, _> = PersistedList::load(store.clone(), "k");
        list.update(|_| (false, ()));
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(
            StorageNotice::RecordsSkipped(1).to_string(),
            "1 saved entry could not be read and was skipped"
        );
        assert!(StorageNotice::SaveFailed(PersistenceError::Unavailable)
            .to_string()
            .starts_with("Your change was not saved"));
    }
}
