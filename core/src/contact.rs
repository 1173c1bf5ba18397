use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::indicator::SaveNotifier;
use crate::page::PageDom;

pub const CONTACT_STORAGE_KEY: &str = "contactInfo";
pub const EDITABLE_SELECTOR: &str = ".editable";
pub const KEY_ATTRIBUTE: &str = "data-key";

/// Flat snapshot of every editable field, keyed by its `data-key`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactRecord(BTreeMap<String, String>);

impl ContactRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContactRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

/// String key/value storage with `localStorage` semantics.
pub trait RecordStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
}

/// In-process storage, used when the browser refuses `localStorage` and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: RecordStorage + ?Sized> RecordStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set_item(key, value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Encode(String),
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Encode(message) => write!(f, "failed to encode contact record: {message}"),
            StoreError::Storage(message) => write!(f, "failed to write contact record: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing stored under the key.
    Empty,
    /// Stored value could not be read or parsed; fields were left alone.
    Malformed(String),
    Applied { applied: usize, ignored: usize },
}

pub struct ContactStore<S> {
    storage: S,
    storage_key: String,
    editable_selector: String,
    key_attribute: String,
}

impl<S: RecordStorage> ContactStore<S> {
    pub fn new(storage: S, config: &SiteConfig) -> Self {
        Self {
            storage,
            storage_key: config.storage_key.clone(),
            editable_selector: config.editable_selector.clone(),
            key_attribute: config.key_attribute.clone(),
        }
    }

    /// Current field values, without touching storage. Fields lacking a key attribute
    /// are skipped; on duplicate keys the later field wins.
    pub fn export<D: PageDom>(&self, dom: &D) -> ContactRecord {
        let mut record = ContactRecord::new();
        for field in dom.query_all(&self.editable_selector) {
            let Some(key) = dom.attribute(&field, &self.key_attribute) else {
                continue;
            };
            record.insert(key, dom.text(&field).trim());
        }
        record
    }

    pub fn persist<D, N>(&self, dom: &D, notifier: &N) -> Result<ContactRecord, StoreError>
    where
        D: PageDom,
        N: SaveNotifier + ?Sized,
    {
        let record = self.export(dom);
        let raw = record
            .to_json()
            .map_err(|err| StoreError::Encode(err.to_string()))?;
        self.storage
            .set_item(&self.storage_key, &raw)
            .map_err(StoreError::Storage)?;
        notifier.notify_saved();
        Ok(record)
    }

    /// Loads the stored record into matching fields. Never fails; problems are
    /// reported through the outcome.
    pub fn restore<D: PageDom>(&self, dom: &D) -> RestoreOutcome {
        let raw = match self.storage.get_item(&self.storage_key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return RestoreOutcome::Empty,
            Err(err) => return RestoreOutcome::Malformed(err),
        };
        let record = match ContactRecord::from_json(&raw) {
            Ok(record) => record,
            Err(err) => return RestoreOutcome::Malformed(err.to_string()),
        };
        let (applied, ignored) = self.apply(dom, &record);
        RestoreOutcome::Applied { applied, ignored }
    }

    /// Applies an externally supplied record, then persists the page state.
    pub fn import<D, N>(
        &self,
        dom: &D,
        record: &ContactRecord,
        notifier: &N,
    ) -> Result<ContactRecord, StoreError>
    where
        D: PageDom,
        N: SaveNotifier + ?Sized,
    {
        self.apply(dom, record);
        self.persist(dom, notifier)
    }

    fn apply<D: PageDom>(&self, dom: &D, record: &ContactRecord) -> (usize, usize) {
        let fields = dom.query_all(&self.editable_selector);
        let mut applied = 0;
        let mut ignored = 0;
        for (key, value) in record.iter() {
            if value.is_empty() {
                continue;
            }
            let field = fields.iter().find(|field| {
                dom.attribute(field, &self.key_attribute).as_deref() == Some(key)
            });
            match field {
                Some(field) => {
                    dom.set_text(field, value);
                    applied += 1;
                }
                None => ignored += 1,
            }
        }
        (applied, ignored)
    }
}
