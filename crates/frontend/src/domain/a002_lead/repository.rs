//! Persisted lead sequence: a JSON array under one storage key.
//!
//! Elements are kept as raw JSON so that records written by earlier site
//! versions (other field names, no `submittedAt`) survive every append.

use contracts::domain::a002_lead::LeadRecord;
use serde_json::Value;

use crate::shared::error::StorageError;
use crate::shared::storage::KeyValueStore;

pub struct LeadRepository<S: KeyValueStore> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> LeadRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Stored leads that parse as [`LeadRecord`], oldest first. Absent,
    /// unreadable or corrupt data reads as an empty sequence.
    pub fn load(&self) -> Vec<LeadRecord> {
        let entries = match self.entries() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to read leads: {}", e);
                return Vec::new();
            }
        };
        entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()
    }

    /// Read-modify-write append. Returns the new number of stored entries,
    /// including ones that do not parse as [`LeadRecord`].
    ///
    /// A failed read aborts the append so that the stored array is never
    /// replaced by a shorter one.
    pub fn append(&self, lead: LeadRecord) -> Result<usize, StorageError> {
        let mut entries = self.entries()?;
        entries.push(serde_json::to_value(&lead)?);
        let raw = serde_json::to_string(&entries)?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(entries.len())
    }

    /// Every stored array element as raw JSON. A value that is not a JSON
    /// array counts as empty and is overwritten by the next append.
    fn entries(&self) -> Result<Vec<Value>, StorageError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => Ok(entries),
            Ok(_) => {
                log::warn!("Discarding non-array lead data under '{}'", self.key);
                Ok(Vec::new())
            }
            Err(e) => {
                log::warn!("Discarding malformed lead data under '{}': {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }
}
