use super::StorageBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// One named slot holding a whole JSON array of `T`.
///
/// Reads never fail: an absent, unreadable or corrupt slot is an empty
/// collection, and a single record that does not decode is skipped. Writes report success as a `bool` and never raise.
pub struct Collection<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn load<B: StorageBackend + ?Sized>(&self, backend: &B) -> Vec<T> {
        let raw = match backend.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = self.key, error = %e, "slot unreadable, using empty collection");
                return Vec::new();
            }
        };

        let records: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = self.key, error = %e, "slot corrupt, using empty collection");
                return Vec::new();
            }
        };

        // One unreadable record must not hide the rest of the collection
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(key = self.key, index, error = %e, "skipping unreadable record");
                    None
                }
            })
            .collect()
    }

    /// Serializes and stores the full collection in one write.
    pub fn persist<B: StorageBackend + ?Sized>(&self, backend: &B, items: &[T]) -> bool {
        let raw = match serde_json::to_string(items) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = self.key, error = %e, "failed to serialize collection");
                return false;
            }
        };

        match backend.set_item(self.key, &raw) {
            Ok(()) => {
                debug!(key = self.key, count = items.len(), "collection written");
                true
            }
            Err(e) => {
                warn!(key = self.key, error = %e, "collection write dropped");
                false
            }
        }
    }
}
