//! The shared blob document.

use crate::{UserId, UserRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Whole-document mapping from stringified user id to a record-shaped object.
///
/// The document is read and written wholesale. Entries that do not parse
/// as [`UserRecord`] are preserved on write but read back as misses.
///
/// # Examples
///
/// ```
/// use cuslige_core::{SharedBlob, UserId};
/// use serde_json::json;
///
/// let blob = SharedBlob::from_value(json!({"1": {"unexpected": true}})).unwrap();
/// assert_eq!(blob.len(), 1);
/// assert!(blob.record(UserId::new(1)).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharedBlob(Map<String, Value>);

impl SharedBlob {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept any JSON object as a blob. `null` is treated as an empty document.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            Value::Null => Some(Self::default()),
            _ => None,
        }
    }

    /// Look up and decode the entry for `id`.
    pub fn record(&self, id: UserId) -> Option<UserRecord> {
        let raw = self.0.get(&id.blob_key())?;
        match serde_json::from_value::<UserRecord>(raw.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(user_id = %id, error = %e, "Ignoring undecodable shared cache entry");
                None
            }
        }
    }

    /// Insert or replace the entry for the record's id.
    pub fn insert_record(&mut self, record: &UserRecord) {
        match serde_json::to_value(record) {
            Ok(value) => {
                self.0.insert(record.user_id().blob_key(), value);
            }
            Err(e) => {
                warn!(user_id = %record.user_id(), error = %e, "Failed to encode record for shared cache");
            }
        }
    }

    /// Whether an entry exists for `id`, decodable or not.
    pub fn contains(&self, id: UserId) -> bool {
        self.0.contains_key(&id.blob_key())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw JSON form for upload.
    pub fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}
