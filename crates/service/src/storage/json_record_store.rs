use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::debug;

use models::record::{Record, RecordId};

use crate::errors::ServiceError;
use crate::storage::record_store::RecordStore;

/// On-disk document: the id counter plus records in insertion order.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoreDocument {
    next_id: RecordId,
    records: Vec<Record>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self { next_id: 1, records: Vec::new() }
    }
}

/// JSON file-backed store for one record kind.
///
/// Persists the records to a single JSON document and provides simple CRUD
/// helpers. Intended for lightweight admin state where a database is
/// overkill. Mutations persist before releasing the write lock, so saves
/// never race.
#[derive(Clone)]
pub struct JsonRecordStore {
    inner: Arc<RwLock<StoreDocument>>,
    file_path: PathBuf,
}

impl JsonRecordStore {
    /// Initialize the store from a path. Creates the file with an empty
    /// document if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let doc: StoreDocument = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty = StoreDocument::default();
                let data = serde_json::to_vec(&empty).map_err(|e| ServiceError::Storage(e.to_string()))?;
                fs::write(&file_path, data)
                    .await
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };
        debug!(path = %file_path.display(), records = doc.records.len(), "record store opened");

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(doc)), file_path }))
    }

    async fn persist(&self, doc: &StoreDocument) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(doc).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for JsonRecordStore {
    async fn put(&self, id: Option<RecordId>, label: &str) -> Result<Record, ServiceError> {
        let mut doc = self.inner.write().await;
        let stored = match id {
            None => {
                let record = Record { id: doc.next_id, label: label.to_string() };
                doc.next_id += 1;
                doc.records.push(record.clone());
                record
            }
            Some(id) => {
                let existing = doc
                    .records
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or_else(|| ServiceError::not_found("record"))?;
                existing.label = label.to_string();
                existing.clone()
            }
        };
        self.persist(&doc).await?;
        Ok(stored)
    }

    async fn get(&self, id: RecordId) -> Result<Record, ServiceError> {
        let doc = self.inner.read().await;
        doc.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("record"))
    }

    async fn list(&self) -> Result<Vec<Record>, ServiceError> {
        let doc = self.inner.read().await;
        Ok(doc.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn json_record_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_record_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonRecordStore::new(&tmp).await?;

        // initially empty
        assert!(store.list().await?.is_empty());

        // inserts assign fresh ids in order
        let a = store.put(None, "Room A").await?;
        let b = store.put(None, "Room B").await?;
        assert_ne!(a.id, b.id);
        assert_eq!(store.get(a.id).await?.label, "Room A");

        // update keeps the id and the insertion slot
        let updated = store.put(Some(a.id), "Room A1").await?;
        assert_eq!(updated.id, a.id);
        let listed = store.list().await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].label, "Room A1");
        assert_eq!(listed[1].label, "Room B");

        // missing ids surface as NotFound
        assert!(matches!(store.put(Some(999), "nope").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.get(999).await, Err(ServiceError::NotFound(_))));

        // reload from disk keeps records and the id counter
        let reloaded = JsonRecordStore::new(&tmp).await?;
        assert_eq!(reloaded.list().await?.len(), 2);
        let c = reloaded.put(None, "Room C").await?;
        assert!(c.id > b.id);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
