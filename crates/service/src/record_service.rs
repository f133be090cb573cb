use std::sync::Arc;

use tracing::info;

use models::kind::{RecordKind, RouteTarget};
use models::record::{validate_label, Record, RecordId};

use crate::errors::ServiceError;
use crate::storage::record_store::RecordStore;

/// Result of a save: the stored id and whether the record was created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveOutcome {
    pub id: RecordId,
    pub created: bool,
}

/// Business operations for one record kind: validated saves, user-facing
/// status messages, and post-save redirect targets.
///
/// Category and Reservation share this one implementation; the kind
/// descriptor supplies the type name and the route names.
#[derive(Clone)]
pub struct RecordService {
    kind: RecordKind,
    store: Arc<dyn RecordStore>,
}

impl RecordService {
    pub fn new(kind: RecordKind, store: Arc<dyn RecordStore>) -> Self {
        Self { kind, store }
    }

    /// Service managing Reservation Category records.
    pub fn category(store: Arc<dyn RecordStore>) -> Self {
        Self::new(RecordKind::Category, store)
    }

    /// Service managing Reservation records.
    pub fn reservation(store: Arc<dyn RecordStore>) -> Self {
        Self::new(RecordKind::Reservation, store)
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Create (`existing == None`) or update a record. The label is
    /// validated before the store is touched, so a rejected save leaves the
    /// store unmodified.
    pub async fn save(&self, label: &str, existing: Option<RecordId>) -> Result<SaveOutcome, ServiceError> {
        validate_label(label)?;
        let record = self.store.put(existing, label).await?;
        let created = existing.is_none();
        if created {
            info!(kind = self.kind.display_name(), id = record.id, "record created");
        }
        Ok(SaveOutcome { id: record.id, created })
    }

    /// Fetch one record.
    pub async fn get(&self, id: RecordId) -> Result<Record, ServiceError> {
        self.store.get(id).await
    }

    /// All records of this kind in insertion order.
    pub async fn list(&self) -> Result<Vec<Record>, ServiceError> {
        self.store.list().await
    }

    /// Status line shown to the user after a successful save.
    pub fn status_message(&self, label: &str, created: bool) -> String {
        if created {
            format!("Created the {} {}.", label, self.kind.display_name())
        } else {
            format!("Saved the {} {}.", label, self.kind.display_name())
        }
    }

    /// Where the caller navigates after a successful save: the record's
    /// canonical page.
    pub fn redirect_target(&self, id: RecordId) -> RouteTarget {
        self.kind.canonical_target(id)
    }
}
