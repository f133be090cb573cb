//! Runtime wiring
//!
//! Builds the per-kind stores and services from `configs::AppConfig` so a
//! caller (HTTP handler, CLI, test harness) gets one ready-to-use bundle.

use configs::AppConfig;

use models::kind::RecordKind;

use crate::errors::ServiceError;
use crate::listing::ListBuilder;
use crate::record_service::RecordService;
use crate::storage::json_record_store::JsonRecordStore;

/// Ready-to-use services and list builders for both record kinds.
#[derive(Clone)]
pub struct Runtime {
    pub categories: RecordService,
    pub reservations: RecordService,
    pub category_listing: ListBuilder,
    pub reservation_listing: ListBuilder,
}

/// Ensure the data directory exists; warn on missing.
pub async fn ensure_env(data_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_data_dir(data_dir).await
}

/// Open both stores and wire the services.
pub async fn init(cfg: &AppConfig) -> Result<Runtime, ServiceError> {
    ensure_env(&cfg.storage.data_dir)
        .await
        .map_err(|e| ServiceError::Storage(e.to_string()))?;

    let categories = JsonRecordStore::new(cfg.storage.categories_path()).await?;
    let reservations = JsonRecordStore::new(cfg.storage.reservations_path()).await?;

    Ok(Runtime {
        categories: RecordService::category(categories),
        reservations: RecordService::reservation(reservations),
        category_listing: ListBuilder::new(RecordKind::Category),
        reservation_listing: ListBuilder::new(RecordKind::Reservation),
    })
}
