//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and record definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod listing;
pub mod record_service;
pub mod runtime;
pub mod storage;
