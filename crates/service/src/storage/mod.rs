//! Storage abstractions for the service layer
//!
//! Contains the record-store trait and a file-backed implementation that
//! persists each record kind as one JSON document.

pub mod json_record_store;
pub mod record_store;
