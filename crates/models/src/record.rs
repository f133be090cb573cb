use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Identifier assigned by the store. Unique within a record kind and never
/// reused, including across restarts.
pub type RecordId = u64;

/// A flat administrative record: stable id plus mutable display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub label: String,
}

/// Reject labels that are empty after trimming.
pub fn validate_label(label: &str) -> Result<(), ModelError> {
    if label.trim().is_empty() {
        return Err(ModelError::Validation("label required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_must_be_non_empty() {
        assert!(validate_label("VIP").is_ok());
        assert!(matches!(validate_label(""), Err(ModelError::Validation(_))));
        assert!(matches!(validate_label("   "), Err(ModelError::Validation(_))));
    }
}
