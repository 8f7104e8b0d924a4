// ─── Error ──────────────────────────────────────────────────────────────────
use crate::value::ValueKind;
use smol_str::SmolStr;
use thiserror::Error;

/// Failure of a typed read or of a read-narrow-modify-write on one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field `{key}` not found")]
    Missing { key: SmolStr },
    #[error("field `{key}`: type mismatch, expected {expected}, got {actual}")]
    TypeMismatch {
        key: SmolStr,
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("field `{key}`: integer overflow")]
    Overflow { key: SmolStr },
}

impl FieldError {
    pub fn key(&self) -> &str {
        match self {
            FieldError::Missing { key }
            | FieldError::TypeMismatch { key, .. }
            | FieldError::Overflow { key } => key.as_str(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldError::Missing { .. })
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Can't build a record from a non-object value ({0})")]
    NotObject(ValueKind),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Field(#[from] FieldError),
}
