// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Output not found: {0}")]
    OutputNotFound(String),
    // Message shape is part of the API contract: "<field> required"
    #[error("{0} required")]
    FieldRequired(String),
    #[error("Storage error: {0}")]
    StorageError(String),
}
