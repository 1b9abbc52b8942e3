//! Field-subsystem error type.

use thiserror::Error;

/// Errors produced by `qr-field`.  Construction-time only: once built, the
/// heat field and sector allocator have no failure paths.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("heat field configuration error: {0}")]
    Config(String),
}

pub type FieldResult<T> = Result<T, FieldError>;
