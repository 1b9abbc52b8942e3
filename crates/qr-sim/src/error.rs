//! Session-level error type, wrapping the lower crates' errors.

use qr_core::CoreError;
use qr_field::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("session configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Field(#[from] FieldError),
}

pub type SimResult<T> = Result<T, SimError>;
