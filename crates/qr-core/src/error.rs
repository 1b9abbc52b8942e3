//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CoreError` via `From` impls, or keep them separate and wrap `CoreError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

/// The top-level error type for `qr-core` and a common base for sub-crates.
///
/// The steering pipeline itself has no recoverable error conditions — all
/// numeric edge cases are handled defensively (zero-safe normalization,
/// spawn fallback).  Errors exist only at construction time, where invalid
/// configuration is rejected before the first tick.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `qr-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
