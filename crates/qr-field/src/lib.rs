//! `qr-field` — session-scoped spatial context shared by all evaders.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`heat`]   | `HeatField` — decaying grid of recent pursuer positions   |
//! | [`sector`] | `SectorAllocator` — stable per-agent ring home points     |
//! | [`error`]  | `FieldError`, `FieldResult<T>`                            |
//!
//! # Design notes
//!
//! Both structures are explicit context objects owned by the session and
//! passed into per-tick updates, never module-level globals.  Within one
//! tick the session performs the single heat write (decay + pursuer stamp)
//! before any agent samples the field; under single-threaded execution this
//! ordering is all that is needed for consistency.

pub mod error;
pub mod heat;
pub mod sector;

#[cfg(test)]
mod tests;

pub use error::{FieldError, FieldResult};
pub use heat::{HeatField, HeatTuning};
pub use sector::{SectorAllocator, SectorTuning};
