//! `qr-core` — foundational types for the `quarry` pursuit-evasion engine.
//!
//! This crate is a dependency of every other `qr-*` crate.  It intentionally
//! has no `qr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`ids`]    | `EvaderId`, `SectorId`                              |
//! | [`vec2`]   | `Vec2` — 2-D float vector with zero-safe normalize  |
//! | [`rect`]   | `Rect` — center/half-extent axis-aligned rectangle  |
//! | [`arena`]  | `Arena` — validated simulation bounds               |
//! | [`time`]   | `SessionClock`, `SessionConfig`                     |
//! | [`rng`]    | `EvaderRng` (per-agent), `SessionRng` (global)      |
//! | [`error`]  | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod arena;
pub mod error;
pub mod ids;
pub mod rect;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arena::Arena;
pub use error::{CoreError, CoreResult};
pub use ids::{EvaderId, SectorId};
pub use rect::Rect;
pub use rng::{EvaderRng, SessionRng};
pub use time::{SessionClock, SessionConfig};
pub use vec2::Vec2;
