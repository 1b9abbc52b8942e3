//! `qr-sim` — session orchestrator for the quarry pursuit-evasion engine.
//!
//! # Per-tick flow
//!
//! ```text
//! Session::tick(dt_raw, pursuer, observer):
//!   ① Clock    — clamp dt, accumulate session time.
//!   ② Refill   — population controller tops the active set up to
//!                cap(elapsed) per the selected refill policy; the first
//!                population also assigns sector homes.
//!   ③ Heat     — decay every cell, stamp the pursuer's cell.  This is the
//!                single shared-state write of the tick and happens before
//!                any agent samples the field.
//!   ④ Agents   — in collection order: maneuver state update, steering
//!                composition, integration.  A scratch rect buffer is
//!                updated in place so later agents see earlier agents'
//!                new positions (deterministic per fixed input order).
//! ```
//!
//! Capture is the caller's job: it reads [`Session::evaders`], tests overlap
//! against the pursuer, and calls [`Session::remove_captured`] between ticks
//! — the session never removes or inserts mid-pass.
//!
//! # Crate layout
//!
//! | Module         | Contents                                          |
//! |----------------|---------------------------------------------------|
//! | [`evader`]     | `Evader` — id + kinematics + behavior state + RNG |
//! | [`population`] | `PopulationPolicy`, `RefillPolicy`, spawn logic   |
//! | [`session`]    | `Session` — the tick loop                         |
//! | [`observer`]   | `SessionObserver`, `NoopObserver`                 |
//! | [`builder`]    | `SessionBuilder`                                  |
//! | [`error`]      | `SimError`, `SimResult<T>`                        |

pub mod builder;
pub mod error;
pub mod evader;
pub mod observer;
pub mod population;
pub mod session;


pub use builder::SessionBuilder;
pub use error::{SimError, SimResult};
pub use evader::Evader;
pub use observer::{NoopObserver, SessionObserver};
pub use population::{PopulationPolicy, RefillPolicy};
pub use session::Session;
