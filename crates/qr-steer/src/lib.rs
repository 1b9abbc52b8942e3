//! `qr-steer` — evasion behavior: maneuver state machines and the layered
//! steering composer.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`pursuer`] | `PursuerSnapshot` — read-only per-tick pursuer view           |
//! | [`tuning`]  | `SteeringTuning` — every steering constant, tuned defaults    |
//! | [`state`]   | `BehaviorState`, `Maneuver` — per-agent timed maneuver state  |
//! | [`context`] | `SteerContext<'a>` — read-only tick snapshot for composing    |
//! | [`compose`] | `compose` — weighted sum of all steering layers → unit dir    |
//!
//! # Per-tick flow (driven by qr-sim)
//!
//! 1. `BehaviorState::update` advances maneuver timers and trigger checks.
//! 2. [`compose::compose`] folds every layer — flee/orbit, separation, wall
//!    repulsion, heat avoidance, sector pull, dispersion, active maneuvers,
//!    wander, jitter — into one vector, normalizes it, and exponentially
//!    smooths it against the previous frame's direction.
//!
//! Separation and dispersion read neighbor rects for **this tick**, in the
//! session's fixed iteration order; earlier agents in the pass have already
//! moved.  That order-dependence is contractual (deterministic per fixed
//! input ordering), not a bug to engineer away.

pub mod compose;
pub mod context;
pub mod pursuer;
pub mod state;
pub mod tuning;


pub use compose::compose;
pub use context::SteerContext;
pub use pursuer::PursuerSnapshot;
pub use state::{BehaviorState, Maneuver, Phase};
pub use tuning::SteeringTuning;
