//! `qr-motion` — turns unit steering directions into bounded movement.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`kinematics`]| `Kinematics` — rect + velocity for one agent          |
//! | [`integrate`] | `MotionTuning`, `speed_cap`, `Integrator::step`       |
//!
//! # Movement model
//!
//! Per tick: `vel += dir · max_accel · dt`, speed clamped to the agent's
//! current cap, position advanced by `vel · dt`, then each axis that crossed
//! an arena boundary is clamped to it with the outgoing velocity component
//! reflected and damped by a restitution factor < 1.  Clamp-then-reflect
//! prevents both tunneling and perfectly elastic corner ping-pong.

pub mod integrate;
pub mod kinematics;

#[cfg(test)]
mod tests;

pub use integrate::{speed_cap, Integrator, MotionTuning};
pub use kinematics::Kinematics;
