//! Session time model.
//!
//! # Design
//!
//! The engine is frame-stepped by an external clock: each tick receives a
//! raw elapsed-time delta.  `SessionClock` clamps that delta to a sane
//! maximum (a stalled frame must not teleport agents through walls or
//! instantly raise the population cap) and accumulates the clamped total as
//! the session's elapsed time.  All time-based policy — the population cap,
//! sector ring rotation, maneuver cooldowns — reads from this one
//! accumulator, so a session reset is a single `reset()` call.

use std::fmt;

// ── SessionClock ──────────────────────────────────────────────────────────────

/// Accumulates clamped frame deltas into session-elapsed seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionClock {
    /// Total clamped simulated seconds since session start (or last reset).
    elapsed_secs: f32,
    /// Upper bound applied to every incoming frame delta.
    max_frame_secs: f32,
}

impl SessionClock {
    pub fn new(max_frame_secs: f32) -> Self {
        Self { elapsed_secs: 0.0, max_frame_secs }
    }

    /// Clamp `dt_raw` to the frame cap, accumulate it, and return the
    /// clamped value the rest of the tick should integrate with.
    /// Negative deltas are treated as zero.
    pub fn advance(&mut self, dt_raw: f32) -> f32 {
        let dt = dt_raw.clamp(0.0, self.max_frame_secs);
        self.elapsed_secs += dt;
        dt
    }

    /// Elapsed simulated seconds this session.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    /// Zero the accumulator (session restart).
    pub fn reset(&mut self) {
        self.elapsed_secs = 0.0;
    }
}

impl fmt::Display for SessionClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}s", self.elapsed_secs)
    }
}

// ── SessionConfig ─────────────────────────────────────────────────────────────

/// Top-level session configuration.
///
/// Typically filled in by the application and handed to the session builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Master RNG seed.  The same seed always produces identical spawn
    /// positions and jitter streams for a fixed input sequence.
    pub seed: u64,

    /// Seconds per population-cap step: `cap = 1 + floor(elapsed / step)`.
    pub cap_step_secs: f32,

    /// Maximum accepted frame delta.  Deltas above this are clamped, so a
    /// multi-second stall advances the session by at most this much.
    pub max_frame_secs: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            cap_step_secs: 30.0,
            max_frame_secs: 0.1,
        }
    }
}

impl SessionConfig {
    /// Construct a `SessionClock` pre-configured for this session.
    pub fn make_clock(&self) -> SessionClock {
        SessionClock::new(self.max_frame_secs)
    }
}
