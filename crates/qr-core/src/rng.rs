//! Deterministic per-agent and session-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each evader gets its own independent `SmallRng` seeded by:
//!
//!   seed = session_seed XOR (evader_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Evaders never share RNG state, so one agent's wander re-rolls cannot
//!   perturb another's.
//! - Spawning new evaders does not disturb the streams of existing ones —
//!   runs are reproducible even as the population grows.
//!
//! Steering jitter magnitudes are tuning values, not RNG properties: setting
//! the jitter scales to zero makes agent paths structurally deterministic
//! without touching the seed policy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::EvaderId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── EvaderRng ─────────────────────────────────────────────────────────────────

/// Per-evader deterministic RNG, created alongside the agent's behavior state.
pub struct EvaderRng(SmallRng);

impl EvaderRng {
    /// Seed deterministically from the session seed and an evader ID.
    pub fn new(session_seed: u64, id: EvaderId) -> Self {
        let seed = session_seed ^ (id.0 as u64).wrapping_mul(MIXING_CONSTANT);
        EvaderRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniformly random angle in `[0, 2π)`.
    #[inline]
    pub fn gen_angle(&mut self) -> f32 {
        self.0.gen_range(0.0..std::f32::consts::TAU)
    }
}

// ── SessionRng ────────────────────────────────────────────────────────────────

/// Session-level RNG for operations that belong to the orchestrator rather
/// than any one agent: spawn placement and cooldown jitter at refill time.
pub struct SessionRng(SmallRng);

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        SessionRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
