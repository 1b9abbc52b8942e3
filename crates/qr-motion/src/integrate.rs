//! Acceleration, speed caps, and damped boundary containment.

use qr_core::{Arena, Vec2};

use crate::Kinematics;

// ── MotionTuning ──────────────────────────────────────────────────────────────

/// Motion constants.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionTuning {
    /// Base speed cap, arena units per second.
    pub max_speed: f32,
    /// Acceleration applied along the steering direction.
    pub max_accel: f32,
    /// Speed cap multiplier while a burst maneuver is active.
    pub burst_boost: f32,
    /// Speed cap multiplier while the pursuer is within `panic_dist`.
    pub panic_boost: f32,
    pub panic_dist: f32,
    /// Velocity fraction kept after a wall bounce, in (0, 1).
    pub restitution: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            max_speed: 170.0,
            max_accel: 900.0,
            burst_boost: 1.45,
            panic_boost: 1.2,
            panic_dist: 110.0,
            restitution: 0.7,
        }
    }
}

/// The agent's current speed cap: base, raised while bursting or while the
/// pursuer is inside panic distance.  Boosts do not stack — the larger one
/// wins.
pub fn speed_cap(tuning: &MotionTuning, burst_active: bool, pursuer_dist: f32) -> f32 {
    let mut boost = 1.0_f32;
    if burst_active {
        boost = boost.max(tuning.burst_boost);
    }
    if pursuer_dist < tuning.panic_dist {
        boost = boost.max(tuning.panic_boost);
    }
    tuning.max_speed * boost
}

// ── Integrator ────────────────────────────────────────────────────────────────

/// Stateless integrator; all per-agent state lives in [`Kinematics`].
pub struct Integrator;

impl Integrator {
    /// Advance one agent by `dt` along unit direction `dir`.
    ///
    /// Order matters: accelerate, cap speed, move, then contain.  Containment
    /// clamps each crossed axis to the boundary and reflects that velocity
    /// component scaled by restitution, so `|vel|` can only shrink there —
    /// the speed-cap invariant survives the bounce.
    pub fn step(
        body: &mut Kinematics,
        dir: Vec2,
        cap: f32,
        dt: f32,
        tuning: &MotionTuning,
        arena: &Arena,
    ) {
        body.vel += dir * (tuning.max_accel * dt);
        body.vel = body.vel.clamp_length(cap);
        body.rect.center += body.vel * dt;
        Self::contain(body, tuning.restitution, arena);
    }

    /// Clamp the rect into the arena, reflecting and damping the velocity
    /// component along each crossed boundary.
    fn contain(body: &mut Kinematics, restitution: f32, arena: &Arena) {
        let half = body.rect.half;
        let c = &mut body.rect.center;

        let min_x = half.x;
        let max_x = arena.width() - half.x;
        if c.x < min_x {
            c.x = min_x;
            body.vel.x = -body.vel.x * restitution;
        } else if c.x > max_x {
            c.x = max_x;
            body.vel.x = -body.vel.x * restitution;
        }

        let min_y = half.y;
        let max_y = arena.height() - half.y;
        if c.y < min_y {
            c.y = min_y;
            body.vel.y = -body.vel.y * restitution;
        } else if c.y > max_y {
            c.y = max_y;
            body.vel.y = -body.vel.y * restitution;
        }
    }
}
