//! Per-agent transient maneuver state.
//!
//! Each evader owns a `BehaviorState` from creation — default-initialized,
//! never optional, so steady-state call sites never check "has this been set
//! up yet".  It holds two independent timed maneuvers (burst and anti-corner
//! patrol), wander state, and the previous frame's smoothed direction.

use qr_core::{EvaderRng, Vec2};

use crate::{SteerContext, SteeringTuning};

// ── Maneuver ──────────────────────────────────────────────────────────────────

/// The three phases of a timed maneuver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Active { remaining: f32 },
    Cooldown { remaining: f32 },
}

/// One timed maneuver: idle → active (fixed duration) → cooling down →
/// idle.  The steering direction and post-expiry cooldown are chosen at
/// activation time.
#[derive(Copy, Clone, Debug)]
pub struct Maneuver {
    pub phase: Phase,
    /// Steering direction contributed while `Active`.
    pub dir: Vec2,
    /// Cooldown entered when the active phase expires.
    cooldown_after: f32,
}

impl Maneuver {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            dir: Vec2::ZERO,
            cooldown_after: 0.0,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// The active steering direction, or `None` outside the active phase.
    pub fn active_dir(&self) -> Option<Vec2> {
        if self.is_active() { Some(self.dir) } else { None }
    }

    /// Enter the active phase.  Only meaningful from `Idle`; triggering code
    /// checks `is_idle` first.
    pub fn activate(&mut self, dir: Vec2, duration: f32, cooldown: f32) {
        self.dir = dir;
        self.cooldown_after = cooldown;
        self.phase = Phase::Active { remaining: duration };
    }

    /// Advance timers: active expires into cooldown, cooldown expires into
    /// idle.  Leftover time past an expiry carries into the next phase so a
    /// large dt cannot stretch the cycle.
    pub fn tick(&mut self, dt: f32) {
        match self.phase {
            Phase::Idle => {}
            Phase::Active { remaining } => {
                let left = remaining - dt;
                if left > 0.0 {
                    self.phase = Phase::Active { remaining: left };
                } else {
                    let cd = self.cooldown_after + left; // left is ≤ 0
                    if cd > 0.0 {
                        self.phase = Phase::Cooldown { remaining: cd };
                    } else {
                        self.phase = Phase::Idle;
                    }
                    self.dir = Vec2::ZERO;
                }
            }
            Phase::Cooldown { remaining } => {
                let left = remaining - dt;
                self.phase = if left > 0.0 {
                    Phase::Cooldown { remaining: left }
                } else {
                    Phase::Idle
                };
            }
        }
    }
}

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// All transient per-evader steering state.
pub struct BehaviorState {
    /// Quick lateral dash triggered by a head-on pursuer.
    pub burst: Maneuver,
    /// Proactive drift out of corners while the pursuer is far.
    pub patrol: Maneuver,
    /// Current wander heading, radians.
    wander_phase: f32,
    /// Seconds until the wander heading re-rolls.
    wander_reroll: f32,
    /// Stable tangential orbit side for this agent, +1 or −1.
    orbit_side: f32,
    /// Previous frame's smoothed steering direction (smoothing memory).
    pub prev_dir: Vec2,
}

impl BehaviorState {
    /// Fresh state with a randomized wander heading and orbit side.
    /// Deterministic per the agent's seeded RNG.
    pub fn new(rng: &mut EvaderRng) -> Self {
        Self {
            burst: Maneuver::idle(),
            patrol: Maneuver::idle(),
            wander_phase: rng.gen_angle(),
            wander_reroll: rng.gen_range(0.2_f32..1.2),
            orbit_side: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            prev_dir: Vec2::ZERO,
        }
    }

    /// Which side this agent orbits the pursuer on (+1 / −1).  Fixed for the
    /// agent's lifetime so the strafe direction doesn't flicker.
    #[inline]
    pub fn orbit_side(&self) -> f32 {
        self.orbit_side
    }

    /// Advance timers and run both maneuvers' trigger checks for this tick.
    pub fn update(&mut self, dt: f32, pos: Vec2, ctx: &SteerContext<'_>, rng: &mut EvaderRng) {
        let t = ctx.tuning;

        self.burst.tick(dt);
        self.patrol.tick(dt);

        self.wander_reroll -= dt;
        if self.wander_reroll <= 0.0 {
            self.wander_phase = rng.gen_angle();
            self.wander_reroll = rng.gen_range(t.wander_reroll_min..t.wander_reroll_max);
        }

        let pursuer_c = ctx.pursuer.rect.center;
        let dist = pos.distance(pursuer_c);

        self.try_trigger_burst(pos, dist, ctx, rng);
        self.try_trigger_patrol(pos, dist, ctx, rng);
    }

    /// Wander contribution, scaled down while the pursuer is near.
    pub fn wander_vec(&self, pursuer_near: bool, t: &SteeringTuning) -> Vec2 {
        let scale = if pursuer_near { t.wander_near_scale } else { 1.0 };
        Vec2::from_angle(self.wander_phase) * (t.wander_strength * scale)
    }

    // ── Trigger checks ────────────────────────────────────────────────────

    /// Burst: pursuer close + cooldown expired + intent pointed at us.
    fn try_trigger_burst(
        &mut self,
        pos: Vec2,
        dist: f32,
        ctx: &SteerContext<'_>,
        rng: &mut EvaderRng,
    ) {
        let t = ctx.tuning;
        if !self.burst.is_idle() || dist >= t.burst_trigger_dist {
            return;
        }
        let toward_agent = (pos - ctx.pursuer.rect.center).normalized();
        if ctx.pursuer.intent.dot(toward_agent) <= t.burst_trigger_cos {
            return;
        }

        // Pick the lateral side that ends up farther from where the pursuer
        // is heading.
        let predicted = ctx.pursuer.predicted_point(t.lead_time);
        let flee = (pos - predicted).normalized();
        if flee == Vec2::ZERO {
            return;
        }
        let left = flee.perp();
        let right = -left;
        let d_left = (pos + left * t.burst_projection).distance(predicted);
        let d_right = (pos + right * t.burst_projection).distance(predicted);
        let dir = if d_left >= d_right { left } else { right };

        let cooldown = t.burst_cooldown + cooldown_jitter(rng, t);
        self.burst.activate(dir, t.burst_duration, cooldown);
    }

    /// Patrol: pursuer far + agent near an edge/corner + cooldown expired.
    fn try_trigger_patrol(
        &mut self,
        pos: Vec2,
        dist: f32,
        ctx: &SteerContext<'_>,
        rng: &mut EvaderRng,
    ) {
        let t = ctx.tuning;
        if !self.patrol.is_idle()
            || dist <= t.patrol_far_ratio * t.orbit_distance
            || ctx.arena.edge_distance(pos) >= t.corner_margin
        {
            return;
        }

        // Target inside the safe band, capped so a small arena still has a
        // valid band.
        let bx = t.safe_band.min(ctx.arena.width() * 0.5);
        let by = t.safe_band.min(ctx.arena.height() * 0.5);
        let target = Vec2::new(
            pos.x.clamp(bx, ctx.arena.width() - bx),
            pos.y.clamp(by, ctx.arena.height() - by),
        );

        // 75% straight pull into the band, 25% tangential around the pursuer.
        let inward = (target - pos).normalized();
        let tangent = (ctx.pursuer.rect.center - pos).normalized().perp();
        let dir = (inward * 0.75 + tangent * 0.25).normalized();
        if dir == Vec2::ZERO {
            return;
        }

        let cooldown = t.patrol_cooldown + cooldown_jitter(rng, t);
        self.patrol.activate(dir, t.patrol_duration, cooldown);
    }
}

/// Random cooldown spread; suppressed entirely when jitter is disabled so
/// deterministic runs stay deterministic.
fn cooldown_jitter(rng: &mut EvaderRng, t: &SteeringTuning) -> f32 {
    if t.jitter > 0.0 && t.cooldown_jitter > 0.0 {
        rng.gen_range(0.0..t.cooldown_jitter)
    } else {
        0.0
    }
}
