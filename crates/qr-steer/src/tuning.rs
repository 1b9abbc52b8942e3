//! All steering constants in one struct.
//!
//! Defaults are the tuned values the composer was balanced with.  Tests and
//! callers override individual fields with struct-update syntax:
//!
//! ```rust
//! use qr_steer::SteeringTuning;
//! let t = SteeringTuning { jitter: 0.0, ..SteeringTuning::default() };
//! assert_eq!(t.jitter, 0.0);
//! ```

/// Every numeric constant used by the behavior state machine and composer.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringTuning {
    // ── Flee / orbit ──────────────────────────────────────────────────────
    /// Seconds of pursuer lead used for the predicted flee point.
    pub lead_time: f32,
    /// Distance at which the tangential (orbit) term starts blending in;
    /// also the scale basis for "pursuer is far" thresholds.
    pub orbit_distance: f32,
    /// Maximum weight of the tangential term when the pursuer is on top of
    /// the agent.
    pub orbit_strength: f32,
    /// Residual flee weight once the pursuer is far beyond engage distance.
    /// The flee base fades from 1 at `sector_engage_ratio · orbit_distance`
    /// down to this floor at twice that distance, letting sector pull and
    /// dispersion take over for undisturbed agents.
    pub flee_floor: f32,

    // ── Separation ────────────────────────────────────────────────────────
    pub separation_radius: f32,
    pub separation_force: f32,

    // ── Walls ─────────────────────────────────────────────────────────────
    /// Distance from an edge at which inward repulsion begins.
    pub wall_margin: f32,
    pub wall_push: f32,
    /// Distance from an edge that counts as "hugging" it — triggers the
    /// tangential slide away from the pursuer.
    pub wall_hug_margin: f32,
    pub wall_slide: f32,

    // ── Heat avoidance ────────────────────────────────────────────────────
    /// Lateral probe offset for the two heat samples.
    pub heat_probe: f32,
    pub heat_bias: f32,

    // ── Sector pull ───────────────────────────────────────────────────────
    /// Sector pull engages when pursuer distance exceeds
    /// `sector_engage_ratio * orbit_distance`.
    pub sector_engage_ratio: f32,
    pub sector_pull: f32,
    /// Pull ramps down linearly inside this distance of the home point, so
    /// an agent settles onto the ring instead of overshooting and orbiting
    /// its own attractor.
    pub sector_slow_radius: f32,

    // ── Dispersion ────────────────────────────────────────────────────────
    /// Edge band within which agents count as sharing that edge.
    pub disperse_edge_margin: f32,
    pub disperse_tangent: f32,
    /// Pairs closer than this receive extra radial repulsion.
    pub min_spacing: f32,
    pub disperse_radial: f32,

    // ── Burst maneuver ────────────────────────────────────────────────────
    pub burst_trigger_dist: f32,
    /// Cosine threshold: intent must point at the agent at least this
    /// squarely to trigger a burst.
    pub burst_trigger_cos: f32,
    pub burst_duration: f32,
    pub burst_cooldown: f32,
    /// Distance projected along each lateral candidate when choosing the
    /// burst side.
    pub burst_projection: f32,
    pub burst_push: f32,

    // ── Anti-corner patrol ────────────────────────────────────────────────
    /// Patrol may trigger only when pursuer distance exceeds
    /// `patrol_far_ratio * orbit_distance`.
    pub patrol_far_ratio: f32,
    /// Edge proximity that counts as "near a corner/edge".
    pub corner_margin: f32,
    /// Margin from every edge defining the safe band the patrol aims into.
    pub safe_band: f32,
    pub patrol_duration: f32,
    pub patrol_cooldown: f32,
    pub patrol_push: f32,

    /// Random extra seconds added to both maneuvers' cooldowns, so a pack of
    /// evaders does not re-arm in lockstep.
    pub cooldown_jitter: f32,

    // ── Wander / jitter ───────────────────────────────────────────────────
    pub wander_strength: f32,
    /// Wander multiplier while the pursuer is inside orbit distance.
    pub wander_near_scale: f32,
    pub wander_reroll_min: f32,
    pub wander_reroll_max: f32,
    /// Magnitude of per-tick random jitter.  0 disables all randomness in
    /// the composed vector (maneuver cooldown jitter is also scaled by this
    /// being nonzero), making paths structurally deterministic.
    pub jitter: f32,

    // ── Smoothing ─────────────────────────────────────────────────────────
    /// Weight of the previous frame's direction in the exponential smooth:
    /// `smoothed = new·(1−k) + prev·k`.
    pub smoothing: f32,
}

impl Default for SteeringTuning {
    fn default() -> Self {
        Self {
            lead_time: 0.25,
            orbit_distance: 220.0,
            orbit_strength: 0.85,
            flee_floor: 0.2,

            separation_radius: 70.0,
            separation_force: 1.1,

            wall_margin: 90.0,
            wall_push: 1.3,
            wall_hug_margin: 28.0,
            wall_slide: 0.9,

            heat_probe: 40.0,
            heat_bias: 0.35,

            sector_engage_ratio: 1.2,
            sector_pull: 0.4,
            sector_slow_radius: 120.0,

            disperse_edge_margin: 80.0,
            disperse_tangent: 0.6,
            min_spacing: 48.0,
            disperse_radial: 0.8,

            burst_trigger_dist: 150.0,
            burst_trigger_cos: 0.6,
            burst_duration: 0.35,
            burst_cooldown: 2.5,
            burst_projection: 80.0,
            burst_push: 1.8,

            patrol_far_ratio: 0.9,
            corner_margin: 60.0,
            safe_band: 110.0,
            patrol_duration: 0.9,
            patrol_cooldown: 3.2,
            patrol_push: 0.9,

            cooldown_jitter: 0.8,

            wander_strength: 0.3,
            wander_near_scale: 0.35,
            wander_reroll_min: 0.8,
            wander_reroll_max: 1.6,
            jitter: 0.08,

            smoothing: 0.65,
        }
    }
}
