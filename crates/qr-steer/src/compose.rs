//! The steering composer: one weighted vector sum per agent per tick.
//!
//! Layer order matches priority under normalization — later terms are
//! additive nudges on top of the flee/orbit base, and the final normalize +
//! exponential smooth turns the sum into a stable unit heading.

use qr_core::{EvaderId, Rect, Vec2};

use crate::{BehaviorState, SteerContext};

/// Compose all steering layers for the agent at `self_idx` into a unit
/// direction.
///
/// `neighbors` holds every active evader's rect for **this tick** in session
/// iteration order, including the agent itself at `self_idx`; rects of
/// agents earlier in the pass have already been advanced.  The returned
/// direction is also written into `state.prev_dir` as next frame's smoothing
/// memory.
pub fn compose(
    id: EvaderId,
    self_idx: usize,
    neighbors: &[Rect],
    state: &mut BehaviorState,
    ctx: &SteerContext<'_>,
    rng: &mut qr_core::EvaderRng,
) -> Vec2 {
    let t = ctx.tuning;
    let pos = neighbors[self_idx].center;

    let predicted = ctx.pursuer.predicted_point(t.lead_time);
    let pursuer_dist = pos.distance(ctx.pursuer.rect.center);

    // ── 1+2. Flee / orbit base ────────────────────────────────────────────
    let mut total = flee_orbit(pos, predicted, state.orbit_side(), ctx);

    // ── 3. Separation ─────────────────────────────────────────────────────
    total += separation(self_idx, neighbors, ctx);

    // ── 4. Wall repulsion + slide ─────────────────────────────────────────
    total += walls(pos, ctx);

    // ── 5. Heat avoidance ─────────────────────────────────────────────────
    let heading = if state.prev_dir != Vec2::ZERO {
        state.prev_dir
    } else {
        (pos - predicted).normalized()
    };
    total += heat_avoidance(pos, heading, ctx);

    // ── 6. Sector pull (pursuer far only) ─────────────────────────────────
    if pursuer_dist > t.sector_engage_ratio * t.orbit_distance {
        if let Some(home) = ctx.sectors.point_for(id, ctx.session_time, ctx.arena) {
            let to_home = home - pos;
            // Arrival ramp: full pull outside the slow radius, fading to
            // zero at the home point so the agent settles instead of
            // orbiting the attractor.
            let ramp = (to_home.length() / t.sector_slow_radius).min(1.0);
            total += to_home.normalized() * (t.sector_pull * ramp);
        }
    }

    // ── 7. Dispersion ─────────────────────────────────────────────────────
    total += dispersion(self_idx, neighbors, ctx);

    // ── 8. Active maneuvers + wander + jitter ─────────────────────────────
    if let Some(dir) = state.burst.active_dir() {
        total += dir * t.burst_push;
    }
    if let Some(dir) = state.patrol.active_dir() {
        total += dir * t.patrol_push;
    }
    total += state.wander_vec(pursuer_dist < t.orbit_distance, t);
    if t.jitter > 0.0 {
        total += Vec2::from_angle(rng.gen_angle()) * rng.gen_range(0.0..t.jitter);
    }

    // ── 9. Normalize + smooth ─────────────────────────────────────────────
    let mut dir = total.normalized();
    if dir == Vec2::ZERO {
        // Degenerate sum (all layers cancelled): keep last heading.
        dir = state.prev_dir;
    }
    let smoothed = (dir * (1.0 - t.smoothing) + state.prev_dir * t.smoothing).normalized();
    let out = if smoothed == Vec2::ZERO { dir } else { smoothed };
    state.prev_dir = out;
    out
}

// ── Layers ────────────────────────────────────────────────────────────────────

/// Away from the predicted pursuer point, blending into a tangential strafe
/// as the pursuer closes inside orbit distance.  A pursuer far beyond engage
/// distance fades the whole term toward `flee_floor` so sector pull and
/// dispersion dominate undisturbed agents.
fn flee_orbit(pos: Vec2, predicted: Vec2, side: f32, ctx: &SteerContext<'_>) -> Vec2 {
    let t = ctx.tuning;
    let away = pos - predicted;
    let d = away.length();
    let away_n = away.normalized();
    if away_n == Vec2::ZERO {
        // Pursuer dead-center on the agent: no meaningful flee axis; the
        // other layers (walls, maneuvers) will decide.
        return Vec2::ZERO;
    }
    let orbit_w = ((1.0 - d / t.orbit_distance).clamp(0.0, 1.0)) * t.orbit_strength;
    let engage = t.sector_engage_ratio * t.orbit_distance;
    let flee_w = if d <= engage {
        1.0
    } else {
        ((2.0 * engage - d) / engage).clamp(t.flee_floor, 1.0)
    };
    (away_n * (1.0 - orbit_w) + away_n.perp() * (side * orbit_w)) * flee_w
}

/// Push away from every neighbor inside the separation radius, weighted by
/// closeness, then normalized to a fixed force.
fn separation(self_idx: usize, neighbors: &[Rect], ctx: &SteerContext<'_>) -> Vec2 {
    let t = ctx.tuning;
    let pos = neighbors[self_idx].center;
    let mut sum = Vec2::ZERO;
    let mut count = 0;
    for (j, other) in neighbors.iter().enumerate() {
        if j == self_idx {
            continue;
        }
        let d = pos.distance(other.center);
        if d < t.separation_radius {
            let w = (t.separation_radius - d) / t.separation_radius;
            sum += (pos - other.center).normalized() * w;
            count += 1;
        }
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    sum.normalized() * t.separation_force
}

/// Inward repulsion near each edge, plus a tangential slide away from the
/// pursuer when hugging a wall.
fn walls(pos: Vec2, ctx: &SteerContext<'_>) -> Vec2 {
    let t = ctx.tuning;
    let (w, h) = (ctx.arena.width(), ctx.arena.height());
    let m = t.wall_margin;
    let pursuer = ctx.pursuer.rect.center;

    let mut out = Vec2::ZERO;
    if pos.x < m {
        out.x += (m - pos.x) / m * t.wall_push;
    }
    if pos.x > w - m {
        out.x -= (pos.x - (w - m)) / m * t.wall_push;
    }
    if pos.y < m {
        out.y += (m - pos.y) / m * t.wall_push;
    }
    if pos.y > h - m {
        out.y -= (pos.y - (h - m)) / m * t.wall_push;
    }

    // Hugging a vertical wall: slide along y away from the pursuer; and the
    // mirror case for horizontal walls.
    let hug = t.wall_hug_margin;
    if pos.x < hug || pos.x > w - hug {
        out.y += (pos.y - pursuer.y).signum() * t.wall_slide;
    }
    if pos.y < hug || pos.y > h - hug {
        out.x += (pos.x - pursuer.x).signum() * t.wall_slide;
    }
    out
}

/// Two lateral probes across the heading approximate the heat gradient; the
/// contribution steers toward the cooler probe.
fn heat_avoidance(pos: Vec2, heading: Vec2, ctx: &SteerContext<'_>) -> Vec2 {
    let t = ctx.tuning;
    let lateral = heading.normalized().perp();
    if lateral == Vec2::ZERO {
        return Vec2::ZERO;
    }
    let heat_l = ctx.heat.sample(pos + lateral * t.heat_probe);
    let heat_r = ctx.heat.sample(pos - lateral * t.heat_probe);
    let denom = (heat_l + heat_r).max(1e-3);
    // Positive when the right probe is hotter → steer left, and vice versa.
    lateral * ((heat_r - heat_l) / denom * t.heat_bias)
}

/// Keeps agents from piling into one corner: same-edge pairs push apart
/// along the edge tangent, and any pair under minimum spacing gets extra
/// radial repulsion.
fn dispersion(self_idx: usize, neighbors: &[Rect], ctx: &SteerContext<'_>) -> Vec2 {
    let t = ctx.tuning;
    let pos = neighbors[self_idx].center;
    let (w, h) = (ctx.arena.width(), ctx.arena.height());
    let m = t.disperse_edge_margin;

    let near_left = |p: Vec2| p.x < m;
    let near_right = |p: Vec2| p.x > w - m;
    let near_top = |p: Vec2| p.y < m;
    let near_bottom = |p: Vec2| p.y > h - m;

    let mut out = Vec2::ZERO;
    for (j, other) in neighbors.iter().enumerate() {
        if j == self_idx {
            continue;
        }
        let o = other.center;

        // Tangential spread along a shared edge.
        if (near_left(pos) && near_left(o)) || (near_right(pos) && near_right(o)) {
            out.y += (pos.y - o.y).signum() * t.disperse_tangent;
        }
        if (near_top(pos) && near_top(o)) || (near_bottom(pos) && near_bottom(o)) {
            out.x += (pos.x - o.x).signum() * t.disperse_tangent;
        }

        // Hard minimum spacing, radial.
        let d = pos.distance(o);
        if d < t.min_spacing {
            let w_close = 1.0 - d / t.min_spacing;
            out += (pos - o).normalized() * (w_close * t.disperse_radial);
        }
    }
    out
}
