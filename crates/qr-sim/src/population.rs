//! Population cap, refill policy, and spawn placement.

use qr_core::{Arena, Rect, SessionRng, Vec2};

// ── PopulationPolicy ──────────────────────────────────────────────────────────

/// Time-based active-agent cap: `cap(elapsed) = 1 + floor(elapsed / step)`.
///
/// Monotonically non-decreasing within a session; the session reset zeroes
/// the elapsed-time accumulator, which takes the cap back to 1.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationPolicy {
    step_secs: f32,
}

impl PopulationPolicy {
    /// `step_secs` must be positive — validated by the session builder.
    pub(crate) fn new(step_secs: f32) -> Self {
        Self { step_secs }
    }

    /// The cap at `elapsed` session seconds.
    #[inline]
    pub fn cap(&self, elapsed: f32) -> usize {
        1 + (elapsed / self.step_secs).floor() as usize
    }
}

// ── RefillPolicy ──────────────────────────────────────────────────────────────

/// When the population controller refills the active set.
///
/// The two variants produce materially different difficulty curves; exactly
/// one runs per session, never a blend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefillPolicy {
    /// Top up whenever the active count is below cap.
    ContinuousTopUp,
    /// Refill to cap only once the set has been fully cleared — "survive a
    /// wave, then the next wave is one bigger".  The wave-spawn observer
    /// hook is where the surrounding game loop refills health.
    #[default]
    ClearThenRefill,
}

// ── Spawn placement ───────────────────────────────────────────────────────────

/// Rejection-sampling attempts before giving up on a random position.
const SPAWN_ATTEMPTS: usize = 24;

/// Margin from the arena edges for the fallback corner position.
const FALLBACK_MARGIN: f32 = 40.0;

/// Pick a spawn center whose rect does not overlap the pursuer's rect.
///
/// Rejection-samples up to [`SPAWN_ATTEMPTS`] positions, then falls back to
/// a fixed top-left corner position.  Always returns a position — "no valid
/// spawn" is not an error path.
pub(crate) fn spawn_center(
    arena: &Arena,
    half: Vec2,
    pursuer_rect: &Rect,
    rng: &mut SessionRng,
) -> Vec2 {
    let lo_x = half.x;
    let hi_x = arena.width() - half.x;
    let lo_y = half.y;
    let hi_y = arena.height() - half.y;

    if hi_x > lo_x && hi_y > lo_y {
        for _ in 0..SPAWN_ATTEMPTS {
            let center = Vec2::new(rng.gen_range(lo_x..hi_x), rng.gen_range(lo_y..hi_y));
            if !Rect::new(center, half).overlaps(pursuer_rect) {
                return center;
            }
        }
    }

    arena.clamp_center(Vec2::new(FALLBACK_MARGIN, FALLBACK_MARGIN) + half, half)
}

/// The fixed fallback spawn center for this arena and agent size — exposed
/// so callers (and tests) can recognize a fallback placement.
pub fn fallback_center(arena: &Arena, half: Vec2) -> Vec2 {
    arena.clamp_center(Vec2::new(FALLBACK_MARGIN, FALLBACK_MARGIN) + half, half)
}
