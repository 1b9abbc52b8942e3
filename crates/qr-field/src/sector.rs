//! Stable per-agent "home" points on a slowly rotating ring.
//!
//! # Model
//!
//! When the active set is first populated, each evader is assigned a sector
//! index `i` in list order.  The agent's home point is
//!
//!   center + ring_radius · (cos θ, sin θ),   θ = 2π·i/count + t·rotation
//!
//! with `ring_radius = min(arena_w, arena_h) · ring_ratio`.  The steering
//! composer applies this as a mild attractor only while the pursuer is far
//! away, so undisturbed evaders spread around the arena instead of drifting
//! into a shared corner.
//!
//! Assignment is once per session: evaders spawned after the first
//! population (same session) have no home point and simply skip the sector
//! pull.  `reset()` clears the table for the next session.

use rustc_hash::FxHashMap;

use qr_core::{Arena, EvaderId, SectorId, Vec2};

// ── SectorTuning ──────────────────────────────────────────────────────────────

/// Sector ring constants.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorTuning {
    /// Ring radius as a fraction of the smaller arena extent.
    pub ring_ratio: f32,
    /// Ring rotation speed in radians per session second.
    pub rotation_speed: f32,
}

impl Default for SectorTuning {
    fn default() -> Self {
        Self {
            ring_ratio: 0.32,
            rotation_speed: 0.15,
        }
    }
}

// ── SectorAllocator ───────────────────────────────────────────────────────────

/// Session-scoped sector assignment table.
///
/// `FxHashMap` keyed by `EvaderId` — integer keys, hot per-tick lookups.
pub struct SectorAllocator {
    tuning: SectorTuning,
    assignments: FxHashMap<EvaderId, SectorId>,
    /// Sector count fixed at assignment time; denominator of the base angle.
    count: u16,
    assigned: bool,
}

impl SectorAllocator {
    pub fn new(tuning: SectorTuning) -> Self {
        Self {
            tuning,
            assignments: FxHashMap::default(),
            count: 0,
            assigned: false,
        }
    }

    /// Assign sector `i` to the i-th evader in `ids`, in order.
    ///
    /// No-op if assignment already happened this session, or if `ids` is
    /// empty.  Stable thereafter: captures and respawns within the session
    /// do not reshuffle surviving agents' sectors.
    pub fn assign_once(&mut self, ids: &[EvaderId]) {
        if self.assigned || ids.is_empty() {
            return;
        }
        self.count = ids.len().min(u16::MAX as usize) as u16;
        for (i, &id) in ids.iter().take(self.count as usize).enumerate() {
            self.assignments.insert(id, SectorId(i as u16));
        }
        self.assigned = true;
    }

    /// The evader's home point at `session_time`, or `None` if the agent was
    /// never assigned (spawned after first population).
    pub fn point_for(&self, id: EvaderId, session_time: f32, arena: &Arena) -> Option<Vec2> {
        let sector = *self.assignments.get(&id)?;
        let base = std::f32::consts::TAU * sector.0 as f32 / self.count.max(1) as f32;
        let angle = base + session_time * self.tuning.rotation_speed;
        let radius = arena.min_extent() * self.tuning.ring_ratio;
        Some(arena.center() + Vec2::from_angle(angle) * radius)
    }

    /// `true` once `assign_once` has run this session.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// Sector index for `id`, if assigned.
    pub fn sector_of(&self, id: EvaderId) -> Option<SectorId> {
        self.assignments.get(&id).copied()
    }

    /// Clear all assignments; the next `assign_once` call reassigns.
    pub fn reset(&mut self) {
        self.assignments.clear();
        self.count = 0;
        self.assigned = false;
    }
}
