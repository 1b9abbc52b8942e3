//! Per-agent kinematic state.

use qr_core::{Rect, Vec2};

/// Position (as a rect) and velocity for one agent.
///
/// Invariants maintained by [`Integrator::step`][crate::Integrator::step]:
/// `|vel| ≤` the speed cap passed to the step, and the rect never leaves the
/// arena.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Kinematics {
    /// At rest at `center`.
    pub fn at(center: Vec2, half: Vec2) -> Self {
        Self {
            rect: Rect::new(center, half),
            vel: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
