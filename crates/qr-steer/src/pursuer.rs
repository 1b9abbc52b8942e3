//! Read-only pursuer view consumed by the steering pipeline.

use qr_core::{Rect, Vec2};

/// Per-tick snapshot of the externally controlled pursuer.
///
/// The engine never mutates pursuer state; it only reads position and the
/// current movement intent to predict a short-horizon future position for
/// lead-biased fleeing.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PursuerSnapshot {
    /// Pursuer bounding rectangle.
    pub rect: Rect,
    /// Normalized movement intent this frame — unit length, or zero when no
    /// input is held.
    pub intent: Vec2,
    /// Pursuer movement speed in arena units per second.
    pub speed: f32,
}

impl PursuerSnapshot {
    pub fn new(rect: Rect, intent: Vec2, speed: f32) -> Self {
        Self { rect, intent, speed }
    }

    /// A stationary pursuer at `center` — convenient in tests.
    pub fn stationary(center: Vec2, half: Vec2) -> Self {
        Self {
            rect: Rect::new(center, half),
            intent: Vec2::ZERO,
            speed: 0.0,
        }
    }

    /// Where the pursuer will be in `lead_time` seconds if it keeps its
    /// current intent.  Equals the current center when intent is zero.
    #[inline]
    pub fn predicted_point(&self, lead_time: f32) -> Vec2 {
        self.rect.center + self.intent * (self.speed * lead_time)
    }
}
