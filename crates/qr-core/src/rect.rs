//! Axis-aligned rectangle in center/half-extent form.

use crate::Vec2;

/// An axis-aligned rectangle stored as center + half-extents.
///
/// Center/half form keeps containment math symmetric: a rect lies inside the
/// arena exactly when `center ∈ [half, W - half] × [half, H - half]`, which
/// is the same condition as "top-left corner within `[0, W - w]`" in
/// corner/size form.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Top-left corner.
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Axis-aligned overlap test (touching edges do not count as overlap).
    pub fn overlaps(&self, other: &Rect) -> bool {
        (self.center.x - other.center.x).abs() < self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() < self.half.y + other.half.y
    }

    /// `true` if `point` lies inside (or on the boundary of) this rect.
    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= self.half.x
            && (point.y - self.center.y).abs() <= self.half.y
    }
}
