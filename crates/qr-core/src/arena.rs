//! Validated arena bounds.

use crate::{CoreError, CoreResult, Vec2};

/// The rectangular play area `[0, width] × [0, height]`.
///
/// Dimensions are validated at construction (fail fast): the heat grid and
/// sector ring both assume strictly positive extents, so a zero or negative
/// arena is a configuration error, not a runtime condition to tolerate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    /// Create an arena, rejecting non-positive or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> CoreResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(CoreError::Config(format!(
                "arena dimensions must be positive and finite, got {width}×{height}"
            )));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Geometric center.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// The smaller of the two extents — scale basis for the sector ring.
    #[inline]
    pub fn min_extent(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Clamp `point` so a rect with the given half-extent stays inside.
    pub fn clamp_center(&self, point: Vec2, half: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(half.x, self.width - half.x),
            point.y.clamp(half.y, self.height - half.y),
        )
    }

    /// Distance from `point` to the nearest arena edge.
    pub fn edge_distance(&self, point: Vec2) -> f32 {
        point
            .x
            .min(self.width - point.x)
            .min(point.y)
            .min(self.height - point.y)
    }
}
