//! Axis-aligned walls of the hypercube the ball lives in

use serde::{Deserialize, Serialize};
use tesseract_math::{Vec4, AXES};

/// Bounds shared by every axis: the hypercube spans `[low, high]` on x, y, z and w
///
/// Serialized as a two-element array `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Bounds4D {
    pub low: f32,
    pub high: f32,
}

impl Default for Bounds4D {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

impl Bounds4D {
    /// Create bounds from the low and high wall coordinates
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Half the side length
    pub fn extent(&self) -> f32 {
        (self.high - self.low) * 0.5
    }

    /// Lowest coordinate the center of a ball of `radius` may take
    #[inline]
    pub fn min_center(&self, radius: f32) -> f32 {
        self.low + radius
    }

    /// Highest coordinate the center of a ball of `radius` may take
    #[inline]
    pub fn max_center(&self, radius: f32) -> f32 {
        self.high - radius
    }

    /// Check if a ball of `radius` centered at `point` is inside the walls
    pub fn contains(&self, point: Vec4, radius: f32) -> bool {
        (0..AXES).all(|axis| {
            point[axis] >= self.min_center(radius) && point[axis] <= self.max_center(radius)
        })
    }
}

impl From<[f32; 2]> for Bounds4D {
    fn from([low, high]: [f32; 2]) -> Self {
        Self::new(low, high)
    }
}

impl From<Bounds4D> for [f32; 2] {
    fn from(bounds: Bounds4D) -> Self {
        [bounds.low, bounds.high]
    }
}
