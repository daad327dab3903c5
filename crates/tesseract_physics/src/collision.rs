//! Reflective wall collisions
//!
//! Each axis is resolved on its own: a ball past the high wall is put back at
//! `high - radius`, a ball past the low wall at `low + radius`, and the velocity
//! component along that axis is negated.

use bitflags::bitflags;

use crate::bounds::Bounds4D;

bitflags! {
    /// Axes on which the ball hit a wall during a step
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BounceAxes: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
        const W = 1 << 3;
    }
}

impl BounceAxes {
    /// Flag for axis index `axis` (0 = x .. 3 = w)
    pub fn from_axis(axis: usize) -> Self {
        Self::from_bits_truncate(1 << axis)
    }
}

/// Which wall of an axis was hit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    Low,
    High,
}

/// Resolve a single axis against the walls
///
/// At most one wall can trigger per call; the high wall is checked first.
pub fn reflect_axis(
    position: &mut f32,
    velocity: &mut f32,
    radius: f32,
    bounds: &Bounds4D,
) -> Option<Wall> {
    if *position + radius > bounds.high {
        *position = bounds.max_center(radius);
        *velocity = -*velocity;
        Some(Wall::High)
    } else if *position - radius < bounds.low {
        *position = bounds.min_center(radius);
        *velocity = -*velocity;
        Some(Wall::Low)
    } else {
        None
    }
}
