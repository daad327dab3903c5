//! Ball integration and wall response

use crate::ball::BallState;
use crate::bounds::Bounds4D;
use crate::collision::{reflect_axis, BounceAxes, Wall};
use tesseract_math::AXES;

const AXIS_NAMES: [char; AXES] = ['x', 'y', 'z', 'w'];

/// Owns the ball and advances it one fixed time step at a time
#[derive(Clone, Debug)]
pub struct PhysicsState {
    ball: BallState,
    bounds: Bounds4D,
    dt: f32,
}

impl PhysicsState {
    /// Create a physics state for `ball` inside `bounds`, stepping by `dt` seconds
    pub fn new(ball: BallState, bounds: Bounds4D, dt: f32) -> Self {
        Self { ball, bounds, dt }
    }

    #[inline]
    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    #[inline]
    pub fn bounds(&self) -> Bounds4D {
        self.bounds
    }

    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Step the simulation forward by one tick
    ///
    /// This performs:
    /// 1. Explicit Euler integration of velocity into position
    /// 2. Independent wall resolution on each axis
    ///
    /// Returns the axes that bounced this tick.
    pub fn step(&mut self) -> BounceAxes {
        let ball = &mut self.ball;
        ball.position += ball.velocity * self.dt;

        let mut bounces = BounceAxes::empty();
        for axis in 0..AXES {
            let hit = reflect_axis(
                &mut ball.position[axis],
                &mut ball.velocity[axis],
                ball.radius,
                &self.bounds,
            );
            if let Some(wall) = hit {
                bounces |= BounceAxes::from_axis(axis);
                log::trace!(
                    "ball hit {} wall on {} axis, velocity now {}",
                    match wall {
                        Wall::Low => "low",
                        Wall::High => "high",
                    },
                    AXIS_NAMES[axis],
                    ball.velocity[axis]
                );
            }
        }
        bounces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesseract_math::Vec4;

    fn state(position: Vec4, velocity: Vec4) -> PhysicsState {
        PhysicsState::new(
            BallState::new(position, 0.1).with_velocity(velocity),
            Bounds4D::default(),
            0.02,
        )
    }

    #[test]
    fn test_free_flight_integrates_velocity() {
        let mut physics = state(Vec4::ZERO, Vec4::new(1.0, -2.0, 0.5, 0.0));
        let bounces = physics.step();

        assert!(bounces.is_empty());
        let p = physics.ball().position;
        assert!((p.x - 0.02).abs() < 1e-6);
        assert!((p.y + 0.04).abs() < 1e-6);
        assert!((p.z - 0.01).abs() < 1e-6);
        assert_eq!(p.w, 0.0);
    }

    #[test]
    fn test_step_reflects_at_high_wall() {
        // 0.85 + 5.0 * 0.02 + 0.1 > 1.0
        let mut physics = state(Vec4::new(0.0, 0.0, 0.0, 0.85), Vec4::new(0.0, 0.0, 0.0, 5.0));
        let bounces = physics.step();

        assert_eq!(bounces, BounceAxes::W);
        assert_eq!(physics.ball().position.w, 1.0 - 0.1);
        assert_eq!(physics.ball().velocity.w, -5.0);
    }

    #[test]
    fn test_step_reflects_several_axes_at_once() {
        let mut physics = state(
            Vec4::new(-0.89, 0.89, 0.0, 0.0),
            Vec4::new(-1.0, 1.0, 0.0, 0.0),
        );
        let bounces = physics.step();

        assert_eq!(bounces, BounceAxes::X | BounceAxes::Y);
        assert_eq!(physics.ball().position.x, -1.0 + 0.1);
        assert_eq!(physics.ball().position.y, 1.0 - 0.1);
        assert_eq!(physics.ball().velocity, Vec4::new(1.0, -1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ball_stays_inside_over_long_run() {
        let mut physics = state(Vec4::ZERO, Vec4::new(3.7, -2.9, 1.3, 4.4));
        let bounds = physics.bounds();
        for _ in 0..10_000 {
            physics.step();
            let p = physics.ball().position;
            for axis in 0..AXES {
                assert!(p[axis] >= bounds.min_center(0.1) - 1e-5);
                assert!(p[axis] <= bounds.max_center(0.1) + 1e-5);
            }
        }
    }

    #[test]
    fn test_speed_is_preserved_by_bounces() {
        let v = Vec4::new(3.0, -4.0, 2.0, 1.0);
        let mut physics = state(Vec4::ZERO, v);
        for _ in 0..1_000 {
            physics.step();
        }
        assert!((physics.ball().speed() - v.length()).abs() < 1e-5);
    }
}
