//! The bouncing ball

use tesseract_math::Vec4;

/// A point mass with a collision radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallState {
    /// Center position in 4D space
    pub position: Vec4,
    /// Velocity in 4D space (units per second)
    pub velocity: Vec4,
    /// Collision radius, used only against the walls
    pub radius: f32,
}

impl BallState {
    /// Create a ball at rest at the given position
    pub fn new(position: Vec4, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec4::ZERO,
            radius,
        }
    }

    /// Set the velocity of this ball
    pub fn with_velocity(mut self, velocity: Vec4) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the position of this ball
    pub fn with_position(mut self, position: Vec4) -> Self {
        self.position = position;
        self
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ball_is_at_rest() {
        let ball = BallState::new(Vec4::new(0.1, 0.2, 0.3, 0.4), 0.1);
        assert_eq!(ball.position, Vec4::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(ball.velocity, Vec4::ZERO);
        assert_eq!(ball.radius, 0.1);
    }

    #[test]
    fn test_builder_methods() {
        let ball = BallState::new(Vec4::ZERO, 0.1)
            .with_velocity(Vec4::new(0.0, 0.0, 3.0, 4.0))
            .with_position(Vec4::W * 0.5);

        assert_eq!(ball.velocity, Vec4::new(0.0, 0.0, 3.0, 4.0));
        assert_eq!(ball.position, Vec4::new(0.0, 0.0, 0.0, 0.5));
        assert_eq!(ball.speed(), 5.0);
    }
}
