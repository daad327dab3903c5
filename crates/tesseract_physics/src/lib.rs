//! Ball physics inside a 4D hypercube
//!
//! This crate provides:
//! - The hypercube walls ([`Bounds4D`])
//! - The ball state ([`BallState`])
//! - Per-axis reflective wall collisions
//! - A fixed-step integrator ([`PhysicsState`])

pub mod ball;
pub mod bounds;
pub mod collision;
pub mod state;

// Re-export commonly used types
pub use ball::BallState;
pub use bounds::Bounds4D;
pub use collision::{reflect_axis, BounceAxes, Wall};
pub use state::PhysicsState;
