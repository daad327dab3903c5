//! Tesseract Bounce
//!
//! A ball bouncing inside a 4D hypercube, projected into 3D for display.
//!
//! The geometry and projection live in [`tesseract_math`], the ball physics in
//! [`tesseract_physics`]. This crate validates configuration and turns the two
//! into a stream of [`Frame`]s for a [`RenderFrontend`].

pub mod config;
pub mod error;
pub mod systems;

pub use error::{AppError, ConfigurationError};
pub use systems::{
    Frame, FrameCount, FrameDriver, InitialVelocity, LogFrontend, RenderFrontend,
    SimulationConfig, SimulationSystem,
};

pub use tesseract_math;
pub use tesseract_physics;
