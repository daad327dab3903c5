//! Startup error types
//!
//! Everything that can go wrong happens before the first tick: loading the
//! configuration or validating it. Ticks themselves cannot fail.

use tesseract_math::{ProjectionError, Vec4};
use thiserror::Error;

/// A simulation configuration that must not be run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    #[error("bounds low ({low}) must be below high ({high})")]
    InvalidBounds { low: f32, high: f32 },
    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f32),
    #[error("ball radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("ball radius {radius} does not fit inside a hypercube of half-extent {extent}")]
    BallTooLarge { radius: f32, extent: f32 },
    #[error("projection distance {distance} must exceed {limit} (bounds high + radius)")]
    DegenerateProjection { distance: f32, limit: f32 },
    #[error("initial position {position:?} must lie within [{min}, {max}] on every axis")]
    InitialPositionOutside { position: Vec4, min: f32, max: f32 },
    #[error("initial velocity range [{min}, {max}] is empty")]
    EmptyVelocityRange { min: f32, max: f32 },
    #[error("initial velocity range [{min}, {max}] is too wide to sample")]
    VelocityRangeTooWide { min: f32, max: f32 },
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Top-level application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration files or environment could not be read
    #[error("Configuration error: {0}")]
    Load(#[from] figment::Error),
    /// Configuration was read but describes an unusable simulation
    #[error("Invalid simulation: {0}")]
    Invalid(#[from] ConfigurationError),
}
