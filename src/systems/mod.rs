//! Application systems
//!
//! The simulation produces frames; the frontend side consumes them.

mod frontend;
mod simulation;

pub use frontend::{FrameDriver, LogFrontend, RenderFrontend};
pub use simulation::{Frame, FrameCount, InitialVelocity, SimulationConfig, SimulationSystem};
