//! 4D Mathematics Library
//!
//! This crate provides the vector types, hypercube geometry and 4D to 3D
//! projection used by the tesseract simulation.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D vector, the result of projection
//! - [`Segment3`] - a projected wireframe edge
//!
//! ## Geometry
//!
//! - [`HypercubeGeometry`] - vertices and edges of a tesseract
//! - [`Projector`] - perspective projection along the w axis

mod vec4;
mod vec3;
pub mod hypercube;
pub mod projection;

pub use vec4::{Vec4, AXES};
pub use vec3::{Segment3, Vec3};
pub use hypercube::{cube_edges, cube_vertices, Edge, HypercubeGeometry};
pub use projection::{ProjectionError, Projector};
