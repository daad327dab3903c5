//! Hypercube (tesseract) wireframe geometry
//!
//! A tesseract has 16 vertices (all combinations of low/high for x,y,z,w)
//! and 32 edges, each vertex being adjacent to 4 others.
//!
//! The vertex and edge generators are written over `N` axes so the same code
//! builds an n-cube. Edge detection compares every vertex pair, which is fine
//! for 16 vertices but grows as `4^N` and should not be used far beyond 4D.

use crate::vec4::{Vec4, AXES};

/// Number of vertices of a tesseract (2^4)
pub const VERTEX_COUNT: usize = 1 << AXES;
/// Number of edges of a tesseract (4 * 2^3)
pub const EDGE_COUNT: usize = AXES << (AXES - 1);

/// An edge of a hypercube, stored as indices into its vertex list with `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Whether `vertex` is one of this edge's endpoints
    #[inline]
    pub fn touches(&self, vertex: usize) -> bool {
        self.a == vertex || self.b == vertex
    }
}

/// Vertices of an N-cube spanning `[low, high]` on every axis
///
/// Vertex `i` takes `high` on axis `k` when bit `k` of `i` is set, `low` otherwise.
pub fn cube_vertices<const N: usize>(low: f32, high: f32) -> Vec<[f32; N]> {
    (0..1usize << N)
        .map(|i| {
            let mut vertex = [low; N];
            for (axis, coord) in vertex.iter_mut().enumerate() {
                if i & (1 << axis) != 0 {
                    *coord = high;
                }
            }
            vertex
        })
        .collect()
}

/// Edges of an N-cube: vertex pairs differing by `edge_length` on exactly one axis
pub fn cube_edges<const N: usize>(vertices: &[[f32; N]], edge_length: f32) -> Vec<Edge> {
    let tolerance = edge_length.abs() * 1e-4;
    let mut edges = Vec::new();

    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let differing_axes = vertices[i]
                .iter()
                .zip(vertices[j].iter())
                .filter(|(a, b)| ((*a - *b).abs() - edge_length).abs() <= tolerance)
                .count();
            if differing_axes == 1 {
                edges.push(Edge::new(i, j));
            }
        }
    }

    edges
}

/// The static wireframe of a 4D hypercube
#[derive(Clone, Debug)]
pub struct HypercubeGeometry {
    low: f32,
    high: f32,
    vertices: Vec<Vec4>,
    edges: Vec<Edge>,
}

impl HypercubeGeometry {
    /// Create a hypercube centered at the origin with the given half-extent
    pub fn new(extent: f32) -> Self {
        Self::from_bounds(-extent, extent)
    }

    /// Create a hypercube spanning `[low, high]` on every axis
    pub fn from_bounds(low: f32, high: f32) -> Self {
        let corners = cube_vertices::<AXES>(low, high);
        let edges = cube_edges(&corners, high - low);
        let vertices = corners.into_iter().map(Vec4::from).collect();

        Self {
            low,
            high,
            vertices,
            edges,
        }
    }

    /// Half the side length
    #[inline]
    pub fn extent(&self) -> f32 {
        (self.high - self.low) * 0.5
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The two 4D endpoints of every edge
    pub fn edge_endpoints(&self) -> impl Iterator<Item = (Vec4, Vec4)> + '_ {
        self.edges
            .iter()
            .map(move |e| (self.vertices[e.a], self.vertices[e.b]))
    }

    /// Number of edges touching `vertex`
    pub fn degree(&self, vertex: usize) -> usize {
        self.edges.iter().filter(|e| e.touches(vertex)).count()
    }
}
