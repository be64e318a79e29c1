//! Vertex coincidence and triangle adjacency for STL triangle soups.
//!
//! STL stores every triangle with its own copy of each vertex, so there is no
//! shared index to walk. This crate recovers connectivity by snapping every
//! vertex onto a grid of cell size `epsilon` and treating triangles that land
//! a vertex in the same cell as adjacent.
//!
//! - [`VertexKey`] - Grid cell of a vertex
//! - [`TriangleAdjacency`] - Key to triangle buckets plus neighbor queries
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with no UI dependencies.
//!
//! # Example
//!
//! ```
//! use mesh_topology::{DEFAULT_EPSILON, TriangleAdjacency};
//! use mesh_types::{Triangle, TriangleBuffer};
//!
//! // Two triangles sharing an edge, one far away.
//! let buffer = TriangleBuffer::from_triangles([
//!     Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
//!     Triangle::from_arrays([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
//!     Triangle::from_arrays([5.0, 5.0, 5.0], [6.0, 5.0, 5.0], [5.0, 6.0, 5.0]),
//! ]);
//!
//! let adjacency = TriangleAdjacency::build(&buffer, DEFAULT_EPSILON).unwrap();
//! assert_eq!(adjacency.neighbors(0), vec![1]);
//! assert!(adjacency.neighbors(2).is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod error;

pub use adjacency::{DEFAULT_EPSILON, TriangleAdjacency, VertexKey};
pub use error::{TopologyError, TopologyResult};
