//! Cluster classification for triangle soups.
//!
//! Groups triangles into connected components over a
//! [`TriangleAdjacency`](mesh_topology::TriangleAdjacency) and flags every
//! component with at most `threshold` triangles as excluded. Small disjoint
//! pieces of a model (decals, embossed text, logos) are typically the
//! excluded ones, and the mirror stage leaves them untouched so they still
//! read correctly after the flip.
//!
//! - [`find_components`] - Breadth-first connected components
//! - [`classify`] - Components plus the threshold decision
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with no UI dependencies.
//!
//! # Example
//!
//! ```
//! use mesh_cluster::classify;
//! use mesh_topology::{DEFAULT_EPSILON, TriangleAdjacency};
//! use mesh_types::{Triangle, TriangleBuffer};
//!
//! // An isolated quad made of two triangles.
//! let buffer = TriangleBuffer::from_triangles([
//!     Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
//!     Triangle::from_arrays([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
//! ]);
//!
//! let adjacency = TriangleAdjacency::build(&buffer, DEFAULT_EPSILON).unwrap();
//! let classification = classify(&adjacency, 3);
//!
//! assert_eq!(classification.component_count(), 1);
//! assert_eq!(classification.excluded_triangles, vec![0, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod classify;
mod components;

pub use classify::{Classification, ClusterSummary, Component, classify};
pub use components::find_components;
