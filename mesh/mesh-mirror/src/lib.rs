//! Axis mirroring for triangle buffers.
//!
//! Reflecting geometry across a coordinate plane turns it inside out: a
//! counter-clockwise triangle becomes clockwise and its normal points into the
//! solid. [`mirror_triangles`] therefore reverses vertex order on every
//! mirrored triangle, and [`mirror_mesh`] recomputes face normals afterwards.
//!
//! Triangles listed as excluded are copied through untouched, which keeps
//! small decal and text clusters readable on the mirrored part.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with no UI dependencies.
//!
//! # Example
//!
//! ```
//! use mesh_mirror::mirror_mesh;
//! use mesh_types::{Axis, Triangle, TriangleBuffer};
//!
//! let buffer = TriangleBuffer::from_triangles([Triangle::from_arrays(
//!     [1.0, 0.0, 0.0],
//!     [2.0, 0.0, 0.0],
//!     [1.0, 1.0, 0.0],
//! )]);
//!
//! let mirrored = mirror_mesh(&buffer, Axis::X, &[]).unwrap();
//! let t = mirrored.triangles.triangle(0).unwrap();
//! assert_eq!(t.v0.x, -1.0);
//! assert_eq!(t.v2.x, -1.0);
//! assert_eq!(t.v1.x, -2.0);
//!
//! // Winding was reversed, so the normal still points out of the XY plane.
//! assert_eq!(mirrored.normals[2], 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod mirror;

pub use error::{MirrorError, MirrorResult};
pub use mirror::{MirroredMesh, mirror_mesh, mirror_triangles};
