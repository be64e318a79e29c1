//! Core mesh types for the decal-mirror engine.
//!
//! This crate provides the foundational types shared by every stage:
//!
//! - [`TriangleBuffer`] - A flat triangle soup, 9 `f32` per triangle
//! - [`Triangle`] - A concrete triangle view with geometric helpers
//! - [`Axis`] - The mirror axis (`X`, `Y` or `Z`)
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! This crate has no UI or rendering dependencies. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Desktop viewers that only need the buffers
//!
//! # Units
//!
//! This library is **unit-agnostic**. STL files carry no unit; millimeters
//! are the usual assumption.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Face winding is
//! **counter-clockwise (CCW) when viewed from outside**, so normals point
//! outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Axis, Triangle, TriangleBuffer};
//!
//! let buffer: TriangleBuffer = [Triangle::from_arrays(
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.5, 1.0, 0.0],
//! )]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(buffer.triangle_count(), 1);
//! assert_eq!("x".parse::<Axis>(), Ok(Axis::X));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod axis;
mod bounds;
mod buffer;
mod error;
mod triangle;

pub use axis::Axis;
pub use bounds::Aabb;
pub use buffer::{FLOATS_PER_TRIANGLE, TriangleBuffer};
pub use error::{MeshTypesError, ParseAxisError};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
