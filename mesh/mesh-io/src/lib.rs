//! STL codec for the decal-mirror engine.
//!
//! This crate converts between raw STL bytes and [`TriangleBuffer`]s:
//!
//! - [`decode_stl`] - Binary or ASCII STL bytes to a triangle buffer
//! - [`encode_stl`] - Triangle buffer to binary STL bytes
//! - [`encode_stl_ascii`] - Triangle buffer to ASCII STL text
//! - [`load_stl`] / [`save_stl`] - File helpers for shells and tests
//!
//! STL has no shared-vertex indexing, so every triangle owns three
//! independent vertices and decoding never deduplicates them.
//!
//! # Layer 0 Crate
//!
//! This crate has no UI dependencies. The byte-level functions never touch
//! the filesystem, so they work unchanged in WASM hosts that hand over file
//! contents as buffers.
//!
//! # Example
//!
//! ```
//! use mesh_io::{decode_stl, encode_stl};
//! use mesh_types::{Triangle, TriangleBuffer};
//!
//! let buffer = TriangleBuffer::from_triangles([Triangle::from_arrays(
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//! )]);
//!
//! let bytes = encode_stl(&buffer);
//! let decoded = decode_stl(&bytes).unwrap();
//! assert_eq!(decoded, buffer);
//! ```
//!
//! [`TriangleBuffer`]: mesh_types::TriangleBuffer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{
    StlFormat, decode_stl, detect_format, encode_stl, encode_stl_ascii, load_stl, save_stl,
};
