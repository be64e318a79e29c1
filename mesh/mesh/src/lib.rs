//! Decal-preserving STL mirror engine.
//!
//! Mirroring a printable part across a plane also mirrors any embossed text,
//! logos or decals on it, which then read backwards. This umbrella crate
//! mirrors the bulk of a mesh while leaving small disjoint clusters of
//! triangles (the decals) exactly where and how they were.
//!
//! The pipeline is exposed through [`engine`]; the individual stages are
//! re-exported for callers that need finer control. All crates are Layer 0
//! (no UI dependencies) and can be used in CLI tools, WASM, or servers.
//!
//! # Quick Start
//!
//! ```no_run
//! use mesh::prelude::*;
//!
//! let source = std::fs::read("part.stl").unwrap();
//! let output = engine::run(&source, "x", &MirrorParams::default()).unwrap();
//!
//! println!("{}", output.summary);
//! std::fs::write("part_mirrored.stl", &output.bytes).unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Triangle buffer, triangle, axis and bounds types
//! - [`io`] - Binary and ASCII STL codec
//! - [`topology`] - Epsilon-grid vertex grouping and triangle adjacency
//! - [`cluster`] - Connected components and small-cluster classification
//! - [`mirror`] - Axis mirroring with winding correction
//! - [`engine`] - The composed decode, mirror, encode pipeline
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize [`engine::MirrorParams`],
//!   [`engine::MirrorSummary`] and the core types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod engine;

// =============================================================================
// Re-exports
// =============================================================================

/// Triangle buffer, triangle, axis and bounds types.
pub use mesh_types as types;

/// Binary and ASCII STL codec.
pub use mesh_io as io;

/// Epsilon-grid vertex grouping and triangle adjacency.
pub use mesh_topology as topology;

/// Connected components and small-cluster classification.
pub use mesh_cluster as cluster;

/// Axis mirroring with winding correction.
pub use mesh_mirror as mirror;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for mirror processing.
///
/// # Usage
///
/// ```
/// use mesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{Aabb, Axis, Triangle, TriangleBuffer};

    // I/O
    pub use mesh_io::{StlFormat, load_stl, save_stl};

    // Engine
    pub use crate::engine::{
        self, EngineError, EngineResult, MirrorOutcome, MirrorParams, MirrorSummary, RunOutput,
    };
}

// =============================================================================
// Tests
// =============================================================================
