//! The mirror pipeline: decode, classify, mirror, encode.
//!
//! Every operation is a pure function over borrowed input that returns new
//! owned values, so independent requests can run on separate threads without
//! coordination.
//!
//! # Example
//!
//! ```
//! use mesh::engine::{self, MirrorParams};
//! use mesh::types::{Triangle, TriangleBuffer};
//!
//! let buffer = TriangleBuffer::from_triangles([Triangle::from_arrays(
//!     [1.0, 0.0, 0.0],
//!     [2.0, 0.0, 0.0],
//!     [1.0, 1.0, 0.0],
//! )]);
//! let source = engine::encode(&buffer);
//!
//! // A lone triangle is a small cluster, so threshold 0 is needed to flip it.
//! let output = engine::run(&source, "x", &MirrorParams::preserve_nothing()).unwrap();
//! let mirrored = engine::decode(&output.bytes).unwrap();
//! assert_eq!(mirrored.triangle(0).unwrap().v1.x, -2.0);
//! ```

mod error;
mod outcome;
mod params;

pub use error::{EngineError, EngineResult};
pub use outcome::{MirrorOutcome, MirrorSummary, RunOutput};
pub use params::{DEFAULT_THRESHOLD, MirrorParams};

use mesh_cluster::classify;
use mesh_io::{decode_stl, encode_stl};
use mesh_mirror::mirror_mesh;
use mesh_topology::TriangleAdjacency;
use mesh_types::{Axis, Triangle, TriangleBuffer};
use tracing::debug;

/// Decode binary or ASCII STL bytes.
///
/// # Errors
///
/// Returns [`EngineError::Format`] if the bytes are not a valid STL file.
pub fn decode(bytes: &[u8]) -> EngineResult<TriangleBuffer> {
    Ok(decode_stl(bytes)?)
}

/// Encode a triangle buffer as binary STL.
#[must_use]
pub fn encode(buffer: &TriangleBuffer) -> Vec<u8> {
    encode_stl(buffer)
}

/// Mirror a mesh across `axis`, preserving small clusters.
///
/// Builds the vertex adjacency, finds connected components, leaves every
/// component with at most `params.threshold` triangles untouched, and mirrors
/// the rest with winding reversed. Normals are recomputed over the whole
/// output, and the outcome carries the output bounds plus a count of
/// degenerate triangles (which get zero normals).
///
/// # Errors
///
/// - [`EngineError::InvalidParams`] if `params` fails validation
/// - [`EngineError::EmptyMesh`] if `buffer` has no triangles
pub fn mirror(
    buffer: &TriangleBuffer,
    axis: Axis,
    params: &MirrorParams,
) -> EngineResult<MirrorOutcome> {
    params.validate()?;
    if buffer.is_empty() {
        return Err(EngineError::EmptyMesh);
    }

    let adjacency = TriangleAdjacency::build(buffer, params.epsilon)?;
    let classification = classify(&adjacency, params.threshold);
    let mirrored = mirror_mesh(buffer, axis, &classification.excluded_triangles)?;
    let degenerate = mirrored
        .triangles
        .triangles()
        .filter(Triangle::is_degenerate)
        .count();
    let summary =
        MirrorSummary::new(&classification.summary(), axis).with_degenerate_count(degenerate);
    let bounds = mirrored.triangles.bounds();

    debug!(
        triangles = summary.triangle_count,
        components = summary.component_count,
        excluded = summary.excluded_triangle_count,
        degenerate,
        axis = %axis,
        "mirror complete"
    );

    Ok(MirrorOutcome {
        triangles: mirrored.triangles,
        normals: mirrored.normals,
        excluded: classification.excluded_triangles,
        bounds,
        summary,
    })
}

/// Like [`mirror`], with the axis given by name (`x`, `y`, `z`, any case).
///
/// # Errors
///
/// Returns [`EngineError::InvalidAxis`] for an unknown axis name, checked
/// before anything else, then the errors of [`mirror`].
pub fn mirror_named(
    buffer: &TriangleBuffer,
    axis: &str,
    params: &MirrorParams,
) -> EngineResult<MirrorOutcome> {
    let axis: Axis = axis.parse()?;
    mirror(buffer, axis, params)
}

/// Full pipeline from STL bytes to mirrored binary STL bytes.
///
/// The axis and params are checked before the input is decoded, so a bad
/// request fails without touching the payload.
///
/// # Errors
///
/// - [`EngineError::InvalidAxis`] for an unknown axis name
/// - [`EngineError::InvalidParams`] if `params` fails validation
/// - [`EngineError::Format`] if `source` is not valid STL
/// - [`EngineError::EmptyMesh`] if `source` holds no triangles
pub fn run(source: &[u8], axis: &str, params: &MirrorParams) -> EngineResult<RunOutput> {
    let axis: Axis = axis.parse()?;
    params.validate()?;

    let buffer = decode(source)?;
    let outcome = mirror(&buffer, axis, params)?;
    let bytes = encode(&outcome.triangles);

    debug!(
        input_bytes = source.len(),
        output_bytes = bytes.len(),
        "run complete"
    );

    Ok(RunOutput {
        bytes,
        excluded: outcome.excluded,
        summary: outcome.summary,
    })
}
