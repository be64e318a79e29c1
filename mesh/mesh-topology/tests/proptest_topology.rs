//! Property-based tests for triangle adjacency.
//!
//! Run with: cargo test -p mesh-topology --test proptest_topology

#![allow(clippy::unwrap_used, clippy::expect_used)]

use mesh_topology::{DEFAULT_EPSILON, TriangleAdjacency};
use mesh_types::{Axis, Triangle, TriangleBuffer};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Triangles whose corners sit on a small integer lattice so that random
/// triangles frequently share vertices.
fn arb_lattice_buffer() -> impl Strategy<Value = TriangleBuffer> {
    let corner = prop::array::uniform3(-3i8..=3).prop_map(|c| c.map(f32::from));
    prop::collection::vec((corner.clone(), corner.clone(), corner), 0..30).prop_map(|tris| {
        tris.into_iter()
            .map(|(a, b, c)| Triangle::from_arrays(a, b, c))
            .collect()
    })
}

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop::sample::select(Axis::ALL.to_vec())
}

fn reflect_all(buffer: &TriangleBuffer, axis: Axis) -> TriangleBuffer {
    buffer
        .triangles()
        .map(|t| Triangle::new(axis.reflect(&t.v0), axis.reflect(&t.v1), axis.reflect(&t.v2)))
        .collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Adjacency is symmetric and irreflexive.
    #[test]
    fn neighbors_are_symmetric(buffer in arb_lattice_buffer()) {
        let adj = TriangleAdjacency::build(&buffer, DEFAULT_EPSILON).unwrap();
        for a in 0..adj.triangle_count() {
            let neighbors = adj.neighbors(a);
            prop_assert!(!neighbors.contains(&a));
            prop_assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
            for &b in &neighbors {
                prop_assert!(adj.neighbors(b).contains(&a));
                prop_assert!(adj.shares_vertex(a, b));
            }
        }
    }

    /// Reflecting every vertex leaves the neighbor relation unchanged.
    #[test]
    fn adjacency_is_mirror_invariant(buffer in arb_lattice_buffer(), axis in arb_axis()) {
        let original = TriangleAdjacency::build(&buffer, DEFAULT_EPSILON).unwrap();
        let mirrored = TriangleAdjacency::build(&reflect_all(&buffer, axis), DEFAULT_EPSILON).unwrap();
        prop_assert_eq!(original.vertex_group_count(), mirrored.vertex_group_count());
        for t in 0..original.triangle_count() {
            prop_assert_eq!(original.neighbors(t), mirrored.neighbors(t));
        }
    }

    /// Every triangle appears in the bucket of each of its keys.
    #[test]
    fn buckets_match_keys(buffer in arb_lattice_buffer()) {
        let adj = TriangleAdjacency::build(&buffer, DEFAULT_EPSILON).unwrap();
        for t in 0..adj.triangle_count() {
            for key in adj.keys_of(t) {
                prop_assert!(adj.triangles_at(key).contains(&t));
            }
        }
    }
}
