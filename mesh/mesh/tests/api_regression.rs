//! API Regression Tests for the Mirror Engine Crates
//!
//! These tests guard the public API of the workspace. They are organized in
//! tiers that follow the pipeline:
//!
//! - Tier 1: Foundation (mesh-types)
//! - Tier 2: Codec (mesh-io)
//! - Tier 3: Topology and clustering (mesh-topology, mesh-cluster)
//! - Tier 4: Mirror transform (mesh-mirror)
//! - Tier 5: Engine facade (mesh::engine)
//!
//! If any of these tests fail after API changes, it indicates a breaking change.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use mesh::{cluster, io, mirror, prelude::*, topology, types};

fn quad() -> TriangleBuffer {
    TriangleBuffer::from_triangles([
        Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        Triangle::from_arrays([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
    ])
}

// =============================================================================
// TIER 1: Foundation - Core Types
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn buffer_construction_and_access() {
        let buffer = quad();
        assert_eq!(buffer.triangle_count(), 2);
        assert_eq!(buffer.as_slice().len(), 2 * types::FLOATS_PER_TRIANGLE);
        assert!(buffer.record(1).is_some());
        assert!(buffer.record(2).is_none());
    }

    #[test]
    fn buffer_rejects_partial_triangles() {
        let err = TriangleBuffer::from_floats(vec![0.0; 10]).unwrap_err();
        assert_eq!(err, types::MeshTypesError::InvalidStride { len: 10 });
    }

    #[test]
    fn axis_parsing() {
        assert_eq!("Z".parse::<Axis>().unwrap(), Axis::Z);
        assert!("W".parse::<Axis>().is_err());
    }

    #[test]
    fn bounds_of_buffer() {
        let bounds: Aabb = quad().bounds();
        assert_eq!(bounds.min, types::Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, types::Point3::new(1.0, 1.0, 0.0));
    }
}

// =============================================================================
// TIER 2: Codec - STL Encode/Decode
// =============================================================================

mod tier2_codec {
    use super::*;

    #[test]
    fn binary_roundtrip() {
        let bytes = io::encode_stl(&quad());
        assert_eq!(bytes.len(), 84 + 2 * 50);
        assert_eq!(io::detect_format(&bytes), Some(StlFormat::Binary));
        assert_eq!(io::decode_stl(&bytes).unwrap(), quad());
    }

    #[test]
    fn ascii_roundtrip() {
        let text = io::encode_stl_ascii(&quad(), "quad");
        assert!(text.starts_with("solid quad"));
        assert_eq!(io::detect_format(text.as_bytes()), Some(StlFormat::Ascii));
        assert_eq!(io::decode_stl(text.as_bytes()).unwrap(), quad());
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.stl");
        save_stl(&quad(), &path, StlFormat::Binary).unwrap();
        assert_eq!(load_stl(&path).unwrap(), quad());
    }

    #[test]
    fn errors_are_classified() {
        let err = io::decode_stl(&[0u8; 20]).unwrap_err();
        assert!(err.is_format_error());

        let err = load_stl("/definitely/not/here.stl").unwrap_err();
        assert!(!err.is_format_error());
    }
}

// =============================================================================
// TIER 3: Topology and Clustering
// =============================================================================

mod tier3_topology {
    use super::*;

    #[test]
    fn adjacency_queries() {
        let adj = topology::TriangleAdjacency::build(&quad(), topology::DEFAULT_EPSILON).unwrap();
        assert_eq!(adj.triangle_count(), 2);
        assert_eq!(adj.vertex_group_count(), 4);
        assert_eq!(adj.neighbors(0), vec![1]);
        assert!(adj.shares_vertex(0, 1));
    }

    #[test]
    fn classification_queries() {
        let adj = topology::TriangleAdjacency::build(&quad(), topology::DEFAULT_EPSILON).unwrap();
        let classification = cluster::classify(&adj, 3);
        assert_eq!(classification.component_count(), 1);
        assert_eq!(classification.excluded_count(), 2);
        assert_eq!(classification.largest_component_size(), 2);
        assert_eq!(cluster::find_components(&adj), vec![vec![0, 1]]);
    }
}

// =============================================================================
// TIER 4: Mirror Transform
// =============================================================================

mod tier4_mirror {
    use super::*;

    #[test]
    fn mirror_triangles_and_normals() {
        let mirrored = mirror::mirror_mesh(&quad(), Axis::X, &[]).unwrap();
        assert_eq!(mirrored.triangle_count(), 2);
        assert_eq!(mirrored.normals.len(), 6);
        assert_eq!(mirrored.triangles.triangle(0).unwrap().v1.x, -1.0);
    }

    #[test]
    fn mirror_rejects_out_of_range_exclusions() {
        let err = mirror::mirror_triangles(&quad(), Axis::X, &[7]).unwrap_err();
        assert!(matches!(
            err,
            mirror::MirrorError::ExcludedIndexOutOfRange { index: 7, .. }
        ));
    }
}

// =============================================================================
// TIER 5: Engine Facade
// =============================================================================

mod tier5_engine {
    use super::*;

    #[test]
    fn params_presets() {
        let default = MirrorParams::default();
        assert_eq!(default.threshold, engine::DEFAULT_THRESHOLD);
        assert_eq!(MirrorParams::preserve_nothing().threshold, 0);
        assert_eq!(default.with_threshold(5).threshold, 5);
    }

    #[test]
    fn mirror_and_run_agree() {
        let params = MirrorParams::preserve_nothing();
        let outcome: MirrorOutcome = engine::mirror(&quad(), Axis::Y, &params).unwrap();
        let output: RunOutput = engine::run(&engine::encode(&quad()), "y", &params).unwrap();

        assert_eq!(engine::decode(&output.bytes).unwrap(), outcome.triangles);
        assert_eq!(output.excluded, outcome.excluded);
        assert_eq!(output.summary, outcome.summary);
    }

    #[test]
    fn error_variants() {
        let params = MirrorParams::default();
        assert!(matches!(
            engine::run(&[], "x", &params),
            Err(EngineError::Format(_))
        ));
        assert!(matches!(
            engine::mirror_named(&quad(), "W", &params),
            Err(EngineError::InvalidAxis(_))
        ));
        assert!(matches!(
            engine::mirror(&TriangleBuffer::new(), Axis::X, &params),
            Err(EngineError::EmptyMesh)
        ));
    }

    #[test]
    fn summary_reports_axis() {
        let summary: MirrorSummary = engine::mirror(&quad(), Axis::Z, &MirrorParams::default())
            .unwrap()
            .summary;
        assert_eq!(summary.axis, Axis::Z);
        assert!(summary.to_string().contains("across z"));
    }
}
