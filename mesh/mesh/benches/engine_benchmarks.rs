//! Benchmarks for the mirror pipeline.
//!
//! Run with: cargo bench -p mesh
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh -- --save-baseline main
//! 2. After changes: cargo bench -p mesh -- --baseline main

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh::cluster::classify;
use mesh::engine::{self, MirrorParams};
use mesh::topology::{DEFAULT_EPSILON, TriangleAdjacency};
use mesh::types::{Axis, Triangle, TriangleBuffer};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// UV sphere body with `decals` small two-triangle islands floating around it.
fn create_decorated_sphere(rings: u32, segments: u32, decals: u32) -> TriangleBuffer {
    let point = |ring: u32, seg: u32| {
        let theta = std::f32::consts::PI * ring as f32 / rings as f32;
        let phi = std::f32::consts::TAU * seg as f32 / segments as f32;
        [theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos()]
    };

    let mut buffer = TriangleBuffer::with_capacity((rings * segments * 2 + decals * 2) as usize);
    for ring in 0..rings {
        for seg in 0..segments {
            let a = point(ring, seg);
            let b = point(ring + 1, seg);
            let c = point(ring + 1, seg + 1);
            let d = point(ring, seg + 1);
            buffer.push_triangle(&Triangle::from_arrays(a, b, c));
            buffer.push_triangle(&Triangle::from_arrays(a, c, d));
        }
    }

    for i in 0..decals {
        let x = 2.0 + i as f32 * 0.1;
        buffer.push_triangle(&Triangle::from_arrays(
            [x, 0.0, 0.0],
            [x + 0.05, 0.0, 0.0],
            [x, 0.05, 0.0],
        ));
        buffer.push_triangle(&Triangle::from_arrays(
            [x + 0.05, 0.0, 0.0],
            [x + 0.05, 0.05, 0.0],
            [x, 0.05, 0.0],
        ));
    }
    buffer
}

// =============================================================================
// Stage Benchmarks
// =============================================================================

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stages");
    let mesh = create_decorated_sphere(64, 128, 64);
    group.throughput(Throughput::Elements(mesh.triangle_count() as u64));

    group.bench_function("adjacency", |b| {
        b.iter(|| TriangleAdjacency::build(black_box(&mesh), DEFAULT_EPSILON));
    });

    let Ok(adjacency) = TriangleAdjacency::build(&mesh, DEFAULT_EPSILON) else {
        return;
    };
    group.bench_function("classify", |b| {
        b.iter(|| classify(black_box(&adjacency), 3));
    });

    group.finish();
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pipeline");
    let params = MirrorParams::default();

    for (rings, segments) in [(16, 32), (64, 128), (128, 256)] {
        let mesh = create_decorated_sphere(rings, segments, 32);
        let source = engine::encode(&mesh);
        let triangles = mesh.triangle_count();
        group.throughput(Throughput::Elements(triangles as u64));

        group.bench_with_input(BenchmarkId::new("mirror", triangles), &mesh, |b, mesh| {
            b.iter(|| engine::mirror(black_box(mesh), Axis::X, &params));
        });

        group.bench_with_input(BenchmarkId::new("run", triangles), &source, |b, source| {
            b.iter(|| engine::run(black_box(source), "x", &params));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_stages, bench_pipeline);
criterion_main!(benches);
