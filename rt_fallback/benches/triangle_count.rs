//! Benchmarks for triangle counting over both descriptor layouts
//!
//! - `array`: entries stored inline
//! - `array_of_pointers`: entries reached through a pointer array
//! - `raw_array_of_pointers`: the same pointer array behind the C-shaped inputs
//!
//! Each benchmark runs over several geometry counts to observe scaling behavior.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rt_fallback::prelude::*;
use std::hint::black_box;

fn make_descs(size: usize) -> Vec<GeometryDesc> {
    (0..size)
        .map(|i| {
            let triangles = TrianglesDesc::default();
            let triangles = if i % 2 == 0 {
                triangles.vertex_count(3 * (i as u32 % 1024))
            } else {
                triangles
                    .index_format(vk::Format::R32_UINT)
                    .index_count(3 * (i as u32 % 4096))
            };
            triangles.into_geometry(vk::GeometryFlagsKHR::OPAQUE)
        })
        .collect()
}

fn benchmark_total_triangle_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_triangle_count");
    for size in [16, 256, 4096, 65_536].iter() {
        let descs = make_descs(*size);
        let pointers: Vec<&GeometryDesc> = descs.iter().collect();

        group.bench_with_input(BenchmarkId::new("array", size), size, |b, _| {
            let inputs = BuildInputs::from_array(&descs);
            b.iter(|| black_box(get_total_triangle_count(black_box(&inputs)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("array_of_pointers", size), size, |b, _| {
            let inputs = BuildInputs::from_pointers(&pointers);
            b.iter(|| black_box(get_total_triangle_count(black_box(&inputs)).unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("raw_array_of_pointers", size),
            size,
            |b, _| {
                let inputs = BuildInputs::from_pointers(&pointers);
                let raw = RawBuildInputs::try_from(&inputs).unwrap();
                b.iter(|| black_box(get_total_triangle_count(black_box(&raw)).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_total_triangle_count);
criterion_main!(benches);
