//! Benchmarks for the combination scan and load mapping

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use steel_check::mesh::{LineMesh, LoadMap};
use steel_check::prelude::*;

fn gravity_loads() -> LoadSet {
    LoadSet::new()
        .with(LoadType::Dead, 15.0)
        .with(LoadType::Live, 10.0)
        .with(LoadType::RoofLive, 4.0)
        .with(LoadType::Snow, 3.0)
        .with(LoadType::Wind, 6.0)
        .with(LoadType::Earthquake, 5.0)
}

fn benchmark_critical_combination(c: &mut Criterion) {
    let loads = gravity_loads();
    c.bench_function("critical_combination_lrfd", |b| {
        b.iter(|| {
            let (combo, value) = critical_combination(black_box(&loads), Method::Lrfd, true);
            black_box((combo.name, value));
        })
    });
}

fn benchmark_all_combinations(c: &mut Criterion) {
    let loads = gravity_loads();
    c.bench_function("all_combinations_asd", |b| {
        b.iter(|| {
            black_box(all_combinations(black_box(&loads), Method::Asd));
        })
    });
}

fn benchmark_distributed_load_mapping(c: &mut Criterion) {
    c.bench_function("map_distributed_1000_segments", |b| {
        b.iter(|| {
            let mesh = LineMesh::new(10.0, 1000).unwrap();
            let mut map = LoadMap::new(mesh);
            map.apply_distributed_load(1.25, 8.75, -12.0, -30.0);
            black_box(map.total_vertical_force());
        })
    });
}

fn benchmark_beam_verification(c: &mut Criterion) {
    let section = section_by_id("W16X40").unwrap();
    let material = material_by_id("A992").unwrap();
    c.bench_function("verify_beam_inelastic_zone", |b| {
        b.iter(|| {
            black_box(verify_beam(
                black_box(180.0),
                90.0,
                6.0,
                0.012,
                section,
                material,
                Some(2.5),
                1.0,
            ));
        })
    });
}

criterion_group!(
    benches,
    benchmark_critical_combination,
    benchmark_all_combinations,
    benchmark_distributed_load_mapping,
    benchmark_beam_verification,
);

criterion_main!(benches);
