use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use label_annealer::{
    AnnealParams, Extent, PlacementState, Weights, anneal, default_anchors,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

/// A deliberately congested scene: labels start stacked on a coarse grid so
/// the annealer has real overlap to resolve.
fn clustered_scene(count: usize) -> PlacementState {
    let columns = (count as f64).sqrt().ceil() as usize;
    let mut labels = Vec::with_capacity(count);
    for i in 0..count {
        let col = (i % columns) as f64;
        let row = (i / columns) as f64;
        let x = col * 6.0;
        let y = row * 3.0;
        labels.push(Extent::new(x, y, x + 10.0, y + 4.0));
    }
    let anchors = default_anchors(&labels, 2.0);
    PlacementState {
        labels,
        anchors,
        bounds: None,
        obstacles: Vec::new(),
    }
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    let weights = Weights::default();
    let params = AnnealParams::default();
    for count in [10usize, 50, 100] {
        let state = clustered_scene(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &state, |b, state| {
            b.iter_batched(
                || (state.clone(), StdRng::seed_from_u64(7)),
                |(mut state, mut rng)| {
                    let stats = anneal(&mut state, &weights, &params, 100, &mut rng)
                        .expect("bench scene is valid");
                    black_box(stats.accepted);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_sweep_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_sweeps");
    let weights = Weights::default();
    let params = AnnealParams::default();
    let state = clustered_scene(50);
    for sweeps in [50usize, 200, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(sweeps), &sweeps, |b, &sweeps| {
            b.iter_batched(
                || (state.clone(), StdRng::seed_from_u64(7)),
                |(mut state, mut rng)| {
                    let stats = anneal(&mut state, &weights, &params, sweeps, &mut rng)
                        .expect("bench scene is valid");
                    black_box(stats.attempted);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_anneal, bench_sweep_scaling
);
criterion_main!(benches);
