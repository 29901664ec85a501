use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eda_core::{Ensemble, RngHandle};
use eda_depth::{depths_with, DriverOpts, Metric};
use rand::Rng;

fn synthetic_profiles(samples: usize, levels: usize) -> Ensemble {
    let mut rng = RngHandle::from_seed(17);
    let values = (0..samples * levels)
        .map(|idx| (idx % levels) as f64 * 0.05 + rng.gen_range(-1.0..1.0))
        .collect();
    Ensemble::from_row_major(samples, levels, values).expect("valid ensemble")
}

fn bench_depths(c: &mut Criterion) {
    let ensemble = synthetic_profiles(200, 100);
    let sequential = DriverOpts::default();
    let parallel = DriverOpts {
        concurrency: 4,
        ..DriverOpts::default()
    };

    c.bench_function("spatial_depths_200x100", |b| {
        b.iter(|| depths_with(black_box(&ensemble), &Metric::spatial(), &sequential).expect("depths"));
    });
    c.bench_function("spatial_depths_200x100_par4", |b| {
        b.iter(|| depths_with(black_box(&ensemble), &Metric::spatial(), &parallel).expect("depths"));
    });
    c.bench_function("band_depths_200x100", |b| {
        b.iter(|| depths_with(black_box(&ensemble), &Metric::band(100), &sequential).expect("depths"));
    });
}

criterion_group!(benches, bench_depths);
criterion_main!(benches);
