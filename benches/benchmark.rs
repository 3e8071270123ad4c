#![warn(clippy::all)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use rays::scenes;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("render/cover/20x15", move |b| {
        const NX: usize = 20;
        const NY: usize = 15;
        let (world, camera) = scenes::cover_scene(NX, NY).unwrap();
        // render returns the whole canvas, so use iter_batched to keep the
        // drop of the output out of the measurement.
        b.iter_batched(|| (), |_| camera.render(&world), BatchSize::SmallInput);
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
