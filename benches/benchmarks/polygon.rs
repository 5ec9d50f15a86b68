use std::f64::consts::TAU;

use criterion::{BatchSize, Criterion, criterion_group};
use rand::Rng;
use weiler::{Orientation, Polygon, point};

const LEN: usize = 1000;

/// Returns a star-shaped polygon around the origin, hence a simple one.
fn random_star() -> Polygon {
    let mut rng = rand::rng();
    let mut star = Polygon::new(Orientation::CounterClockwise);

    (0..LEN).for_each(|index| {
        let angle = TAU * index as f64 / LEN as f64;
        let radius = rng.random_range(100.0..1_000.0);
        star.add_point(point!(radius * angle.cos(), radius * angle.sin()));
    });

    star
}

pub fn large_polygons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large polygons");

    group.bench_function("point validity", |b| {
        b.iter_batched(
            random_star,
            |star| star.is_point_valid(&point!(1_500., 1.)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("point in polygon", |b| {
        b.iter_batched(
            random_star,
            |star| star.contains(&point!(1., 1.)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("polygon in polygon", |b| {
        b.iter_batched(
            || [random_star(), random_star()],
            |[outer, inner]| outer.encloses(&inner),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("simplicity", |b| {
        b.iter_batched(
            random_star,
            |star| star.is_simple(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("ring", |b| {
        b.iter_batched(
            random_star,
            |star| star.to_ring(),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, large_polygons);
