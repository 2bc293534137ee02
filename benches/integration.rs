use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lane_emden::{near_origin, tabulate, Driver, LaneEmden, RunConfig};

fn bench_index_1_5(c: &mut Criterion) {
    let sys = LaneEmden::new(1.5).unwrap();
    let config = RunConfig::default();

    c.bench_function("integrate_n1.5", |b| {
        b.iter(|| {
            let mut driver = Driver::new(config);
            driver.integrate(black_box(&sys)).unwrap()
        })
    });
}

fn bench_index_4_5(c: &mut Criterion) {
    // Root near ξ = 31.8, the longest run below n = 5
    let sys = LaneEmden::new(4.5).unwrap();
    let config = RunConfig::default();

    c.bench_function("integrate_n4.5", |b| {
        b.iter(|| {
            let mut driver = Driver::new(config);
            driver.integrate(black_box(&sys)).unwrap()
        })
    });
}

fn bench_table(c: &mut Criterion) {
    let indices = [0.0, 1.0, 1.5, 2.0, 3.0, 4.0];
    let config = RunConfig::default();

    c.bench_function("tabulate_classical", |b| {
        b.iter(|| tabulate(black_box(&indices), &config))
    });
}

fn bench_series_start(c: &mut Criterion) {
    c.bench_function("near_origin", |b| {
        b.iter(|| near_origin(black_box(1e-3), black_box(3.0)))
    });
}

criterion_group!(
    benches,
    bench_index_1_5,
    bench_index_4_5,
    bench_table,
    bench_series_start
);
criterion_main!(benches);
