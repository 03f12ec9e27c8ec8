use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sphere_chart::{
    Body, HouseSystem, SignLayoutConfig, arrange_in_signs, ascendant_rad, compute_houses,
    find_aspects,
};

fn houses_bench(c: &mut Criterion) {
    let lat = 35.4333_f64.to_radians();
    let lst = 1.234;

    let mut group = c.benchmark_group("houses");
    group.bench_function("ascendant", |b| {
        b.iter(|| ascendant_rad(black_box(lst), black_box(lat)))
    });
    for &system in HouseSystem::all() {
        group.bench_function(system.key(), |b| {
            b.iter(|| compute_houses(system, black_box(lst), black_box(lat)))
        });
    }
    group.finish();
}

fn aspects_bench(c: &mut Criterion) {
    let positions = [
        (Body::Sun, 14.0),
        (Body::Moon, 48.0),
        (Body::Mercury, 72.0),
        (Body::Venus, 111.0),
        (Body::Mars, 142.0),
        (Body::Jupiter, 173.0),
        (Body::Saturn, 206.0),
        (Body::Uranus, 252.0),
        (Body::Neptune, 292.0),
        (Body::Pluto, 326.0),
    ];

    let mut group = c.benchmark_group("aspects");
    group.bench_function("find_aspects", |b| {
        b.iter(|| find_aspects(black_box(&positions)))
    });
    group.bench_function("arrange_in_signs", |b| {
        b.iter(|| arrange_in_signs(black_box(&positions), &SignLayoutConfig::default()))
    });
    group.finish();
}

criterion_group!(benches, houses_bench, aspects_bench);
criterion_main!(benches);
