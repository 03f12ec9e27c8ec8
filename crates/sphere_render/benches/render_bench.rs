use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sphere_chart::{ALL_BODIES, HouseSystem, Observer, SkyPoint};
use sphere_frames::Orientation;
use sphere_render::{
    BodyPositions, FrameProjector, FrameState, LowPrecisionEphemeris, RecordingSurface,
    RenderConfig, RenderQuality, SkyRenderer, StarCatalog, lerp_param, trace_curve,
};
use sphere_time::Instant;

fn trace_bench(c: &mut Criterion) {
    let frame = FrameState::new(Instant::J2000, 1000.0, 800.0);
    let projector = FrameProjector::new(&frame);

    let mut group = c.benchmark_group("trace");
    group.bench_function("equator_360", |b| {
        b.iter(|| {
            trace_curve(&projector, black_box(360), |i| {
                Some(SkyPoint::Equatorial {
                    ra_rad: lerp_param(i, 360, 0.0, std::f64::consts::TAU),
                    dec_rad: 0.0,
                })
            })
        })
    });
    group.finish();
}

fn frame_bench(c: &mut Criterion) {
    let config = RenderConfig {
        house_system: Some(HouseSystem::Placidus),
        ..RenderConfig::default()
    };
    let instant: Instant = "2024-03-20T12:00:00Z".parse().unwrap();
    let mut positions = BodyPositions::new();
    positions.refresh(&LowPrecisionEphemeris, &ALL_BODIES, instant);

    let mut group = c.benchmark_group("frame");
    for (name, quality) in [("full", RenderQuality::Full), ("interactive", RenderQuality::Interactive)] {
        let mut renderer = SkyRenderer::new(config.clone())
            .unwrap()
            .with_catalog(StarCatalog::bright_stars())
            .with_default_hooks();
        let frame = config.frame(instant, Observer::default(), Orientation::new(0.4, 0.2, 0.0), quality);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut surface = RecordingSurface::new(frame.width, frame.height);
                renderer.render(black_box(&frame), &positions, &mut surface)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, trace_bench, frame_bench);
criterion_main!(benches);
