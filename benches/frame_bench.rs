//! Per-frame cost of the walkthrough engine: idle damping, fly-to
//! animation, and pointer ray casts.
#![allow(missing_docs, unused_results)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Mat4, Vec2, Vec3};
use walkthrough::options::Options;
use walkthrough::picking::PointerEvent;
use walkthrough::scene::{Aabb, Scene};
use walkthrough::util::easing::EasingFunction;
use walkthrough::{WalkCommand, WalkthroughEngine};
use web_time::{Duration, Instant};

fn grid_scene(side: usize) -> Scene {
    let mut scene = Scene::new();
    let root = scene.add_group("grid", None, Mat4::IDENTITY);
    for i in 0..side {
        for j in 0..side {
            let id = scene.add_box(
                format!("cell-{i}-{j}"),
                Some(root),
                Mat4::from_translation(Vec3::new(
                    i as f32 - side as f32 / 2.0,
                    0.0,
                    j as f32 - side as f32 / 2.0,
                )),
                Aabb::from_half_extents(Vec3::splat(0.4)),
            );
            if (i + j) % 3 == 0 {
                scene.set_link(id, format!("https://example.org/{i}/{j}"));
            }
        }
    }
    scene
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::QuadraticInOut;
    c.bench_function("quadratic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))));
    });
}

fn idle_frame_benchmark(c: &mut Criterion) {
    let mut engine =
        WalkthroughEngine::new(Options::default(), Scene::new(), (1280, 800));
    let mut now = Instant::now();
    c.bench_function("frame_orbit_damping", |b| {
        b.iter(|| {
            engine.execute(WalkCommand::RotateCamera {
                delta: Vec2::new(3.0, 1.0),
            });
            now += Duration::from_millis(16);
            black_box(*engine.frame(now))
        });
    });
}

fn fly_to_frame_benchmark(c: &mut Criterion) {
    let mut engine =
        WalkthroughEngine::new(Options::default(), Scene::new(), (1280, 800));
    let t0 = Instant::now();
    c.bench_function("frame_fly_to", |b| {
        b.iter(|| {
            let _ = engine.fly_to_at("social", t0);
            black_box(*engine.frame(t0 + Duration::from_millis(600)))
        });
    });
}

fn pointer_move_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_move");
    for side in [4, 16, 32] {
        let mut engine = WalkthroughEngine::new(
            Options::default(),
            grid_scene(side),
            (1280, 800),
        );
        group.bench_function(format!("{}_nodes", side * side), |b| {
            b.iter(|| {
                black_box(engine.pointer_move(PointerEvent {
                    client_x: black_box(640.0),
                    client_y: black_box(400.0),
                }))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    idle_frame_benchmark,
    fly_to_frame_benchmark,
    pointer_move_benchmark
);
criterion_main!(benches);
