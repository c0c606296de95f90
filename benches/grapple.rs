//! Benchmarks for the grapple tick loop and sandbox stepping.

use criterion::{criterion_group, criterion_main, Criterion};
use grapple::prelude::*;
use grapple::rope::advance;

fn grappled_world() -> (SandboxWorld<f32>, GrappleController<f32>) {
    let mut world = SandboxWorld::new();
    let player = world.add_body(RigidBody::new(Vec3::new(0.0, 0.0, 0.0), 1.0)).unwrap();
    for i in 0..64 {
        let x = (i % 8) as f32 * 6.0 - 24.0;
        let z = (i / 8) as f32 * 6.0 - 24.0;
        world.add_collider(Collider::aabb(
            Vec3::new(x, 15.0, z),
            Vec3::new(x + 4.0, 17.0, z + 4.0),
            (i % 4) as u8,
        ));
    }
    let grapple = GrappleController::new(GrappleConfig::new(), player, &world).unwrap();
    (world, grapple)
}

fn bench_probe(c: &mut Criterion) {
    let (world, _grapple) = grappled_world();
    let probe = grapple::AnchorProbe::new(100.0f32, LayerMask::ALL);
    c.bench_function("probe_64_colliders", |b| {
        b.iter(|| probe.probe(&world, Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.1, 1.0, 0.05)));
    });
}

fn bench_grapple_episode(c: &mut Criterion) {
    c.bench_function("grapple_episode_120_ticks", |b| {
        b.iter(|| {
            let (mut world, mut grapple) = grappled_world();
            let config = SandboxConfig::new()
                .with_gravity(Vec3::new(0.0, -9.81, 0.0))
                .with_sub_steps(2);
            let mut obs = NoOpGrappleObserver;
            let aim = Aim::new(Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
            grapple
                .on_input(GrappleInput::press(), aim, aim.origin, &mut world, &mut obs)
                .unwrap();
            for _ in 0..120 {
                grapple.on_tick(1.0 / 60.0, &mut world, &mut obs).unwrap();
                world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
            }
            grapple.release(&mut world);
            grapple.state()
        });
    });
}

fn bench_rope_advance(c: &mut Criterion) {
    c.bench_function("rope_advance_1000_steps", |b| {
        b.iter(|| {
            let target = Vec3::new(3.0f32, 20.0, -4.0);
            let mut p = Vec3::zero();
            for _ in 0..1000 {
                p = advance(p, target, 1.0 / 60.0, 8.0);
            }
            p
        });
    });
}

criterion_group!(benches, bench_probe, bench_grapple_episode, bench_rope_advance);
criterion_main!(benches);
