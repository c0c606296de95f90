use grapple::world::link_acceleration;
use grapple::{
    BodyId, BodyState, ConstraintWorld, GrappleError, NoOpStepObserver, RigidBody, SandboxConfig,
    SandboxWorld, SpringLink, StepObserver, Vec, Vec3,
};

fn link(body: BodyId, anchor: Vec3<f32>, min: f32, max: f32) -> SpringLink<f32> {
    SpringLink {
        body,
        anchor,
        min_distance: min,
        max_distance: max,
        stiffness: 4.5,
        damping: 7.0,
        mass_scale: 4.5,
    }
}

#[test]
fn no_force_inside_bounds() {
    let body = RigidBody::new(Vec3::new(0.0f32, 5.0, 0.0), 1.0).with_velocity(Vec3::new(3.0, 0.0, 0.0));
    let l = link(BodyId(0), Vec3::new(0.0, 10.0, 0.0), 2.5, 8.0);
    assert_eq!(link_acceleration(&l, &body), Vec3::zero());
}

#[test]
fn overstretched_link_pulls_toward_anchor() {
    let body = RigidBody::new(Vec3::new(0.0f32, 0.0, 0.0), 2.0);
    let l = link(BodyId(0), Vec3::new(0.0, 10.0, 0.0), 2.5, 8.0);
    let a = link_acceleration(&l, &body);
    // 4.5 * 2.0 overshoot * 4.5 mass scale / 2.0 mass
    assert!((a.y - 20.25).abs() < 1e-4);
    assert!(a.x.abs() < 1e-6 && a.z.abs() < 1e-6);
}

#[test]
fn compressed_link_pushes_away() {
    let body = RigidBody::new(Vec3::new(0.0f32, 9.0, 0.0), 1.0);
    let l = link(BodyId(0), Vec3::new(0.0, 10.0, 0.0), 2.5, 8.0);
    assert!(link_acceleration(&l, &body).y < 0.0);
}

#[test]
fn kinematic_bodies_ignore_links() {
    let body = RigidBody::kinematic(Vec3::new(0.0f32, 0.0, 0.0));
    let l = link(BodyId(0), Vec3::new(0.0, 10.0, 0.0), 2.5, 8.0);
    assert_eq!(link_acceleration(&l, &body), Vec3::zero());
}

#[test]
fn link_holds_falling_body_near_max_extension() {
    let mut world = SandboxWorld::new();
    let player = world.add_body(RigidBody::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0)).unwrap();
    world.create_link(link(player, Vec3::new(0.0, 10.0, 0.0), 2.5, 8.0)).unwrap();
    let config = SandboxConfig::new()
        .with_gravity(Vec3::new(0.0, -9.81, 0.0))
        .with_sub_steps(4);

    for _ in 0..600 {
        world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
    }

    let p = world.body_position(player).unwrap();
    let d = p.distance(Vec3::new(0.0, 10.0, 0.0));
    // Rests where spring force balances gravity: 8 + 9.81 / (4.5 * 4.5).
    assert!(d > 8.0 && d < 9.0, "settled at distance {}", d);
}

#[test]
fn unlinked_body_falls_freely() {
    let mut world = SandboxWorld::new();
    let body = world.add_body(RigidBody::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0)).unwrap();
    let config = SandboxConfig::new().with_gravity(Vec3::new(0.0, -10.0, 0.0));

    for _ in 0..60 {
        world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
    }

    let v = world.body_velocity(body).unwrap();
    assert!((v.y + 10.0).abs() < 1e-3);
}

#[test]
fn external_force_lasts_one_step() {
    let mut world = SandboxWorld::new();
    let body = world.add_body(RigidBody::new(Vec3::new(0.0f32, 0.0, 0.0), 2.0)).unwrap();
    world.add_force(body, Vec3::new(4.0, 0.0, 0.0)).unwrap();

    world.step(0.5, &SandboxConfig::new().with_sub_steps(2), &mut NoOpStepObserver);
    let v = world.body_velocity(body).unwrap();
    assert!((v.x - 1.0).abs() < 1e-6);
    assert_eq!(world.body(body).unwrap().force, Vec3::zero());

    world.step(0.5, &SandboxConfig::new(), &mut NoOpStepObserver);
    assert!((world.body_velocity(body).unwrap().x - 1.0).abs() < 1e-6);
}

#[test]
fn link_slots_are_reused_with_new_generation() {
    let mut world = SandboxWorld::new();
    let body = world.add_body(RigidBody::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0)).unwrap();
    let first = world.create_link(link(body, Vec3::new(0.0, 1.0, 0.0), 0.1, 0.5)).unwrap();
    assert!(world.destroy_link(first));
    assert!(!world.destroy_link(first));

    let second = world.create_link(link(body, Vec3::new(0.0, 2.0, 0.0), 0.1, 0.5)).unwrap();
    assert_eq!(second.index, first.index);
    assert_ne!(second.generation, first.generation);
    assert!(world.link(first).is_none());
    assert_eq!(world.link_count(), 1);
}

#[test]
fn unknown_bodies_are_rejected() {
    let mut world: SandboxWorld<f32> = SandboxWorld::new();
    assert_eq!(
        world.create_link(link(BodyId(4), Vec3::zero(), 0.0, 1.0)).unwrap_err(),
        GrappleError::UnknownBody { body: BodyId(4) }
    );
    assert_eq!(
        world.add_force(BodyId(4), Vec3::zero()).unwrap_err(),
        GrappleError::UnknownBody { body: BodyId(4) }
    );
    assert!(!world.contains_body(BodyId(4)));
}

#[test]
fn invalid_mass_is_rejected() {
    let mut world: SandboxWorld<f32> = SandboxWorld::new();
    assert_eq!(
        world.add_body(RigidBody::new(Vec3::zero(), 0.0)).unwrap_err(),
        GrappleError::InvalidMass
    );
    assert_eq!(
        world.add_body(RigidBody::new(Vec3::zero(), f32::NAN)).unwrap_err(),
        GrappleError::InvalidMass
    );
    assert!(world.add_body(RigidBody::kinematic(Vec3::zero())).is_ok());
}

#[derive(Default)]
struct Counting {
    link_passes: usize,
    integrations: usize,
    steps: usize,
}

impl StepObserver for Counting {
    fn on_links_applied(&mut self, _active_links: usize) {
        self.link_passes += 1;
    }
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }
    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

#[test]
fn observer_sees_each_sub_step() {
    let mut world: SandboxWorld<f32> = SandboxWorld::new();
    world.add_body(RigidBody::new(Vec3::zero(), 1.0)).unwrap();
    let mut counting = Counting::default();

    world.step(1.0 / 60.0, &SandboxConfig::new().with_sub_steps(3), &mut counting);

    assert_eq!(counting.link_passes, 3);
    assert_eq!(counting.integrations, 3);
    assert_eq!(counting.steps, 1);
}
